use dish_orders::config::{Config, ConfigError};
use dish_orders::framework::ActorClient;
use dish_orders::lifecycle::{RestaurantSystem, SeedData};
use dish_orders::model::{Order, OrderLine, OrderStatus};
use serde_json::{json, Value};

fn order_payload(status: Option<&str>) -> Value {
    let mut payload = json!({ "data": {
        "deliverTo": "221B Baker Street",
        "mobileNumber": "020 7946 0000",
        "dishes": [{ "id": "1", "name": "Falafel", "quantity": 2 }]
    } });
    if let Some(status) = status {
        payload["data"]["status"] = json!(status);
    }
    payload
}

fn seeded(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "1 Main St".to_string(),
        mobile_number: "555-0100".to_string(),
        status,
        dishes: vec![OrderLine::new("1", 1)],
    }
}

fn system_with(orders: Vec<Order>) -> RestaurantSystem {
    RestaurantSystem::with_seed(
        &Config::default(),
        SeedData {
            dishes: Vec::new(),
            orders,
        },
    )
    .expect("seed data should be valid")
}

fn with_lines(lines: Value) -> Value {
    let mut payload = order_payload(None);
    payload["data"]["dishes"] = lines;
    payload
}

#[tokio::test]
async fn test_new_orders_start_pending() {
    let system = RestaurantSystem::new();

    let order = system
        .order_client
        .create_order(order_payload(Some("delivered")))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.dishes[0].quantity, 2);
    assert_eq!(order.dishes[0].details.get("name"), Some(&json!("Falafel")));
}

#[tokio::test]
async fn test_create_dish_list_rules() {
    let system = RestaurantSystem::new();

    let mut empty = order_payload(None);
    empty["data"]["dishes"] = json!([]);
    let err = system.order_client.create_order(empty).await.unwrap_err();
    assert_eq!(err.to_string(), "Dishes must contain a dish");

    let mut zero = order_payload(None);
    zero["data"]["dishes"] = json!([{ "id": "1", "quantity": 0 }]);
    let err = system.order_client.create_order(zero).await.unwrap_err();
    assert_eq!(err.status(), 400);
    assert!(err.to_string().starts_with("Dish 1 must have a quantity"));

    assert!(system.order_client.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_ids_are_shared_across_kinds() {
    let system = RestaurantSystem::new();

    let dish = system
        .dish_client
        .create_dish(json!({ "data": {
            "name": "Soup", "description": "Hot", "price": 4, "image_url": "soup.png"
        } }))
        .await
        .unwrap();
    let order = system.order_client.create_order(order_payload(None)).await.unwrap();

    assert_ne!(dish.id, order.id);
}

#[tokio::test]
async fn test_update_status_lifecycle() {
    let system = RestaurantSystem::new();
    let order = system.order_client.create_order(order_payload(None)).await.unwrap();

    let err = system
        .order_client
        .update_order(order.id.clone(), order_payload(Some("cooking")))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value of the 'status' property must be one of pending, preparing, out-for-delivery, delivered"
    );

    let err = system
        .order_client
        .update_order(order.id.clone(), order_payload(Some("delivered")))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot update a delivered order");

    let updated = system
        .order_client
        .update_order(order.id.clone(), order_payload(Some("out-for-delivery")))
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::OutForDelivery);
    assert_eq!(updated.id, order.id);
}

#[tokio::test]
async fn test_delivered_orders_are_frozen() {
    let system = system_with(vec![seeded("50", OrderStatus::Delivered)]);

    let err = system
        .order_client
        .update_order("50".to_string(), order_payload(Some("preparing")))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Cannot update a delivered order");
}

#[tokio::test]
async fn test_update_requires_status_and_matching_id() {
    let system = system_with(vec![seeded("7", OrderStatus::Pending)]);

    let err = system
        .order_client
        .update_order("7".to_string(), order_payload(None))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Must include a status");

    let mut numeric = order_payload(Some("preparing"));
    numeric["data"]["id"] = json!(7);
    assert!(system
        .order_client
        .update_order("7".to_string(), numeric)
        .await
        .is_ok());

    let mut other = order_payload(Some("preparing"));
    other["data"]["id"] = json!("8");
    let err = system
        .order_client
        .update_order("7".to_string(), other)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Order id does not match route id. Order: 8, Route: 7"
    );
}

#[tokio::test]
async fn test_delete_only_pending() {
    let system = system_with(vec![
        seeded("20", OrderStatus::Pending),
        seeded("21", OrderStatus::Preparing),
    ]);

    let err = system
        .order_client
        .delete_order("21".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(
        err.to_string(),
        "An order cannot be deleted unless it is pending."
    );
    assert_eq!(system.order_client.list(None).await.unwrap().len(), 2);

    system.order_client.delete_order("20".to_string()).await.unwrap();
    let remaining = system.order_client.list(None).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "21");

    let err = system.order_client.read("20".to_string()).await.unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Order id not found: 20");
}

#[tokio::test]
async fn test_seeded_ids_are_not_reused() {
    let system = system_with(vec![seeded("30", OrderStatus::Pending)]);

    let order = system.order_client.create_order(order_payload(None)).await.unwrap();

    assert_eq!(order.id, "31");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_numeric_dish_ids_are_stored_as_text() {
    let system = RestaurantSystem::new();

    let order = system
        .order_client
        .create_order(with_lines(json!([{ "id": 1, "quantity": 2 }])))
        .await
        .unwrap();

    assert_eq!(order.dishes[0].id.as_deref(), Some("1"));
    assert_eq!(order.dishes[0].quantity, 2);
}

#[tokio::test]
async fn test_line_without_id_stays_without_id() {
    let system = RestaurantSystem::new();

    let order = system
        .order_client
        .create_order(with_lines(json!([{ "quantity": 2 }])))
        .await
        .unwrap();
    assert_eq!(order.dishes[0].id, None);

    let stored = system.order_client.read(order.id.clone()).await.unwrap();
    let wire = serde_json::to_value(&stored).unwrap();
    assert_eq!(wire["dishes"][0], json!({ "quantity": 2 }));
}

#[tokio::test]
async fn test_malformed_dish_id_is_named() {
    let system = RestaurantSystem::new();

    let err = system
        .order_client
        .create_order(with_lines(json!([{ "id": true, "quantity": 2 }])))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Dish id must be text or a number: true");
}

#[tokio::test]
async fn test_large_quantities_are_kept() {
    let system = RestaurantSystem::new();

    let order = system
        .order_client
        .create_order(with_lines(json!([{ "id": "1", "quantity": 5_000_000_000u64 }])))
        .await
        .unwrap();

    assert_eq!(order.dishes[0].quantity, 5_000_000_000);
}

#[tokio::test]
async fn test_order_reads_are_stable() {
    let system = RestaurantSystem::new();
    let order = system.order_client.create_order(order_payload(None)).await.unwrap();

    let first = system.order_client.read(order.id.clone()).await.unwrap();
    let second = system.order_client.read(order.id.clone()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first, order);
}

#[tokio::test]
async fn test_exhausted_ids_refuse_creates() {
    let system = system_with(vec![seeded(&u64::MAX.to_string(), OrderStatus::Pending)]);

    let err = system
        .order_client
        .create_order(order_payload(None))
        .await
        .unwrap_err();

    assert_eq!(err.status(), 500);
    assert_eq!(system.order_client.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_seed_ids_are_refused() {
    let result = RestaurantSystem::with_seed(
        &Config::default(),
        SeedData {
            dishes: Vec::new(),
            orders: vec![
                seeded("9", OrderStatus::Pending),
                seeded("9", OrderStatus::Preparing),
            ],
        },
    );

    match result {
        Err(ConfigError::DuplicateId { id }) => assert_eq!(id, "9"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("duplicate ids should be refused"),
    }
}
