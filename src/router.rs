//! # Routing Boundary
//!
//! Maps a transport-level `(method, path, body)` triple onto the client
//! operations and renders the outcome as a [`Reply`]. The transport itself
//! (HTTP server, CLI, test harness) stays outside the crate.
//!
//! | Path              | Methods              |
//! |-------------------|----------------------|
//! | `/dishes`         | `GET`, `POST`        |
//! | `/dishes/{id}`    | `GET`, `PUT`         |
//! | `/orders`         | `GET`, `POST`        |
//! | `/orders/{id}`    | `GET`, `PUT`, `DELETE` |

use crate::clients::{DishClient, OrderClient};
use crate::error::ApiError;
use crate::framework::ActorClient;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// What the transport should answer with.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    /// `{ "data": value }` with the given status.
    pub fn data(status: u16, value: &impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(data) => Self {
                status,
                body: Some(json!({ "data": data })),
            },
            Err(e) => Self {
                status: 500,
                body: Some(json!({ "error": e.to_string() })),
            },
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    pub fn error(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            body: Some(err.to_body()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    Dishes,
    Dish(String),
    Orders,
    Order(String),
}

impl Route {
    fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        let mut segments = trimmed.split('/');
        let route = match (segments.next(), segments.next(), segments.next()) {
            (Some("dishes"), None, _) => Route::Dishes,
            (Some("dishes"), Some(id), None) if !id.is_empty() => Route::Dish(id.to_string()),
            (Some("orders"), None, _) => Route::Orders,
            (Some("orders"), Some(id), None) if !id.is_empty() => Route::Order(id.to_string()),
            _ => return None,
        };
        Some(route)
    }
}

/// Dispatches requests to the dish and order clients.
#[derive(Clone)]
pub struct Router {
    dishes: DishClient,
    orders: OrderClient,
}

impl Router {
    pub fn new(dishes: DishClient, orders: OrderClient) -> Self {
        Self { dishes, orders }
    }

    /// Handles one request. Errors are folded into the reply, never returned.
    pub async fn handle(&self, method: &str, path: &str, body: Value) -> Reply {
        let method = method.to_ascii_uppercase();
        debug!(%method, path, "Routing request");
        match self.dispatch(&method, path, body).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(%method, path, status = e.status(), error = %e, "Request failed");
                Reply::error(&e)
            }
        }
    }

    async fn dispatch(&self, method: &str, path: &str, body: Value) -> Result<Reply, ApiError> {
        let route = Route::parse(path)
            .ok_or_else(|| ApiError::not_found(format!("Path not found: {path}")))?;

        match (method, route) {
            ("GET", Route::Dishes) => Ok(Reply::data(200, &self.dishes.list(None).await?)),
            ("POST", Route::Dishes) => Ok(Reply::data(201, &self.dishes.create_dish(body).await?)),
            ("GET", Route::Dish(id)) => Ok(Reply::data(200, &self.dishes.read(id).await?)),
            ("PUT", Route::Dish(id)) => {
                Ok(Reply::data(200, &self.dishes.update_dish(id, body).await?))
            }
            ("GET", Route::Orders) => Ok(Reply::data(200, &self.orders.list(None).await?)),
            ("POST", Route::Orders) => {
                Ok(Reply::data(201, &self.orders.create_order(body).await?))
            }
            ("GET", Route::Order(id)) => Ok(Reply::data(200, &self.orders.read(id).await?)),
            ("PUT", Route::Order(id)) => {
                Ok(Reply::data(200, &self.orders.update_order(id, body).await?))
            }
            ("DELETE", Route::Order(id)) => {
                self.orders.delete_order(id).await?;
                Ok(Reply::no_content())
            }
            _ => Err(ApiError::MethodNotAllowed(format!(
                "{method} not allowed for {path}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, expect_delete, expect_list};
    use crate::model::{Dish, Order};
    use serde_json::json;

    fn soup() -> Dish {
        Dish {
            id: "1".into(),
            name: "Soup".into(),
            description: "Hot".into(),
            price: 450,
            image_url: "soup.png".into(),
        }
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/dishes"), Some(Route::Dishes));
        assert_eq!(Route::parse("/dishes/"), Some(Route::Dishes));
        assert_eq!(Route::parse("/orders/7"), Some(Route::Order("7".into())));
        assert_eq!(Route::parse("/orders/7/items"), None);
        assert_eq!(Route::parse("/menu"), None);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (dishes, _dish_rx) = create_mock_client::<Dish>(1);
        let (orders, _order_rx) = create_mock_client::<Order>(1);
        let router = Router::new(DishClient::new(dishes), OrderClient::new(orders));

        let reply = router.handle("GET", "/menu", Value::Null).await;

        assert_eq!(reply.status, 404);
        assert_eq!(reply.body, Some(json!({ "error": "Path not found: /menu" })));
    }

    #[tokio::test]
    async fn test_wrong_method_is_not_allowed() {
        let (dishes, _dish_rx) = create_mock_client::<Dish>(1);
        let (orders, _order_rx) = create_mock_client::<Order>(1);
        let router = Router::new(DishClient::new(dishes), OrderClient::new(orders));

        let reply = router.handle("DELETE", "/dishes/1", Value::Null).await;

        assert_eq!(reply.status, 405);
        assert_eq!(
            reply.body,
            Some(json!({ "error": "DELETE not allowed for /dishes/1" }))
        );
    }

    #[tokio::test]
    async fn test_post_dish_replies_created() {
        let (dishes, mut dish_rx) = create_mock_client::<Dish>(1);
        let (orders, _order_rx) = create_mock_client::<Order>(1);
        let router = Router::new(DishClient::new(dishes), OrderClient::new(orders));

        let call = tokio::spawn(async move {
            router
                .handle("post", "/dishes", json!({ "data": { "name": "Soup" } }))
                .await
        });

        let (request, respond_to) = expect_create(&mut dish_rx)
            .await
            .expect("Expected Create request");
        assert_eq!(request.path_id, None);
        assert_eq!(request.data.get("name"), Some(&json!("Soup")));
        respond_to.send(Ok(soup())).unwrap();

        let reply = call.await.unwrap();
        assert_eq!(reply.status, 201);
        assert_eq!(reply.body.unwrap()["data"]["id"], json!("1"));
    }

    #[tokio::test]
    async fn test_list_wraps_data() {
        let (dishes, mut dish_rx) = create_mock_client::<Dish>(1);
        let (orders, _order_rx) = create_mock_client::<Order>(1);
        let router = Router::new(DishClient::new(dishes), OrderClient::new(orders));

        let call = tokio::spawn(async move { router.handle("GET", "/dishes", Value::Null).await });

        let (filter, respond_to) = expect_list(&mut dish_rx)
            .await
            .expect("Expected List request");
        assert_eq!(filter, None);
        respond_to.send(Ok(vec![soup()])).unwrap();

        let reply = call.await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.unwrap()["data"][0]["name"], json!("Soup"));
    }

    #[tokio::test]
    async fn test_delete_order_has_no_body() {
        let (dishes, _dish_rx) = create_mock_client::<Dish>(1);
        let (orders, mut order_rx) = create_mock_client::<Order>(1);
        let router = Router::new(DishClient::new(dishes), OrderClient::new(orders));

        let call =
            tokio::spawn(async move { router.handle("DELETE", "/orders/4", Value::Null).await });

        let (id, respond_to) = expect_delete(&mut order_rx)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, "4");
        respond_to.send(Ok(())).unwrap();

        assert_eq!(call.await.unwrap(), Reply::no_content());
    }
}
