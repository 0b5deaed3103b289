use dish_orders::config::Config;
use dish_orders::lifecycle::{setup_tracing, RestaurantSystem};
use dish_orders::router::Reply;
use serde_json::{json, Value};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting restaurant");

    let system = RestaurantSystem::start(&config).map_err(|e| e.to_string())?;
    let router = system.router();

    let span = tracing::info_span!("menu");
    let dish = async {
        let reply = router
            .handle(
                "POST",
                "/dishes",
                json!({ "data": {
                    "name": "Dolcelatte and chickpea spaghetti",
                    "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                    "price": 19,
                    "image_url": "https://images.example.com/spaghetti.jpg"
                } }),
            )
            .await;
        log_reply("Create dish", &reply);
        created_id(&reply)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order", dish_id = %dish);
    async {
        let reply = router
            .handle(
                "POST",
                "/orders",
                json!({ "data": {
                    "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
                    "mobileNumber": "(505) 143-3369",
                    "dishes": [{ "id": dish, "quantity": 2 }]
                } }),
            )
            .await;
        log_reply("Place order", &reply);
        let order = created_id(&reply)?;
        let path = format!("/orders/{order}");

        let reply = router
            .handle(
                "PUT",
                &path,
                json!({ "data": {
                    "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
                    "mobileNumber": "(505) 143-3369",
                    "status": "preparing",
                    "dishes": [{ "id": dish, "quantity": 3 }]
                } }),
            )
            .await;
        log_reply("Update order", &reply);

        log_reply("List orders", &router.handle("GET", "/orders", Value::Null).await);

        // Refused: the order is no longer pending.
        log_reply("Delete order", &router.handle("DELETE", &path, Value::Null).await);
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    drop(router);
    if let Err(e) = system.shutdown().await {
        error!(error = %e, "Shutdown failed");
        return Err(e.to_string());
    }
    Ok(())
}

fn log_reply(step: &str, reply: &Reply) {
    match reply.status {
        200..=299 => info!(step, status = reply.status, body = ?reply.body, "Succeeded"),
        _ => error!(step, status = reply.status, body = ?reply.body, "Failed"),
    }
}

fn created_id(reply: &Reply) -> Result<String, String> {
    reply
        .body
        .as_ref()
        .and_then(|body| body["data"]["id"].as_str())
        .map(str::to_string)
        .ok_or_else(|| format!("no id in reply: {:?}", reply.body))
}
