//! Order lifecycle guards.
//!
//! Domain checks layered on top of the generic field checks: what an order's
//! dish list must look like, which status tokens exist, and when an order is
//! frozen (delivered) or removable (pending).

use crate::error::ApiError;
use crate::model::{Order, OrderStatus};
use crate::pipeline::checks::{canonical_id, describe, positive_whole};
use crate::pipeline::Context;
use serde_json::Value;

/// `dishes` must be an array with at least one entry.
pub fn dishes_not_empty<'s>(ctx: Context<'s, Order>) -> Result<Context<'s, Order>, ApiError> {
    match ctx.field("dishes") {
        Some(Value::Array(lines)) if !lines.is_empty() => Ok(ctx),
        _ => Err(ApiError::validation("Dishes must contain a dish")),
    }
}

/// A dish line's `id`, when given, must be text or a number.
///
/// A line without an id is kept as is; numeric ids are stored in their
/// decimal form.
pub fn dish_ids_valid<'s>(ctx: Context<'s, Order>) -> Result<Context<'s, Order>, ApiError> {
    let lines = ctx.field("dishes").and_then(Value::as_array);
    for line in lines.into_iter().flatten() {
        match line.get("id") {
            None | Some(Value::Null) => {}
            Some(id) if canonical_id(id).is_some() => {}
            Some(id) => {
                return Err(ApiError::validation(format!(
                    "Dish id must be text or a number: {}",
                    describe(Some(id))
                )))
            }
        }
    }
    Ok(ctx)
}

/// Every entry of `dishes` must carry a whole, positive `quantity`.
///
/// The first offending entry is reported with its dish id and quantity.
pub fn quantities_valid<'s>(ctx: Context<'s, Order>) -> Result<Context<'s, Order>, ApiError> {
    let lines = ctx.field("dishes").and_then(Value::as_array);
    for line in lines.into_iter().flatten() {
        let quantity = line.get("quantity");
        if quantity.and_then(positive_whole).is_none() {
            return Err(ApiError::validation(format!(
                "Dish {} must have a quantity that is a whole number greater than zero: {}",
                describe(line.get("id")),
                describe(quantity),
            )));
        }
    }
    Ok(ctx)
}

/// `status` must be one of the four lifecycle tokens.
pub fn status_legal<'s>(ctx: Context<'s, Order>) -> Result<Context<'s, Order>, ApiError> {
    let legal = ctx
        .field("status")
        .and_then(Value::as_str)
        .and_then(OrderStatus::parse)
        .is_some();
    if legal {
        return Ok(ctx);
    }
    let tokens: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::as_str).collect();
    Err(ApiError::validation(format!(
        "Value of the 'status' property must be one of {}",
        tokens.join(", ")
    )))
}

/// A delivered order is frozen, and no update may mark an order delivered.
///
/// Both the requested status and the stored status are checked, so the
/// outcome is the same whatever state the order was in before.
pub fn not_delivered<'s>(ctx: Context<'s, Order>) -> Result<Context<'s, Order>, ApiError> {
    let requested = ctx.field("status").and_then(Value::as_str);
    let stored = ctx.resolved_entity().map(|order| order.status);
    if requested == Some(OrderStatus::Delivered.as_str()) || stored == Some(OrderStatus::Delivered)
    {
        return Err(ApiError::validation("Cannot update a delivered order"));
    }
    Ok(ctx)
}

/// Only a pending order may be deleted.
pub fn pending_only<'s>(ctx: Context<'s, Order>) -> Result<Context<'s, Order>, ApiError> {
    match ctx.resolved_entity() {
        Some(order) if order.status == OrderStatus::Pending => Ok(ctx),
        _ => Err(ApiError::validation(
            "An order cannot be deleted unless it is pending.",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderLine;
    use crate::pipeline::{checks, Pipeline, Request};
    use serde_json::json;

    fn order(status: OrderStatus) -> Order {
        Order {
            id: "5".into(),
            deliver_to: "1 Main St".into(),
            mobile_number: "555-0100".into(),
            status,
            dishes: vec![OrderLine::new("1", 2)],
        }
    }

    fn check(
        guard: fn(Context<'_, Order>) -> Result<Context<'_, Order>, ApiError>,
        stored: OrderStatus,
        payload: Value,
    ) -> Result<(), ApiError> {
        let request = Request::new(Some("5".into()), payload);
        let store = [order(stored)];
        Pipeline::<Order>::new()
            .then(checks::resolve::<Order>)
            .then(guard)
            .run(Context::new(&request, &store))
            .map(|_| ())
    }

    #[test]
    fn test_empty_or_missing_dish_list() {
        for dishes in [json!([]), json!("soup"), json!({})] {
            let err = check(dishes_not_empty, OrderStatus::Pending, json!({ "data": { "dishes": dishes } }))
                .unwrap_err();
            assert_eq!(err, ApiError::validation("Dishes must contain a dish"));
        }
    }

    #[test]
    fn test_dish_ids_must_be_text_or_numbers() {
        let payload = json!({ "data": { "dishes": [
            { "id": 1, "quantity": 2 },
            { "id": "2", "quantity": 1 },
            { "quantity": 1 },
        ] } });
        assert!(check(dish_ids_valid, OrderStatus::Pending, payload).is_ok());

        let payload = json!({ "data": { "dishes": [{ "id": { "ref": 1 }, "quantity": 1 }] } });
        let err = check(dish_ids_valid, OrderStatus::Pending, payload).unwrap_err();
        assert_eq!(
            err,
            ApiError::validation(r#"Dish id must be text or a number: {"ref":1}"#)
        );
    }

    #[test]
    fn test_quantity_error_names_dish_and_quantity() {
        let payload = json!({ "data": { "dishes": [
            { "id": "1", "quantity": 2 },
            { "id": "3", "quantity": 0 },
        ] } });
        let err = check(quantities_valid, OrderStatus::Pending, payload).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Dish 3"), "{message}");
        assert!(message.ends_with(": 0"), "{message}");

        let missing = json!({ "data": { "dishes": [{ "id": "4" }] } });
        let err = check(quantities_valid, OrderStatus::Pending, missing).unwrap_err();
        assert!(err.to_string().ends_with(": undefined"));
    }

    #[test]
    fn test_status_must_be_a_known_token() {
        let ok = json!({ "data": { "status": "out-for-delivery" } });
        assert!(check(status_legal, OrderStatus::Pending, ok).is_ok());

        let err = check(status_legal, OrderStatus::Pending, json!({ "data": { "status": "lost" } }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value of the 'status' property must be one of pending, preparing, out-for-delivery, delivered"
        );
    }

    #[test]
    fn test_delivered_is_refused_whatever_the_prior_status() {
        let delivered = json!({ "data": { "status": "delivered" } });
        for stored in OrderStatus::ALL {
            let err = check(not_delivered, stored, delivered.clone()).unwrap_err();
            assert_eq!(err, ApiError::validation("Cannot update a delivered order"));
        }
    }

    #[test]
    fn test_stored_delivered_order_is_frozen() {
        let preparing = json!({ "data": { "status": "preparing" } });
        assert!(check(not_delivered, OrderStatus::Pending, preparing.clone()).is_ok());
        assert!(check(not_delivered, OrderStatus::Delivered, preparing).is_err());
    }

    #[test]
    fn test_only_pending_orders_are_deletable() {
        assert!(check(pending_only, OrderStatus::Pending, json!({})).is_ok());
        for stored in [
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
        ] {
            let err = check(pending_only, stored, json!({})).unwrap_err();
            assert_eq!(
                err,
                ApiError::validation("An order cannot be deleted unless it is pending.")
            );
        }
    }
}
