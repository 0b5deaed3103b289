use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Where an order is in its lifecycle.
///
/// Transmitted as `pending`, `preparing`, `out-for-delivery` or `delivered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == token)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an order: which dish, and how many.
///
/// Anything else the caller sent along with the line (a snapshot of the
/// dish's name or price, typically) is kept verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Dish id in canonical string form; a numeric id arrives as its decimal rendering.
    #[serde(
        default,
        deserialize_with = "super::whole::deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "super::whole::deserialize")]
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    pub fn new(id: impl Into<String>, quantity: u64) -> Self {
        Self {
            id: Some(id.into()),
            quantity,
            details: Map::new(),
        }
    }
}

/// A customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the
/// create, update and delete pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

/// Payload for creating a new order. A caller-supplied status is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
}

/// Payload for updating an order. Every mutable field is replaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

impl Order {
    /// Creates a new Order instance in the `pending` state.
    pub fn new(id: impl Into<String>, params: OrderCreate) -> Self {
        Self {
            id: id.into(),
            deliver_to: params.deliver_to,
            mobile_number: params.mobile_number,
            status: OrderStatus::Pending,
            dishes: params.dishes,
        }
    }
}
