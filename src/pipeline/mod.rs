//! # Validation Pipeline
//!
//! Every write operation is guarded by an ordered list of checks. A check is a
//! plain function (or a small struct) that takes the [`Context`] by value and
//! either hands it back, possibly enriched, or fails with an [`ApiError`].
//! [`Pipeline::run`] threads the context through the checks in declaration
//! order and stops at the first failure, so a later check never observes a
//! payload an earlier one rejected.
//!
//! ```rust
//! use dish_orders::pipeline::{checks::Has, Context, Pipeline, Request};
//! use serde_json::json;
//!
//! #[derive(Debug)]
//! struct Nothing;
//!
//! let pipeline = Pipeline::<Nothing>::new().then(Has("name")).then(Has("price"));
//! let request = Request::new(None, json!({ "data": { "price": 3 } }));
//!
//! let err = pipeline.run(Context::new(&request, &[])).unwrap_err();
//! assert_eq!(err.to_string(), "Must include a name");
//! ```

pub mod checks;

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// An inbound operation: the optional path identifier and the `data` object
/// of the payload.
///
/// A payload without a `data` member, or whose `data` is not an object, is
/// treated as carrying an empty object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    pub path_id: Option<String>,
    pub data: Map<String, Value>,
}

impl Request {
    pub fn new(path_id: Option<String>, payload: Value) -> Self {
        let data = match payload {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };
        Self { path_id, data }
    }

    /// A request addressing `id` with no payload (reads and deletes).
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            path_id: Some(id.into()),
            data: Map::new(),
        }
    }

    /// Deserializes the payload into a DTO once the pipeline has passed.
    pub fn parse<D: DeserializeOwned>(&self) -> Result<D, ApiError> {
        serde_json::from_value(Value::Object(self.data.clone()))
            .map_err(|e| ApiError::validation(format!("Invalid payload: {e}")))
    }
}

/// What a check sees: the request plus a read-only view of the store.
///
/// The existence resolver records the index of the entity it found; handlers
/// use that index once the pipeline (and with it the borrow of the store) is
/// done.
#[derive(Debug)]
pub struct Context<'s, T> {
    request: &'s Request,
    store: &'s [T],
    resolved: Option<usize>,
}

impl<'s, T> Context<'s, T> {
    pub fn new(request: &'s Request, store: &'s [T]) -> Self {
        Self {
            request,
            store,
            resolved: None,
        }
    }

    pub fn path_id(&self) -> Option<&'s str> {
        self.request.path_id.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&'s Value> {
        self.request.data.get(name)
    }

    pub fn store(&self) -> &'s [T] {
        self.store
    }

    /// Attaches the entity at `index` for downstream checks and the handler.
    pub fn with_resolved(mut self, index: usize) -> Self {
        self.resolved = Some(index);
        self
    }

    pub fn resolved(&self) -> Option<usize> {
        self.resolved
    }

    pub fn resolved_entity(&self) -> Option<&'s T> {
        self.resolved.and_then(|index| self.store.get(index))
    }
}

/// One step of a pipeline.
///
/// Implemented for every `fn(Context) -> Result<Context, ApiError>` and for
/// the parameterised checks in [`checks`].
pub trait Check<T>: Send + Sync {
    fn check<'s>(&self, ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError>;
}

impl<T, F> Check<T> for F
where
    F: for<'s> Fn(Context<'s, T>) -> Result<Context<'s, T>, ApiError> + Send + Sync,
{
    fn check<'s>(&self, ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError> {
        self(ctx)
    }
}

/// An ordered list of checks with short-circuit execution.
pub struct Pipeline<T> {
    steps: Vec<Box<dyn Check<T>>>,
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Pipeline<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a check after every check already declared.
    pub fn then(mut self, check: impl Check<T> + 'static) -> Self {
        self.steps.push(Box::new(check));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every check in order, returning the first error unchanged.
    pub fn run<'s>(&self, ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError> {
        self.steps
            .iter()
            .try_fold(ctx, |ctx, step| step.check(ctx))
    }
}
