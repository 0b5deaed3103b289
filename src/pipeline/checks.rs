//! Field checks shared by every resource, plus existence resolution.

use super::{Check, Context};
use crate::error::ApiError;
use crate::framework::ActorEntity;
use serde_json::Value;

/// JSON truthiness: `null`, `false`, `""` and `0` count as absent.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// A whole number strictly above zero. `5.0` is accepted as `5`.
pub fn positive_whole(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    let n = value.as_f64()?;
    (n >= 1.0 && n.fract() == 0.0 && n < u64::MAX as f64).then_some(n as u64)
}

/// Identifier in its canonical string form. Numbers are rendered in decimal;
/// no other JSON type names an entity.
pub fn canonical_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Renders a payload value for an error message without JSON string quotes.
pub fn describe(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// The named field must be present: `Must include a <field>`.
#[derive(Debug, Clone, Copy)]
pub struct Has(pub &'static str);

impl<T> Check<T> for Has {
    fn check<'s>(&self, ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError> {
        if is_present(ctx.field(self.0)) {
            Ok(ctx)
        } else {
            Err(ApiError::validation(format!("Must include a {}", self.0)))
        }
    }
}

/// The named field must be a non-empty string.
#[derive(Debug, Clone, Copy)]
pub struct Text(pub &'static str);

impl<T> Check<T> for Text {
    fn check<'s>(&self, ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError> {
        match ctx.field(self.0) {
            Some(Value::String(text)) if !text.is_empty() => Ok(ctx),
            Some(Value::String(_)) | Some(Value::Null) | None => Err(ApiError::validation(
                format!("Value of the '{}' property cannot be empty", self.0),
            )),
            Some(_) => Err(ApiError::validation(format!(
                "Value of the '{}' property must be text",
                self.0
            ))),
        }
    }
}

/// The named field must be a whole number greater than zero.
#[derive(Debug, Clone, Copy)]
pub struct PositiveWhole(pub &'static str);

impl<T> Check<T> for PositiveWhole {
    fn check<'s>(&self, ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError> {
        match ctx.field(self.0).and_then(positive_whole) {
            Some(_) => Ok(ctx),
            None => Err(ApiError::validation(format!(
                "Value of the '{}' property must be a whole number greater than zero",
                self.0
            ))),
        }
    }
}

/// Existence resolver: finds the entity named by the path id and attaches it.
pub fn resolve<'s, T: ActorEntity>(ctx: Context<'s, T>) -> Result<Context<'s, T>, ApiError> {
    let id = ctx.path_id().unwrap_or_default();
    match ctx.store().iter().position(|entity| entity.id() == id) {
        Some(index) => Ok(ctx.with_resolved(index)),
        None => Err(ApiError::not_found(format!("{} id not found: {}", T::KIND, id))),
    }
}

/// Identity guard: a payload `id`, when given, must equal the path id.
pub fn id_matches_path<'s, T: ActorEntity>(
    ctx: Context<'s, T>,
) -> Result<Context<'s, T>, ApiError> {
    let given = ctx.field("id");
    if !is_present(given) {
        return Ok(ctx);
    }
    let route = ctx.path_id().unwrap_or_default();
    if given.and_then(canonical_id).as_deref() == Some(route) {
        return Ok(ctx);
    }
    Err(ApiError::validation(format!(
        "{kind} id does not match route id. {kind}: {given}, Route: {route}",
        kind = T::KIND,
        given = describe(given),
    )))
}
