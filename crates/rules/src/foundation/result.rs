//! Result helpers and the JSON wire shape of a `Result`
//!
//! Validators return plain [`std::result::Result`]. The helpers here give the
//! free-function surface used across the crate and a JSON encoding for results
//! that cross a process boundary:
//!
//! ```text
//! { "ok": true,  "value": <T> }
//! { "ok": false, "error": <E> }
//! ```
//!
//! [`is_result`] checks that shape structurally before anything downstream
//! trusts it.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

const OK_KEY: &str = "ok";
const VALUE_KEY: &str = "value";
const ERROR_KEY: &str = "error";

/// Errors produced while decoding a result from its JSON wire shape.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WireError {
    /// The candidate is not a well-formed result object.
    #[error("not a result: expected {{\"ok\": bool}} with exactly one of \"value\" / \"error\"")]
    Malformed,

    /// The payload could not be decoded into the requested type.
    #[error("result payload could not be decoded: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Wraps a success value.
#[inline]
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Wraps a failure.
#[inline]
pub fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Returns `true` if the result is `Ok`.
#[inline]
pub fn is_ok<T, E>(result: &Result<T, E>) -> bool {
    result.is_ok()
}

/// Returns `true` if the result is `Err`.
#[inline]
pub fn is_err<T, E>(result: &Result<T, E>) -> bool {
    result.is_err()
}

/// Extracts whichever side is populated.
///
/// Meant for diagnostics and tests where both branches carry the same type,
/// not for production control flow.
///
/// ```rust,ignore
/// assert_eq!(unwrap::<&str>(Err("EMPTY_NAME")), "EMPTY_NAME");
/// ```
#[inline]
pub fn unwrap<T>(result: Result<T, T>) -> T {
    match result {
        Ok(value) | Err(value) => value,
    }
}

/// Extracts whichever side is populated as JSON, for results whose two
/// branches have different types.
pub fn unwrap_json<T, E>(result: &Result<T, E>) -> Result<Json, serde_json::Error>
where
    T: Serialize,
    E: Serialize,
{
    match result {
        Ok(value) => serde_json::to_value(value),
        Err(error) => serde_json::to_value(error),
    }
}

/// Structural check of the result wire shape.
///
/// Requires an object with a boolean `ok` discriminant, carrying `value` when
/// `ok` is `true` and `error` when it is `false`. Objects missing the
/// discriminant, or carrying both or neither payload field, are rejected.
pub fn is_result(candidate: &Json) -> bool {
    let Some(object) = candidate.as_object() else {
        return false;
    };

    let has_value = object.contains_key(VALUE_KEY);
    let has_error = object.contains_key(ERROR_KEY);

    match object.get(OK_KEY) {
        Some(Json::Bool(true)) => has_value && !has_error,
        Some(Json::Bool(false)) => has_error && !has_value,
        _ => false,
    }
}

/// Encodes a result into its JSON wire shape.
pub fn to_json<T, E>(result: &Result<T, E>) -> Result<Json, serde_json::Error>
where
    T: Serialize,
    E: Serialize,
{
    let mut object = Map::with_capacity(2);
    match result {
        Ok(value) => {
            object.insert(OK_KEY.to_owned(), Json::Bool(true));
            object.insert(VALUE_KEY.to_owned(), serde_json::to_value(value)?);
        }
        Err(error) => {
            object.insert(OK_KEY.to_owned(), Json::Bool(false));
            object.insert(ERROR_KEY.to_owned(), serde_json::to_value(error)?);
        }
    }
    Ok(Json::Object(object))
}

/// Decodes a result from its JSON wire shape.
///
/// The shape is verified with [`is_result`] before either payload is decoded.
pub fn from_json<T, E>(candidate: &Json) -> Result<Result<T, E>, WireError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    if !is_result(candidate) {
        return Err(WireError::Malformed);
    }

    // `is_result` guarantees an object with a boolean discriminant.
    let object = candidate.as_object().ok_or(WireError::Malformed)?;
    if object.get(OK_KEY) == Some(&Json::Bool(true)) {
        let value = object.get(VALUE_KEY).cloned().unwrap_or(Json::Null);
        Ok(Ok(serde_json::from_value(value)?))
    } else {
        let error = object.get(ERROR_KEY).cloned().unwrap_or(Json::Null);
        Ok(Err(serde_json::from_value(error)?))
    }
}
