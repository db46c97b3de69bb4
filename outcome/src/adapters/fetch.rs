//! Awaiting a response body and deserializing it as JSON.
//!
//! The adapter does not open connections itself. Callers pass the future
//! (or the receiving end of a channel) that yields the response body from
//! whichever HTTP client or host API they use; the adapter awaits it once
//! and deserializes the body synchronously.

use std::error::Error;

use serde::de::DeserializeOwned;
use tokio::sync::oneshot;

use super::json::from_json_slice;
use super::reject;
use crate::{AdapterError, Outcome};

/// Await `response` and deserialize its body into `T`.
///
/// A transport error becomes [`AdapterError::Transport`] and a body that is
/// not valid JSON for `T` becomes [`AdapterError::Json`].
pub async fn fetch_json<T, B, E, F>(response: F) -> Outcome<T, AdapterError>
where
    T: DeserializeOwned,
    B: AsRef<[u8]>,
    E: Error,
    F: Future<Output = Result<B, E>>,
{
    response.await.map_or_else(
        |err| reject(AdapterError::transport(&err)),
        |body| from_json_slice(body.as_ref()),
    )
}

/// Await a body delivered over a oneshot channel and deserialize it.
///
/// If the sending side is dropped without sending, the request is treated
/// as cancelled and reported as [`AdapterError::Cancelled`].
pub async fn fetch_json_from<T, B, E>(
    pending: oneshot::Receiver<Result<B, E>>,
) -> Outcome<T, AdapterError>
where
    T: DeserializeOwned,
    B: AsRef<[u8]>,
    E: Error,
{
    match pending.await {
        Ok(Ok(body)) => from_json_slice(body.as_ref()),
        Ok(Err(err)) => reject(AdapterError::transport(&err)),
        Err(_closed) => reject(AdapterError::Cancelled),
    }
}
