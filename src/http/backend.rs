//! Backend trait

use crate::error::{Error, Result};
use crate::params::FormBody;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Transport that performs one API call and returns the decoded JSON body
#[async_trait]
pub trait Backend: Send + Sync {
    /// Call `path` (relative to the API base) with `form` as parameters,
    /// authenticating with `key`
    async fn call(&self, method: Method, path: &str, key: &str, form: &FormBody)
        -> Result<JsonValue>;
}

/// Call the backend and deserialize the response into `T`
pub async fn call_json<T: DeserializeOwned>(
    backend: &dyn Backend,
    method: Method,
    path: &str,
    key: &str,
    form: &FormBody,
) -> Result<T> {
    let value = backend.call(method, path, key, form).await?;
    serde_json::from_value(value).map_err(|e| Error::decode(format!("{method} {path}: {e}")))
}
