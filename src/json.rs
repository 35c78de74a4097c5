use crate::Result;
use serde::de;

/// Deserialize a server response, logging the raw body when it does not match.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: de::DeserializeOwned,
{
    serde_json_wasm::from_str(s).map_err(|error| {
        log::error!("Unexpected response body: {s}");
        error.into()
    })
}
