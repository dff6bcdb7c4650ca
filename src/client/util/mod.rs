pub mod error;
#[cfg(feature = "web")]
pub mod fetch_events;
#[cfg(feature = "web")]
pub mod fetch_payment_keys;
#[cfg(feature = "web")]
pub mod fetch_purchases;
#[cfg(feature = "web")]
pub mod fetch_trips;


pub use error::FetchError;
#[cfg(feature = "web")]
pub use fetch_events::fetch_events;
#[cfg(feature = "web")]
pub use fetch_payment_keys::fetch_payment_keys;
#[cfg(feature = "web")]
pub use fetch_purchases::fetch_purchases;
#[cfg(feature = "web")]
pub use fetch_trips::fetch_trips;

/// GET `path` and decode a JSON body, mapping non-200 responses through the
/// API's [`crate::model::api::ErrorDto`] shape when possible.
#[cfg(feature = "web")]
pub(crate) async fn get_json<T>(path: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    use reqwasm::http::Request;

    let response = Request::get(path)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    decode_response(status, &body)
}

/// Maps a response status and raw body to the decoded payload or a [`FetchError`].
///
/// A 200 decodes as `T`. Anything else becomes [`FetchError::Api`], taking the
/// message from the API's error shape when the body parses as one and falling
/// back to the raw body text otherwise.
#[cfg(any(feature = "web", test))]
pub(crate) fn decode_response<T>(status: u16, body: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    use crate::model::api::ErrorDto;

    match status {
        200 => serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string())),
        status => {
            let message = match serde_json::from_str::<ErrorDto>(body) {
                Ok(error_dto) => error_dto.error,
                Err(_) => body.to_string(),
            };
            Err(FetchError::Api { status, message })
        }
    }
}
