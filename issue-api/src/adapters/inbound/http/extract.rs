use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Form,
};
use serde::de::DeserializeOwned;

/// Request body extractor that accepts JSON or URL-encoded forms and never
/// rejects.
///
/// An empty or unparseable body yields `T::default()`, so a malformed payload
/// surfaces the same way as one with the fields missing.
#[derive(Debug, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let payload = match Form::<T>::from_request(req, state).await {
                Ok(Form(payload)) => payload,
                Err(rejection) => {
                    tracing::warn!("Ignoring malformed form body: {}", rejection);
                    T::default()
                }
            };
            return Ok(Self(payload));
        }

        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(rejection) => {
                tracing::warn!("Failed to read request body: {}", rejection);
                return Ok(Self(T::default()));
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let payload = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            tracing::warn!("Ignoring malformed JSON body: {}", err);
            T::default()
        });

        Ok(Self(payload))
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}
