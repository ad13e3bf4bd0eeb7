mod response;
mod transport;

pub use response::{Meta, Response};
pub use transport::Transport;

use crate::Error;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use response::ErrorBody;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Shared handle every resource client issues its calls through.
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
    authorization: HeaderValue,
    base_url: Url,
}

// `authorization` is marked sensitive, so its Debug output is redacted.
impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("base_url", &self.base_url.as_str())
            .field("authorization", &self.authorization)
            .finish_non_exhaustive()
    }
}

impl Api {
    pub fn new(transport: Arc<dyn Transport>, secret_key: &str, base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(base_url.to_string()));
        }
        let mut authorization = HeaderValue::from_str(&format!("Bearer {secret_key}"))
            .map_err(|_| Error::InvalidSecretKey)?;
        authorization.set_sensitive(true);
        Ok(Self {
            transport,
            authorization,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins percent-encoded `segments` onto the base url.
    pub fn url(&self, segments: &[&str], query: Option<&str>) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: Option<String>,
    ) -> Result<Response<T>, Error> {
        let url = self.url(segments, query.as_deref())?;
        self.send(Method::GET, url, None).await
    }

    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<Response<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments, None)?;
        let body = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<Response<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments, None)?;
        let body = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.send(Method::PUT, url, Some(body)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<Response<T>, Error> {
        tracing::debug!(%method, path = url.path(), "sending paystack request");

        let mut request = reqwest::Request::new(method.clone(), url);
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }
        let path = request.url().path().to_string();

        let response = self.transport.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        tracing::debug!(%method, %path, status = status.as_u16(), "paystack responded");

        if !status.is_success() {
            return Err(api_error(status, &bytes));
        }

        let envelope: Response<T> = serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
            source,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })?;
        if !envelope.status {
            tracing::warn!(%method, %path, message = %envelope.message, "paystack rejected request");
            return Err(Error::Api {
                status,
                message: envelope.message,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(envelope)
    }
}

fn api_error(status: StatusCode, bytes: &[u8]) -> Error {
    let body = String::from_utf8_lossy(bytes).into_owned();
    let message = serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|parsed| parsed.message.as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
    tracing::warn!(status = status.as_u16(), %message, "paystack request failed");
    Error::Api { status, message, body }
}

/// Url-encodes a list request. Unset fields are skipped; an empty query yields `None`.
pub fn serialize_query<Q: Serialize>(query: &Q) -> Result<Option<String>, Error> {
    let encoded = serde_urlencoded::to_string(query)?;
    Ok(Some(encoded).filter(|encoded| !encoded.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn api(base: &str) -> Api {
        Api::new(Arc::new(reqwest::Client::new()), "sk_test_xxx", base).unwrap()
    }

    #[test]
    fn url_encodes_segments() {
        let url = api("https://api.paystack.co")
            .url(&["customer", "ada+lovelace@example.com"], None)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.paystack.co/customer/ada+lovelace@example.com");

        let url = api("https://api.paystack.co/").url(&["page", "a b"], Some("x=1")).unwrap();
        assert_eq!(url.as_str(), "https://api.paystack.co/page/a%20b?x=1");
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let url = api("http://localhost:8080/proxy/").url(&["plan"], Some("")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/plan");
    }

    #[test]
    fn rejects_non_base_urls() {
        let err = Api::new(Arc::new(reqwest::Client::new()), "sk", "mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn debug_hides_secret() {
        let rendered = format!("{:?}", api("https://api.paystack.co"));
        assert!(!rendered.contains("sk_test_xxx"));
    }

    #[test]
    fn query_skips_unset_fields() {
        #[derive(Serialize)]
        struct Query {
            #[serde(rename = "perPage", skip_serializing_if = "Option::is_none")]
            per_page: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            page: Option<u32>,
        }

        assert_eq!(
            serialize_query(&Query { per_page: Some(20), page: None }).unwrap(),
            Some("perPage=20".to_string())
        );
        assert_eq!(serialize_query(&Query { per_page: None, page: None }).unwrap(), None);
    }

    #[test]
    fn query_that_cannot_be_encoded_is_an_error() {
        #[derive(Serialize)]
        struct Query {
            ids: Vec<u32>,
        }

        let err = serialize_query(&Query { ids: vec![1, 2] }).unwrap_err();
        assert!(matches!(err, Error::Query(_)));
    }

    #[test]
    fn api_error_prefers_paystack_message() {
        let err = api_error(StatusCode::BAD_REQUEST, br#"{"status":false,"message":"Invalid key"}"#);
        assert!(matches!(err, Error::Api { ref message, .. } if message == "Invalid key"));

        let err = api_error(StatusCode::BAD_GATEWAY, b"<html>");
        assert!(matches!(err, Error::Api { ref message, .. } if message == "Bad Gateway"));
    }
}
