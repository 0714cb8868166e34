use crate::{
    types::{
        Platform,
        StatsResponse,
    },
    Error,
    RequestError,
    TrackerResult,
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    header::{
        HeaderName,
        HeaderValue,
    },
    Method,
    StatusCode,
};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// The default api base url
pub const DEFAULT_BASE_URL: &str = "https://api.fortnitetracker.com/v1";

/// The header the api key is sent in. This is `TRN-Api-Key`; header names are case-insensitive.
const API_KEY_HEADER: &str = "trn-api-key";

const PROFILE_PATH_TEMPLATE: &str = "/profile/{platform}/{displayName}";

/// A boxed error, as returned by an [`HttpClient`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Something that can perform an http request.
///
/// Timeouts, proxies, and tls settings are the implementor's concern.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a request, returning the response once the headers have arrived.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError>;
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        Ok(reqwest::Client::execute(self, request).await?)
    }
}

#[async_trait]
impl<T> HttpClient for Arc<T>
where
    T: HttpClient + ?Sized,
{
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<'a, T> HttpClient for &'a T
where
    T: HttpClient + ?Sized,
{
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        (**self).execute(request).await
    }
}

/// A fully-read response
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The response status
    pub status: StatusCode,

    /// The response body
    pub body: Bytes,
}

/// Build the path for a profile lookup.
///
/// The display name is inserted as-is, without escaping.
pub fn resolve_profile_path(platform: Platform, display_name: &str) -> String {
    PROFILE_PATH_TEMPLATE
        .replacen("{platform}", platform.as_str(), 1)
        .replacen("{displayName}", display_name, 1)
}

/// Fortnite Tracker Client
#[derive(Debug, Clone)]
pub struct Client<H = reqwest::Client> {
    http: H,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl Client {
    /// Make a new client with a default reqwest client
    pub fn new(api_key: &str) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key)
    }
}

impl<H> Client<H>
where
    H: HttpClient,
{
    /// Make a new client from an http client and an api key
    pub fn with_http_client(http: H, api_key: &str) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    /// Use a different base url.
    ///
    /// Request paths are appended to this verbatim.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the inner http client
    pub fn http_client(&self) -> &H {
        &self.http
    }

    /// Get the base url
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an authenticated GET request for a path and read the entire body.
    ///
    /// `path` should begin with a `/`.
    pub async fn request(&self, path: &str) -> TrackerResult<RawResponse> {
        let url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(RequestError::from)?;
        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(RequestError::from)?;
        api_key.set_sensitive(true);

        let mut request = reqwest::Request::new(Method::GET, url);
        request
            .headers_mut()
            .insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        debug!(url = %request.url(), "sending request");
        let response = self.http.execute(request).await.map_err(Error::Transport)?;
        let status = response.status();

        // This consumes the response, so the connection is released on every path.
        let body = response.bytes().await.map_err(Error::BodyRead)?;

        Ok(RawResponse { status, body })
    }

    /// Get the stats for a user.
    ///
    /// `platform` must be exactly one of `pc`, `xbl`, or `psn`.
    /// No request is made if it is not.
    pub async fn get_stats(
        &self,
        platform: &str,
        display_name: &str,
    ) -> TrackerResult<StatsResponse> {
        let platform = Platform::from_code(platform)?;
        self.get_platform_stats(platform, display_name).await
    }

    /// Get the stats for a user on a platform
    pub async fn get_platform_stats(
        &self,
        platform: Platform,
        display_name: &str,
    ) -> TrackerResult<StatsResponse> {
        let path = resolve_profile_path(platform, display_name);
        let response = self.request(&path).await?;

        if response.status != StatusCode::OK {
            return Err(Error::InvalidStatus(response.status));
        }

        // A `null` body decodes to an empty response, like any other `null`.
        let stats: Option<StatsResponse> = serde_json::from_slice(&response.body)?;
        Ok(stats.unwrap_or_default())
    }
}
