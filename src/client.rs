//! ZeroBounce async client and its builder.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::request::{build_url, endpoint_url, parse_base};
use crate::transport;
use crate::{Error, Result};

/// Async client for the ZeroBounce API.
///
/// Holds its own immutable configuration, so clients with different keys or
/// endpoints can be used side by side. Cloning is cheap and shares the
/// connection pool.
///
/// Use [`Client::new`] for production defaults or [`Client::builder`] for
/// custom endpoints, timeout, proxy or user agent.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
    bulk_base_url: Url,
    proxy: Option<String>,
    timeout: Duration,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Client for the production API with the given key.
    ///
    /// # Examples
    /// ```no_run
    /// # use zerobounce_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), zerobounce_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// let result = client.validate("valid@example.com", None).await?;
    /// println!("{}: {}", result.address, result.status);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Client configured from `ZERO_BOUNCE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().config(Config::from_env()).build()
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn bulk_base_url(&self) -> &Url {
        &self.bulk_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Standard API URL with `api_key` and `params` in the query.
    pub(crate) fn url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        build_url(&self.base_url, endpoint, &self.api_key, params)
    }

    /// Bulk API URL with `api_key` and `params` in the query.
    pub(crate) fn bulk_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        build_url(&self.bulk_base_url, endpoint, &self.api_key, params)
    }

    /// GET, expecting `200` and a JSON body.
    pub(crate) async fn get_json<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = self.http.get(url.clone());
        let response = transport::send(request, "GET", &url).await?;
        transport::decode_json(response, StatusCode::OK).await
    }

    /// POST a JSON body to the standard API, expecting `200`.
    ///
    /// The key travels in the body, so the URL carries no query.
    pub(crate) async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = endpoint_url(&self.base_url, endpoint)?;
        let request = self.http.post(url.clone()).json(body);
        let response = transport::send(request, "POST", &url).await?;
        transport::decode_json(response, StatusCode::OK).await
    }

    /// POST a multipart form to the bulk API, expecting `201`.
    pub(crate) async fn post_form<T>(&self, endpoint: &str, form: Form) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = endpoint_url(&self.bulk_base_url, endpoint)?;
        let request = self.http.post(url.clone()).multipart(form);
        let response = transport::send(request, "POST", &url).await?;
        transport::decode_json(response, StatusCode::CREATED).await
    }

    /// GET a binary download.
    pub(crate) async fn get_octet_stream(&self, url: Url) -> Result<Vec<u8>> {
        let request = self.http.get(url.clone());
        let response = transport::send(request, "GET", &url).await?;
        transport::read_octet_stream(response).await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("bulk_base_url", &self.bulk_base_url.as_str())
            .field("proxy", &self.proxy)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

const USER_AGENT_VALUE: &str = concat!("zerobounce-client-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a ZeroBounce client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: Config,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Production standard and bulk endpoints
    /// - Empty API key
    /// - 30 second request timeout
    /// - No proxy, strict TLS validation
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Replace key, endpoints and timeout at once.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    /// Override the standard API root.
    ///
    /// Useful for testing against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Override the bulk API root.
    pub fn bulk_base_url(mut self, bulk_base_url: impl Into<String>) -> Self {
        self.config.bulk_base_url = bulk_base_url.into();
        self
    }

    /// Upper bound for each request (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate the endpoints and build the client. No request is made.
    pub fn build(self) -> Result<Client> {
        let base_url = parse_base(&self.config.base_url)?;
        let bulk_base_url = parse_base(&self.config.bulk_base_url)?;

        let mut builder = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .user_agent(self.user_agent)
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

        if let Some(proxy_url) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| Error::Config(format!("invalid proxy {proxy_url}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let http = builder.build()?;

        if self.config.api_key.is_empty() {
            log::warn!("building a ZeroBounce client without an API key");
        }

        Ok(Client {
            http,
            api_key: self.config.api_key,
            base_url,
            bulk_base_url,
            proxy: self.proxy,
            timeout: self.config.timeout,
        })
    }
}
