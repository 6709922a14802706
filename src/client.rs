//! mailboxlayer async client implementation.

use crate::models::ErrorResponse;
use crate::{Result, Verdict};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::fmt;
use std::time::Duration;

/// Async client for the mailboxlayer email verification service.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like proxies, timeouts, or a caller-owned `reqwest::Client`.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    access_key: String,
    proxy: Option<String>,
    check_url: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(access_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(access_key)
    }

    /// Create a new mailboxlayer client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailboxlayer_client::Client;
    /// # fn main() -> Result<(), mailboxlayer_client::Error> {
    /// let client = Client::new("your-access-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(access_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(access_key).build()
    }

    /// Get the proxy URL if one was configured.
    ///
    /// Returns `None` when no proxy was set on the builder.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// The endpoint this client sends checks to.
    pub fn check_url(&self) -> &str {
        &self.check_url
    }

    /// Verify an email address.
    ///
    /// Sends exactly one request; nothing is cached and nothing is retried.
    /// The address is not validated locally, the service reports that in
    /// [`Verdict::format_valid`].
    ///
    /// # Arguments
    /// * `email` - The address to verify
    ///
    /// # Errors
    /// * [`Error::Request`](crate::Error::Request) if the service could not be reached
    /// * [`Error::Json`](crate::Error::Json) if the body does not match the expected shape
    /// * [`Error::Api`](crate::Error::Api) if the service rejected the request
    ///
    /// # Examples
    /// ```no_run
    /// # use mailboxlayer_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), mailboxlayer_client::Error> {
    /// let client = Client::new("your-access-key")?;
    /// let verdict = client.check("support@apilayer.com").await?;
    /// if verdict.is_disposable {
    ///     println!("{} is a throwaway address", verdict.email);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check(&self, email: &str) -> Result<Verdict> {
        let params = [("access_key", self.access_key.as_str()), ("email", email)];

        tracing::debug!(email, url = %self.check_url, "sending email check");

        let response = self
            .http
            .get(&self.check_url)
            .query(&params)
            .headers(Self::headers())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(email, %status, bytes = body.len(), "email check response");

        if status.is_success() {
            return Ok(serde_json::from_slice::<Verdict>(&body)?);
        }

        let response: ErrorResponse = serde_json::from_slice(&body)?;
        tracing::warn!(
            email,
            %status,
            success = response.success,
            code = response.error.code,
            kind = %response.error.kind,
            "mailboxlayer rejected email check"
        );
        Err(response.error.into())
    }

    /// Build headers for API requests.
    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("access_key", &"<redacted>")
            .field("proxy", &self.proxy)
            .field("check_url", &self.check_url)
            .finish_non_exhaustive()
    }
}

const CHECK_URL: &str = "https://apilayer.net/api/check";
const USER_AGENT_VALUE: &str = concat!("mailboxlayer-client/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a mailboxlayer client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    access_key: String,
    http: Option<reqwest::Client>,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    timeout: Option<Duration>,
    check_url: String,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - No timeout
    /// - Default user agent
    /// - Default mailboxlayer check endpoint
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            http: None,
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
            check_url: CHECK_URL.to_string(),
        }
    }

    /// Use a caller-owned `reqwest::Client` as the transport.
    ///
    /// When set, `proxy`, `timeout`, `user_agent` and
    /// `danger_accept_invalid_certs` are ignored; configure them on the
    /// supplied client instead.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
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

    /// Set a total request timeout. The client imposes none by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the check endpoint URL.
    ///
    /// Useful for testing, or for the plain-HTTP endpoint on plans without TLS.
    pub fn check_url(mut self, check_url: impl Into<String>) -> Self {
        self.check_url = check_url.into();
        self
    }

    /// Build the client.
    ///
    /// No request is sent; the first network call happens in [`Client::check`].
    ///
    /// # Examples
    /// ```no_run
    /// # use mailboxlayer_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), mailboxlayer_client::Error> {
    /// let client = Client::builder("your-access-key")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder()
                    .danger_accept_invalid_certs(self.danger_accept_invalid_certs)
                    .user_agent(self.user_agent);

                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
                }
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                builder.build()?
            }
        };

        Ok(Client {
            http,
            access_key: self.access_key,
            proxy: self.proxy,
            check_url: self.check_url,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("access_key", &"<redacted>")
            .field("proxy", &self.proxy)
            .field("danger_accept_invalid_certs", &self.danger_accept_invalid_certs)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("check_url", &self.check_url)
            .finish_non_exhaustive()
    }
}
