use reqwest::{header::USER_AGENT, Client};
use snafu::ResultExt;
use std::{
    fmt,
    sync::{Arc, OnceLock},
};
use tracing::{instrument, warn};
use url::Url;

use crate::{
    batch::{self, decode_records},
    error::{InvalidBaseUrlSnafu, PerformRequestSnafu, ReadResponseSnafu, ServerError, ServerSnafu},
    models::{Query, Response},
    Result,
};

/// Address of the public Genderize service.
pub const DEFAULT_BASE_URL: &str = "https://api.genderize.io/";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("genderize-rust/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`Genderize`] client.
///
/// Fields left as `None` or set to an empty string fall back to the defaults.
#[derive(Clone, Default)]
pub struct Config {
    pub user_agent: Option<String>,
    pub api_key: Option<String>,
    /// Server address, [`DEFAULT_BASE_URL`] when unset
    pub base_url: Option<String>,
    /// HTTP transport; timeouts and proxies configured on it apply to every request.
    pub http_client: Option<Client>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("user_agent", &self.user_agent)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("http_client", &self.http_client)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Internal client for making requests to the Genderize API
pub(crate) struct GenderizeClient {
    http_client: Client,
    api_key: Option<String>,
    user_agent: String,
    base_url: Url,
}

impl fmt::Debug for GenderizeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenderizeClient")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GenderizeClient {
    pub(crate) fn from_config(config: Config) -> Result<Self> {
        let base_url = non_empty(config.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url).context(InvalidBaseUrlSnafu { base_url })?;

        Ok(Self {
            http_client: config.http_client.unwrap_or_default(),
            api_key: non_empty(config.api_key),
            user_agent: non_empty(config.user_agent)
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            base_url,
        })
    }

    /// Request gender records for a single batch of names.
    ///
    /// Callers keep `names` within [`batch::BATCH_SIZE`].
    #[instrument(skip_all, fields(names = names.len()))]
    pub(crate) async fn get_batch(
        &self,
        names: &[String],
        country_id: Option<&str>,
        language_id: Option<&str>,
    ) -> Result<Vec<Response>> {
        let url = self.build_url(names, country_id, language_id);

        // errors only carry the base url; the request url holds the api key
        let response = self
            .http_client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context(PerformRequestSnafu {
                url: self.base_url.clone(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.bytes().await.ok();
            let error = ServerError::new(status.as_u16(), &headers, body.as_deref());
            warn!(
                status = error.status_code,
                reason = %error.message,
                rate_limit = ?error.rate_limit,
                "genderize rejected request"
            );
            return Err(error).context(ServerSnafu);
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context(ReadResponseSnafu)?;
        decode_records(&body)
    }

    /// Build the request URL for one batch
    pub(crate) fn build_url(
        &self,
        names: &[String],
        country_id: Option<&str>,
        language_id: Option<&str>,
    ) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut params = url.query_pairs_mut();
            for name in names {
                params.append_pair("name[]", name);
            }
            if let Some(api_key) = &self.api_key {
                params.append_pair("apikey", api_key);
            }
            if let Some(country_id) = country_id {
                params.append_pair("country_id", country_id);
            }
            if let Some(language_id) = language_id {
                params.append_pair("language_id", language_id);
            }
        }
        url
    }
}

/// Client for the Genderize API
///
/// Configuration is fixed at construction. The client is cheap to clone and
/// can be shared between tasks.
///
/// # Example
///
/// ```no_run
/// use genderize::{Genderize, Query};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Genderize::builder()
///     .with_api_key("API_KEY")
///     .with_user_agent("my-app/1.0")
///     .build()?;
///
/// let responses = client
///     .get(Query::new(["Kim"]).with_country_id("dk").with_language_id("da"))
///     .await?;
///
/// for response in responses {
///     println!("{}: {}", response.name, response.gender);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Genderize {
    client: Arc<GenderizeClient>,
}

impl Genderize {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::from_config(Config::default())
    }

    /// Create a client that authenticates with the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().with_api_key(api_key).build()
    }

    /// Create a client from an explicit configuration
    ///
    /// Fails if the configured base URL cannot be parsed.
    pub fn from_config(config: Config) -> Result<Self> {
        let client = GenderizeClient::from_config(config)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Start building a client configuration
    pub fn builder() -> GenderizeBuilder {
        GenderizeBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.client.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.client.user_agent
    }

    /// Get gender info for the names of a query.
    ///
    /// Returns one [`Response`] per name, in the order the names were given.
    /// Queries longer than [`BATCH_SIZE`](crate::BATCH_SIZE) are sent as
    /// several sequential requests; an empty query sends nothing.
    pub async fn get(&self, query: impl Into<Query>) -> Result<Vec<Response>> {
        batch::get_batched(&self.client, &query.into()).await
    }
}

/// Builder for [`Genderize`] clients
#[derive(Debug, Default)]
pub struct GenderizeBuilder {
    config: Config,
}

impl GenderizeBuilder {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Point the client at another server, e.g. a proxy or a test double.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.config.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> Result<Genderize> {
        Genderize::from_config(self.config)
    }
}

static DEFAULT_CLIENT: OnceLock<Genderize> = OnceLock::new();

pub(crate) fn default_client() -> &'static Genderize {
    DEFAULT_CLIENT.get_or_init(|| {
        Genderize::new().expect("default genderize configuration must be valid")
    })
}

/// Get gender info for names using a shared default client.
///
/// No API key, country or language hints are sent. Use [`Genderize`] for
/// anything beyond that.
///
/// ```no_run
/// # async fn example() -> Result<(), genderize::Error> {
/// let responses = genderize::get(["James", "Eva", "Thunderhorse"]).await?;
/// for response in responses {
///     println!("{}: {}", response.name, response.gender);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn get<I, S>(names: I) -> Result<Vec<Response>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    default_client().get(Query::new(names)).await
}
