use std::str::FromStr;
use std::time::Duration;

use crate::errors::{Error, Result};
use crate::resources::{Face, FaceList, LargeFaceList};
use crate::transport::Transport;

const ENDPOINT_ENV: &str = "AZURE_FACE_ENDPOINT";
const SUBSCRIPTION_KEY_ENV: &str = "AZURE_FACE_SUBSCRIPTION_KEY";

/// Immutable connection settings: service endpoint and subscription key.
///
/// Validated once at construction and owned by the client's transport from
/// then on.
#[derive(Debug, Clone)]
pub struct Configuration {
    endpoint: String,
    subscription_key: String,
}

impl Configuration {
    /// Capture the two required settings.
    ///
    /// Returns [`Error::Configuration`] when either string is empty.
    pub fn new(endpoint: impl Into<String>, subscription_key: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let subscription_key = subscription_key.into();

        if endpoint.is_empty() {
            return Err(Error::Configuration {
                message: "endpoint must not be empty".into(),
            });
        }
        if subscription_key.is_empty() {
            return Err(Error::Configuration {
                message: "subscription key must not be empty".into(),
            });
        }

        Ok(Self {
            endpoint,
            subscription_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn subscription_key(&self) -> &str {
        &self.subscription_key
    }
}

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use azure_face::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> azure_face::Result<()> {
/// let client = ClientBuilder::new()
///     .endpoint("https://westeurope.api.cognitive.microsoft.com")
///     .subscription_key("your-subscription-key")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    endpoint: Option<String>,
    subscription_key: Option<String>,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with no settings applied.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            subscription_key: None,
            http: None,
            timeout: None,
        }
    }

    /// Set the Cognitive Services endpoint, e.g.
    /// `https://westeurope.api.cognitive.microsoft.com`.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the subscription key sent with every request.
    pub fn subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }

    /// Supply a pre-built [`reqwest::Client`] instead of the default one.
    ///
    /// The base URL and subscription header are still applied to every
    /// request; the supplied client contributes everything else (proxies,
    /// pools, timeouts).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set a request timeout for the default HTTP client.
    ///
    /// Without this, requests wait as long as reqwest's default allows.
    /// Ignored when [`http_client`](Self::http_client) is supplied.
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = Some(d);
        self
    }

    /// Build the [`Client`].
    ///
    /// Settings not provided via the builder fall back to the
    /// `AZURE_FACE_ENDPOINT` and `AZURE_FACE_SUBSCRIPTION_KEY` environment
    /// variables.
    ///
    /// Returns [`Error::Configuration`] when either setting is available
    /// from neither source, or is empty.
    pub fn build(self) -> Result<Client> {
        let endpoint = self
            .endpoint
            .or_else(|| std::env::var(ENDPOINT_ENV).ok())
            .ok_or_else(|| Error::Configuration {
                message: format!(
                    "endpoint is required. Pass it to ClientBuilder::endpoint() \
                     or set the {ENDPOINT_ENV} environment variable."
                ),
            })?;

        let subscription_key = self
            .subscription_key
            .or_else(|| std::env::var(SUBSCRIPTION_KEY_ENV).ok())
            .ok_or_else(|| Error::Configuration {
                message: format!(
                    "subscription key is required. Pass it to \
                     ClientBuilder::subscription_key() or set the \
                     {SUBSCRIPTION_KEY_ENV} environment variable."
                ),
            })?;

        let config = Configuration::new(endpoint, subscription_key)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(Error::Http)?
            }
        };

        Ok(Client {
            transport: Transport::new(config, http),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Azure Face API client.
///
/// Use [`Client::new`] for quick construction or [`ClientBuilder`] for full
/// control. All operations live on the resource accessors.
///
/// # Example
///
/// ```no_run
/// use azure_face::Client;
///
/// # async fn example() -> azure_face::Result<()> {
/// let client = Client::new(
///     "https://westeurope.api.cognitive.microsoft.com",
///     "your-subscription-key",
/// )?;
///
/// let faces = client
///     .face()
///     .detect_with_url("https://example.com/photo.jpg", None)
///     .await?;
/// println!("{} face(s) detected", faces.as_array().map_or(0, Vec::len));
/// # Ok(())
/// # }
/// ```
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client with the given endpoint and subscription key.
    ///
    /// For environment-variable fallback, a custom HTTP client, or a
    /// timeout, use [`ClientBuilder`] instead.
    pub fn new(
        endpoint: impl Into<String>,
        subscription_key: impl Into<String>,
    ) -> Result<Self> {
        ClientBuilder::new()
            .endpoint(endpoint)
            .subscription_key(subscription_key)
            .build()
    }

    /// Shorthand for [`ClientBuilder::new`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Effective base URL every operation path resolves against, e.g.
    /// `https://westeurope.api.cognitive.microsoft.com/face/v1.0/`.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Face detection, similarity search, and grouping operations.
    pub fn face(&self) -> Face<'_> {
        Face::new(&self.transport)
    }

    /// Face list management operations.
    pub fn face_list(&self) -> FaceList<'_> {
        FaceList::new(&self.transport)
    }

    /// Large face list management and training operations.
    pub fn large_face_list(&self) -> LargeFaceList<'_> {
        LargeFaceList::new(&self.transport)
    }

    /// Resolve a logical resource to its operations, bound to this client.
    pub fn resource(&self, kind: ResourceKind) -> Resource<'_> {
        match kind {
            ResourceKind::Face => Resource::Face(self.face()),
            ResourceKind::FaceList => Resource::FaceList(self.face_list()),
            ResourceKind::LargeFaceList => Resource::LargeFaceList(self.large_face_list()),
        }
    }
}

/// Logical resource names understood by [`Client::resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Face,
    FaceList,
    LargeFaceList,
}

impl FromStr for ResourceKind {
    type Err = Error;

    /// Parse a logical resource name.
    ///
    /// Matching is case-insensitive and ignores `-`/`_`: `faceList`,
    /// `face-list`, and `FACELIST` all resolve to the same kind. Unknown
    /// names fail with [`Error::UnknownResource`].
    fn from_str(name: &str) -> Result<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "face" => Ok(Self::Face),
            "facelist" => Ok(Self::FaceList),
            "largefacelist" => Ok(Self::LargeFaceList),
            _ => Err(Error::UnknownResource(name.to_string())),
        }
    }
}

/// A dispatched resource instance, one variant per [`ResourceKind`].
pub enum Resource<'a> {
    Face(Face<'a>),
    FaceList(FaceList<'a>),
    LargeFaceList(LargeFaceList<'a>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_rejects_empty_settings() {
        assert!(matches!(
            Configuration::new("", "key"),
            Err(Error::Configuration { .. })
        ));
        assert!(matches!(
            Configuration::new("https://x.example", ""),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn resource_kind_parses_known_spellings() {
        for name in ["face"] {
            assert_eq!(name.parse::<ResourceKind>().unwrap(), ResourceKind::Face);
        }
        for name in ["facelist", "faceList", "face_list", "FACE-LIST"] {
            assert_eq!(
                name.parse::<ResourceKind>().unwrap(),
                ResourceKind::FaceList
            );
        }
        for name in ["largefacelist", "largeFaceList", "large_face_list"] {
            assert_eq!(
                name.parse::<ResourceKind>().unwrap(),
                ResourceKind::LargeFaceList
            );
        }
    }

    #[test]
    fn resource_kind_rejects_unknown_names() {
        match "person_group".parse::<ResourceKind>() {
            Err(Error::UnknownResource(name)) => assert_eq!(name, "person_group"),
            other => panic!("expected UnknownResource, got {other:?}"),
        }
    }
}
