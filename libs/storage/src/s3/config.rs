use crate::StorageError;

#[cfg(feature = "config")]
use core_config::{env_optional, env_or_default, ConfigError, Environment, FromEnv};

/// Fallback region when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Development-store credentials, matching the stock MinIO setup
const DEFAULT_LOCAL_ACCESS_KEY_ID: &str = "minioadmin";
const DEFAULT_LOCAL_SECRET_ACCESS_KEY: &str = "minioadmin123";

/// Where the client obtains its credentials from.
///
/// Selected once while loading configuration, never re-evaluated at request
/// time: the "local" deployment profile gets static development keys, every
/// other profile delegates to named-profile resolution on the host
/// (`~/.aws/config`, SSO, and whatever else the SDK chain supports).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CredentialSource {
    Static {
        access_key_id: String,
        secret_access_key: String,
    },
    Profile {
        /// Named profile; `None` uses the SDK's default profile
        name: Option<String>,
    },
}

/// S3 client configuration
///
/// One instance describes one long-lived client. There is no refresh or
/// reconfiguration endpoint; changing any of these values requires a
/// process restart.
#[derive(Clone, Debug)]
pub struct S3Config {
    /// Region the client is bound to
    pub region: String,

    /// Optional endpoint override, e.g. `http://localhost:9000` for a local
    /// MinIO store. Blank values are treated as unset.
    pub endpoint: Option<String>,

    /// Put the bucket name in the URL path instead of the subdomain.
    /// Required by most non-AWS S3-compatible endpoints.
    pub path_style: bool,

    /// Bucket holding this service's objects
    pub bucket: String,

    /// Credential source, fixed at configuration time
    pub credentials: CredentialSource,
}

impl S3Config {
    /// Configuration for a local development store with static credentials
    pub fn local(endpoint: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: Some(endpoint.into()),
            path_style: true,
            bucket: bucket.into(),
            credentials: CredentialSource::Static {
                access_key_id: DEFAULT_LOCAL_ACCESS_KEY_ID.to_string(),
                secret_access_key: DEFAULT_LOCAL_SECRET_ACCESS_KEY.to_string(),
            },
        }
    }

    /// Validate the configuration.
    ///
    /// A malformed endpoint or bucket name fails here, at startup, rather
    /// than on the first request. An unresolvable region or missing profile
    /// credentials cannot be detected without issuing a request and surface
    /// later as operation errors.
    pub fn validate(&self) -> Result<(), StorageError> {
        if self.region.trim().is_empty() {
            return Err(StorageError::Config(
                "region cannot be blank".to_string(),
            ));
        }

        // S3 bucket names are 3-63 characters following DNS naming rules;
        // only the length is checked here, the store enforces the rest.
        if self.bucket.len() < 3 || self.bucket.len() > 63 {
            return Err(StorageError::Config(format!(
                "bucket name '{}' must be 3-63 characters",
                self.bucket
            )));
        }

        if let Some(endpoint) = self.endpoint.as_deref() {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(StorageError::Config(format!(
                    "endpoint override '{}' must start with http:// or https://",
                    endpoint
                )));
            }
        }

        Ok(())
    }

    /// Derive the retrievable URL for an object in this store.
    ///
    /// With an endpoint override or path-style addressing the bucket lands in
    /// the path; otherwise the standard virtual-hosted AWS form is used.
    pub fn object_url(&self, key: &str) -> String {
        match self.endpoint.as_deref() {
            Some(endpoint) => format!(
                "{}/{}/{}",
                endpoint.trim_end_matches('/'),
                self.bucket,
                key
            ),
            None if self.path_style => {
                format!("https://s3.{}.amazonaws.com/{}/{}", self.region, self.bucket, key)
            }
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            ),
        }
    }
}

/// Load S3Config from environment variables
///
/// Environment variables (all optional):
/// - `AWS_REGION` (default: us-east-1)
/// - `AWS_S3_ENDPOINT_OVERRIDE` (default: unset; blank treated as unset)
/// - `AWS_S3_PATH_STYLE_ENABLED` (default: false)
/// - `S3_BUCKET` (default: product-images)
/// - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` (local profile only;
///   default to the stock MinIO development credentials)
/// - `AWS_PROFILE` (non-local profiles only; default SDK profile when unset)
///
/// The credential source is selected by the active deployment profile
/// (`APP_ENV`): exactly "local" uses static keys, anything else delegates to
/// profile-based resolution.
#[cfg(feature = "config")]
impl FromEnv for S3Config {
    fn from_env() -> Result<Self, ConfigError> {
        let credentials = if Environment::from_env().is_local() {
            CredentialSource::Static {
                access_key_id: env_or_default("AWS_ACCESS_KEY_ID", DEFAULT_LOCAL_ACCESS_KEY_ID),
                secret_access_key: env_or_default(
                    "AWS_SECRET_ACCESS_KEY",
                    DEFAULT_LOCAL_SECRET_ACCESS_KEY,
                ),
            }
        } else {
            CredentialSource::Profile {
                name: env_optional("AWS_PROFILE"),
            }
        };

        let path_style = env_or_default("AWS_S3_PATH_STYLE_ENABLED", "false")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "AWS_S3_PATH_STYLE_ENABLED".to_string(),
                details: format!("{}", e),
            })?;

        let config = Self {
            region: env_or_default("AWS_REGION", DEFAULT_REGION),
            endpoint: env_optional("AWS_S3_ENDPOINT_OVERRIDE"),
            path_style,
            bucket: env_or_default("S3_BUCKET", "product-images"),
            credentials,
        };

        // Fail fast on malformed values instead of at first use
        config.validate().map_err(|e| ConfigError::InvalidValue {
            key: "AWS_S3".to_string(),
            details: e.to_string(),
        })?;

        Ok(config)
    }
}
