use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client;
use tracing::info;

use super::{CredentialSource, S3Config};
use crate::StorageError;

/// Build the long-lived S3 client from configuration.
///
/// Construction order mirrors the settings: region, path-style flag,
/// credential source, endpoint override. The returned client is safe for
/// concurrent use and cheap to clone; callers share one instance for the
/// lifetime of the process.
pub fn connect(config: &S3Config) -> Result<Client, StorageError> {
    config.validate()?;

    let mut builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .force_path_style(config.path_style);

    builder = match &config.credentials {
        CredentialSource::Static {
            access_key_id,
            secret_access_key,
        } => builder.credentials_provider(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            "static",
        )),
        CredentialSource::Profile { name } => {
            let mut provider = aws_config::profile::ProfileFileCredentialsProvider::builder();
            if let Some(name) = name {
                provider = provider.profile_name(name);
            }
            builder.credentials_provider(provider.build())
        }
    };

    if let Some(endpoint) = config.endpoint.as_deref() {
        builder = builder.endpoint_url(endpoint);
    }

    info!(
        region = %config.region,
        bucket = %config.bucket,
        path_style = config.path_style,
        endpoint = config.endpoint.as_deref().unwrap_or("default"),
        "S3 client configured"
    );

    Ok(Client::from_conf(builder.build()))
}
