//! S3-compatible object store connector
//!
//! Builds one long-lived `aws_sdk_s3::Client` from configuration. The
//! credential source is fixed at config-load time: static keys for the
//! "local" profile (MinIO-style development stores), delegated profile
//! resolution everywhere else.

mod config;
mod connector;

pub use config::{CredentialSource, S3Config};
pub use connector::connect;

// Re-export the SDK client type for convenience
pub use aws_sdk_s3::Client;
