//! Object storage library providing the S3 client factory and utilities
//!
//! The client is built once at startup from [`s3::S3Config`] and shared by
//! cloning; there is no reconfiguration path short of a process restart.
//!
//! # Features
//!
//! - `s3` (default) - S3-compatible object store support via the AWS SDK
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use storage::s3::{self, S3Config};
//! use core_config::FromEnv;
//!
//! let config = S3Config::from_env()?;
//! let client = s3::connect(&config)?;
//! ```

mod error;

#[cfg(feature = "s3")]
pub mod s3;

pub use error::{StorageError, StorageResult};
