//! Products Domain
//!
//! This module provides a complete domain implementation for managing catalog
//! products and their stored images.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──┬───────┬──┘
//!    │       │
//! ┌──▼────┐ ┌▼───────────┐
//! │ Repo  │ │ ImageStore │  ← Data access / object storage (traits + impls)
//! └──┬────┘ └────────────┘
//!    │
//! ┌──▼──────────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     image::InMemoryImageStore,
//!     repository::InMemoryProductRepository,
//!     service::ProductService,
//! };
//!
//! // Create repository, image store and service
//! let repository = InMemoryProductRepository::new();
//! let images = InMemoryImageStore::new();
//! let service = ProductService::new(repository, images);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod image;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use image::{InMemoryImageStore, ProductImageStore, S3ProductImageStore};
pub use models::{CreateProduct, Product, ProductImageResponse, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
