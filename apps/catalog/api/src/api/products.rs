//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, S3ProductImageStore, handlers};

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let images = S3ProductImageStore::new(state.s3.clone(), state.config.storage.clone());
    let service = ProductService::new(repository, images);
    handlers::router(service)
}
