//! Product Service - Business logic layer

use bytes::Bytes;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::image::{ProductImageStore, image_key};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates the
/// repository and the image store. Validation always runs before any mutation
/// is attempted.
pub struct ProductService<R: ProductRepository, I: ProductImageStore> {
    repository: Arc<R>,
    images: Arc<I>,
}

impl<R: ProductRepository, I: ProductImageStore> ProductService<R, I> {
    /// Create a new ProductService with the given repository and image store
    pub fn new(repository: R, images: I) -> Self {
        Self {
            repository: Arc::new(repository),
            images: Arc::new(images),
        }
    }

    /// Create a new product
    ///
    /// A fresh identifier is assigned on insert; the caller never supplies one.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products
    ///
    /// An empty store yields an empty vec, not an error.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Update an existing product
    ///
    /// Only the fields present in the request are overwritten; absent fields
    /// keep their current values. A missing product aborts before any side
    /// effect.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        // Load first so NOT_FOUND aborts before any mutation
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.update(id, input).await
    }

    /// Delete a product
    ///
    /// Deleting an absent id reports NOT_FOUND rather than succeeding
    /// silently. When the product carried a stored image, the object is
    /// removed best-effort after the row: a failed object delete leaves an
    /// orphan in the store and a warning in the log, never a failed request.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        let product = self.get_product(id).await?;

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        if product.image_url.is_some() {
            if let Err(e) = self.images.delete(&image_key(id)).await {
                tracing::warn!(product_id = %id, error = %e, "Failed to remove stored image for deleted product");
            }
        }

        Ok(())
    }

    /// Store image bytes for a product and persist the resulting URL
    ///
    /// The upload happens before the entity is touched, so a failed upload
    /// leaves the product unchanged. A failed URL persist after a successful
    /// upload leaves an unreferenced object behind; the next upload for the
    /// same product overwrites it (keys are id-derived).
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn upload_product_image(
        &self,
        id: Uuid,
        data: Bytes,
        content_type: Option<String>,
    ) -> ProductResult<String> {
        self.get_product(id).await?;

        let url = self.images.put(&image_key(id), data, content_type).await?;

        self.repository
            .update(
                id,
                UpdateProduct {
                    image_url: Some(url.clone()),
                    ..Default::default()
                },
            )
            .await?;

        Ok(url)
    }

    /// Remove a product's stored image and clear its reference
    ///
    /// A product without an image is a no-op success.
    #[instrument(skip(self))]
    pub async fn delete_product_image(&self, id: Uuid) -> ProductResult<()> {
        let product = self.get_product(id).await?;

        if product.image_url.is_none() {
            return Ok(());
        }

        self.images.delete(&image_key(id)).await?;
        self.repository.clear_image(id).await?;

        Ok(())
    }
}

impl<R: ProductRepository, I: ProductImageStore> Clone for ProductService<R, I> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            images: Arc::clone(&self.images),
        }
    }
}
