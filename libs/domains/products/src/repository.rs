use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product, assigning a fresh identifier
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List all products, newest first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Merge a partial update into an existing product and persist it
    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    /// Drop a product's stored image reference
    ///
    /// A separate operation because `UpdateProduct` treats `None` as
    /// "leave unchanged" and therefore cannot null the column.
    async fn clear_image(&self, id: Uuid) -> ProductResult<Product>;

    /// Delete a product by ID, reporting whether a row was removed
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = Product::new(input);
        products.insert(product.id, product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products.values().cloned().collect();

        // Newest first
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);
        let updated = product.clone();

        tracing::info!(product_id = %id, "Updated product");
        Ok(updated)
    }

    async fn clear_image(&self, id: Uuid) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.clear_image();

        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wooden_chair() -> CreateProduct {
        CreateProduct {
            name: "Chair".to_string(),
            description: "A wooden chair".to_string(),
            image_url: None,
            price: 49.99,
            stock_level: 10,
            is_published: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_product() {
        let repo = InMemoryProductRepository::new();

        let product = repo.create(wooden_chair()).await.unwrap();
        assert_eq!(product.name, "Chair");
        assert!(!product.is_published);

        let fetched = repo.get_by_id(product.id).await.unwrap();
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().id, product.id);
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_identifiers() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(wooden_chair()).await.unwrap();
        let second = repo.create(wooden_chair()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_empty_store_returns_empty_vec() {
        let repo = InMemoryProductRepository::new();
        let products = repo.list().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_update_partial_changes_only_present_fields() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(wooden_chair()).await.unwrap();

        let updated = repo
            .update(
                product.id,
                UpdateProduct {
                    price: Some(59.99),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 59.99);
        assert_eq!(updated.name, "Chair");
        assert_eq!(updated.description, "A wooden chair");
        assert_eq!(updated.stock_level, 10);
    }

    #[tokio::test]
    async fn test_update_all_none_leaves_product_unchanged() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(wooden_chair()).await.unwrap();

        let updated = repo
            .update(product.id, UpdateProduct::default())
            .await
            .unwrap();

        assert_eq!(updated.name, product.name);
        assert_eq!(updated.description, product.description);
        assert_eq!(updated.price, product.price);
        assert_eq!(updated.stock_level, product.stock_level);
        assert_eq!(updated.is_published, product.is_published);
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo.update(Uuid::now_v7(), UpdateProduct::default()).await;
        assert!(matches!(result, Err(ProductError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_was_removed() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(wooden_chair()).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert!(repo.get_by_id(product.id).await.unwrap().is_none());
    }
}
