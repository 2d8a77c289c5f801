use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity - a catalog product with an optional stored image
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned at creation and immutable afterwards
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// URL of the stored product image, if any
    pub image_url: Option<String>,
    /// Unit price
    pub price: f64,
    /// Current stock level
    pub stock_level: i32,
    /// Whether the product is visible in the public catalog
    pub is_published: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
///
/// The identifier is never caller-supplied; it is assigned on insert.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,
    #[validate(length(
        min = 5,
        max = 500,
        message = "Description must be between 5 and 500 characters"
    ))]
    pub description: String,
    /// Pre-existing image reference; image bytes go through the image endpoint
    pub image_url: Option<String>,
    #[validate(range(min = 0.1, message = "Price must be at least 0.1"))]
    pub price: f64,
    #[validate(range(min = 1, message = "Min stock level is 1"))]
    pub stock_level: i32,
    /// Defaults to false when absent
    pub is_published: Option<bool>,
}

/// DTO for partially updating an existing product
///
/// `None` fields are left untouched; present fields are re-validated with the
/// same bounds as creation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: Option<String>,
    #[validate(length(
        min = 5,
        max = 500,
        message = "Description must be between 5 and 500 characters"
    ))]
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 0.1, message = "Price must be at least 0.1"))]
    pub price: Option<f64>,
    #[validate(range(min = 1, message = "Min stock level is 1"))]
    pub stock_level: Option<i32>,
    pub is_published: Option<bool>,
}

/// Response body for image upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponse {
    /// URL under which the uploaded image is retrievable
    pub image_url: String,
}

impl Product {
    /// Create a new product from a CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            price: input.price,
            stock_level: input.stock_level,
            is_published: input.is_published.unwrap_or(false),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, overwriting only the fields that are present
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock_level) = update.stock_level {
            self.stock_level = stock_level;
        }
        if let Some(is_published) = update.is_published {
            self.is_published = is_published;
        }
        self.updated_at = Utc::now();
    }

    /// Drop the stored image reference
    pub fn clear_image(&mut self) {
        self.image_url = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> CreateProduct {
        CreateProduct {
            name: "Chair".to_string(),
            description: "A wooden chair".to_string(),
            image_url: None,
            price: 49.99,
            stock_level: 10,
            is_published: None,
        }
    }

    #[test]
    fn test_new_product_defaults_unpublished() {
        let product = Product::new(chair());
        assert_eq!(product.name, "Chair");
        assert_eq!(product.price, 49.99);
        assert_eq!(product.stock_level, 10);
        assert!(!product.is_published);
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_apply_update_with_all_fields_none_changes_nothing() {
        let mut product = Product::new(chair());
        let before = product.clone();

        product.apply_update(UpdateProduct::default());

        assert_eq!(product.name, before.name);
        assert_eq!(product.description, before.description);
        assert_eq!(product.image_url, before.image_url);
        assert_eq!(product.price, before.price);
        assert_eq!(product.stock_level, before.stock_level);
        assert_eq!(product.is_published, before.is_published);
    }

    #[test]
    fn test_apply_update_changes_exactly_the_present_fields() {
        let mut product = Product::new(chair());

        product.apply_update(UpdateProduct {
            price: Some(59.99),
            ..Default::default()
        });

        assert_eq!(product.price, 59.99);
        assert_eq!(product.name, "Chair");
        assert_eq!(product.description, "A wooden chair");
        assert_eq!(product.stock_level, 10);
    }

    #[test]
    fn test_create_validation_bounds() {
        use validator::Validate;

        let mut input = chair();
        input.name = "x".to_string();
        assert!(input.validate().is_err());

        let mut input = chair();
        input.name = "x".repeat(51);
        assert!(input.validate().is_err());

        let mut input = chair();
        input.description = "tiny".to_string();
        assert!(input.validate().is_err());

        let mut input = chair();
        input.price = 0.05;
        assert!(input.validate().is_err());

        let mut input = chair();
        input.stock_level = 0;
        assert!(input.validate().is_err());

        assert!(chair().validate().is_ok());
    }

    #[test]
    fn test_update_validation_ignores_absent_fields() {
        use validator::Validate;

        // All-None update is valid regardless of bounds
        assert!(UpdateProduct::default().validate().is_ok());

        let update = UpdateProduct {
            price: Some(0.05),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
