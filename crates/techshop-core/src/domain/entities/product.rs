//! Product entity.

use super::super::value_objects::ProductStatus;
use crate::{CategoryId, Entity, ProductId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// A sellable catalog item as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    /// Database identity.
    pub id: ProductId,

    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Owning category, if the product has been categorised.
    pub category_id: Option<CategoryId>,

    /// Manufacturer or brand name.
    #[validate(length(max = 100))]
    pub brand: Option<String>,

    /// Long-form description.
    pub description: Option<String>,

    /// Cost price paid to the supplier.
    pub import_price: Decimal,

    /// Price charged to customers.
    pub selling_price: Decimal,

    /// Units in stock.
    pub quantity: i32,

    /// Image URL or base64 payload.
    pub image: Option<String>,

    /// Free-form specification sheet, e.g. `{"ram": "8GB"}`.
    pub attributes: Option<Map<String, Value>>,

    pub status: ProductStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates an active, out-of-stock product with zero cost price.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, selling_price: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            category_id: None,
            brand: None,
            description: None,
            import_price: Decimal::ZERO,
            selling_price,
            quantity: 0,
            image: None,
            attributes: None,
            status: ProductStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Starts a builder for a product with the given identity and name.
    #[must_use]
    pub fn builder(id: ProductId, name: impl Into<String>) -> ProductBuilder {
        ProductBuilder::new(id, name)
    }

    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Whether shoppers can see the product.
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        self.status.is_listed()
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self.status, ProductStatus::Deleted)
    }
}

impl Entity<ProductId> for Product {
    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Builder for creating Product instances.
#[derive(Debug)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            product: Product::new(id, name, Decimal::ZERO),
        }
    }

    #[must_use]
    pub fn category_id(mut self, category_id: CategoryId) -> Self {
        self.product.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.product.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.product.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn import_price(mut self, price: Decimal) -> Self {
        self.product.import_price = price;
        self
    }

    #[must_use]
    pub fn selling_price(mut self, price: Decimal) -> Self {
        self.product.selling_price = price;
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: i32) -> Self {
        self.product.quantity = quantity;
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.product.image = Some(image.into());
        self
    }

    /// Adds one entry to the specification sheet.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.product
            .attributes
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ProductStatus) -> Self {
        self.product.status = status;
        self
    }

    #[must_use]
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.product.created_at = at;
        self.product.updated_at = at;
        self
    }

    #[must_use]
    pub fn build(self) -> Product {
        self.product
    }
}
