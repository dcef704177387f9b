use serde::{Deserialize, Serialize};

/// Catalog key for a product.
pub type ProductId = u64;

/// A line item in the cart: catalog data plus the quantity the customer wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    /// Quantity in the cart, never below 1.
    pub amount: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
            amount,
        }
    }

    /// Builds a line item from catalog metadata.
    ///
    /// The id is taken from the caller rather than the catalog response so the
    /// entry always lands under the key that was asked for.
    pub fn from_catalog(id: ProductId, metadata: CatalogProduct, amount: i64) -> Self {
        Self {
            id,
            name: metadata.name,
            price: metadata.price,
            image_url: metadata.image_url,
            amount,
        }
    }

    /// Returns a copy of this entry with a different amount.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

/// Product metadata as the catalog returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

impl CatalogProduct {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
