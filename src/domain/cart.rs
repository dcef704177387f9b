use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Product, ProductId};
use crate::error::InvalidCart;

/// Ordered, id-unique collection of cart entries.
///
/// A `Cart` is never edited in place. Every change builds a new value, so a
/// snapshot handed out earlier keeps describing the state it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Sum of all entry amounts, capped at `i64::MAX`.
    pub fn total_amount(&self) -> i64 {
        self.products.iter().fold(0i64, |total, p| total.saturating_add(p.amount))
    }

    /// New cart with the entry for `id` set to `amount`.
    ///
    /// Returns `None` when no entry has that id.
    pub fn with_amount(&self, id: ProductId, amount: i64) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let products = self
            .products
            .iter()
            .map(|p| if p.id == id { p.with_amount(amount) } else { p.clone() })
            .collect();
        Some(Self { products })
    }

    /// New cart holding `product`.
    ///
    /// An entry with the same id is replaced where it stands; otherwise the
    /// product goes to the end.
    pub fn with_product(&self, product: Product) -> Self {
        if self.contains(product.id) {
            let products = self
                .products
                .iter()
                .map(|p| if p.id == product.id { product.clone() } else { p.clone() })
                .collect();
            return Self { products };
        }
        let mut products = self.products.clone();
        products.push(product);
        Self { products }
    }

    /// New cart without the entry for `id`, or `None` if it was not there.
    pub fn without(&self, id: ProductId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let products = self.products.iter().filter(|p| p.id != id).cloned().collect();
        Some(Self { products })
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = InvalidCart;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(InvalidCart::DuplicateProduct(product.id));
            }
            if product.amount < 1 {
                return Err(InvalidCart::NonPositiveAmount {
                    id: product.id,
                    amount: product.amount,
                });
            }
        }
        Ok(Self { products })
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
