use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{Checker, Validate, ValidationErrors, validators};

use crate::image::Image;

/// Longest accepted product description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 300;

/// Most images a product may carry.
pub const IMAGES_MAX: usize = 10;

/// A catalog product as submitted by a client.
///
/// Every field serializes, absent optionals as `null`, so a serialized
/// product is the full dump of its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Must be strictly greater than zero.
    pub price: f64,
    pub in_stock: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tax: Option<f64>,
    /// Duplicate tags collapse; serialized as a sorted JSON array.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
}

impl Product {
    /// `price + tax` when a non-zero tax is set and the sum stays finite.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax
            .filter(|tax| *tax != 0.0)
            .map(|tax| self.price + tax)
            .filter(|total| total.is_finite())
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new()
            .check("price", validators::greater_than(self.price, 0.0))
            .check(
                "description",
                validators::max_chars_opt(self.description.as_deref(), DESCRIPTION_MAX_CHARS),
            );

        if let Some(images) = &self.images {
            checker = checker
                .check("images", validators::max_items(images.len(), IMAGES_MAX))
                .nested("images", images);
        }

        checker.finish()
    }
}
