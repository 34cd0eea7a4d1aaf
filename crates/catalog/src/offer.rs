use serde::{Deserialize, Serialize};

use storefront_core::{Checker, Validate, ValidationErrors};

use crate::product::Product;

/// A named bundle of products at a single price.
///
/// The offer price itself is unconstrained; each bundled product is validated
/// with its own rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub products: Vec<Product>,
}

impl Validate for Offer {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new().nested("products", &self.products).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offer_json() -> serde_json::Value {
        json!({
            "name": "Summer bundle",
            "price": 0.0,
            "products": [
                {"name": "Foo", "price": 10.5, "in_stock": true, "tags": ["b", "a"]},
                {
                    "name": "Bar",
                    "price": 3.0,
                    "in_stock": false,
                    "images": [{"url": "https://example.com/bar.png", "name": "bar"}]
                }
            ]
        })
    }

    #[test]
    fn valid_offer_round_trips_unchanged() {
        let offer: Offer = serde_json::from_value(offer_json()).unwrap();
        assert!(offer.validate().is_ok());

        let again: Offer = serde_json::from_value(serde_json::to_value(&offer).unwrap()).unwrap();
        assert_eq!(offer, again);
    }

    #[test]
    fn nested_product_errors_carry_full_path() {
        let mut body = offer_json();
        body["products"][1]["price"] = json!(-2);
        body["products"][1]["images"][0]["url"] = json!("bar.png");

        let offer: Offer = serde_json::from_value(body).unwrap();
        let errors = offer.validate().unwrap_err();
        assert!(errors.has("products.1.price"));
        assert!(errors.has("products.1.images.0.url"));
    }

    #[test]
    fn empty_product_list_is_valid() {
        let offer = Offer {
            name: "Nothing".to_string(),
            description: None,
            price: 1.0,
            products: Vec::new(),
        };
        assert!(offer.validate().is_ok());
    }
}
