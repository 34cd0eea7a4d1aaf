use std::collections::BTreeSet;

use serde_json::{Map, Value, json};

use storefront_catalog::Product;

// -------------------------
// JSON mapping helpers
// -------------------------

/// Every product field as a JSON object (absent optionals as `null`).
pub fn product_fields(product: &Product) -> Map<String, Value> {
    match serde_json::to_value(product) {
        Ok(Value::Object(fields)) => fields,
        // A struct with named fields always serializes to an object.
        _ => Map::new(),
    }
}

/// Product fields plus `price_with_tax` when a tax applies.
pub fn product_with_tax(product: &Product) -> Value {
    let mut fields = product_fields(product);
    if let Some(total) = product.price_with_tax() {
        fields.insert("price_with_tax".to_string(), json!(total));
    }
    Value::Object(fields)
}

/// `{"product_id": id, ...fields}`; the id keeps its JSON type (string or number).
pub fn with_product_id(product_id: impl Into<Value>, fields: Map<String, Value>) -> Value {
    let mut out = Map::with_capacity(fields.len() + 1);
    out.insert("product_id".to_string(), product_id.into());
    out.extend(fields);
    Value::Object(out)
}

/// Keep only the fields the client explicitly sent.
pub fn only_set_fields(mut fields: Map<String, Value>, set_fields: &BTreeSet<String>) -> Map<String, Value> {
    fields.retain(|key, _| set_fields.contains(key));
    fields
}

/// Fixed listing returned by `GET /products/`.
pub fn placeholder_products() -> Value {
    json!([{ "product_id": "foo" }, { "product_id": "bar" }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foo() -> Product {
        Product {
            name: "Foo".to_string(),
            price: 10.0,
            in_stock: true,
            description: None,
            tax: None,
            tags: BTreeSet::new(),
            images: None,
        }
    }

    #[test]
    fn full_dump_has_every_field() {
        let fields = product_fields(&foo());
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        for key in ["name", "price", "in_stock", "description", "tax", "tags", "images"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }

    #[test]
    fn price_with_tax_only_with_tax() {
        assert!(product_with_tax(&foo()).get("price_with_tax").is_none());

        let taxed = Product {
            price: 50.2,
            tax: Some(1.5),
            ..foo()
        };
        let value = product_with_tax(&taxed);
        assert_eq!(value["price_with_tax"].as_f64(), Some(51.7));
    }

    #[test]
    fn overflowing_total_is_left_out() {
        let huge = Product {
            price: 1e308,
            tax: Some(1e308),
            ..foo()
        };
        let value = product_with_tax(&huge);
        assert!(value.get("price_with_tax").is_none());
        assert_eq!(value["tax"].as_f64(), Some(1e308));
    }

    #[test]
    fn numeric_product_id_stays_a_number() {
        let value = with_product_id(7_i64, product_fields(&foo()));
        assert_eq!(value["product_id"], 7);
    }

    #[test]
    fn set_fields_filter_and_id_merge() {
        let set: BTreeSet<String> = ["name", "price", "in_stock"]
            .into_iter()
            .map(String::from)
            .collect();
        let value = with_product_id("42", only_set_fields(product_fields(&foo()), &set));

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(value["product_id"], "42");
        assert!(object.get("tags").is_none());
        assert!(object.get("description").is_none());
    }
}
