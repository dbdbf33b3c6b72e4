use serde::{Deserialize, Serialize};

/// A stored product with every column, as returned by get-by-id and create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category_id: i32,
}

/// Product row in a by-category listing. The category is implied by the query, so it is not echoed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Body of product create and update requests.
///
/// Omitted fields take their zero value. Update writes them as-is; create rejects them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category_id: i32,
}

impl Product {
    pub fn from_input(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
            category_id: input.category_id,
        }
    }
}

impl From<Product> for ProductSummary {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            image_url: p.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_body_fills_zero_values() {
        let input: ProductInput = serde_json::from_str(r#"{"name":"Lamp"}"#).unwrap();
        assert_eq!(
            input,
            ProductInput {
                name: "Lamp".into(),
                ..ProductInput::default()
            }
        );
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        assert!(serde_json::from_str::<ProductInput>(r#"{"price":"cheap"}"#).is_err());
        assert!(serde_json::from_str::<ProductInput>(r#"{"category_id":1.5}"#).is_err());
    }

    #[test]
    fn summary_has_no_category_id() {
        let product = Product {
            id: 3,
            name: "Widget".into(),
            description: "d".into(),
            price: 9.99,
            image_url: "u".into(),
            category_id: 1,
        };
        let value = serde_json::to_value(ProductSummary::from(product)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("category_id"));
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["price"], serde_json::json!(9.99));
    }
}
