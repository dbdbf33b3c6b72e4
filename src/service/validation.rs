//! Required-field checks applied to request bodies after JSON decoding.
//!
//! A field is "required" when it holds a non-zero value: empty text and numeric zero
//! are treated as missing, since an omitted JSON field decodes to exactly those.

use crate::error::AppError;
use crate::models::{CategoryInput, ProductInput};

pub struct RequestValidator;

impl RequestValidator {
    pub fn category(body: &CategoryInput) -> Result<(), AppError> {
        require_text("name", &body.name)
    }

    /// Every product field is required on create. Update skips this check.
    pub fn new_product(body: &ProductInput) -> Result<(), AppError> {
        require_text("name", &body.name)?;
        require_text("description", &body.description)?;
        if body.price == 0.0 {
            return Err(missing("price"));
        }
        require_text("image_url", &body.image_url)?;
        if body.category_id == 0 {
            return Err(missing("category_id"));
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(missing(field));
    }
    Ok(())
}

fn missing(field: &str) -> AppError {
    AppError::BadRequest(format!("{} is required", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProductInput {
        ProductInput {
            name: "Widget".into(),
            description: "d".into(),
            price: 9.99,
            image_url: "u".into(),
            category_id: 1,
        }
    }

    #[test]
    fn complete_product_passes() {
        assert!(RequestValidator::new_product(&widget()).is_ok());
    }

    #[test]
    fn first_missing_product_field_is_reported() {
        let cases: Vec<(&str, ProductInput)> = vec![
            ("name is required", ProductInput { name: String::new(), ..widget() }),
            ("description is required", ProductInput { description: String::new(), ..widget() }),
            ("price is required", ProductInput { price: 0.0, ..widget() }),
            ("image_url is required", ProductInput { image_url: String::new(), ..widget() }),
            ("category_id is required", ProductInput { category_id: 0, ..widget() }),
        ];
        for (expected, input) in cases {
            let err = RequestValidator::new_product(&input).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn negative_price_counts_as_present() {
        assert!(RequestValidator::new_product(&ProductInput { price: -1.0, ..widget() }).is_ok());
    }

    #[test]
    fn category_needs_a_name() {
        assert!(RequestValidator::category(&CategoryInput { name: "Tools".into() }).is_ok());
        let err = RequestValidator::category(&CategoryInput::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
