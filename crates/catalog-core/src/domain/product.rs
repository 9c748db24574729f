use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a product, assigned by the store on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregate: a catalog product
///
/// The id is immutable for the lifetime of the record; the four business
/// fields are replaced as a unit on update, never merged field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// Units in stock
    pub quantity: i64,
}

/// Unvalidated product fields, as submitted by a client
///
/// Every field is optional so that an absent field is distinguishable from
/// any legal value; `0` is a legal price and quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Validated product fields, ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductFields {
    /// Build a draft from an existing record, for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            description: Some(product.description.clone()),
            price: Some(product.price),
            quantity: Some(product.quantity),
        }
    }

    /// True when no field has been filled in yet
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }

    /// Validate that all four fields are present and legal
    ///
    /// Checked before any store access, so a validation failure always
    /// precedes a not-found or store outcome.
    pub fn validate(&self) -> Result<ProductInput, CoreError> {
        let name = required_text(&self.name, "name")?;
        let description = required_text(&self.description, "description")?;

        let price = self
            .price
            .ok_or_else(|| CoreError::Validation("price is required".to_string()))?;
        if price < 0.0 {
            return Err(CoreError::Validation(
                "price must not be negative".to_string(),
            ));
        }

        let quantity = self
            .quantity
            .ok_or_else(|| CoreError::Validation("quantity is required".to_string()))?;
        if quantity < 0 {
            return Err(CoreError::Validation(
                "quantity must not be negative".to_string(),
            ));
        }

        Ok(ProductInput {
            name,
            description,
            price,
            quantity,
        })
    }
}

fn required_text(value: &Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(CoreError::Validation(format!("{} is required", field))),
    }
}

impl Product {
    /// Reassemble a record from an id and validated fields
    pub fn from_input(id: ProductId, input: &ProductInput) -> Self {
        Self {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            quantity: input.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> ProductFields {
        ProductFields {
            name: Some("Pen".to_string()),
            description: Some("Blue pen".to_string()),
            price: Some(1.5),
            quantity: Some(100),
        }
    }

    #[test]
    fn valid_fields_pass() {
        let input = full_fields().validate().unwrap();
        assert_eq!(input.name, "Pen");
        assert_eq!(input.description, "Blue pen");
        assert_eq!(input.price, 1.5);
        assert_eq!(input.quantity, 100);
    }

    #[test]
    fn zero_price_and_quantity_pass() {
        let mut fields = full_fields();
        fields.price = Some(0.0);
        fields.quantity = Some(0);
        let input = fields.validate().unwrap();
        assert_eq!(input.price, 0.0);
        assert_eq!(input.quantity, 0);
    }

    fn assert_required(fields: ProductFields, field: &str) {
        assert_eq!(
            fields.validate().unwrap_err(),
            CoreError::Validation(format!("{} is required", field))
        );
    }

    #[test]
    fn each_missing_field_is_rejected_by_name() {
        let mut fields = full_fields();
        fields.name = None;
        assert_required(fields, "name");

        let mut fields = full_fields();
        fields.description = None;
        assert_required(fields, "description");

        let mut fields = full_fields();
        fields.price = None;
        assert_required(fields, "price");

        let mut fields = full_fields();
        fields.quantity = None;
        assert_required(fields, "quantity");
    }

    #[test]
    fn empty_and_blank_strings_are_rejected() {
        let mut fields = full_fields();
        fields.name = Some(String::new());
        assert!(matches!(fields.validate(), Err(CoreError::Validation(_))));

        let mut fields = full_fields();
        fields.description = Some("   ".to_string());
        assert!(matches!(fields.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let mut fields = full_fields();
        fields.price = Some(-0.01);
        assert_eq!(
            fields.validate().unwrap_err(),
            CoreError::Validation("price must not be negative".to_string())
        );

        let mut fields = full_fields();
        fields.quantity = Some(-1);
        assert_eq!(
            fields.validate().unwrap_err(),
            CoreError::Validation("quantity must not be negative".to_string())
        );
    }

    #[test]
    fn product_json_shape_is_flat() {
        let product = Product {
            id: ProductId(7),
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            quantity: 100,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Pen",
                "description": "Blue pen",
                "price": 1.5,
                "quantity": 100
            })
        );
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let fields: ProductFields = serde_json::from_str(r#"{"name":"Pen"}"#).unwrap();
        assert_eq!(fields.name.as_deref(), Some("Pen"));
        assert!(fields.description.is_none());
        assert!(fields.price.is_none());
        assert!(fields.quantity.is_none());
    }
}
