//! Products

use rust_decimal::Decimal;
use serde::Deserialize;

/// A catalog product, as handed to the cart when the shopper adds it.
///
/// Products are untrusted catalog content: the `name` and `image` fields are
/// escaped at render time, never before.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Image reference shown in the drawer row
    pub image: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_from_numeric_price() -> TestResult {
        let product: Product = serde_json::from_str(
            r#"{ "id": "mango", "name": "Mango", "price": 2.5, "image": "mango.jpg" }"#,
        )?;

        assert_eq!(product.id, "mango");
        assert_eq!(product.price, Decimal::new(25, 1));

        Ok(())
    }
}
