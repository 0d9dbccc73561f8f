//! Fixtures

use thiserror::Error;

use crate::products::Product;

const CATALOG_YAML: &str = include_str!("fixtures/catalog.yaml");

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("failed to parse catalog fixture: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Product not found
    #[error("product not found: {0}")]
    ProductNotFound(String),
}

/// Load the embedded sample catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded YAML cannot be parsed.
pub fn catalog() -> Result<Vec<Product>, FixtureError> {
    Ok(serde_norway::from_str(CATALOG_YAML)?)
}

/// Look up a sample product by identifier.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the catalog cannot be parsed or the
/// identifier is unknown.
pub fn product(id: &str) -> Result<Product, FixtureError> {
    catalog()?
        .into_iter()
        .find(|product| product.id == id)
        .ok_or_else(|| FixtureError::ProductNotFound(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn catalog_parses_with_positive_prices() -> TestResult {
        let products = catalog()?;

        assert!(!products.is_empty(), "catalog should not be empty");
        for product in &products {
            assert!(
                product.price > Decimal::ZERO,
                "{} should have a positive price",
                product.id
            );
        }

        Ok(())
    }

    #[test]
    fn product_lookup_by_identifier() -> TestResult {
        let mango = product("mango")?;

        assert_eq!(mango.name, "Mango");
        assert_eq!(mango.price, Decimal::new(25, 1));

        Ok(())
    }

    #[test]
    fn unknown_product_errors() {
        let result = product("durian");

        assert!(
            matches!(result, Err(FixtureError::ProductNotFound(id)) if id == "durian"),
            "expected ProductNotFound"
        );
    }
}
