use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Longest description accepted by an update, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of a create or update request. Updates replace all three fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
}

impl ProductInput {
    pub fn check_description_length(&self) -> Result<()> {
        if description_chars(&self.description) > MAX_DESCRIPTION_CHARS {
            return Err(AppError::Validation(format!(
                "description must not exceed {} characters",
                MAX_DESCRIPTION_CHARS
            )));
        }

        Ok(())
    }
}

/// Product fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    pub fn to_input(&self) -> Result<ProductInput> {
        let not_a_number = || AppError::Validation("price must be a number".to_string());

        // Decimal parsing tolerates digit separators; typed prices must not.
        let text = self.price.trim();
        if text.contains('_') {
            return Err(not_a_number());
        }
        let price = Decimal::from_str(text).map_err(|_| not_a_number())?;

        Ok(ProductInput {
            name: self.name.clone(),
            price,
            description: self.description.clone(),
        })
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
        }
    }
}

pub fn description_chars(description: &str) -> usize {
    description.chars().count()
}
