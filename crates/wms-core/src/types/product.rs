//! Products, the batches stored in sections, and price records.

use serde::{Deserialize, Serialize};

use super::merge;

// =============================================================================
// Product
// =============================================================================

/// A product sold by a seller. `product_code` is unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i64,
    pub seller_id: i64,
}

/// Partial update for [`Product`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<i64>,
    pub seller_id: Option<i64>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) {
        merge(&mut product.product_code, self.product_code);
        merge(&mut product.description, self.description);
        merge(&mut product.width, self.width);
        merge(&mut product.height, self.height);
        merge(&mut product.length, self.length);
        merge(&mut product.net_weight, self.net_weight);
        merge(&mut product.expiration_rate, self.expiration_rate);
        merge(
            &mut product.recommended_freezing_temperature,
            self.recommended_freezing_temperature,
        );
        merge(&mut product.freezing_rate, self.freezing_rate);
        merge(&mut product.product_type_id, self.product_type_id);
        merge(&mut product.seller_id, self.seller_id);
    }
}

// =============================================================================
// Product Batch
// =============================================================================

/// A batch of one product placed in a section.
///
/// Dates are `YYYY-MM-DD`; `manufacturing_hour` is the hour of day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct ProductBatch {
    pub id: i64,
    pub batch_number: i64,
    pub current_quantity: i64,
    pub initial_quantity: i64,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub due_date: String,
    pub manufacturing_date: String,
    pub manufacturing_hour: i64,
    pub product_id: i64,
    pub section_id: i64,
}

// =============================================================================
// Product Record
// =============================================================================

/// A price snapshot for a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct ProductRecord {
    pub id: i64,
    pub last_update_date: String,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_patch_merges_dimensions() {
        let mut product = Product {
            id: 1,
            product_code: "PRD-001".to_string(),
            description: "Yogurt".to_string(),
            width: 1.0,
            height: 2.0,
            length: 3.0,
            net_weight: 0.5,
            product_type_id: 1,
            seller_id: 1,
            ..Product::default()
        };

        ProductPatch {
            height: Some(2.5),
            seller_id: Some(9),
            ..ProductPatch::default()
        }
        .apply(&mut product);

        assert_eq!(product.height, 2.5);
        assert_eq!(product.width, 1.0);
        assert_eq!(product.seller_id, 9);
        assert_eq!(product.product_code, "PRD-001");
    }
}
