//! Trading partners: sellers, carriers and buyers.

use serde::{Deserialize, Serialize};

use super::merge;

// =============================================================================
// Seller
// =============================================================================

/// A company that supplies products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Seller {
    pub id: i64,
    /// Company identifier, unique across sellers.
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

/// Partial update for [`Seller`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerPatch {
    pub cid: Option<i64>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i64>,
}

impl SellerPatch {
    pub fn apply(self, seller: &mut Seller) {
        merge(&mut seller.cid, self.cid);
        merge(&mut seller.company_name, self.company_name);
        merge(&mut seller.address, self.address);
        merge(&mut seller.telephone, self.telephone);
        merge(&mut seller.locality_id, self.locality_id);
    }
}

// =============================================================================
// Carry
// =============================================================================

/// A carrier that picks up orders in a locality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Carry {
    pub id: i64,
    /// Carrier identifier, unique across carriers.
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

// =============================================================================
// Buyer
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(default)]
pub struct Buyer {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update for [`Buyer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerPatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl BuyerPatch {
    pub fn apply(self, buyer: &mut Buyer) {
        merge(&mut buyer.card_number_id, self.card_number_id);
        merge(&mut buyer.first_name, self.first_name);
        merge(&mut buyer.last_name, self.last_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_patch_keeps_absent_fields() {
        let mut seller = Seller {
            id: 1,
            cid: 10,
            company_name: "Frutas del Sur".to_string(),
            address: "Calle 1".to_string(),
            telephone: "555-0101".to_string(),
            locality_id: 6700,
        };

        let patch: SellerPatch =
            serde_json::from_str(r#"{"telephone": "555-0199"}"#).unwrap();
        patch.apply(&mut seller);

        assert_eq!(seller.telephone, "555-0199");
        assert_eq!(seller.cid, 10);
        assert_eq!(seller.company_name, "Frutas del Sur");
    }

    #[test]
    fn test_buyer_missing_fields_default_to_empty() {
        let buyer: Buyer = serde_json::from_str(r#"{"first_name": "Ana"}"#).unwrap();
        assert_eq!(buyer.id, 0);
        assert_eq!(buyer.first_name, "Ana");
        assert!(buyer.card_number_id.is_empty());
    }
}
