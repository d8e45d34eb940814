//! # Lookup Traits
//!
//! Narrow, read-only views of sibling tables. A service that must check a
//! reference gets exactly one lookup per referenced entity and can never
//! write to it.
//!
//! ```text
//! SectionService ──► dyn WarehouseLookup   ──► WarehouseRepository
//!               └──► dyn ProductTypeLookup ──► ProductTypeRepository
//! ```
//!
//! The `wms-db` repositories implement these directly; tests swap in fakes.

use async_trait::async_trait;
use wms_core::{
    Buyer, Locality, Product, ProductRecord, ProductType, Section, Seller, Warehouse,
};
use wms_db::{
    BuyerRepository, DbResult, LocalityRepository, ProductRecordRepository, ProductRepository,
    ProductTypeRepository, SectionRepository, SellerRepository, WarehouseRepository,
};

#[async_trait]
pub trait WarehouseLookup: Send + Sync {
    async fn find_warehouse(&self, id: i64) -> DbResult<Option<Warehouse>>;
}

#[async_trait]
pub trait ProductTypeLookup: Send + Sync {
    async fn find_product_type(&self, id: i64) -> DbResult<Option<ProductType>>;
}

#[async_trait]
pub trait LocalityLookup: Send + Sync {
    async fn find_locality(&self, id: i64) -> DbResult<Option<Locality>>;
}

#[async_trait]
pub trait BuyerLookup: Send + Sync {
    async fn find_buyer(&self, id: i64) -> DbResult<Option<Buyer>>;
}

#[async_trait]
pub trait SellerLookup: Send + Sync {
    async fn find_seller(&self, id: i64) -> DbResult<Option<Seller>>;
}

#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn find_product(&self, id: i64) -> DbResult<Option<Product>>;
}

#[async_trait]
pub trait SectionLookup: Send + Sync {
    async fn find_section(&self, id: i64) -> DbResult<Option<Section>>;
}

#[async_trait]
pub trait ProductRecordLookup: Send + Sync {
    async fn find_product_record(&self, id: i64) -> DbResult<Option<ProductRecord>>;
}

// =============================================================================
// Repository implementations
// =============================================================================

#[async_trait]
impl WarehouseLookup for WarehouseRepository {
    async fn find_warehouse(&self, id: i64) -> DbResult<Option<Warehouse>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl ProductTypeLookup for ProductTypeRepository {
    async fn find_product_type(&self, id: i64) -> DbResult<Option<ProductType>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl LocalityLookup for LocalityRepository {
    async fn find_locality(&self, id: i64) -> DbResult<Option<Locality>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl BuyerLookup for BuyerRepository {
    async fn find_buyer(&self, id: i64) -> DbResult<Option<Buyer>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl SellerLookup for SellerRepository {
    async fn find_seller(&self, id: i64) -> DbResult<Option<Seller>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl ProductLookup for ProductRepository {
    async fn find_product(&self, id: i64) -> DbResult<Option<Product>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl SectionLookup for SectionRepository {
    async fn find_section(&self, id: i64) -> DbResult<Option<Section>> {
        self.get_by_id(id).await
    }
}

#[async_trait]
impl ProductRecordLookup for ProductRecordRepository {
    async fn find_product_record(&self, id: i64) -> DbResult<Option<ProductRecord>> {
        self.get_by_id(id).await
    }
}
