//! # Locality Service
//!
//! Localities hang off a province, which hangs off a country. A create
//! request names the province and country; both are matched by name and
//! created on first use.
//!
//! ```text
//! save({ id: 6700, locality_name, province_name, country_name })
//!   │
//!   ├─ validate_locality                     → InvalidArguments
//!   ├─ locality 6700 already stored?         → Conflict
//!   ├─ country by name   ─ absent ─► insert  (adopt id)
//!   ├─ province by name within that country ─ absent ─► insert (adopt id)
//!   └─ insert locality with province_id set
//! ```

use tracing::{debug, info};
use wms_core::validation::validate_locality;
use wms_core::{
    Country, Locality, LocalityCarriesReport, LocalityInput, LocalitySellersReport, Province,
};
use wms_db::{CountryRepository, LocalityRepository, ProvinceRepository};

use crate::error::{ServiceError, ServiceResult};

pub struct LocalityService {
    localities: LocalityRepository,
    provinces: ProvinceRepository,
    countries: CountryRepository,
}

impl LocalityService {
    pub fn new(
        localities: LocalityRepository,
        provinces: ProvinceRepository,
        countries: CountryRepository,
    ) -> Self {
        LocalityService {
            localities,
            provinces,
            countries,
        }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Locality>> {
        Ok(self.localities.list_all().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Locality> {
        self.localities
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Locality", id))
    }

    pub async fn list_provinces(&self) -> ServiceResult<Vec<Province>> {
        Ok(self.provinces.list_all().await?)
    }

    pub async fn list_countries(&self) -> ServiceResult<Vec<Country>> {
        Ok(self.countries.list_all().await?)
    }

    pub async fn save(&self, input: LocalityInput) -> ServiceResult<Locality> {
        let (mut locality, mut province, mut country) = input.into_parts();
        validate_locality(&locality, &province, &country)?;

        if self.localities.get_by_id(locality.id).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "locality {} already exists",
                locality.id
            )));
        }

        country.id = match self.countries.get_by_name(&country.country_name).await? {
            Some(existing) => existing.id,
            None => {
                let created = self.countries.insert(&country).await?;
                debug!(id = created.id, name = %created.country_name, "Country created");
                created.id
            }
        };

        province.country_id = country.id;
        province.id = match self
            .provinces
            .get_by_name(&province.province_name, country.id)
            .await?
        {
            Some(existing) => existing.id,
            None => {
                let created = self.provinces.insert(&province).await?;
                debug!(id = created.id, name = %created.province_name, "Province created");
                created.id
            }
        };

        locality.province_id = province.id;
        let created = self.localities.insert(&locality).await?;
        info!(id = created.id, name = %created.locality_name, "Locality created");
        Ok(created)
    }

    /// Sellers per locality. Zero reports every locality.
    pub async fn sellers_report(&self, id: i64) -> ServiceResult<Vec<LocalitySellersReport>> {
        let filter = self.report_filter(id).await?;
        Ok(self.localities.sellers_report(filter).await?)
    }

    /// Carriers per locality. Zero reports every locality.
    pub async fn carries_report(&self, id: i64) -> ServiceResult<Vec<LocalityCarriesReport>> {
        let filter = self.report_filter(id).await?;
        Ok(self.localities.carries_report(filter).await?)
    }

    async fn report_filter(&self, id: i64) -> ServiceResult<Option<i64>> {
        if id == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await?;
        Ok(Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use wms_db::Database;

    fn service(db: &Database) -> LocalityService {
        LocalityService::new(db.localities(), db.provinces(), db.countries())
    }

    fn input(id: i64, province: &str, country: &str) -> LocalityInput {
        LocalityInput {
            id,
            locality_name: format!("Locality {id}"),
            province_name: province.to_string(),
            country_name: country.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_creates_hierarchy_once() {
        let db = test_support::database().await;
        let svc = service(&db);

        let first = svc.save(input(6700, "Buenos Aires", "Argentina")).await.unwrap();
        let second = svc.save(input(6701, "Buenos Aires", "Argentina")).await.unwrap();

        assert_eq!(first.id, 6700);
        assert_eq!(first.province_id, second.province_id);
        assert_eq!(svc.list_countries().await.unwrap().len(), 1);
        assert_eq!(svc.list_provinces().await.unwrap().len(), 1);
        assert_eq!(svc.get_by_id(6700).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_same_province_name_in_another_country() {
        let db = test_support::database().await;
        let svc = service(&db);

        let a = svc.save(input(1, "Central", "Paraguay")).await.unwrap();
        let b = svc.save(input(2, "Central", "Uruguay")).await.unwrap();

        assert_ne!(a.province_id, b.province_id);
        assert_eq!(svc.list_countries().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_existing_id_conflicts() {
        let db = test_support::database().await;
        let svc = service(&db);

        svc.save(input(6700, "Buenos Aires", "Argentina")).await.unwrap();
        let err = svc
            .save(input(6700, "Cordoba", "Argentina"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_missing_fields_are_invalid() {
        let db = test_support::database().await;
        let svc = service(&db);

        for bad in [
            input(0, "Buenos Aires", "Argentina"),
            input(6700, "", "Argentina"),
            input(6700, "Buenos Aires", ""),
        ] {
            assert!(matches!(
                svc.save(bad).await,
                Err(ServiceError::InvalidArguments(_))
            ));
        }
        assert!(svc.list_countries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sellers_report() {
        let db = test_support::database().await;
        let svc = service(&db);
        test_support::seller(&db, 1).await;
        test_support::seller(&db, 2).await;
        test_support::locality(&db, 1900).await;

        let all = svc.sellers_report(0).await.unwrap();
        assert_eq!(all.len(), 2);

        let one = svc.sellers_report(6700).await.unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].sellers_count, 2);

        assert!(matches!(
            svc.sellers_report(42).await,
            Err(ServiceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_carries_report_for_unknown_locality() {
        let db = test_support::database().await;
        let svc = service(&db);
        test_support::locality(&db, 1900).await;

        let report = svc.carries_report(1900).await.unwrap();
        assert_eq!(report[0].carries_count, 0);
        assert!(matches!(
            svc.carries_report(1).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
