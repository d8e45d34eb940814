//! # Geography Repositories
//!
//! Countries, provinces and localities, plus the per-locality seller and
//! carrier counts.
//!
//! Countries are looked up by exact name and provinces by name within a
//! country: the locality create flow upserts both by name.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use wms_core::{Country, Locality, LocalityCarriesReport, LocalitySellersReport, Province};

// =============================================================================
// Country
// =============================================================================

#[derive(Debug, Clone)]
pub struct CountryRepository {
    pool: SqlitePool,
}

impl CountryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CountryRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(
            "SELECT id, country_name FROM countries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(countries)
    }

    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Country>> {
        let country = sqlx::query_as::<_, Country>(
            "SELECT id, country_name FROM countries WHERE country_name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(country)
    }

    /// Inserts a country and returns it with its new id.
    pub async fn insert(&self, country: &Country) -> DbResult<Country> {
        debug!(name = %country.country_name, "Inserting country");

        let result = sqlx::query("INSERT INTO countries (country_name) VALUES (?1)")
            .bind(&country.country_name)
            .execute(&self.pool)
            .await?;

        Ok(Country {
            id: result.last_insert_rowid(),
            ..country.clone()
        })
    }

    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM countries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Province
// =============================================================================

#[derive(Debug, Clone)]
pub struct ProvinceRepository {
    pool: SqlitePool,
}

impl ProvinceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProvinceRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Province>> {
        let provinces = sqlx::query_as::<_, Province>(
            "SELECT id, province_name, country_id FROM provinces ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(provinces)
    }

    /// Finds a province by name within one country.
    pub async fn get_by_name(&self, name: &str, country_id: i64) -> DbResult<Option<Province>> {
        let province = sqlx::query_as::<_, Province>(
            r#"
            SELECT id, province_name, country_id
            FROM provinces
            WHERE province_name = ?1 AND country_id = ?2
            "#,
        )
        .bind(name)
        .bind(country_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(province)
    }

    pub async fn insert(&self, province: &Province) -> DbResult<Province> {
        debug!(name = %province.province_name, country_id = province.country_id, "Inserting province");

        let result =
            sqlx::query("INSERT INTO provinces (province_name, country_id) VALUES (?1, ?2)")
                .bind(&province.province_name)
                .bind(province.country_id)
                .execute(&self.pool)
                .await?;

        Ok(Province {
            id: result.last_insert_rowid(),
            ..province.clone()
        })
    }
}

// =============================================================================
// Locality
// =============================================================================

#[derive(Debug, Clone)]
pub struct LocalityRepository {
    pool: SqlitePool,
}

impl LocalityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        LocalityRepository { pool }
    }

    pub async fn list_all(&self) -> DbResult<Vec<Locality>> {
        let localities = sqlx::query_as::<_, Locality>(
            "SELECT id, locality_name, province_id FROM localities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(localities)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Locality>> {
        let locality = sqlx::query_as::<_, Locality>(
            "SELECT id, locality_name, province_id FROM localities WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(locality)
    }

    /// Inserts a locality keeping the caller-supplied id.
    pub async fn insert(&self, locality: &Locality) -> DbResult<Locality> {
        debug!(id = locality.id, name = %locality.locality_name, "Inserting locality");

        sqlx::query("INSERT INTO localities (id, locality_name, province_id) VALUES (?1, ?2, ?3)")
            .bind(locality.id)
            .bind(&locality.locality_name)
            .bind(locality.province_id)
            .execute(&self.pool)
            .await?;

        Ok(locality.clone())
    }

    /// Counts sellers per locality. `None` reports every locality, including
    /// the ones without sellers.
    pub async fn sellers_report(&self, id: Option<i64>) -> DbResult<Vec<LocalitySellersReport>> {
        let rows = sqlx::query_as::<_, LocalitySellersReport>(
            r#"
            SELECT
                l.id AS locality_id,
                l.locality_name AS locality_name,
                COUNT(s.id) AS sellers_count
            FROM localities l
            LEFT JOIN sellers s ON s.locality_id = l.id
            WHERE ?1 IS NULL OR l.id = ?1
            GROUP BY l.id, l.locality_name
            ORDER BY l.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts carriers per locality. `None` reports every locality.
    pub async fn carries_report(&self, id: Option<i64>) -> DbResult<Vec<LocalityCarriesReport>> {
        let rows = sqlx::query_as::<_, LocalityCarriesReport>(
            r#"
            SELECT
                l.id AS locality_id,
                l.locality_name AS locality_name,
                COUNT(c.id) AS carries_count
            FROM localities l
            LEFT JOIN carries c ON c.locality_id = l.id
            WHERE ?1 IS NULL OR l.id = ?1
            GROUP BY l.id, l.locality_name
            ORDER BY l.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
