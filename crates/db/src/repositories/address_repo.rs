//! Repository for the `addresses` table.

use jobboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::{Address, UpsertAddress};

const COLUMNS: &str = "id, enterprise_id, street, number, complement, district, city, state, \
                       country, zipcode, created_at, updated_at";

pub struct AddressRepo;

impl AddressRepo {
    pub async fn find_by_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM addresses WHERE enterprise_id = $1");
        sqlx::query_as::<_, Address>(&query)
            .bind(enterprise_id)
            .fetch_optional(pool)
            .await
    }

    /// Create the enterprise's address or replace every field of the existing one.
    pub async fn upsert(
        pool: &PgPool,
        enterprise_id: DbId,
        input: &UpsertAddress,
    ) -> Result<Address, sqlx::Error> {
        let query = format!(
            "INSERT INTO addresses
                (enterprise_id, street, number, complement, district, city, state, country, zipcode)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (enterprise_id) DO UPDATE SET
                street = EXCLUDED.street,
                number = EXCLUDED.number,
                complement = EXCLUDED.complement,
                district = EXCLUDED.district,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                country = EXCLUDED.country,
                zipcode = EXCLUDED.zipcode
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Address>(&query)
            .bind(enterprise_id)
            .bind(&input.street)
            .bind(&input.number)
            .bind(&input.complement)
            .bind(&input.district)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.country)
            .bind(&input.zipcode)
            .fetch_one(pool)
            .await
    }
}
