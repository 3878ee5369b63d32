//! Hardware asset repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::AssetStore;
use crate::{
    error::{AppError, AppResult},
    models::{AssetChanges, HardwareAsset, NewAsset},
};

#[derive(Clone)]
pub struct PgAssetStore {
    pool: Pool<Postgres>,
}

impl PgAssetStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetStore for PgAssetStore {
    async fn list(&self) -> AppResult<Vec<HardwareAsset>> {
        let rows = sqlx::query_as::<_, HardwareAsset>(
            "SELECT * FROM hardware_items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> AppResult<HardwareAsset> {
        sqlx::query_as::<_, HardwareAsset>("SELECT * FROM hardware_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    async fn insert(&self, data: &NewAsset) -> AppResult<HardwareAsset> {
        let row = sqlx::query_as::<_, HardwareAsset>(
            r#"
            INSERT INTO hardware_items (name, type, serial_number, assigned_to, status, purchase_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.asset_type)
        .bind(&data.serial_number)
        .bind(&data.assigned_to)
        .bind(data.status)
        .bind(data.purchase_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: &AssetChanges) -> AppResult<HardwareAsset> {
        let now = Utc::now();
        // updated_at is refreshed on every write, even when nothing else changed
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(changes.name, "name");
        add_field!(changes.asset_type, "type");
        add_field!(changes.serial_number, "serial_number");
        add_field!(changes.assigned_to, "assigned_to");
        add_field!(changes.status, "status");
        add_field!(changes.purchase_date, "purchase_date");

        let query = format!(
            "UPDATE hardware_items SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, HardwareAsset>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(changes.name);
        bind_field!(changes.asset_type);
        bind_field!(changes.serial_number);
        // Inner Option binds NULL when the field is being cleared
        bind_field!(changes.assigned_to);
        bind_field!(changes.status);
        bind_field!(changes.purchase_date);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM hardware_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }
}
