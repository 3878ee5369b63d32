//! Redis cache for the asset inventory
//!
//! Read-through cache of the full listing and of single assets. Every
//! successful mutation drops both the listing key and the touched asset's
//! key, so the next read refetches from the store. Cache failures are
//! logged at warn level and fall back to the store; a dead Redis never
//! fails a request.

use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::HardwareAsset,
};

const LISTING_KEY: &str = "hardware:assets";

fn asset_key(id: Uuid) -> String {
    format!("hardware:asset:{}", id)
}

#[derive(Clone)]
pub struct CacheService {
    client: Client,
    ttl_seconds: u64,
}

impl CacheService {
    /// Create a new cache service and test the connection
    pub async fn new(url: &str, ttl_seconds: u64) -> AppResult<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::Internal(format!("Failed to create Redis client: {}", e)))?;

        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to connect to Redis: {}", e)))?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(|e| AppError::Internal(format!("Redis connection test failed: {}", e)))?;

        Ok(Self {
            client,
            ttl_seconds,
        })
    }

    /// Cached full listing, if present
    pub async fn get_listing(&self) -> Option<Vec<HardwareAsset>> {
        self.get_json(LISTING_KEY).await
    }

    /// Cache the full listing
    pub async fn put_listing(&self, assets: &[HardwareAsset]) {
        self.put_json(LISTING_KEY, assets).await;
    }

    /// Cached single asset, if present
    pub async fn get_asset(&self, id: Uuid) -> Option<HardwareAsset> {
        self.get_json(&asset_key(id)).await
    }

    /// Cache a single asset
    pub async fn put_asset(&self, asset: &HardwareAsset) {
        self.put_json(&asset_key(asset.id), asset).await;
    }

    /// Drop the listing key and the given asset's key. Called after every
    /// successful mutation so the next read sees the write.
    pub async fn invalidate(&self, id: Uuid) {
        let mut conn = match self.connection().await {
            Some(conn) => conn,
            None => return,
        };
        let keys = vec![LISTING_KEY.to_string(), asset_key(id)];
        if let Err(e) = conn.del::<_, ()>(keys).await {
            tracing::warn!("Failed to invalidate cache for asset {}: {}", id, e);
        }
    }

    async fn connection(&self) -> Option<redis::aio::MultiplexedConnection> {
        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                tracing::warn!("Failed to get Redis connection: {}", e);
                None
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = match conn.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read cache key {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw?) {
            Ok(value) => Some(value),
            Err(e) => {
                // Treat an unreadable entry as a miss; it will be rewritten
                tracing::warn!("Discarding invalid cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let mut conn = match self.connection().await {
            Some(conn) => conn,
            None => return,
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize cache entry {}: {}", key, e);
                return;
            }
        };
        if let Err(e) = conn.set_ex::<_, _, ()>(key, raw, self.ttl_seconds).await {
            tracing::warn!("Failed to write cache key {}: {}", key, e);
        }
    }
}
