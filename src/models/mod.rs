//! Data models for Hardware Hub

pub mod asset;

// Re-export commonly used types
pub use asset::{AssetChanges, AssetStatus, CreateAsset, HardwareAsset, NewAsset, UpdateAsset};
