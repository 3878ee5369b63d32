//! API handlers for the Hardware Hub REST endpoints

pub mod assets;
pub mod directory;
pub mod health;
pub mod openapi;
pub mod stats;
