//! PassManager Core - vault management engine for website credentials
//!
//! This crate provides:
//! - The credential data model and the JSON vault representation
//! - An in-memory repository mirrored write-through to a persistent store
//! - A configurable random password generator
//! - A five-level password strength heuristic
//! - Case-insensitive vault search
//! - Whole-vault export/import as a portable JSON blob

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod repository;
pub mod search;
pub mod storage;
pub mod strength;
pub mod transfer;

pub use config::*;
pub use error::*;
pub use generator::*;
pub use models::*;
pub use repository::*;
pub use search::*;
pub use storage::*;
pub use strength::*;
pub use transfer::*;
