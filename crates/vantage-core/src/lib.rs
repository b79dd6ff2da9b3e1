//! # vantage-core
//!
//! Core types, ID generation, and error types for Vantage.
//!
//! This crate provides the foundational types shared across all Vantage crates:
//! - Entity structs for all domain objects (companies, lists, saved searches, enrichment)
//! - Stage, signal, and sort enums
//! - ID prefix constants and generation
//! - Cross-cutting error types
//! - Catalog queries (filter, sort, paginate)
//! - Navigation intents for the discovery view
//! - Dashboard aggregates and list export

pub mod catalog;
pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod ids;
pub mod navigation;
