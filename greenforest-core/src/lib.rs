//! Core types for greenforest.
//!
//! This crate holds everything the `greenforest` CLI works with:
//! - `model` for the records the collective keeps (resources, events, partners, themes)
//! - `ledger` and `month_grid` for resource availability and calendar views
//! - `store` and `studio` for loading and persisting the collections

pub mod config;
pub mod error;
pub mod ledger;
pub mod media;
pub mod model;
pub mod month_grid;
pub mod store;
pub mod studio;
pub mod suggest;
pub mod utils;
pub mod view;

pub use model::*;
