//! # Distribution Lab Backend
//!
//! Filtering and aggregation engine for medical-device distribution records.
//!
//! This crate turns supplier- and customer-reported shipment records into the
//! view models behind the distribution dashboard: a shipment volume series, a
//! category/model tree, a supplier -> license -> model -> customer flow graph,
//! a model/customer co-occurrence matrix, a Pareto table and a discrepancy
//! snapshot for an external narrative generator. The backend exposes a REST
//! API via Axum for the frontend.
//!
//! ## Architecture
//!
//! - [`models`]: Distribution records and filter state
//! - [`services`]: Pure filtering and aggregation functions
//! - [`routes`]: View-model types, one module per visualization
//! - [`api`]: Consolidated DTO surface and dataset identifiers
//! - [`parsing`]: JSON and CSV ingestion plus built-in sample datasets
//! - [`db`]: Dataset repository pattern and in-memory storage
//! - [`config`]: TOML dashboard configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
