//! Search Service Module
//!
//! The core component responsible for executing user queries against the
//! in-memory snapshot.
//!
//! ## Overview
//! This module implements the retrieval pipeline of the help center. It
//! bridges the HTTP API layer with the record store: a raw query string is
//! normalized, matched against articles by literal case-insensitive
//! containment, narrowed by category, ranked by popularity and joined back
//! to the owning category for display.
//!
//! ## Submodules
//! - **`query`**: Query normalization (trim, lowercase, empty detection).
//! - **`matcher`**: The two containment strategies (multi-field corpus
//!   search vs. question-only live search).
//! - **`engine`**: Category filter, ranker, result assembler and the
//!   combined pipeline.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod matcher;
pub mod query;
pub mod types;
