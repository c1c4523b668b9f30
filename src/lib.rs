//! Help-Center Search Service Library
//!
//! This library crate defines the core modules of the help-center backend.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`store`**: The in-memory state layer. Holds an immutable snapshot of
//!   categories and articles that is replaced atomically on refresh.
//! - **`fetch`**: The data acquisition pipeline. Loads the snapshot from a
//!   remote JSON source (or a local seed file) and installs it into the store
//!   with last-fetch-wins semantics.
//! - **`search`**: The core retrieval logic. Query normalization, containment
//!   matching, category filtering, popularity ranking and result assembly.
//! - **`catalog`**: The browsing surface. Category listings with derived
//!   article counts, per-category article listings, single-article lookup and
//!   media descriptor resolution.
//! - **`live`**: The live-filter controller. A small state machine driving
//!   search-as-you-type over the resident snapshot.

pub mod catalog;
pub mod fetch;
pub mod live;
pub mod search;
pub mod store;
