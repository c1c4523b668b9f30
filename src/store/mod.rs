//! Record Store Module
//!
//! The in-memory state layer shared by every query surface.
//!
//! ## Overview
//! The store holds one immutable `Snapshot` of the full category/article data
//! set. Refreshes replace the snapshot in a single step; readers clone an
//! `Arc` out of the lock and never observe a partially updated store.
//!
//! ## Submodules
//! - **`snapshot`**: The record types (`Category`, `Article`) and the indexed
//!   snapshot they live in.
//! - **`records`**: The `RecordStore` itself: phase tracking
//!   (loading/ready/degraded) and last-fetch-wins generation handling.

pub mod records;
pub mod snapshot;
