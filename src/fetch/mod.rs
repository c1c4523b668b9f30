//! Fetch Service Module
//!
//! Handles acquisition of the category/article data set from its source of
//! truth and installation into the record store.
//!
//! ## Workflow
//! 1. **Load**: Fetches the full data set as JSON from a remote endpoint
//!    (with retry and backoff) or reads it from a local seed file.
//! 2. **Flatten**: Accepts both the flat shape (separate category and
//!    article arrays) and the nested shape (articles embedded per category)
//!    and normalizes them into one snapshot.
//! 3. **Install**: Replaces the store's snapshot atomically; a refresh that
//!    was superseded by a newer one is discarded, a failed refresh leaves
//!    the last-known-good snapshot in place.
//!
//! ## Submodules
//! - **`source`**: The snapshot sources and the refresh driver.
//! - **`handlers`**: HTTP handlers for the refresh trigger and the status
//!   endpoint.
//! - **`types`**: Wire payloads and API DTOs.

pub mod handlers;
pub mod source;
pub mod types;

#[cfg(test)]
mod tests;
