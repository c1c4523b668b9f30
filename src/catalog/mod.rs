//! Catalog Service Module
//!
//! The read-only browsing surface over categories and articles.
//!
//! ## Responsibilities
//! - **Category listing**: All categories with a derived article count.
//! - **Article listing**: Articles of one category, most recent first.
//! - **Article lookup**: A single article joined with its category, with the
//!   media descriptor resolved into something displayable.
//! - **Popular articles**: A capped, view-ranked listing.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`media`**: Media descriptor resolution (image/video/YouTube embeds).
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod media;
pub mod types;

#[cfg(test)]
mod tests;
