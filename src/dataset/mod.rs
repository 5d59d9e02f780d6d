//! Dataset Service Module
//!
//! Owns the fixed bibliographic dataset the whole service retrieves against.
//!
//! ## Overview
//! The dataset is a CSV of publication titles and links loaded exactly once
//! at process start. It is read-only afterwards, which makes it safe to share
//! across request handlers behind an `Arc` with no synchronization.
//!
//! ## Responsibilities
//! - **Loading**: Mapping CSV rows to `DatasetRecord`s, degrading to an
//!   empty store on any read failure so the service always starts.
//! - **API**: The `/dataset/search` endpoint for direct keyword lookups.
//!
//! ## Submodules
//! - **`store`**: CSV loading and the in-memory store.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
