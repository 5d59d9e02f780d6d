//! Publication Assistant Backend Library
//!
//! This library crate defines the modules behind the HTTP service
//! (`main.rs`): a retrieval-augmented question answering backend over a
//! fixed bibliographic dataset of space biology publications.
//!
//! ## Architecture Modules
//!
//! - **`config`**: Environment-driven startup configuration.
//! - **`dataset`**: The read-only publication store, loaded once from CSV,
//!   and the `/dataset/search` endpoint.
//! - **`search`**: The core retrieval logic. Contains the tokenizer and the
//!   keyword-overlap scoring engine with stable top-k selection.
//! - **`llm`**: Request normalization across transports, prompt assembly,
//!   the Gemini generation client, and the `/query` and `/llm` endpoints.
//! - **`pdf`**: Document upload endpoints that wrap text extraction around
//!   the retrieval and prompt pipeline.
//! - **`chem`**: Proxy for chemical structure lookups (SMILES to SDF).
//! - **`graph`**: Correlation matrix computation for user-supplied arrays.

pub mod chem;
pub mod config;
pub mod dataset;
pub mod graph;
pub mod llm;
pub mod pdf;
pub mod search;
