//! Search Service Module
//!
//! The core component responsible for ranking dataset records against
//! free-text queries.
//!
//! ## Overview
//! This module implements the retrieval half of the question answering
//! pipeline: queries and titles are reduced to token sets, records are
//! scored by distinct-token overlap, and the top-k positive scorers are
//! returned in a deterministic order.
//!
//! ## Responsibilities
//! - **Tokenization**: Normalizing raw text into lowercase ASCII
//!   alphanumeric token sets.
//! - **Ranking**: Scoring records by keyword overlap with a stable
//!   tie-break on dataset order.
//!
//! ## Submodules
//! - **`engine`**: Scoring and top-k selection.
//! - **`tokenizer`**: Text normalization utilities.

pub mod engine;
pub mod tokenizer;
