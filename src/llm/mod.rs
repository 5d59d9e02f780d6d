//! Generation Service Module
//!
//! Turns a normalized free-text question into a composed prompt and an
//! answer from the hosted generation model.
//!
//! ## Overview
//! This module covers everything between the raw HTTP request and the
//! generation collaborator: extracting `(query, top_k)` from whichever
//! transport shape the caller used, assembling dataset hits and optional
//! document text into a single prompt, calling the Gemini REST API, and
//! mapping success or failure onto the external JSON contract.
//!
//! ## Submodules
//! - **`params`**: Request normalization (query string, JSON body, form body).
//! - **`prompt`**: System prompt loading and prompt assembly.
//! - **`client`**: The Gemini generation client.
//! - **`handlers`**: The shared `/query` and `/llm` endpoint handler.
//! - **`types`**: Response DTOs and the success/error response mapper.

pub mod client;
pub mod handlers;
pub mod params;
pub mod prompt;
pub mod types;
