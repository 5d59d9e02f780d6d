//! Correlation Module
//!
//! Numeric wrapper around user-supplied arrays: validates the payload and
//! returns the Pearson correlation matrix. Carries no retrieval logic.
//!
//! ## Submodules
//! - **`correlation`**: Payload validation and matrix computation.
//! - **`handlers`**: The `/graph/correlation` endpoint.

pub mod correlation;
pub mod handlers;
