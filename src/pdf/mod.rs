//! PDF Service Module
//!
//! Upload endpoints that wrap document text extraction around the retrieval
//! and prompt assembly pipeline.
//!
//! ## Workflow
//! 1. **Upload**: Accept a multipart form with the document (and, for the
//!    question endpoint, a question string).
//! 2. **Extract**: Pull plain text out of the PDF bytes; extraction failures
//!    surface as collaborator errors, never panics.
//! 3. **Compose**: Retrieve dataset hits for the question, assemble the
//!    prompt with the capped document block, and call the generation client.

pub mod handlers;
