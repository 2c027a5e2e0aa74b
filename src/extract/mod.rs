//! Prompt contract with the model: field schema, prompt text and parser.

pub mod parser;
pub mod prompt;
pub mod schema;

pub use parser::{parse_response, ExtractionRecord};
