//! Batch extraction of OER electrocatalyst properties from article metadata
//! via a chat-completion model.

pub mod cli;
pub mod config;
pub mod data;
pub mod extract;
pub mod llm;
pub mod logging;
pub mod pipeline;
