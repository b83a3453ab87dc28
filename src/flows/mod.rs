//! Flows module - Multi-step operations
//!
//! Provides:
//! - pipeline: PDF text -> tokens -> frequency table -> text and JSON reports

pub mod pipeline;
