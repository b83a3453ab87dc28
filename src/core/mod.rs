//! Core module - Word extraction data structures and utilities
//!
//! This module provides:
//! - Unicode category tokenizer
//! - Frequency aggregation
//! - Word data model and batch outcome model
//! - Batch summary rendering
//! - Pipeline configuration, errors and path helpers

pub mod config;
pub mod error;
pub mod frequency;
pub mod model;
pub mod outcome;
pub mod paths;
pub mod render;
pub mod tokenizer;
pub mod util;
