//! Integration tests for rs-outliner
//!
//! These tests run the complete pipeline end-to-end on realistic pages
//! and on unusual inputs.

mod edge_cases;
mod real_world_pages;
