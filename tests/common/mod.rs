//! Common utilities for integration tests

// Each integration test is its own crate; not every test uses every helper.
#![allow(dead_code)]

pub mod board_builders;
pub mod mock_engine;

// Re-export commonly used items
pub use board_builders::{board_from_columns, typed_board};
pub use mock_engine::{FailingEngine, MockEngine};
