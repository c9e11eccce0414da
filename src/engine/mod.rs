//! External numerical engine boundary
//!
//! The root-finding mathematics lives outside this crate, in an engine that
//! receives the parameter list, a convergence tolerance and an iteration
//! cap, and returns one raw comparison board per parameter. This module
//! defines that contract and nothing else: the engine is an opaque
//! collaborator, and the only thing this crate relies on is the board
//! shape.
//!
//! # Raw output format
//!
//! The reference engine emits each board column-major — a label column
//! followed by one string column per method, seven entries each (see
//! [`crate::board`] for the row layout). [`run_comparison`] converts that
//! into typed [`Board`]s, rejecting shape violations as engine-contract
//! breaches.
//!
//! # Example
//!
//! ```rust
//! use rootcmp_rs::engine::{run_comparison, EngineConfig, RootEngine};
//!
//! # fn demo(engine: &dyn RootEngine) -> Result<(), rootcmp_rs::engine::EngineError> {
//! let config = EngineConfig::new(1e-5, 100)?;
//! let boards = run_comparison(engine, &[1.0, 1.4, 8.0], &config)?;
//! # Ok(())
//! # }
//! ```

pub mod traits;

pub use traits::{run_comparison, EngineConfig, EngineError, RawBoard, RootEngine};
