//! # Design Patterns Catalog
//!
//! Small, self-contained demonstrations of classic object-oriented patterns
//! expressed in Rust.
//!
//! ## Creational Patterns
//! - Prototype Pattern (shallow vs deep copy of nested state)
//! - Factory Method Pattern (enum discriminant -> trait object)
//! - Singleton Pattern (guarded lazy initialization)
//!
//! ## Structural Patterns
//! - Composite Pattern (closed enum over leaf and container)
//!
//! Run the drivers with:
//! ```bash
//! cargo run --bin p1_creational
//! cargo run --bin p2_structural -- path/to/demo.toml
//! ```
//!
//! Set `DEMO_LOG=debug` to see the copy and factory events.

pub mod composite;
pub mod config;
pub mod demo;
pub mod error;
pub mod factory;
pub mod logging;
pub mod prototype;
pub mod singleton;

pub use error::{PatternError, Result};
