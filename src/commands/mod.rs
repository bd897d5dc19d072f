//! Command implementations for the CLI
//!
//! - start: Start the pricing server
//! - test: Test configuration and price table validity
//! - config: Configuration display

pub mod config;
pub mod start;
