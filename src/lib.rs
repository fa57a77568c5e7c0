//! Design Patterns - Runnable Examples
//!
//! This crate contains one module per classic design pattern, each with a
//! matching demo binary:
//!
//! | Pattern         | Category   | Module       | Binary     |
//! |-----------------|------------|--------------|------------|
//! | Adapter         | Structural | [`adapter`]  | `adapter`  |
//! | Command         | Behavioral | [`command`]  | `command`  |
//! | Observer        | Behavioral | [`observer`] | `observer` |
//! | Strategy        | Behavioral | [`strategy`] | `strategy` |
//! | Template Method | Behavioral | [`template`] | `template` |
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin <pattern>
//! ```
//!
//! Set `RUST_LOG=design_patterns=debug` to see what each pattern does
//! under the hood.

pub mod adapter;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod observer;
pub mod strategy;
pub mod template;

pub use error::{CommandError, ConfigError, ObserverError};
