//! # vantage-core
//!
//! Core types and primitives for the Vantage dataset toolkit.
//! This crate contains foundational types shared across all Vantage crates:
//! poses, vectors, the dataset directory layout, configuration, and error types.

pub mod config;
pub mod error;
pub mod layout;
pub mod math;
pub mod pose;

pub use config::*;

pub use error::{VantageError, VantageResult};
pub use layout::DatasetLayout;
pub use math::{look_at_euler, Vec3};
pub use pose::Pose;
