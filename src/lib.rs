//! Parsing and normalization of `hiera.yaml`, plus `%{fact}` interpolation.

pub mod config;
pub mod facts;
mod hiera;
pub mod interpolate;

pub use config::{Backend, ConfigError, HieraConfig, MergeBehavior, Platform};
pub use facts::{FactSource, Facts};
pub use hiera::Hiera;
pub use interpolate::interpolate;
