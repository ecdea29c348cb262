//! Loading and normalization of `hiera.yaml`.

mod backend;
mod builder;
mod coerce;
mod error;
mod file;
mod merge;
mod normalize;

pub use backend::{Backend, Platform};
pub use builder::ConfigBuilder;
pub use coerce::coerce;
pub use error::ConfigError;
pub use file::{load_document, parse_document};
pub use merge::{validate_merge_behavior, MergeBehavior};
pub use normalize::{normalize, HieraConfig, SubConfig};
