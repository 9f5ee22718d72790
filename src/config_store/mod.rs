//! Versioned, read-only shipping configuration and the actor that serves it.

pub mod audit;
pub mod error;
pub mod service;
pub mod snapshot;
pub mod source;

pub use audit::*;
pub use error::*;
pub use service::*;
pub use snapshot::*;
pub use source::*;
