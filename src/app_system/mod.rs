//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod shipping_system;
pub mod tracing;

pub use error::*;
pub use shipping_system::*;
pub use self::tracing::*;
