//! Cloneable handles for talking to the shipping actors.

#[macro_use]
mod macros;

pub mod config_store_client;
pub mod shipping_client;

pub use config_store_client::*;
pub use shipping_client::*;
