//! Shipping matrix entities and the request/response shapes of a quote.

pub mod class;
pub mod config;
pub mod rate;
pub mod settings;
pub mod shipment;
pub mod zone;

pub use class::*;
pub use config::*;
pub use rate::*;
pub use settings::*;
pub use shipment::*;
pub use zone::*;

fn active_by_default() -> bool {
    true
}
