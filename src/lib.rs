//! Shipping cost resolution for checkout.
//!
//! A shipment (weight, optional dimensions, destination postal code and order
//! subtotal) is priced against a versioned matrix of zones, classes and weight
//! bands:
//!
//! 1. [`resolver::compute_billable_weight`] takes the larger of the real and
//!    volumetric weight.
//! 2. [`resolver::resolve_zone`] picks the zone serving the postal code.
//! 3. [`resolver::resolve_rate`] picks the tightest class and band for that weight.
//! 4. [`resolver::compute_cost`] applies the per-kilogram surcharge or free shipping.
//!
//! The matrix lives in a [`config_store::ConfigStoreService`] actor that hands
//! out immutable snapshots; [`clients::ShippingClient`] runs the pipeline
//! against one snapshot per quote.

pub mod app_system;
pub mod clients;
pub mod config_store;
pub mod display;
pub mod domain;
pub mod messages;
pub mod resolver;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
