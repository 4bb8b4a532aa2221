//! Configuration validation
//!
//! - `trait_def`: the [`Validate`] trait
//! - `provider_validators`: provider endpoints and timeouts
//! - `cache_validators`: cache and rate limit
//! - `router_validators`: router, retry, health and model table

mod cache_validators;
mod provider_validators;
mod router_validators;
mod trait_def;

pub use trait_def::Validate;
