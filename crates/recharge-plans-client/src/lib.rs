//! Client for the telecom recharge plans lookup API.

mod client;
mod error;
mod types;

pub use client::RechargePlansClient;
pub use error::PlansError;
pub use types::*;
