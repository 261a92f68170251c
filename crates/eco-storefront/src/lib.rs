//! Storefront runtime for EcoHealth Naturals.
//!
//! Wires the [`eco_commerce`] domain types into one owned state object:
//!
//! - [`Storefront`]: cart plus the offers, organic and hero rails, driven by [`Command`]s
//! - [`Autoplay`]: tokio timers that feed advance commands over a channel
//! - [`Driver`]: owns a storefront and its timers, pausing autoplay on hover
//! - [`SessionContext`]: signed-in user, passed explicitly
//! - [`StorefrontConfig`]: `eco.toml` settings

pub mod autoplay;
pub mod config;
pub mod driver;
pub mod error;
pub mod session;
pub mod storefront;

pub use autoplay::{schedule_completion, Autoplay};
pub use config::{generate_default_config, StorefrontConfig};
pub use driver::Driver;
pub use error::StorefrontError;
pub use session::{AuthResponse, SessionContext, SessionUser};
pub use storefront::{Command, Outcome, Rail, Storefront};
