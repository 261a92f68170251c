//! Storefront configuration.

use std::path::Path;
use std::time::Duration;

use eco_commerce::carousel::Stride;
use eco_commerce::catalog::OfferPolicy;
use eco_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};

use crate::StorefrontError;

/// Storefront configuration file (`eco.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Store metadata.
    #[serde(default)]
    pub store: StoreConfig,

    /// Weekly offers rail.
    #[serde(default)]
    pub offers: OffersConfig,

    /// "100% Organic" rail.
    #[serde(default)]
    pub organic: OrganicConfig,

    /// Hero image rotator.
    #[serde(default)]
    pub hero: HeroConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| StorefrontError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;

        let parse_err = |message: String| StorefrontError::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        let config: Self = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content).map_err(|e| parse_err(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| parse_err(e.to_string()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), StorefrontError> {
        self.currency()?;
        if self.offers.visible == 0 {
            return Err(StorefrontError::InvalidConfig(
                "offers.visible must be at least 1".to_string(),
            ));
        }
        if self.organic.visible == 0 {
            return Err(StorefrontError::InvalidConfig(
                "organic.visible must be at least 1".to_string(),
            ));
        }
        if self.hero.visible == 0 {
            return Err(StorefrontError::InvalidConfig(
                "hero.visible must be at least 1".to_string(),
            ));
        }
        if self.offers.autoplay_ms == 0 || self.hero.autoplay_ms == 0 {
            return Err(StorefrontError::InvalidConfig(
                "autoplay_ms must be positive".to_string(),
            ));
        }
        if self.offers.markup < 0 {
            return Err(StorefrontError::InvalidConfig(
                "offers.markup must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Store currency.
    pub fn currency(&self) -> Result<Currency, StorefrontError> {
        Currency::from_code(&self.store.currency).ok_or_else(|| {
            StorefrontError::InvalidConfig(format!("unknown currency '{}'", self.store.currency))
        })
    }

    /// Offers selection policy in the store currency.
    pub fn offer_policy(&self) -> Result<OfferPolicy, StorefrontError> {
        let currency = self.currency()?;
        Ok(OfferPolicy::new(
            self.offers.limit,
            Money::from_major(self.offers.markup, currency),
        ))
    }
}

/// Store metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    "EcoHealth Naturals".to_string()
}

fn default_currency() -> String {
    "KES".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
        }
    }
}

/// Weekly offers rail configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OffersConfig {
    /// Tiles visible at once.
    #[serde(default = "default_offers_visible")]
    pub visible: usize,

    /// Autoplay period in milliseconds.
    #[serde(default = "default_offers_autoplay_ms")]
    pub autoplay_ms: u64,

    /// Slide animation length in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Maximum number of offers pulled from the catalog.
    #[serde(default = "default_offers_limit")]
    pub limit: usize,

    /// Strike-through markup, in whole currency units.
    #[serde(default = "default_offers_markup")]
    pub markup: i64,

    /// Tiles moved per advance.
    #[serde(default)]
    pub stride: Stride,
}

fn default_offers_visible() -> usize {
    4
}

fn default_offers_autoplay_ms() -> u64 {
    3500
}

fn default_transition_ms() -> u64 {
    600
}

fn default_offers_limit() -> usize {
    8
}

fn default_offers_markup() -> i64 {
    50
}

impl OffersConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for OffersConfig {
    fn default() -> Self {
        Self {
            visible: default_offers_visible(),
            autoplay_ms: default_offers_autoplay_ms(),
            transition_ms: default_transition_ms(),
            limit: default_offers_limit(),
            markup: default_offers_markup(),
            stride: Stride::Group,
        }
    }
}

/// "100% Organic" rail configuration. Stepped by hand, no autoplay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganicConfig {
    /// Tiles visible at once.
    #[serde(default = "default_organic_visible")]
    pub visible: usize,

    /// Tiles moved per advance.
    #[serde(default = "default_organic_stride")]
    pub stride: Stride,
}

fn default_organic_visible() -> usize {
    4
}

fn default_organic_stride() -> Stride {
    Stride::Single
}

impl Default for OrganicConfig {
    fn default() -> Self {
        Self {
            visible: default_organic_visible(),
            stride: default_organic_stride(),
        }
    }
}

/// Hero image rotator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Images visible at once.
    #[serde(default = "default_hero_visible")]
    pub visible: usize,

    /// Rotation period in milliseconds.
    #[serde(default = "default_hero_autoplay_ms")]
    pub autoplay_ms: u64,

    /// Cross-fade length in milliseconds.
    #[serde(default = "default_hero_transition_ms")]
    pub transition_ms: u64,

    /// Images to rotate through.
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_hero_visible() -> usize {
    1
}

fn default_hero_autoplay_ms() -> u64 {
    5000
}

fn default_hero_transition_ms() -> u64 {
    700
}

impl HeroConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            visible: default_hero_visible(),
            autoplay_ms: default_hero_autoplay_ms(),
            transition_ms: default_hero_transition_ms(),
            images: Vec::new(),
        }
    }
}

/// Generate a default eco.toml config file.
pub fn generate_default_config(store_name: &str) -> String {
    format!(
        r#"# Storefront configuration

[store]
name = "{store_name}"
currency = "KES"

[offers]
visible = 4
autoplay_ms = 3500
transition_ms = 600
limit = 8
markup = 50
stride = "group"

[organic]
visible = 4
stride = "single"

[hero]
visible = 1
autoplay_ms = 5000
transition_ms = 700
images = []
"#
    )
}
