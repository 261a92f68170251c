//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod offers;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the offers command.
#[derive(Args)]
pub struct OffersArgs {
    /// JSON product dump.
    pub products: String,

    /// Number of forward advances to perform.
    #[arg(short, long, default_value = "3")]
    pub ticks: usize,

    /// Drive advances from the autoplay timer instead of stepping instantly.
    #[arg(long)]
    pub autoplay: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// JSON list of cart operations.
    pub script: String,

    /// JSON product dump used to resolve added product ids.
    #[arg(short, long)]
    pub products: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// JSON product dump.
    pub products: String,

    /// Category name ("All" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive search over titles and descriptions.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort order: popular, price-asc, price-desc.
    #[arg(short, long, default_value = "popular")]
    pub sort: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
