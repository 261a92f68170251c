//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use eco_storefront::generate_default_config;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("currency", &config.store.currency);

    ctx.output.info("[offers]");
    ctx.output.kv("visible", &config.offers.visible.to_string());
    ctx.output.kv("autoplay_ms", &config.offers.autoplay_ms.to_string());
    ctx.output.kv("transition_ms", &config.offers.transition_ms.to_string());
    ctx.output.kv("limit", &config.offers.limit.to_string());
    ctx.output.kv("markup", &config.offers.markup.to_string());

    ctx.output.info("[hero]");
    ctx.output.kv("visible", &config.hero.visible.to_string());
    ctx.output.kv("autoplay_ms", &config.hero.autoplay_ms.to_string());
    for image in &config.hero.images {
        ctx.output.list_item(image);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("eco.toml");

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.warn("Config init cancelled");
            return Ok(());
        }
    }

    let content = generate_default_config(&ctx.config.store.name);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    ctx.config.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    let config = &ctx.config;

    if config.offers.visible > config.offers.limit {
        warnings.push(format!(
            "offers.visible ({}) exceeds offers.limit ({}); every advance shows the same offers",
            config.offers.visible, config.offers.limit
        ));
    }
    if config.offers.transition_ms >= config.offers.autoplay_ms {
        warnings.push(
            "offers.transition_ms should be shorter than offers.autoplay_ms".to_string(),
        );
    }
    if config.hero.images.is_empty() {
        warnings.push("hero.images is empty; the hero rotator shows nothing".to_string());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "valid": true, "warnings": warnings }));
    } else if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}
