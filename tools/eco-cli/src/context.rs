//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use eco_commerce::catalog::Product;
use eco_storefront::StorefrontConfig;

use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["eco.toml", ".eco.toml", "eco.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Where the config came from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            let config = StorefrontConfig::load(&path)?;
            (config, Some(path))
        } else {
            match Self::find_config(&cwd) {
                Some(path) => {
                    let config = StorefrontConfig::load(&path)?;
                    (config, Some(path))
                }
                None => (StorefrontConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Read a JSON product dump.
    pub fn read_products(&self, path: &str) -> Result<Vec<Product>> {
        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read products file: {}", path.display()))?;
        let products = Product::parse_list(&content)
            .with_context(|| format!("Failed to parse products file: {}", path.display()))?;
        self.output
            .debug(&format!("Loaded {} products from {}", products.len(), path.display()));
        Ok(products)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("eco-ctx-test-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".eco.toml"), "[offers]\nvisible = 2\n").unwrap();

        let found = Context::find_config(&nested).unwrap();
        assert_eq!(found, root.join(".eco.toml"));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_resolve() {
        let cwd = Path::new("/srv/shop");
        assert_eq!(resolve(cwd, "products.json"), cwd.join("products.json"));
        assert_eq!(resolve(cwd, "/tmp/p.json"), PathBuf::from("/tmp/p.json"));
    }
}
