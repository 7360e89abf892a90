use crate::error::{ConvertError, Result};
use crate::types::config::{ConfigLayer, ParserConfig};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "ginkgo-md.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/ginkgo-md/config.toml";

/// Loads the layered configuration: global file, then `ginkgo-md.toml` in
/// `root`, then the explicit file if one was given. Missing optional layers
/// are skipped and an empty result falls back to built-in defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ParserConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<ParserConfig> {
    if let Some(path) = explicit.filter(|path| !path.exists()) {
        return Err(ConvertError::ConfigParse(format!(
            "{}: file not found",
            path.display()
        )));
    }

    let local = root.join(DEFAULT_CONFIG_FILE);
    let layers = [global_path, Some(local.as_path()), explicit];

    let mut cfg = ParserConfig::default();
    for path in layers.into_iter().flatten().filter(|path| path.exists()) {
        tracing::debug!(path = %path.display(), "applying config layer");
        cfg.apply(read_layer(path)?);
    }
    validate(&cfg)?;
    Ok(cfg)
}

fn read_layer(path: &Path) -> Result<ConfigLayer> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ConvertError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn validate(cfg: &ParserConfig) -> Result<()> {
    if cfg.export.default_path.is_empty() {
        return Err(ConvertError::ConfigParse(
            "export.default_path must not be empty".to_string(),
        ));
    }
    if cfg.render.indent_width == 0 {
        return Err(ConvertError::ConfigParse(
            "render.indent_width must be at least 1".to_string(),
        ));
    }
    Ok(())
}
