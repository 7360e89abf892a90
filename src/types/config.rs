use serde::Deserialize;

pub const DEFAULT_EXPORT_NAME: &str = "parsed_ginkgo_suite.md";
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Effective settings after all config layers are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub export: ExportConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub default_path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_path: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub indent_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// One TOML file. Every key is optional; present keys override the
/// layers read before it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub export: ExportLayer,
    #[serde(default)]
    pub render: RenderLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportLayer {
    pub default_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderLayer {
    pub indent_width: Option<usize>,
}

impl ParserConfig {
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(default_path) = layer.export.default_path {
            self.export.default_path = default_path;
        }
        if let Some(indent_width) = layer.render.indent_width {
            self.render.indent_width = indent_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_layer_keeps_builtin_defaults() {
        let layer: ConfigLayer = toml::from_str("").expect("empty config should parse");
        let mut cfg = ParserConfig::default();
        cfg.apply(layer);
        assert_eq!(cfg, ParserConfig::default());
        assert_eq!(cfg.export.default_path, DEFAULT_EXPORT_NAME);
        assert_eq!(cfg.render.indent_width, DEFAULT_INDENT_WIDTH);
    }

    #[test]
    fn layer_overrides_only_present_keys() {
        let layer: ConfigLayer =
            toml::from_str("[render]\nindent_width = 3\n").expect("layer should parse");
        let mut cfg = ParserConfig::default();
        cfg.apply(layer);
        assert_eq!(cfg.render.indent_width, 3);
        assert_eq!(cfg.export.default_path, DEFAULT_EXPORT_NAME);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = toml::from_str::<ConfigLayer>("[render]\nbullet = \"*\"\n")
            .expect_err("unknown key should fail");
        assert!(err.to_string().contains("bullet"));
    }
}
