//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resolved
//! [`Dialect`] and [`LayoutOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ENCLOSE__DEFAULTS__DIALECT=c`
//! 3. Config file: `--config FILE`, otherwise the user config file and then
//!    `.enclose.toml` in the current directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use enclose_core::domain::{
    DEFAULT_GUARD_NAME, Dialect, DomainError, GuardStyle, LayoutOptions,
};

use crate::cli::EmitArgs;

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".enclose.toml";

const ENV_PREFIX: &str = "ENCLOSE";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dialect selection used when no flag overrides it.
    pub defaults: Defaults,
    /// Formatting toggles handed to every session.
    pub layout: LayoutOptions,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub dialect: String,
    pub guard: GuardStyle,
    pub header: bool,
    pub guard_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            dialect: "cpp".into(),
            guard: GuardStyle::Pragma,
            header: true,
            guard_name: DEFAULT_GUARD_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Create missing parent directories for rendered files.
    pub create_dirs: bool,
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).required(true)),
            None => builder
                .add_source(File::from(Self::config_path()).required(false))
                .add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.enclose.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "enclose", "enclose")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The dialect to emit with: configuration defaults overridden by flags.
    pub fn resolve_dialect(&self, flags: &EmitArgs) -> Result<Dialect, DomainError> {
        let name = flags.dialect.as_deref().unwrap_or(&self.defaults.dialect);
        let guard = flags.guard.map(GuardStyle::from).unwrap_or(self.defaults.guard);
        let guard_name = flags
            .guard_name
            .clone()
            .unwrap_or_else(|| self.defaults.guard_name.clone());

        Dialect::named(name)?
            .with_guard(guard)
            .with_header(self.defaults.header && !flags.no_header)
            .with_guard_name(guard_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GuardArg;

    #[test]
    fn default_dialect_is_cpp() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.dialect, "cpp");
        assert!(cfg.defaults.header);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enclose.toml");
        std::fs::write(
            &path,
            "[defaults]\ndialect = \"c\"\nguard = \"ifndef\"\n\n[layout]\nindent = \"  \"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.dialect, "c");
        assert_eq!(cfg.defaults.guard, GuardStyle::Ifndef);
        assert_eq!(cfg.layout.indent, "  ");
        // untouched keys keep their defaults
        assert_eq!(cfg.layout.delimiter, "\t");
        assert_eq!(cfg.defaults.guard_name, DEFAULT_GUARD_NAME);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn defaults_roundtrip_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.layout, LayoutOptions::default());
        assert_eq!(parsed.defaults.guard, GuardStyle::Pragma);
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = AppConfig::default();
        let flags = EmitArgs {
            dialect: Some("c".into()),
            guard: Some(GuardArg::Ifndef),
            guard_name: Some("MY_H".into()),
            no_header: false,
        };
        let dialect = cfg.resolve_dialect(&flags).unwrap();
        assert_eq!(dialect.name(), "c");
        assert_eq!(dialect.guard(), GuardStyle::Ifndef);
        assert_eq!(dialect.guard_name(), "MY_H");
        assert!(dialect.is_header());
    }

    #[test]
    fn no_header_flag_wins() {
        let dialect = AppConfig::default()
            .resolve_dialect(&EmitArgs {
                no_header: true,
                ..EmitArgs::default()
            })
            .unwrap();
        assert!(!dialect.is_header());
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let flags = EmitArgs {
            dialect: Some("rust".into()),
            ..EmitArgs::default()
        };
        assert!(matches!(
            AppConfig::default().resolve_dialect(&flags),
            Err(DomainError::UnknownDialect(_))
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
