// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration.
//!
//! Layers are merged in precedence order: built-in defaults, then the
//! `[i18n]` section of a TOML file, then environment variables.
//!
//! ```toml
//! [i18n]
//! default_locale = "ar"
//! catalog_dir = "/etc/zomrah/locales"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::locale::DEFAULT_LOCALE;

/// Environment variable overriding the startup locale.
pub const ENV_DEFAULT_LOCALE: &str = "ZOMRAH_DEFAULT_LOCALE";

/// Environment variable pointing at a directory of `<lang>.toml` catalogs.
pub const ENV_CATALOG_DIR: &str = "ZOMRAH_CATALOG_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
	pub catalog_dir: Option<PathBuf>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.catalog_dir.is_some() {
			self.catalog_dir = other.catalog_dir;
		}
	}

	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let default_locale = self
			.default_locale
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
		if default_locale.trim().is_empty() {
			return Err(ConfigError::invalid_value(
				"i18n.default_locale",
				"must not be empty",
			));
		}

		Ok(I18nConfig {
			default_locale,
			catalog_dir: self.catalog_dir,
		})
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	/// Language the store starts in, if a catalog exists for it.
	pub default_locale: String,
	/// Extra catalogs merged over the built-in ones.
	pub catalog_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE.to_string(),
			catalog_dir: None,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
	#[serde(default)]
	i18n: I18nConfigLayer,
}

/// Read the `[i18n]` section of a TOML file. A missing file yields an empty layer.
pub fn layer_from_file(path: &Path) -> Result<I18nConfigLayer, ConfigError> {
	if !path.exists() {
		debug!(path = %path.display(), "config file not found, skipping");
		return Ok(I18nConfigLayer::default());
	}

	debug!(path = %path.display(), "loading config file");
	let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
		path: path.to_path_buf(),
		source: e,
	})?;

	let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
		path: path.to_path_buf(),
		source: e,
	})?;

	trace!("parsed i18n layer from TOML");
	Ok(file.i18n)
}

/// Read overrides from the process environment.
pub fn layer_from_env() -> I18nConfigLayer {
	layer_from_env_with(|key| std::env::var(key).ok())
}

/// Read overrides through `lookup`. Empty values are treated as unset.
pub fn layer_from_env_with<F>(lookup: F) -> I18nConfigLayer
where
	F: Fn(&str) -> Option<String>,
{
	let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

	I18nConfigLayer {
		default_locale: get(ENV_DEFAULT_LOCALE),
		catalog_dir: get(ENV_CATALOG_DIR).map(PathBuf::from),
	}
}

/// Load configuration from defaults, an optional TOML file and the environment.
pub fn load_config(path: Option<&Path>) -> Result<I18nConfig, ConfigError> {
	let mut layer = I18nConfigLayer::default();

	if let Some(path) = path {
		layer.merge(layer_from_file(path)?);
	}
	layer.merge(layer_from_env());

	let config = layer.finalize()?;
	debug!(
		default_locale = %config.default_locale,
		catalog_dir = ?config.catalog_dir,
		"i18n configuration loaded"
	);
	Ok(config)
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn test_default_layer_finalizes_to_arabic() {
		let config = I18nConfigLayer::default().finalize().unwrap();
		assert_eq!(config, I18nConfig::default());
		assert_eq!(config.default_locale, "ar");
		assert!(config.catalog_dir.is_none());
	}

	#[test]
	fn test_finalize_rejects_empty_locale() {
		let layer = I18nConfigLayer {
			default_locale: Some("  ".to_string()),
			catalog_dir: None,
		};
		assert!(matches!(
			layer.finalize(),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = I18nConfigLayer {
			default_locale: Some("ar".to_string()),
			catalog_dir: Some(PathBuf::from("/old")),
		};
		base.merge(I18nConfigLayer {
			default_locale: Some("en".to_string()),
			catalog_dir: None,
		});
		assert_eq!(base.default_locale.as_deref(), Some("en"));
		assert_eq!(base.catalog_dir, Some(PathBuf::from("/old")));
	}

	#[test]
	fn test_layer_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("zomrah.toml");
		std::fs::write(
			&path,
			"[i18n]\ndefault_locale = \"en\"\ncatalog_dir = \"/srv/locales\"\n",
		)
		.unwrap();

		let layer = layer_from_file(&path).unwrap();
		assert_eq!(layer.default_locale.as_deref(), Some("en"));
		assert_eq!(layer.catalog_dir, Some(PathBuf::from("/srv/locales")));
	}

	#[test]
	fn test_layer_from_file_without_section() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("zomrah.toml");
		std::fs::write(&path, "[other]\nkey = 1\n").unwrap();

		assert_eq!(layer_from_file(&path).unwrap(), I18nConfigLayer::default());
	}

	#[test]
	fn test_layer_from_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let layer = layer_from_file(&dir.path().join("absent.toml")).unwrap();
		assert_eq!(layer, I18nConfigLayer::default());
	}

	#[test]
	fn test_layer_from_malformed_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("zomrah.toml");
		std::fs::write(&path, "[i18n\n").unwrap();

		assert!(matches!(
			layer_from_file(&path),
			Err(ConfigError::TomlParse { .. })
		));
	}

	#[test]
	fn test_layer_from_env_with() {
		let vars: HashMap<&str, &str> = [
			(ENV_DEFAULT_LOCALE, "en"),
			(ENV_CATALOG_DIR, "/opt/zomrah/locales"),
		]
		.into_iter()
		.collect();

		let layer = layer_from_env_with(|key| vars.get(key).map(|v| v.to_string()));
		assert_eq!(layer.default_locale.as_deref(), Some("en"));
		assert_eq!(layer.catalog_dir, Some(PathBuf::from("/opt/zomrah/locales")));
	}

	#[test]
	fn test_empty_env_values_are_unset() {
		let layer = layer_from_env_with(|_| Some(String::new()));
		assert_eq!(layer, I18nConfigLayer::default());
	}

	#[test]
	fn test_env_overrides_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("zomrah.toml");
		std::fs::write(&path, "[i18n]\ndefault_locale = \"en\"\n").unwrap();

		let mut layer = layer_from_file(&path).unwrap();
		layer.merge(layer_from_env_with(|key| {
			(key == ENV_DEFAULT_LOCALE).then(|| "ar".to_string())
		}));

		let config = layer.finalize().unwrap();
		assert_eq!(config.default_locale, "ar");
	}
}
