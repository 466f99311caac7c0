// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog loading and configuration.

use std::path::PathBuf;

/// Errors raised while loading translation catalogs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	/// I/O error reading a catalog file or directory
	#[error("I/O error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// Catalog file stem is not usable as a language identifier
	#[error("Catalog file name is not a language identifier: {0}")]
	InvalidFileName(PathBuf),

	/// Translation sets do not share the same key set
	#[error("Language '{language}' is missing {} key(s): {}", .missing.len(), .missing.join(", "))]
	MissingKeys {
		language: String,
		missing: Vec<String>,
	},
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// I/O error reading the config file
	#[error("Failed to read config file {path}: {source}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// TOML parsing error
	#[error("TOML parse error in {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// Invalid value
	#[error("Invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },

	/// Catalog overlay referenced by the config could not be loaded
	#[error("Catalog error: {0}")]
	Catalog(#[from] CatalogError),
}

impl ConfigError {
	/// Create an invalid value error
	pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidValue {
			field: field.into(),
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_missing_keys_message() {
		let err = CatalogError::MissingKeys {
			language: "en".to_string(),
			missing: vec!["send".to_string(), "mic".to_string()],
		};
		assert_eq!(
			err.to_string(),
			"Language 'en' is missing 2 key(s): send, mic"
		);
	}

	#[test]
	fn test_invalid_value_message() {
		let err = ConfigError::invalid_value("i18n.default_locale", "must not be empty");
		assert_eq!(
			err.to_string(),
			"Invalid value for i18n.default_locale: must not be empty"
		);
	}

	#[test]
	fn test_catalog_error_converts() {
		let err: ConfigError = CatalogError::InvalidFileName(PathBuf::from(".toml")).into();
		assert!(matches!(err, ConfigError::Catalog(_)));
	}
}
