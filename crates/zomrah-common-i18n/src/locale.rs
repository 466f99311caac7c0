// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

use serde::{Deserialize, Serialize};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Left-to-right (e.g., English)
	Ltr,
	/// Right-to-left (Arabic)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the CSS `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_html_dir())
	}
}

/// Metadata about a locale shipped with the built-in catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// ISO 639-1 language code (e.g., "ar", "en")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
	/// Text direction
	pub direction: Direction,
}

/// Locale selected when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "ar";

/// The only identifier rendered right-to-left.
pub const RTL_LOCALE: &str = "ar";

/// Locales with built-in catalogs.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
];

/// Text direction for an arbitrary language identifier.
///
/// Only `ar` maps to [`Direction::Rtl`]; every other identifier, known or not,
/// is left-to-right. Other RTL scripts (Hebrew, Persian, Urdu) are not
/// recognised.
pub fn direction_for(locale: &str) -> Direction {
	if locale == RTL_LOCALE {
		Direction::Rtl
	} else {
		Direction::Ltr
	}
}

/// Check if a locale uses right-to-left text direction.
pub fn is_rtl(locale: &str) -> bool {
	direction_for(locale) == Direction::Rtl
}

/// Get metadata for a locale.
///
/// Returns `None` if the locale has no built-in catalog.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Check if a locale has a built-in catalog.
pub fn is_supported(locale: &str) -> bool {
	LOCALES.iter().any(|l| l.code == locale)
}

/// Get all locales with built-in catalogs.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
