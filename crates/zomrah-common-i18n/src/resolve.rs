// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Startup locale resolution.

use crate::catalog::StringTable;
use crate::locale::DEFAULT_LOCALE;

/// Resolve the initial locale from a preference and a configured default.
///
/// Resolution order (highest to lowest priority):
/// 1. `preferred` (if the table has a set for it)
/// 2. `configured_default` (if the table has a set for it)
/// 3. [`DEFAULT_LOCALE`] (`"ar"`)
///
/// This only applies when a store is built. Switching languages afterwards
/// accepts any identifier.
///
/// # Example
///
/// ```
/// use zomrah_common_i18n::{resolve_locale, StringTable};
///
/// let table = StringTable::builtin();
/// assert_eq!(resolve_locale(&table, Some("en"), "ar"), "en");
/// assert_eq!(resolve_locale(&table, None, "en"), "en");
/// assert_eq!(resolve_locale(&table, Some("fr"), "de"), "ar");
/// ```
pub fn resolve_locale(table: &StringTable, preferred: Option<&str>, configured_default: &str) -> String {
	if let Some(locale) = preferred {
		if table.contains_language(locale) {
			return locale.to_string();
		}
		tracing::debug!(locale, "preferred locale has no catalog, ignoring");
	}

	if table.contains_language(configured_default) {
		return configured_default.to_string();
	}

	DEFAULT_LOCALE.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::TranslationSet;

	#[test]
	fn test_preference_takes_priority() {
		let table = StringTable::builtin();
		assert_eq!(resolve_locale(&table, Some("en"), "ar"), "en");
		assert_eq!(resolve_locale(&table, Some("ar"), "en"), "ar");
	}

	#[test]
	fn test_configured_default_when_no_preference() {
		let table = StringTable::builtin();
		assert_eq!(resolve_locale(&table, None, "en"), "en");
		assert_eq!(resolve_locale(&table, None, "ar"), "ar");
	}

	#[test]
	fn test_fallback_when_preference_unknown() {
		let table = StringTable::builtin();
		assert_eq!(resolve_locale(&table, Some("fr"), "en"), "en");
	}

	#[test]
	fn test_fallback_to_arabic_when_both_unknown() {
		let table = StringTable::builtin();
		assert_eq!(resolve_locale(&table, Some("invalid"), "also_invalid"), "ar");
		assert_eq!(resolve_locale(&table, None, ""), "ar");
		assert_eq!(resolve_locale(&table, Some(""), ""), "ar");
	}

	#[test]
	fn test_overlay_language_is_resolvable() {
		let mut table = (*StringTable::builtin()).clone();
		table.insert("fr", [("send", "Envoyer")].into_iter().collect::<TranslationSet>());
		assert_eq!(resolve_locale(&table, Some("fr"), "ar"), "fr");
	}
}
