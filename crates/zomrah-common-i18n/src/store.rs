// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The localization store: active language, lookups and language switching.

use std::sync::Arc;

use crate::catalog::StringTable;
use crate::config::I18nConfig;
use crate::error::CatalogError;
use crate::events::{LanguageChanged, ListenerId, Listeners};
use crate::locale::{Direction, DEFAULT_LOCALE};
use crate::presentation::Presentation;
use crate::resolve::resolve_locale;

/// Holds the active language and resolves display text for it.
///
/// Each instance owns its own state and listener registry; nothing is global
/// except the parsed built-in catalogs, which are shared read-only.
///
/// # Example
///
/// ```
/// use zomrah_common_i18n::{Direction, LocalizationStore};
///
/// let mut store = LocalizationStore::new();
/// assert_eq!(store.translate("send"), "إرسال");
///
/// store.set_language("en");
/// assert_eq!(store.translate("send"), "Send");
/// assert_eq!(store.direction(), Direction::Ltr);
///
/// // Unknown keys come back unchanged.
/// assert_eq!(store.translate("no_such_key"), "no_such_key");
/// ```
#[derive(Debug)]
pub struct LocalizationStore {
	table: Arc<StringTable>,
	active: String,
	presentation: Presentation,
	listeners: Listeners,
}

impl LocalizationStore {
	/// A store over the built-in catalogs, starting in Arabic.
	pub fn new() -> Self {
		Self::with_table(StringTable::builtin(), DEFAULT_LOCALE)
	}

	/// A store over `table`, starting in `language`.
	///
	/// The language is not checked against the table and no event is emitted.
	pub fn with_table(table: Arc<StringTable>, language: impl Into<String>) -> Self {
		let active = language.into();
		let presentation = Presentation::for_language(active.clone());
		Self {
			table,
			active,
			presentation,
			listeners: Listeners::new(),
		}
	}

	/// Build a store from configuration.
	///
	/// Catalogs in `catalog_dir` are merged over the built-in ones. Key sets
	/// that drift apart are logged, not rejected. The starting language is
	/// `default_locale` when the table knows it, otherwise Arabic.
	pub fn from_config(config: &I18nConfig) -> Result<Self, CatalogError> {
		let table = match &config.catalog_dir {
			Some(dir) => {
				let mut table = (*StringTable::builtin()).clone();
				let merged = table.extend_from_dir(dir)?;
				tracing::info!(dir = %dir.display(), files = merged, "loaded catalog overlays");
				Arc::new(table)
			}
			None => StringTable::builtin(),
		};

		for (language, missing) in table.missing_keys() {
			tracing::warn!(
				locale = %language,
				missing = missing.len(),
				keys = ?missing,
				"catalog is missing keys; lookups will fall back to the key"
			);
		}

		let language = resolve_locale(&table, None, &config.default_locale);
		if language != config.default_locale {
			tracing::warn!(
				configured = %config.default_locale,
				using = %language,
				"configured default locale has no catalog"
			);
		}

		Ok(Self::with_table(table, language))
	}

	/// The active language identifier.
	pub fn active_language(&self) -> &str {
		&self.active
	}

	/// Text direction of the active language.
	pub fn direction(&self) -> Direction {
		self.presentation.dir
	}

	/// Document `lang`/`dir` attributes for the active language.
	pub fn presentation(&self) -> &Presentation {
		&self.presentation
	}

	pub fn table(&self) -> &StringTable {
		&self.table
	}

	/// Switch the active language.
	///
	/// Any identifier is accepted, including ones with no catalog. The
	/// presentation attributes are updated before listeners are notified, so a
	/// listener that reads the event sees the already-switched state.
	pub fn set_language(&mut self, language: impl Into<String>) {
		let language = language.into();
		tracing::debug!(
			from = %self.active,
			to = %language,
			known = self.table.contains_language(&language),
			"switching language"
		);

		self.active = language;
		self.presentation = Presentation::for_language(self.active.clone());

		let event = LanguageChanged {
			language: self.active.clone(),
			direction: self.presentation.dir,
		};
		self.listeners.publish(&event);
	}

	/// Display text for `key` in the active language.
	///
	/// Falls back to `key` itself when the active language has no catalog,
	/// the key is absent, or the stored text is empty.
	pub fn translate(&self, key: &str) -> String {
		match self.lookup(key) {
			Some(text) => text.to_string(),
			None => {
				tracing::trace!(locale = %self.active, key, "translation missing, using key");
				key.to_string()
			}
		}
	}

	/// Translate with variable substitution.
	///
	/// Variables use `{name}` syntax in the translated string.
	///
	/// ```
	/// use std::sync::Arc;
	/// use zomrah_common_i18n::{LocalizationStore, StringTable, TranslationSet};
	///
	/// let mut table = StringTable::new();
	/// table.insert(
	///     "en",
	///     [("next_visit", "Next visit: {date}")].into_iter().collect::<TranslationSet>(),
	/// );
	/// let store = LocalizationStore::with_table(Arc::new(table), "en");
	/// assert_eq!(
	///     store.translate_fmt("next_visit", &[("date", "2025-03-01")]),
	///     "Next visit: 2025-03-01"
	/// );
	/// ```
	pub fn translate_fmt(&self, key: &str, args: &[(&str, &str)]) -> String {
		let mut result = self.translate(key);

		for (name, value) in args {
			let placeholder = format!("{{{name}}}");
			result = result.replace(&placeholder, value);
		}

		result
	}

	/// Stored text for `key` in the active language, without fallback.
	pub fn lookup(&self, key: &str) -> Option<&str> {
		self
			.table
			.lookup(&self.active, key)
			.filter(|text| !text.is_empty())
	}

	/// Register a language change listener.
	pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&LanguageChanged) + Send + 'static,
	{
		self.listeners.subscribe(listener)
	}

	/// Remove a listener. Returns `false` if it was not registered.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		self.listeners.unsubscribe(id)
	}
}

impl Default for LocalizationStore {
	fn default() -> Self {
		Self::new()
	}
}
