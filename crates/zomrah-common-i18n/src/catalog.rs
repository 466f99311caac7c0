// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation catalogs: per-language key/text sets and the string table.
//!
//! Catalogs are flat TOML files, one per language, where every entry is
//! `key = "display text"`. The Arabic and English catalogs are compiled into
//! the crate; further catalogs can be merged in from a directory at startup.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::CatalogError;
use crate::locale::locale_info;

const AR_CATALOG: &str = include_str!("../locales/ar.toml");
const EN_CATALOG: &str = include_str!("../locales/en.toml");

const BUILTIN_CATALOGS: &[(&str, &str)] = &[("ar", AR_CATALOG), ("en", EN_CATALOG)];

static BUILTIN: Lazy<Arc<StringTable>> = Lazy::new(|| {
	let mut table = StringTable::new();

	for (code, source) in BUILTIN_CATALOGS {
		let name = locale_info(code).map_or(*code, |info| info.name);
		match TranslationSet::from_toml_str(source) {
			Ok(set) => {
				tracing::debug!(locale = code, keys = set.len(), "loaded built-in catalog");
				table.insert(*code, set);
			}
			Err(e) => {
				tracing::error!(locale = code, error = %e, "Failed to parse {name} translation catalog");
			}
		}
	}

	Arc::new(table)
});

/// The complete key to display-text mapping for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSet {
	entries: HashMap<String, String>,
}

impl TranslationSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a flat `key = "text"` TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
		let entries: HashMap<String, String> = toml::from_str(source)?;
		Ok(Self { entries })
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
		self.entries.insert(key.into(), text.into());
	}

	/// Keys defined by this set, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Overwrite entries in `self` with those from `other`.
	pub fn merge(&mut self, other: TranslationSet) {
		self.entries.extend(other.entries);
	}
}

impl<K, V> FromIterator<(K, V)> for TranslationSet
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// Mapping from language identifier to its [`TranslationSet`].
///
/// Every set is expected to define the same keys; [`StringTable::check_parity`]
/// reports the ones that don't.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
	sets: HashMap<String, TranslationSet>,
}

impl StringTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// The compiled-in Arabic and English catalogs, parsed once per process.
	pub fn builtin() -> Arc<StringTable> {
		Arc::clone(&BUILTIN)
	}

	pub fn insert(&mut self, language: impl Into<String>, set: TranslationSet) {
		self.sets.insert(language.into(), set);
	}

	pub fn get(&self, language: &str) -> Option<&TranslationSet> {
		self.sets.get(language)
	}

	pub fn contains_language(&self, language: &str) -> bool {
		self.sets.contains_key(language)
	}

	/// Look up `key` in the set for `language`, without any fallback.
	pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
		self.sets.get(language).and_then(|set| set.get(key))
	}

	/// Known language identifiers, sorted.
	pub fn languages(&self) -> Vec<&str> {
		let mut languages: Vec<&str> = self.sets.keys().map(String::as_str).collect();
		languages.sort_unstable();
		languages
	}

	/// Merge every `<language>.toml` file in `dir` into the table.
	///
	/// Entries in a file override existing entries for the same language and
	/// key; languages not yet in the table are added. Files without a `.toml`
	/// extension are ignored. Returns the number of catalog files merged.
	pub fn extend_from_dir(&mut self, dir: &Path) -> Result<usize, CatalogError> {
		let read_dir = std::fs::read_dir(dir).map_err(|e| CatalogError::Io {
			path: dir.to_path_buf(),
			source: e,
		})?;

		let mut paths = Vec::new();
		for entry in read_dir {
			let entry = entry.map_err(|e| CatalogError::Io {
				path: dir.to_path_buf(),
				source: e,
			})?;
			let path = entry.path();
			if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
				paths.push(path);
			}
		}
		paths.sort();

		for path in &paths {
			let language = path
				.file_stem()
				.and_then(|stem| stem.to_str())
				.filter(|stem| is_language_identifier(stem))
				.ok_or_else(|| CatalogError::InvalidFileName(path.clone()))?
				.to_string();

			let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
				path: path.clone(),
				source: e,
			})?;
			let set = TranslationSet::from_toml_str(&content).map_err(|e| CatalogError::TomlParse {
				path: path.clone(),
				source: e,
			})?;

			tracing::debug!(
				path = %path.display(),
				locale = %language,
				keys = set.len(),
				"merging catalog file"
			);
			self.sets.entry(language).or_default().merge(set);
		}

		Ok(paths.len())
	}

	/// Keys each language lacks relative to the union of all sets.
	///
	/// Languages with a complete set are omitted, so an empty map means the
	/// table is consistent.
	pub fn missing_keys(&self) -> BTreeMap<String, Vec<String>> {
		let all_keys: BTreeSet<&str> = self.sets.values().flat_map(|set| set.keys()).collect();

		self
			.sets
			.iter()
			.filter_map(|(language, set)| {
				let missing: Vec<String> = all_keys
					.iter()
					.filter(|key| !set.contains_key(key))
					.map(|key| key.to_string())
					.collect();
				(!missing.is_empty()).then(|| (language.clone(), missing))
			})
			.collect()
	}

	/// Fails with the first (alphabetically) language that lacks keys.
	pub fn check_parity(&self) -> Result<(), CatalogError> {
		match self.missing_keys().into_iter().next() {
			Some((language, missing)) => Err(CatalogError::MissingKeys { language, missing }),
			None => Ok(()),
		}
	}
}

fn is_language_identifier(s: &str) -> bool {
	!s.is_empty()
		&& s
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
