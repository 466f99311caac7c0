// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the Zomrah chat widget.
//!
//! This crate provides the Arabic/English string table used by the widget and
//! a [`LocalizationStore`] that tracks the active language. Switching the
//! language updates the document direction (right-to-left for Arabic,
//! left-to-right for everything else) and notifies subscribed listeners.
//!
//! Lookups never fail: a key with no translation in the active language is
//! returned as-is.
//!
//! # Example
//!
//! ```
//! use zomrah_common_i18n::{Direction, LocalizationStore};
//!
//! let mut store = LocalizationStore::new();
//! let id = store.subscribe(|event| {
//!     println!("language is now {} ({})", event.language, event.direction);
//! });
//!
//! store.set_language("en");
//! assert_eq!(store.translate("chat_title"), "Chat with Zomrah 🩸");
//! assert_eq!(store.presentation().dir, Direction::Ltr);
//!
//! store.unsubscribe(id);
//! ```

mod catalog;
pub mod config;
mod error;
mod events;
mod locale;
mod presentation;
mod resolve;
mod store;

pub use catalog::{StringTable, TranslationSet};
pub use config::{load_config, I18nConfig, I18nConfigLayer};
pub use error::{CatalogError, ConfigError};
pub use events::{LanguageChanged, ListenerId, Listeners};
pub use locale::{
	available_locales, direction_for, is_rtl, is_supported, locale_info, Direction, LocaleInfo,
};
pub use presentation::Presentation;
pub use resolve::resolve_locale;
pub use store::LocalizationStore;

pub use locale::{DEFAULT_LOCALE, LOCALES, RTL_LOCALE};
