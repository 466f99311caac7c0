// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Document-level presentation attributes read by layout and styling code.

use serde::{Deserialize, Serialize};

use crate::locale::{direction_for, Direction};

/// The `lang` and `dir` attributes of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
	pub lang: String,
	pub dir: Direction,
}

impl Presentation {
	/// Attributes for `language`, with the direction derived from it.
	pub fn for_language(language: impl Into<String>) -> Self {
		let lang = language.into();
		let dir = direction_for(&lang);
		Self { lang, dir }
	}

	/// Render as HTML attributes, e.g. `lang="ar" dir="rtl"`.
	pub fn html_attributes(&self) -> String {
		format!("lang=\"{}\" dir=\"{}\"", self.lang, self.dir.as_html_dir())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_for_language() {
		assert_eq!(
			Presentation::for_language("ar"),
			Presentation {
				lang: "ar".to_string(),
				dir: Direction::Rtl
			}
		);
		assert_eq!(Presentation::for_language("fr").dir, Direction::Ltr);
	}

	#[test]
	fn test_html_attributes() {
		assert_eq!(
			Presentation::for_language("ar").html_attributes(),
			"lang=\"ar\" dir=\"rtl\""
		);
		assert_eq!(
			Presentation::for_language("en").html_attributes(),
			"lang=\"en\" dir=\"ltr\""
		);
	}
}
