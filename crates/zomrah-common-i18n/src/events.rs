// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language change notifications.
//!
//! A [`Listeners`] registry owned by the store delivers a [`LanguageChanged`]
//! event to every subscriber, synchronously and in registration order. There
//! is no acknowledgment and no history: a listener registered after a switch
//! never sees it.

use serde::{Deserialize, Serialize};

use crate::locale::Direction;

/// Emitted once per language switch, after the store state is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageChanged {
	/// The new active language identifier.
	pub language: String,
	/// Direction derived from `language`.
	pub direction: Direction,
}

impl LanguageChanged {
	/// Event name used when forwarding to a hosting environment's event bus.
	pub const EVENT_NAME: &'static str = "langChanged";
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&LanguageChanged) + Send>;

/// Synchronous publish/subscribe registry for [`LanguageChanged`].
#[derive(Default)]
pub struct Listeners {
	entries: Vec<(ListenerId, Listener)>,
	next_id: u64,
}

impl Listeners {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a listener. It will be called for every later publish until
	/// unsubscribed.
	pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
	where
		F: FnMut(&LanguageChanged) + Send + 'static,
	{
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.entries.push((id, Box::new(listener)));
		tracing::trace!(listener = id.0, "language listener subscribed");
		id
	}

	/// Remove a listener. Returns `false` if the id was not registered.
	pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let before = self.entries.len();
		self.entries.retain(|(existing, _)| *existing != id);
		let removed = self.entries.len() != before;
		if removed {
			tracing::trace!(listener = id.0, "language listener unsubscribed");
		}
		removed
	}

	/// Deliver `event` to every listener in registration order.
	pub fn publish(&mut self, event: &LanguageChanged) {
		tracing::trace!(
			language = %event.language,
			listeners = self.entries.len(),
			"publishing {}",
			LanguageChanged::EVENT_NAME
		);
		for (_, listener) in &mut self.entries {
			listener(event);
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl std::fmt::Debug for Listeners {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Listeners")
			.field("len", &self.entries.len())
			.field("next_id", &self.next_id)
			.finish()
	}
}
