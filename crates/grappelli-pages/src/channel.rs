//! Ambient propagation channel carrying the active translator.
//!
//! The channel is a thread-local stack of translator handles. A provider
//! pushes its translator for exactly the duration of rendering its subtree
//! and pops it on the way out, so a read anywhere inside that subtree
//! observes the innermost enclosing provider's value. Outside any provider
//! the channel yields the shared mock fallback. There is no process-global
//! mutable state: all channel state is confined to the rendering thread.

use std::cell::RefCell;
use std::sync::Arc;

use grappelli_i18n::{Translator, mock_translator};

thread_local! {
	static CHANNEL: RefCell<Vec<Arc<dyn Translator>>> = const { RefCell::new(Vec::new()) };
}

/// The tree-scoped channel holding "the current translator".
///
/// Reading never mutates; writing is restricted to the scoped provider,
/// which holds a [`ChannelGuard`] for the lifetime of its render.
pub struct TranslatorChannel;

impl TranslatorChannel {
	/// Returns the translator installed by the nearest enclosing provider,
	/// or the shared mock fallback when no provider is active.
	///
	/// The result is always non-null; lookups on it never fail.
	pub fn current() -> Arc<dyn Translator> {
		CHANNEL.with(|stack| {
			stack
				.borrow()
				.last()
				.cloned()
				.unwrap_or_else(mock_translator)
		})
	}

	/// True while some provider scopes the current render pass.
	pub fn is_provided() -> bool {
		CHANNEL.with(|stack| !stack.borrow().is_empty())
	}

	/// Installs `translator` as the channel value for the returned guard's
	/// lifetime. Only the provider calls this.
	pub(crate) fn enter(translator: Arc<dyn Translator>) -> ChannelGuard {
		tracing::trace!("installing translator on the ambient channel");
		CHANNEL.with(|stack| stack.borrow_mut().push(translator));
		ChannelGuard { _priv: () }
	}
}

/// Reader hook for components that consume the ambient translator directly
/// instead of going through the injection adapter.
///
/// # Example
/// ```
/// use grappelli_pages::use_translator;
///
/// let i18n = use_translator();
/// assert_eq!(i18n.gettext("Fake"), "Fake"); // no provider: mock fallback
/// ```
pub fn use_translator() -> Arc<dyn Translator> {
	TranslatorChannel::current()
}

/// Restores the previous channel value when dropped, including on unwind.
pub(crate) struct ChannelGuard {
	_priv: (),
}

impl Drop for ChannelGuard {
	fn drop(&mut self) {
		CHANNEL.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}
