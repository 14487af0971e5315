//! Scoped provider establishing a translator for its subtree.

use std::sync::Arc;

use grappelli_i18n::Translator;

use crate::channel::TranslatorChannel;
use crate::component::Component;

/// Makes its translator the ambient channel value for exactly the children
/// it wraps, for as long as the render of that subtree lasts.
///
/// The translator is required at construction; there is no runtime fallback
/// for a misused provider. Descendants that read the channel during a
/// render of this subtree observe this provider's value (the innermost
/// provider wins when providers nest). Swapping the translator with
/// [`set_translator`](Self::set_translator) takes effect on the next render
/// pass.
///
/// # Example
/// ```
/// use grappelli_i18n::mock_translator;
/// use grappelli_pages::{Component, TranslatorProvider, translate_fn};
///
/// let tree = TranslatorProvider::new(mock_translator())
///     .child(translate_fn(|i18n| format!("<span>{}</span>", i18n.gettext("Hi"))));
///
/// assert_eq!(tree.render(), "<span>Hi</span>");
/// ```
pub struct TranslatorProvider {
	translator: Arc<dyn Translator>,
	children: Vec<Box<dyn Component>>,
}

impl TranslatorProvider {
	/// Creates a provider for the given translator.
	pub fn new(translator: Arc<dyn Translator>) -> Self {
		Self {
			translator,
			children: Vec::new(),
		}
	}

	/// Appends a child to the provided subtree.
	pub fn child(mut self, child: impl Component + 'static) -> Self {
		self.children.push(Box::new(child));
		self
	}

	/// The translator this provider installs.
	pub fn translator(&self) -> &Arc<dyn Translator> {
		&self.translator
	}

	/// Replaces the provided translator. Descendants observe the new value
	/// on the next render pass.
	pub fn set_translator(&mut self, translator: Arc<dyn Translator>) {
		self.translator = translator;
	}
}

impl Component for TranslatorProvider {
	fn name(&self) -> &str {
		"TranslatorProvider"
	}

	fn render(&self) -> String {
		// The guard scopes the channel entry to this render pass; it pops
		// on drop, reverting descendants outside the subtree to whatever
		// enclosed this provider.
		let _scope = TranslatorChannel::enter(self.translator.clone());
		tracing::debug!(children = self.children.len(), "rendering provided subtree");
		self.render_children()
	}

	fn children(&self) -> &[Box<dyn Component>] {
		&self.children
	}
}
