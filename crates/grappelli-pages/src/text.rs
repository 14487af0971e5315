//! Ready-made localized text leaf.

use grappelli_i18n::Translator;

use crate::translate::LocalizedComponent;

/// Renders a single translated, HTML-escaped string inside a `<span>`.
///
/// Covers the four lookup shapes of the capability: plain, plural (by
/// count), context-qualified, and both combined. Like any other
/// [`LocalizedComponent`] it can be wrapped with
/// [`translate`](crate::translate::translate) or rendered with an engine
/// directly.
///
/// # Example
/// ```
/// use grappelli_pages::{Component, LocalizedText, translate};
///
/// let greeting = translate(LocalizedText::new("Hello"));
/// assert_eq!(greeting.render(), "<span>Hello</span>");
///
/// let items = translate(LocalizedText::new("item").plural("items", 3));
/// assert_eq!(items.render(), "<span>items</span>");
/// ```
pub struct LocalizedText {
	key: String,
	context: Option<String>,
	plural: Option<(String, u64)>,
}

impl LocalizedText {
	/// Creates a text leaf for the given message key.
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			context: None,
			plural: None,
		}
	}

	/// Qualifies the lookup with a gettext context.
	pub fn context(mut self, context: impl Into<String>) -> Self {
		self.context = Some(context.into());
		self
	}

	/// Makes the lookup plural-aware, selecting a form by `count`.
	pub fn plural(mut self, plural_key: impl Into<String>, count: u64) -> Self {
		self.plural = Some((plural_key.into(), count));
		self
	}
}

impl LocalizedComponent for LocalizedText {
	fn name(&self) -> &str {
		"LocalizedText"
	}

	fn render(&self, i18n: &dyn Translator) -> String {
		let resolved = match (&self.context, &self.plural) {
			(None, None) => i18n.gettext(&self.key),
			(Some(ctx), None) => i18n.pgettext(ctx, &self.key),
			(None, Some((plural, count))) => i18n.ngettext(&self.key, plural, *count),
			(Some(ctx), Some((plural, count))) => {
				i18n.npgettext(ctx, &self.key, plural, *count)
			}
		};
		format!("<span>{}</span>", html_escape::encode_text(&resolved))
	}
}
