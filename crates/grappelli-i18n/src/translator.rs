//! The translator capability and its no-op fallback implementation.

use std::sync::Arc;

use once_cell::sync::Lazy;

/// The four-operation lookup contract every translation engine satisfies.
///
/// Implementations must be pure for the duration of a render pass and must
/// never panic: an unknown key degrades to the key itself, and unknown
/// plural forms degrade to the singular key when `count == 1` and the plural
/// key otherwise.
///
/// # Example
/// ```
/// use grappelli_i18n::{Translator, mock_translator};
///
/// let i18n = mock_translator();
/// assert_eq!(i18n.gettext("Save"), "Save");
/// assert_eq!(i18n.ngettext("item", "items", 3), "items");
/// ```
pub trait Translator: Send + Sync {
	/// Looks up the translation for `key`.
	fn gettext(&self, key: &str) -> String;

	/// Looks up the plural-aware translation for `singular`/`plural`,
	/// selecting a form by `count`.
	fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String;

	/// Looks up the translation for `key` qualified by `context`, so the
	/// same source string can translate differently per usage site.
	fn pgettext(&self, context: &str, key: &str) -> String;

	/// Plural-aware, context-qualified lookup.
	fn npgettext(&self, context: &str, singular: &str, plural: &str, count: u64) -> String;
}

impl std::fmt::Debug for dyn Translator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("dyn Translator")
	}
}

/// Inert [`Translator`] used whenever no real engine is configured.
///
/// Every lookup echoes its input: `gettext` returns the key unchanged,
/// the plural operations pick the singular key for `count == 1` and the
/// plural key otherwise, and context is ignored. It holds no state and no
/// resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTranslator;

impl Translator for MockTranslator {
	fn gettext(&self, key: &str) -> String {
		key.to_string()
	}

	fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
		if count == 1 {
			singular.to_string()
		} else {
			plural.to_string()
		}
	}

	fn pgettext(&self, _context: &str, key: &str) -> String {
		key.to_string()
	}

	fn npgettext(&self, _context: &str, singular: &str, plural: &str, count: u64) -> String {
		self.ngettext(singular, plural, count)
	}
}

/// Process-wide fallback instance, constructed once at first use.
static MOCK: Lazy<Arc<MockTranslator>> = Lazy::new(|| Arc::new(MockTranslator));

/// Returns the shared fallback translator.
///
/// Every call returns a clone of the same `Arc`, so `Arc::ptr_eq` holds
/// across call sites. Tests can use it directly as a ready-made stand-in
/// for a real engine.
pub fn mock_translator() -> Arc<dyn Translator> {
	MOCK.clone() as Arc<dyn Translator>
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_mock_gettext_echoes_key() {
		let i18n = MockTranslator;

		assert_eq!(i18n.gettext("txt"), "txt");
		assert_eq!(i18n.gettext(""), "");
	}

	#[rstest]
	#[case(0, "b")]
	#[case(1, "a")]
	#[case(2, "b")]
	#[case(100, "b")]
	fn test_mock_ngettext_counts(#[case] count: u64, #[case] expected: &str) {
		let i18n = MockTranslator;

		assert_eq!(i18n.ngettext("a", "b", count), expected);
	}

	#[rstest]
	fn test_mock_pgettext_ignores_context() {
		let i18n = MockTranslator;

		assert_eq!(i18n.pgettext("ctx", "a"), "a");
	}

	#[rstest]
	#[case(1, "b")]
	#[case(2, "c")]
	fn test_mock_npgettext_counts(#[case] count: u64, #[case] expected: &str) {
		let i18n = MockTranslator;

		assert_eq!(i18n.npgettext("a", "b", "c", count), expected);
	}

	#[rstest]
	fn test_mock_translator_is_shared() {
		// Two lookups of the singleton must be the same allocation, so
		// consumers can rely on reference equality in assertions.
		let first = mock_translator();
		let second = mock_translator();

		assert!(Arc::ptr_eq(&first, &second));
	}
}
