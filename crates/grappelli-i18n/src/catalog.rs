//! Message catalog storage and the catalog-backed translation engine.

use std::collections::HashMap;

use crate::translator::Translator;

/// A message catalog containing translations for a single locale.
///
/// Stores simple, plural, contextual, and contextual-plural messages.
/// Plural lookups select a form index using language-family rules keyed
/// off the catalog's locale tag.
///
/// # Example
/// ```
/// use grappelli_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add("Hello", "Bonjour");
/// catalog.add_plural("item", vec!["article".into(), "articles".into()]);
///
/// assert_eq!(catalog.get("Hello"), Some(&"Bonjour".to_string()));
/// assert_eq!(catalog.get_plural("item", 1), Some(&"article".to_string()));
/// assert_eq!(catalog.get_plural("item", 5), Some(&"articles".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
	plurals: HashMap<String, Vec<String>>,
	contexts: HashMap<(String, String), String>,
	context_plurals: HashMap<(String, String), Vec<String>>,
}

impl MessageCatalog {
	/// Creates an empty catalog for the given locale.
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			..Self::default()
		}
	}

	/// Returns the locale tag this catalog was built for.
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Adds a simple translation.
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Adds a plural translation. The singular key is stored as-is; `forms`
	/// holds one entry per plural form of the locale.
	pub fn add_plural(&mut self, singular: impl Into<String>, forms: Vec<String>) {
		self.plurals.insert(singular.into(), forms);
	}

	/// Adds a context-qualified translation.
	pub fn add_context(
		&mut self,
		context: impl Into<String>,
		message: impl Into<String>,
		translation: impl Into<String>,
	) {
		self.contexts
			.insert((context.into(), message.into()), translation.into());
	}

	/// Adds a context-qualified plural translation.
	pub fn add_context_plural(
		&mut self,
		context: impl Into<String>,
		singular: impl Into<String>,
		forms: Vec<String>,
	) {
		self.context_plurals
			.insert((context.into(), singular.into()), forms);
	}

	/// Looks up a simple translation.
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Looks up a plural translation, selecting the form for `count`.
	pub fn get_plural(&self, singular: &str, count: u64) -> Option<&String> {
		let forms = self.plurals.get(singular)?;
		forms.get(self.plural_form(count))
	}

	/// Looks up a context-qualified translation.
	pub fn get_context(&self, context: &str, message: &str) -> Option<&String> {
		self.contexts
			.get(&(context.to_string(), message.to_string()))
	}

	/// Looks up a context-qualified plural translation.
	pub fn get_context_plural(&self, context: &str, singular: &str, count: u64) -> Option<&String> {
		let forms = self
			.context_plurals
			.get(&(context.to_string(), singular.to_string()))?;
		forms.get(self.plural_form(count))
	}

	/// Selects the plural form index for `count` under this catalog's locale.
	///
	/// Covers the major language families:
	/// - single-form languages (ja, zh, ko, vi, th, id, ms, tr, fa): index 0
	/// - French and Brazilian Portuguese: 0 and 1 singular, 2+ plural
	/// - East Slavic and former-Yugoslav 3-form rules (ru, uk, be, sr, hr, bs)
	/// - Polish and Czech/Slovak 3-form rules
	/// - Arabic 6-form rules
	/// - Germanic-style default (en, de, nl, ...): 1 singular, rest plural
	fn plural_form(&self, count: u64) -> usize {
		let lang = self.locale.split(['-', '_']).next().unwrap_or(&self.locale);

		match lang {
			"ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "tr" | "fa" => 0,

			"fr" => usize::from(count > 1),

			"pt" => {
				let brazilian =
					self.locale.starts_with("pt_BR") || self.locale.starts_with("pt-BR");
				if brazilian {
					usize::from(count > 1)
				} else {
					usize::from(count != 1)
				}
			}

			// n%10==1 && n%100!=11 -> 0; n%10 in 2..=4 outside teens -> 1; else 2
			"ru" | "uk" | "be" | "sr" | "hr" | "bs" => {
				let n100 = count % 100;
				let n10 = count % 10;
				if n10 == 1 && n100 != 11 {
					0
				} else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
					1
				} else {
					2
				}
			}

			// Like the East Slavic rule except exactly 1 takes the first form.
			"pl" => {
				let n100 = count % 100;
				let n10 = count % 10;
				if count == 1 {
					0
				} else if (2..=4).contains(&n10) && !(10..20).contains(&n100) {
					1
				} else {
					2
				}
			}

			"cs" | "sk" => {
				if count == 1 {
					0
				} else if (2..=4).contains(&count) {
					1
				} else {
					2
				}
			}

			// zero, one, two, few (3-10), many (11-99), other
			"ar" => {
				let n100 = count % 100;
				match count {
					0 => 0,
					1 => 1,
					2 => 2,
					_ if (3..=10).contains(&n100) => 3,
					_ if n100 >= 11 => 4,
					_ => 5,
				}
			}

			_ => usize::from(count != 1),
		}
	}
}

/// Translation engine backed by a [`MessageCatalog`].
///
/// Satisfies the [`Translator`] capability: lookups that miss the catalog
/// degrade to the key itself (or to the singular/plural key selected by the
/// `count == 1` rule), so rendering never fails on an untranslated string.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
	catalog: MessageCatalog,
}

impl CatalogTranslator {
	/// Wraps a catalog into a [`Translator`].
	pub fn new(catalog: MessageCatalog) -> Self {
		Self { catalog }
	}

	/// Returns the underlying catalog.
	pub fn catalog(&self) -> &MessageCatalog {
		&self.catalog
	}
}

impl Translator for CatalogTranslator {
	fn gettext(&self, key: &str) -> String {
		self.catalog
			.get(key)
			.cloned()
			.unwrap_or_else(|| key.to_string())
	}

	fn ngettext(&self, singular: &str, plural: &str, count: u64) -> String {
		self.catalog
			.get_plural(singular, count)
			.cloned()
			.unwrap_or_else(|| {
				if count == 1 {
					singular.to_string()
				} else {
					plural.to_string()
				}
			})
	}

	fn pgettext(&self, context: &str, key: &str) -> String {
		self.catalog
			.get_context(context, key)
			.cloned()
			.unwrap_or_else(|| key.to_string())
	}

	fn npgettext(&self, context: &str, singular: &str, plural: &str, count: u64) -> String {
		self.catalog
			.get_context_plural(context, singular, count)
			.cloned()
			.unwrap_or_else(|| {
				if count == 1 {
					singular.to_string()
				} else {
					plural.to_string()
				}
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_catalog_basic_lookup() {
		// Arrange
		let mut catalog = MessageCatalog::new("es");
		catalog.add("Good morning", "Buenos días");

		// Act
		let hit = catalog.get("Good morning");
		let miss = catalog.get("Unknown");

		// Assert
		assert_eq!(hit, Some(&"Buenos días".to_string()));
		assert_eq!(miss, None);
	}

	#[rstest]
	fn test_catalog_plural_lookup() {
		// Arrange
		let mut catalog = MessageCatalog::new("fr");
		catalog.add_plural("car", vec!["voiture".into(), "voitures".into()]);

		// Act
		let singular = catalog.get_plural("car", 1);
		let plural = catalog.get_plural("car", 3);

		// Assert
		assert_eq!(singular, Some(&"voiture".to_string()));
		assert_eq!(plural, Some(&"voitures".to_string()));
	}

	#[rstest]
	fn test_catalog_context_lookup() {
		// Arrange: the same source string translates differently per context
		let mut catalog = MessageCatalog::new("de");
		catalog.add_context("menu", "File", "Datei");
		catalog.add_context("verb", "File", "Ablegen");

		// Act / Assert
		assert_eq!(catalog.get_context("menu", "File"), Some(&"Datei".to_string()));
		assert_eq!(catalog.get_context("verb", "File"), Some(&"Ablegen".to_string()));
	}

	#[rstest]
	#[case("en", 1, 0)]
	#[case("en", 0, 1)]
	#[case("en", 2, 1)]
	#[case("de", 1, 0)]
	#[case("de", 2, 1)]
	fn test_plural_form_germanic_default(
		#[case] locale: &str,
		#[case] count: u64,
		#[case] expected: usize,
	) {
		let catalog = MessageCatalog::new(locale);
		assert_eq!(catalog.plural_form(count), expected);
	}

	#[rstest]
	#[case("fr", 0, 0)]
	#[case("fr", 1, 0)]
	#[case("fr", 2, 1)]
	#[case("pt-BR", 0, 0)]
	#[case("pt-BR", 2, 1)]
	#[case("pt", 0, 1)]
	fn test_plural_form_romance(
		#[case] locale: &str,
		#[case] count: u64,
		#[case] expected: usize,
	) {
		let catalog = MessageCatalog::new(locale);
		assert_eq!(catalog.plural_form(count), expected);
	}

	#[rstest]
	#[case(1, 0)]
	#[case(2, 1)]
	#[case(5, 2)]
	#[case(11, 2)] // teens take the third form
	#[case(21, 0)]
	#[case(22, 1)]
	#[case(111, 2)]
	#[case(121, 0)]
	fn test_plural_form_russian(#[case] count: u64, #[case] expected: usize) {
		let catalog = MessageCatalog::new("ru-RU");
		assert_eq!(catalog.plural_form(count), expected);
	}

	#[rstest]
	#[case(1, 0)]
	#[case(2, 1)]
	#[case(5, 2)]
	#[case(12, 2)]
	#[case(22, 1)]
	#[case(0, 2)]
	fn test_plural_form_polish(#[case] count: u64, #[case] expected: usize) {
		let catalog = MessageCatalog::new("pl");
		assert_eq!(catalog.plural_form(count), expected);
	}

	#[rstest]
	#[case(0, 0)]
	#[case(1, 1)]
	#[case(2, 2)]
	#[case(3, 3)]
	#[case(10, 3)]
	#[case(11, 4)]
	#[case(99, 4)]
	#[case(100, 5)]
	fn test_plural_form_arabic(#[case] count: u64, #[case] expected: usize) {
		let catalog = MessageCatalog::new("ar");
		assert_eq!(catalog.plural_form(count), expected);
	}

	#[rstest]
	#[case("ja", 1)]
	#[case("ja", 5)]
	#[case("zh", 100)]
	#[case("ko", 0)]
	fn test_plural_form_single_form_languages(#[case] locale: &str, #[case] count: u64) {
		let catalog = MessageCatalog::new(locale);
		assert_eq!(catalog.plural_form(count), 0);
	}

	#[rstest]
	fn test_catalog_translator_hits() {
		// Arrange
		let mut catalog = MessageCatalog::new("fr");
		catalog.add("Hello", "Bonjour");
		catalog.add_plural("item", vec!["article".into(), "articles".into()]);
		catalog.add_context("menu", "File", "Fichier");
		catalog.add_context_plural("inbox", "message", vec!["message".into(), "messages".into()]);
		let i18n = CatalogTranslator::new(catalog);

		// Act / Assert
		assert_eq!(i18n.gettext("Hello"), "Bonjour");
		assert_eq!(i18n.ngettext("item", "items", 1), "article");
		assert_eq!(i18n.ngettext("item", "items", 2), "articles");
		assert_eq!(i18n.pgettext("menu", "File"), "Fichier");
		assert_eq!(i18n.npgettext("inbox", "message", "messages", 5), "messages");
	}

	#[rstest]
	fn test_catalog_translator_degrades_to_keys() {
		// Arrange: empty catalog, every lookup misses
		let i18n = CatalogTranslator::new(MessageCatalog::new("en"));

		// Act / Assert: misses echo the key rather than failing
		assert_eq!(i18n.gettext("Save"), "Save");
		assert_eq!(i18n.ngettext("item", "items", 1), "item");
		assert_eq!(i18n.ngettext("item", "items", 4), "items");
		assert_eq!(i18n.pgettext("menu", "File"), "File");
		assert_eq!(i18n.npgettext("menu", "entry", "entries", 2), "entries");
	}
}
