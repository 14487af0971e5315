//! # Grappelli
//!
//! Localization dependency injection for server-rendered component trees.
//!
//! Grappelli lets a tree of UI components consume translated strings
//! without a translation engine being threaded through every layer. One
//! engine is placed at the root of a subtree and propagated implicitly to
//! any descendant that asks for it; a direct input can always override the
//! ambient value, and a no-op fallback guarantees lookups never fail when
//! nothing is configured.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - the component tree: ambient channel, scoped
//!   provider, and the `translate` injection adapter
//!
//! The i18n core (capability trait, catalogs, Jed blob loader, mock
//! engine) is always included.
//!
//! ## Quick Example
//!
//! ```rust
//! use grappelli::prelude::*;
//!
//! let i18n = translator_from_catalog(
//!     r#"{ "locale_data": { "messages": { "Hello": ["Bonjour"] } } }"#,
//! )
//! .unwrap();
//!
//! let tree = TranslatorProvider::new(i18n).child(translate(LocalizedText::new("Hello")));
//! assert_eq!(tree.render(), "<span>Bonjour</span>");
//! ```

pub use grappelli_i18n as i18n;
#[cfg(feature = "pages")]
pub use grappelli_pages as pages;

pub use grappelli_i18n::{
	CatalogError, CatalogTranslator, MessageCatalog, MockTranslator, Translator, mock_translator,
	translator_from_catalog, translator_from_value,
};
#[cfg(feature = "pages")]
pub use grappelli_pages::{
	Component, FunctionComponent, LocalizedComponent, LocalizedText, Translated,
	TranslatorChannel, TranslatorProvider, translate, translate_fn, use_translator,
};

/// Commonly used items, importable in one line.
pub mod prelude {
	pub use crate::{MessageCatalog, Translator, mock_translator, translator_from_catalog};

	#[cfg(feature = "pages")]
	pub use crate::{
		Component, LocalizedComponent, LocalizedText, TranslatorProvider, translate,
		translate_fn, use_translator,
	};
}
