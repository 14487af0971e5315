//! Localization dependency injection for a component tree.
//!
//! A single translation engine is placed at the root of a subtree with
//! [`TranslatorProvider`] and propagated implicitly to any descendant that
//! asks for it — no threading of a translator through every layer. The
//! [`translate`] adapter lets any component declare "I need a translator"
//! and receive a resolved, non-null one automatically, while staying
//! composable: other inputs are forwarded unchanged, the wrapped value
//! stays reachable through an instance handle, and an explicit translator
//! can be injected directly, which always wins over the ambient value.
//! When nothing is configured at all, lookups fall back to the inert
//! [`mock_translator`] and never fail.
//!
//! # Example
//! ```
//! use grappelli_i18n::translator_from_catalog;
//! use grappelli_pages::{Component, LocalizedText, TranslatorProvider, translate};
//!
//! let i18n = translator_from_catalog(
//!     r#"{ "locale_data": { "messages": { "Hello": ["Bonjour"] } } }"#,
//! )
//! .unwrap();
//!
//! let tree = TranslatorProvider::new(i18n).child(translate(LocalizedText::new("Hello")));
//! assert_eq!(tree.render(), "<span>Bonjour</span>");
//! ```

pub mod channel;
pub mod component;
pub mod provider;
pub mod text;
pub mod translate;

pub use channel::{TranslatorChannel, use_translator};
pub use component::Component;
pub use provider::TranslatorProvider;
pub use text::LocalizedText;
pub use translate::{FunctionComponent, LocalizedComponent, Translated, translate, translate_fn};

// Re-exported so component code can name the capability and the fallback
// without depending on the i18n crate directly.
pub use grappelli_i18n::{Translator, mock_translator};
