//! Internationalization core for Grappelli.
//!
//! This crate defines the capability contract a translation engine must
//! satisfy ([`Translator`]), a catalog-backed engine ([`MessageCatalog`] plus
//! [`CatalogTranslator`]), a loader for Jed-compatible locale blobs
//! ([`translator_from_catalog`]), and the inert fallback engine
//! ([`mock_translator`]) used whenever nothing real is configured.
//!
//! # How it fits in the system
//! Component code depends only on the [`Translator`] trait. Engines built
//! here are handed to `grappelli-pages`, which propagates them down a
//! component tree; this crate has no knowledge of components or rendering,
//! keeping the localization layer reusable and testable on its own.

pub mod catalog;
pub mod jed;
pub mod translator;

pub use catalog::{CatalogTranslator, MessageCatalog};
pub use jed::{CatalogError, translator_from_catalog, translator_from_value};
pub use translator::{MockTranslator, Translator, mock_translator};
