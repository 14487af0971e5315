//! Loader for Jed-compatible locale blobs.
//!
//! A Jed blob is the JSON shape produced by gettext-to-JSON pipelines:
//!
//! ```json
//! {
//!     "domain": "messages",
//!     "language": "en-US",
//!     "locale_data": {
//!         "messages": {
//!             "": { "domain": "messages" },
//!             "Ad Expense": ["Test Ad Expense"],
//!             "Cat": ["Cat", "Cats"]
//!         }
//!     }
//! }
//! ```
//!
//! The empty key holds header metadata and is skipped. One-element arrays
//! are simple messages, longer arrays are plural forms, and keys may carry
//! a gettext context prefix separated by `\u{4}`.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::catalog::{CatalogTranslator, MessageCatalog};
use crate::translator::Translator;

/// Separator between a context prefix and the message id in Jed keys.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// Errors raised while turning a catalog blob into a translator.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("invalid catalog blob: {0}")]
	InvalidBlob(#[from] serde_json::Error),
	#[error("domain {domain:?} missing from locale_data")]
	MissingDomain { domain: String },
	#[error("message {key:?} has no translation forms")]
	EmptyEntry { key: String },
}

#[derive(Debug, Deserialize)]
struct CatalogBlob {
	#[serde(default = "default_domain")]
	domain: String,
	#[serde(default)]
	language: Option<String>,
	#[serde(default)]
	locale: Option<String>,
	locale_data: HashMap<String, HashMap<String, serde_json::Value>>,
}

fn default_domain() -> String {
	"messages".to_string()
}

/// Builds a [`Translator`] from a Jed-compatible JSON string.
///
/// This is the adapter over the external catalog engine: the returned value
/// satisfies the capability contract and can be handed to a provider or used
/// directly.
///
/// # Errors
/// Returns [`CatalogError`] when the blob is not valid JSON, when the
/// declared domain has no entry under `locale_data`, or when a message
/// carries an empty form list.
///
/// # Example
/// ```
/// use grappelli_i18n::translator_from_catalog;
///
/// let blob = r#"{
///     "domain": "messages",
///     "language": "en-US",
///     "locale_data": { "messages": { "": { "domain": "messages" }, "Cat": ["Cat", "Cats"] } }
/// }"#;
///
/// let i18n = translator_from_catalog(blob).unwrap();
/// assert_eq!(i18n.ngettext("Cat", "Cats", 2), "Cats");
/// ```
pub fn translator_from_catalog(blob: &str) -> Result<Arc<dyn Translator>, CatalogError> {
	translator_from_value(serde_json::from_str(blob)?)
}

/// Like [`translator_from_catalog`], for an already-parsed JSON value.
pub fn translator_from_value(value: serde_json::Value) -> Result<Arc<dyn Translator>, CatalogError> {
	let blob: CatalogBlob = serde_json::from_value(value)?;

	let locale = blob
		.language
		.or(blob.locale)
		.unwrap_or_else(|| "en".to_string());
	let messages = blob
		.locale_data
		.get(&blob.domain)
		.ok_or_else(|| CatalogError::MissingDomain {
			domain: blob.domain.clone(),
		})?;

	let mut catalog = MessageCatalog::new(&locale);
	for (key, entry) in messages {
		// The empty key is the gettext header.
		if key.is_empty() {
			continue;
		}
		let Some(forms) = string_forms(entry) else {
			continue;
		};
		if forms.is_empty() {
			return Err(CatalogError::EmptyEntry { key: key.clone() });
		}
		insert_entry(&mut catalog, key, forms);
	}

	Ok(Arc::new(CatalogTranslator::new(catalog)))
}

/// Extracts the translation forms of an entry, or `None` for non-message
/// values such as embedded header objects.
fn string_forms(entry: &serde_json::Value) -> Option<Vec<String>> {
	match entry {
		serde_json::Value::Array(items) => Some(
			items
				.iter()
				.filter_map(|item| item.as_str().map(str::to_string))
				.collect(),
		),
		serde_json::Value::String(single) => Some(vec![single.clone()]),
		_ => None,
	}
}

fn insert_entry(catalog: &mut MessageCatalog, key: &str, forms: Vec<String>) {
	let (context, msgid) = match key.split_once(CONTEXT_SEPARATOR) {
		Some((context, msgid)) => (Some(context), msgid),
		None => (None, key),
	};

	match context {
		None => {
			// gettext of a plural entry resolves to the first form.
			catalog.add(msgid, forms[0].clone());
			if forms.len() > 1 {
				catalog.add_plural(msgid, forms);
			}
		}
		Some(context) => {
			catalog.add_context(context, msgid, forms[0].clone());
			if forms.len() > 1 {
				catalog.add_context_plural(context, msgid, forms);
			}
		}
	}
}
