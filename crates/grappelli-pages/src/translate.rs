//! Injection adapter wiring a resolved translator into wrapped components.

use std::collections::HashMap;
use std::sync::Arc;

use grappelli_i18n::Translator;

use crate::channel::TranslatorChannel;
use crate::component::Component;

/// A component whose render contract requires a translator.
///
/// This is the "I need a translator" declaration: the translator is a
/// render argument rather than a field, so a fresh value is injected on
/// every render pass and the component itself never resolves one. All
/// other inputs stay ordinary fields.
///
/// # Example
/// ```
/// use grappelli_i18n::Translator;
/// use grappelli_pages::LocalizedComponent;
///
/// struct SaveButton {
///     disabled: bool,
/// }
///
/// impl LocalizedComponent for SaveButton {
///     fn name(&self) -> &str {
///         "SaveButton"
///     }
///
///     fn render(&self, i18n: &dyn Translator) -> String {
///         format!("<button disabled=\"{}\">{}</button>", self.disabled, i18n.gettext("Save"))
///     }
/// }
/// ```
pub trait LocalizedComponent: Send + Sync {
	/// Declared name; the wrapper derives its display name from this.
	/// Components that do not override it report a generic placeholder.
	fn name(&self) -> &str {
		"Component"
	}

	/// Renders with the injected translator.
	fn render(&self, i18n: &dyn Translator) -> String;

	/// CSS classes; forwarded unchanged to the wrapper's surface.
	fn classes(&self) -> Vec<String> {
		vec![]
	}

	/// HTML attributes; forwarded unchanged to the wrapper's surface.
	fn attributes(&self) -> HashMap<String, String> {
		HashMap::new()
	}
}

/// Adapts a bare function into a [`LocalizedComponent`].
///
/// Function components are stateless: the wrap-time distinction between
/// "exposes an instance" and "exposes none" is this type. The instance
/// handle of a wrapped `FunctionComponent` is well defined but inert —
/// there is no component state behind it to reach.
pub struct FunctionComponent<F> {
	render: F,
}

impl<F> FunctionComponent<F>
where
	F: Fn(&dyn Translator) -> String + Send + Sync,
{
	/// Wraps a render function.
	pub fn new(render: F) -> Self {
		Self { render }
	}
}

impl<F> LocalizedComponent for FunctionComponent<F>
where
	F: Fn(&dyn Translator) -> String + Send + Sync,
{
	fn render(&self, i18n: &dyn Translator) -> String {
		(self.render)(i18n)
	}
}

/// Wrapper produced by [`translate`].
///
/// Implements [`Component`] in place of the wrapped value: the translator
/// requirement disappears from the public contract, and two optional
/// inputs appear instead — an explicit override
/// ([`with_translator`](Self::with_translator)) and the instance handle
/// ([`inner`](Self::inner)). Everything else (remaining inputs, classes,
/// attributes) is forwarded unchanged.
pub struct Translated<C> {
	inner: C,
	name: String,
	translator: Option<Arc<dyn Translator>>,
}

/// Wraps a component that requires a translator into one that resolves it
/// automatically.
///
/// Resolution order on every render: the explicit override if one was set,
/// otherwise the ambient channel, otherwise the shared mock fallback. The
/// wrapped component always receives a non-null translator.
///
/// Wrapping is idempotent in the sense that two calls produce two fully
/// independent wrappers; no state is shared between them. The wrapper's
/// display name is derived once, deterministically, as
/// `translate(<inner name>)`.
pub fn translate<C: LocalizedComponent>(component: C) -> Translated<C> {
	let name = format!("translate({})", component.name());
	Translated {
		inner: component,
		name,
		translator: None,
	}
}

/// Convenience for wrapping a stateless render function directly.
///
/// # Example
/// ```
/// use grappelli_pages::{Component, translate_fn};
///
/// let fake = translate_fn(|i18n| format!("<span>{}</span>", i18n.gettext("Fake")));
/// assert_eq!(fake.name(), "translate(Component)");
/// assert_eq!(fake.render(), "<span>Fake</span>");
/// ```
pub fn translate_fn<F>(render: F) -> Translated<FunctionComponent<F>>
where
	F: Fn(&dyn Translator) -> String + Send + Sync,
{
	translate(FunctionComponent::new(render))
}

impl<C: LocalizedComponent> Translated<C> {
	/// Sets an explicit translator for this wrapper.
	///
	/// The override always wins over the ambient channel, on every render,
	/// regardless of what providers enclose the wrapper.
	pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = Some(translator);
		self
	}

	/// Instance handle to the wrapped component.
	///
	/// For an ordinary struct component this exposes the same methods as
	/// the unwrapped value. For a [`FunctionComponent`] the handle is
	/// inert: it is safe to hold but exposes no component state.
	pub fn inner(&self) -> &C {
		&self.inner
	}

	/// Mutable instance handle to the wrapped component.
	pub fn inner_mut(&mut self) -> &mut C {
		&mut self.inner
	}

	/// The translator this wrapper would inject if rendered now: the
	/// explicit override when present, else the ambient channel value.
	pub fn resolved_translator(&self) -> Arc<dyn Translator> {
		match &self.translator {
			Some(explicit) => explicit.clone(),
			None => TranslatorChannel::current(),
		}
	}
}

impl<C: LocalizedComponent> Component for Translated<C> {
	fn name(&self) -> &str {
		&self.name
	}

	fn render(&self) -> String {
		let i18n = self.resolved_translator();
		tracing::trace!(component = %self.name, "injecting resolved translator");
		self.inner.render(i18n.as_ref())
	}

	fn classes(&self) -> Vec<String> {
		self.inner.classes()
	}

	fn attributes(&self) -> HashMap<String, String> {
		self.inner.attributes()
	}
}
