//! Core component trait for the rendered tree.

use std::collections::HashMap;

/// Base interface for all UI components.
///
/// Components encapsulate their inputs as fields and their output as a
/// rendered HTML string. Rendering is synchronous and happens inside a
/// single render pass on the rendering thread.
///
/// # Example
/// ```
/// use grappelli_pages::Component;
///
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn name(&self) -> &str {
///         "Greeting"
///     }
///
///     fn render(&self) -> String {
///         format!("<div>Hello, {}!</div>", self.name)
///     }
/// }
///
/// let greeting = Greeting { name: "Ada".into() };
/// assert_eq!(greeting.render(), "<div>Hello, Ada!</div>");
/// ```
pub trait Component: Send + Sync {
	/// Display name used for debugging and diagnostics.
	///
	/// Components that do not override this report a generic placeholder.
	fn name(&self) -> &str {
		"Component"
	}

	/// Renders the component to an HTML string.
	fn render(&self) -> String;

	/// CSS classes attached to the component.
	fn classes(&self) -> Vec<String> {
		vec![]
	}

	/// HTML attributes attached to the component.
	fn attributes(&self) -> HashMap<String, String> {
		HashMap::new()
	}

	/// Child components, if any.
	fn children(&self) -> &[Box<dyn Component>] {
		&[]
	}

	/// Renders all children in order.
	fn render_children(&self) -> String {
		self.children().iter().map(|c| c.render()).collect()
	}
}
