// ABOUTME: Element accessor utilities: null-safe text and attribute extraction from DOM nodes.
// ABOUTME: The only sanctioned way field extractors touch a node; absence or failure yields the default.

//! Element accessor utilities.
//!
//! Every lookup here is total: an absent node, an invalid selector, or a
//! missing attribute returns the caller-supplied default instead of
//! failing. Field extractors are built on top of these so null-safety
//! lives in one place.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Compile a CSS selector, logging and returning `None` when it is invalid.
fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            debug!(selector = css, error = %e, "invalid CSS selector");
            None
        }
    }
}

/// Find the first element matching `css` in the document.
pub fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = compile(css)?;
    doc.select(&sel).next()
}

/// Find the first element matching `css` inside `scope`.
pub fn select_first_in<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let sel = compile(css)?;
    scope.select(&sel).next()
}

/// Extract the trimmed text content of a possibly-absent node.
///
/// Returns `default` when the node is absent or its text is empty after
/// trimming. Pure function of its inputs.
pub fn element_text(el: Option<ElementRef<'_>>, default: &str) -> String {
    match el {
        Some(el) => {
            let text: String = el.text().collect();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => default.to_string(),
    }
}

/// Extract a named attribute from a possibly-absent node.
///
/// Returns `default` when the node is absent or does not carry the
/// attribute.
pub fn element_attr(el: Option<ElementRef<'_>>, attr: &str, default: &str) -> String {
    el.and_then(|el| el.value().attr(attr))
        .map(|v| v.to_string())
        .unwrap_or_else(|| default.to_string())
}
