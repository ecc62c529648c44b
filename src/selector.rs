//! Selector expression construction.
//!
//! Every named query on [`crate::DocumentQuery`] is assembled here as a CSS
//! selector string and compiled through [`compile`] before evaluation.
//!
//! Caller-supplied fragments fall into two classes with different handling:
//!
//! - **Value literals** (attribute values, class names, ids) are routed
//!   through [`escape_value`], so quote characters and backslashes match
//!   literally instead of corrupting the expression.
//! - **Structural fragments** (tag names, attribute names) are interpolated
//!   verbatim. A metacharacter in a structural position makes the expression
//!   fail to compile, which surfaces as [`Error::QueryError`] — it can never
//!   silently change what the query matches.

use dom_query::Matcher;

use crate::error::{Error, Result};

/// Compile a selector expression, mapping compile failure to `QueryError`.
///
/// An invalid expression is reported distinctly from "no matches": the former
/// is an `Err`, the latter an empty selection from the evaluator.
pub(crate) fn compile(expression: &str) -> Result<Matcher> {
    Matcher::new(expression).map_err(|_| Error::QueryError(expression.to_string()))
}

/// Escape a value literal for use inside a single-quoted CSS string.
///
/// Backslashes and single quotes are escaped, and literal newlines become the
/// `\A` escape sequence (an unescaped newline is invalid inside a CSS string).
#[must_use]
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\A "),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// All elements with the given tag name, anywhere in the tree.
#[must_use]
pub fn by_tag(tag: &str) -> String {
    tag.to_string()
}

/// Elements of `tag` whose `attr` exactly equals `value`.
#[must_use]
pub fn by_attr(tag: &str, attr: &str, value: &str) -> String {
    format!("{tag}[{attr}='{}']", escape_value(value))
}

/// Elements of `tag` whose `attr` contains `fragment` as a substring.
#[must_use]
pub fn by_attr_containing(tag: &str, attr: &str, fragment: &str) -> String {
    format!("{tag}[{attr}*='{}']", escape_value(fragment))
}

/// The n-th `child` element (1-indexed, counted per parent among siblings of
/// the same tag) under any `parent` element.
#[must_use]
pub fn nth_child(parent: &str, child: &str, n: usize) -> String {
    format!("{parent} > {child}:nth-of-type({n})")
}

/// Any element whose `class` attribute exactly equals `class`.
///
/// Exact attribute equality, not space-separated token membership: an element
/// with `class="a b"` does not match a query for `a`.
#[must_use]
pub fn by_class(class: &str) -> String {
    format!("[class='{}']", escape_value(class))
}

/// Any element whose `id` attribute exactly equals `id`.
#[must_use]
pub fn by_id(id: &str) -> String {
    format!("[id='{}']", escape_value(id))
}

/// Any element whose `data-{name}` attribute exactly equals `value`.
#[must_use]
pub fn by_data_attr(name: &str, value: &str) -> String {
    format!("[data-{name}='{}']", escape_value(value))
}

/// Any element whose `name` attribute exactly equals `name`.
#[must_use]
pub fn by_name(name: &str) -> String {
    format!("[name='{}']", escape_value(name))
}
