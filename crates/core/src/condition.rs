//! Attribute-not-exists conditions
//!
//! A [`Condition`] is an ordered conjunction of attribute names, each of which
//! must be absent from the item currently stored at the target key. The empty
//! condition always holds.
//!
//! ## Expression Form
//!
//! Conditions render to, and parse from, the expression syntax of the
//! reference database restricted to a single function and a single connective:
//!
//! ```text
//! attribute_not_exists(pk) AND attribute_not_exists(sk)
//! ```
//!
//! Nothing else is accepted. Comparisons, `OR`, `NOT`, grouping parentheses
//! and other functions are rejected with `Error::UnsupportedExpression`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const FUNCTION: &str = "attribute_not_exists";
const CONJUNCTION: &str = "AND";

/// Ordered list of attribute names that must not exist on the current item
///
/// Order and duplicates are preserved exactly as supplied; both show up in
/// the rendered expression.
///
/// # Examples
///
/// ```
/// use condkv_core::Condition;
///
/// let cond = Condition::attribute_not_exists("pk").and_not_exists("sk");
/// assert_eq!(
///     cond.expression(),
///     "attribute_not_exists(pk) AND attribute_not_exists(sk)"
/// );
/// assert_eq!(Condition::parse(&cond.expression()).unwrap(), cond);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition {
    attributes: Vec<String>,
}

impl Condition {
    /// The empty condition, which always holds
    pub fn none() -> Self {
        Self::default()
    }

    /// Single `attribute_not_exists(name)` term
    pub fn attribute_not_exists(name: impl Into<String>) -> Self {
        Self {
            attributes: vec![name.into()],
        }
    }

    /// Append another `AND attribute_not_exists(name)` term
    pub fn and_not_exists(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Attribute names in caller order
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Check if there are no terms
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Render every term as `attribute_not_exists(<name>)` joined with `" AND "`
    ///
    /// The empty condition renders as the empty string.
    pub fn expression(&self) -> String {
        self.attributes
            .iter()
            .map(|name| format!("{}({})", FUNCTION, name))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", CONJUNCTION))
    }

    /// Parse an `attribute_not_exists(a) AND attribute_not_exists(b)` expression
    ///
    /// Whitespace around terms and inside the parentheses is ignored. `AND`
    /// must be separated from the terms on both sides by whitespace. Blank
    /// input yields the empty condition.
    ///
    /// # Errors
    ///
    /// `UnsupportedExpression` for anything outside the grammar above.
    pub fn parse(expression: &str) -> Result<Self> {
        let unsupported = |reason: &str| Error::UnsupportedExpression {
            expression: expression.to_string(),
            reason: reason.to_string(),
        };

        let mut rest = expression.trim();
        let mut attributes = Vec::new();
        if rest.is_empty() {
            return Ok(Self::none());
        }

        loop {
            rest = rest
                .strip_prefix(FUNCTION)
                .ok_or_else(|| unsupported("expected attribute_not_exists(<name>)"))?
                .trim_start();
            rest = rest
                .strip_prefix('(')
                .ok_or_else(|| unsupported("expected '(' after attribute_not_exists"))?;

            let close = rest
                .find(')')
                .ok_or_else(|| unsupported("unbalanced parentheses"))?;
            let name = rest[..close].trim();
            if name.is_empty() {
                return Err(unsupported("empty attribute name"));
            }
            if name.contains(|c: char| c.is_whitespace() || c == '(' || c == ',') {
                return Err(unsupported("malformed attribute name"));
            }
            attributes.push(name.to_string());

            let after = &rest[close + 1..];
            if after.trim().is_empty() {
                break;
            }
            if !after.starts_with(char::is_whitespace) {
                return Err(unsupported("terms may only be joined with AND"));
            }

            rest = after
                .trim_start()
                .strip_prefix(CONJUNCTION)
                .ok_or_else(|| unsupported("terms may only be joined with AND"))?;
            if rest.trim().is_empty() {
                return Err(unsupported("dangling AND"));
            }
            if !rest.starts_with(char::is_whitespace) {
                return Err(unsupported("terms may only be joined with AND"));
            }
            rest = rest.trim_start();
        }

        Ok(Self { attributes })
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression())
    }
}

impl<S: Into<String>> FromIterator<S> for Condition {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for Condition {
    fn from(names: Vec<S>) -> Self {
        names.into_iter().collect()
    }
}
