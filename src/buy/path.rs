//! Endpoint path templates.
//!
//! Endpoints are written as templates with `{name}` placeholders, e.g.
//! `api/apps/{app_id}/product_listings.json`. A [`PathTemplate`] is resolved
//! against a [`PathParams`] built once from the client configuration. Every
//! placeholder must have a value; a missing one is reported as
//! [`TemplateError::UnresolvedPlaceholder`] instead of being left in the path.
//!
//! # Example
//!
//! ```rust
//! use shopify_buy::buy::{PathParams, PathTemplate};
//!
//! const LISTINGS: PathTemplate = PathTemplate::new("api/apps/{app_id}/product_listings.json");
//!
//! let params = PathParams::new().with("app_id", "8");
//! assert_eq!(
//!     LISTINGS.resolve(&params).unwrap(),
//!     "api/apps/8/product_listings.json"
//! );
//! ```

use std::collections::HashMap;

use crate::buy::TemplateError;

/// Values for the placeholders of a [`PathTemplate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(HashMap<&'static str, String>);

impl PathParams {
    /// Creates an empty set of parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `name`, replacing any previous one.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.insert(name, value.into());
        self
    }

    /// Returns the value for `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// An endpoint path with `{name}` placeholders.
///
/// This is a `const fn` type so endpoints can be declared as constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplate {
    template: &'static str,
}

impl PathTemplate {
    /// Creates a new template. The template is parsed when resolved.
    #[must_use]
    pub const fn new(template: &'static str) -> Self {
        Self { template }
    }

    /// Returns the raw template text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.template
    }

    /// Returns the placeholder names in order of appearance.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Malformed`] if the template cannot be parsed.
    pub fn placeholders(&self) -> Result<Vec<&'static str>, TemplateError> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect())
    }

    /// Substitutes every placeholder with its value from `params`.
    ///
    /// Values are inserted verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnresolvedPlaceholder`] for the first
    /// placeholder without a value, or [`TemplateError::Malformed`] if the
    /// template cannot be parsed.
    pub fn resolve(&self, params: &PathParams) -> Result<String, TemplateError> {
        let mut resolved = String::with_capacity(self.template.len());

        for segment in self.segments()? {
            match segment {
                Segment::Literal(text) => resolved.push_str(text),
                Segment::Placeholder(name) => {
                    let value = params.get(name).ok_or_else(|| {
                        TemplateError::UnresolvedPlaceholder {
                            template: self.template.to_string(),
                            placeholder: name.to_string(),
                        }
                    })?;
                    resolved.push_str(value);
                }
            }
        }

        Ok(resolved)
    }

    fn segments(&self) -> Result<Vec<Segment<'static>>, TemplateError> {
        let malformed = || TemplateError::Malformed {
            template: self.template.to_string(),
        };

        let mut segments = Vec::new();
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            let (literal, after) = rest.split_at(open);
            if literal.contains('}') {
                return Err(malformed());
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal));
            }

            let close = after.find('}').ok_or_else(malformed)?;
            let name = &after[1..close];
            if name.is_empty() || name.contains('{') {
                return Err(malformed());
            }
            segments.push(Segment::Placeholder(name));
            rest = &after[close + 1..];
        }

        if rest.contains('}') {
            return Err(malformed());
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Ok(segments)
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PathTemplate>();
    assert_send_sync::<PathParams>();
};
