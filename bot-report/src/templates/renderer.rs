//! HTML renderer.

use super::{ISSUE_TEMPLATE, PREAMBLE_TEMPLATE, STATUS_TEMPLATE};
use crate::issues::Issue;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (titles and status text are written verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Issue titles go into the report as-is
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renders the HTML fragments of a bot report.
pub struct HtmlRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlRenderer {
    /// Creates a new HTML renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the document preamble: `<html>`, `<head>` with the indentation
    /// styles, and the opening `<body>`.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_preamble(&self, title: &str) -> Result<String, super::TemplateError> {
        self.render_template(PREAMBLE_TEMPLATE, &json!({ "title": title }))
    }

    /// Renders the linked issue line.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue(&self, issue: &Issue) -> Result<String, super::TemplateError> {
        let data = json!({
            "number": issue.number,
            "title": issue.title,
            "html_url": issue.html_url
        });

        self.render_template(ISSUE_TEMPLATE, &data)
    }

    /// Renders a status line, wrapped in a span when `css` is non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_status(&self, text: &str, css: &str) -> Result<String, super::TemplateError> {
        self.render_template(STATUS_TEMPLATE, &json!({ "text": text, "css": css }))
    }

    /// Renders a template with the given data.
    fn render_template(
        &self,
        template: &str,
        data: &Value,
    ) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
