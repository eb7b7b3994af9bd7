//! HTML fragment rendering using Handlebars.
//!
//! Every fragment the report sink appends to the HTML file is produced here,
//! so the markup lives in one place.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, HtmlRenderer};

/// Line break appended after issue lines and used by `print_break`.
pub const BREAK: &str = "<br/>";

/// Closing tags written when a report is finished.
pub const FOOTER: &str = "</body>\n</html>\n";

/// Default document title.
pub const DEFAULT_TITLE: &str = "Bot Report";

const PREAMBLE_TEMPLATE: &str = "<html>\n<head>\n<title>{{title}}</title>\n\
<style type='text/css'>body{ font-family: Helvetica,Arial,sans-serif; }\
.tab1 { margin-left: 30px; }.tab2 { margin-left: 60px; }.tab3 { margin-left: 90px; }</style>\n\
</head>\n<body>\n";

const ISSUE_TEMPLATE: &str = "<span class=\"tab2\">{{number}} : \
<a href=\"{{html_url}}\" target=\"_blank\">{{title}}</a></span><br/>";

const STATUS_TEMPLATE: &str =
    "{{#if css}}<span class='{{css}}'>{{text}}<br/></span>{{else}}{{text}}<br/>{{/if}}";
