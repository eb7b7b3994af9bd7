//! Report sink owning the HTML output and the console.

use super::ReportError;
use crate::elapsed::{elapsed_since, ElapsedFormat};
use crate::issues::Issue;
use crate::templates::{HtmlRenderer, BREAK, DEFAULT_TITLE, FOOTER};
use chrono::{DateTime, Utc};
use colored::Color;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use tracing::{debug, info};

/// Writes a bot report to an HTML writer while mirroring it to a console.
///
/// The sink is the only owner of the HTML output. Call [`setup_html`] once,
/// append fragments, then [`finish`] to close the document and flush. A sink
/// dropped without `finish` still releases its file, but the document is
/// left without closing tags.
///
/// [`setup_html`]: ReportSink::setup_html
/// [`finish`]: ReportSink::finish
pub struct ReportSink<H: Write, C: Write = Stdout> {
    html: H,
    console: C,
    target: String,
    title: String,
    renderer: HtmlRenderer,
    elapsed_format: ElapsedFormat,
    color: bool,
    preamble_written: bool,
}

impl ReportSink<BufWriter<File>, Stdout> {
    /// Creates (or truncates) the HTML report at `path`, mirroring to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::CreateError`] if the file can't be created.
    pub fn create(path: &Path) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|e| ReportError::CreateError {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(path = %path.display(), "Opened HTML report");
        Ok(Self::new(
            BufWriter::new(file),
            io::stdout(),
            path.display().to_string(),
        ))
    }
}

impl<H: Write, C: Write> ReportSink<H, C> {
    /// Wraps an HTML writer and a console writer.
    ///
    /// `target` names the HTML destination in errors and logs.
    pub fn new(html: H, console: C, target: impl Into<String>) -> Self {
        Self {
            html,
            console,
            target: target.into(),
            title: DEFAULT_TITLE.to_string(),
            renderer: HtmlRenderer::new(),
            elapsed_format: ElapsedFormat::default(),
            color: true,
            preamble_written: false,
        }
    }

    /// Sets the document title written by [`setup_html`](Self::setup_html).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the pattern used for the issue age and last comment lines.
    #[must_use]
    pub fn with_elapsed_format(mut self, format: ElapsedFormat) -> Self {
        self.elapsed_format = format;
        self
    }

    /// Enables or disables ANSI color on the console. On by default,
    /// regardless of what the console writer is attached to.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Writes the document preamble and returns the HTML writer for direct
    /// writes by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::PreambleAlreadyWritten`] on a second call, or a
    /// write error.
    pub fn setup_html(&mut self) -> Result<&mut H, ReportError> {
        if self.preamble_written {
            return Err(ReportError::PreambleAlreadyWritten {
                target: self.target.clone(),
            });
        }

        let preamble = self.renderer.render_preamble(&self.title)?;
        self.html
            .write_all(preamble.as_bytes())
            .map_err(|e| ReportError::WriteError {
                target: self.target.clone(),
                source: e,
            })?;
        self.preamble_written = true;

        debug!(report = %self.target, "Wrote HTML preamble");
        Ok(&mut self.html)
    }

    /// Prints an issue line and its URL, and appends the linked issue to the
    /// HTML report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the preamble is missing or a write fails.
    pub fn print_issue(&mut self, issue: &Issue) -> Result<(), ReportError> {
        self.ensure_preamble()?;

        self.console_line(&format!("        {} : {}", issue.number, issue.title))?;
        self.console_line(&format!("             {}", issue.html_url))?;

        let fragment = self.renderer.render_issue(issue)?;
        self.write_html(&fragment)
    }

    /// Prints `text` and appends it to the HTML report, wrapped in a span
    /// with class `css` unless `css` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the preamble is missing or a write fails.
    pub fn print_status(&mut self, text: &str, css: &str) -> Result<(), ReportError> {
        self.ensure_preamble()?;
        self.status(text, text, css)
    }

    /// Reports a stale issue: the issue line, its age and time since last
    /// comment measured against `now`, then its URL on the console.
    ///
    /// Elapsed values are red on the console only.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the preamble is missing or a write fails.
    pub fn print_stale_issue(
        &mut self,
        issue: &Issue,
        now: DateTime<Utc>,
    ) -> Result<(), ReportError> {
        self.ensure_preamble()?;

        self.console_line(&format!("         {} : {}", issue.number, issue.title))?;
        let fragment = self.renderer.render_issue(issue)?;
        self.write_html(&fragment)?;

        let age = self
            .elapsed_format
            .format(elapsed_since(issue.created_at, now));
        let silence = self
            .elapsed_format
            .format(elapsed_since(issue.last_comment, now));

        self.elapsed_status("Issue Age", &age)?;
        self.elapsed_status("Last Comment", &silence)?;

        self.console_line(&format!("                 {}", issue.html_url))?;

        debug!(number = issue.number, age = %age, last_comment = %silence, "Reported stale issue");
        Ok(())
    }

    /// Appends a line break to the HTML report. Nothing is printed.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the preamble is missing or the write fails.
    pub fn print_break(&mut self) -> Result<(), ReportError> {
        self.ensure_preamble()?;
        self.write_html(BREAK)
    }

    /// Closes the document, flushes both outputs and returns them.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if writing the closing tags or flushing fails.
    pub fn finish(mut self) -> Result<(H, C), ReportError> {
        if self.preamble_written {
            self.write_html(FOOTER)?;
        }

        self.html.flush().map_err(|e| ReportError::WriteError {
            target: self.target.clone(),
            source: e,
        })?;
        self.console.flush().map_err(ReportError::ConsoleError)?;

        info!(report = %self.target, "Finished HTML report");
        Ok((self.html, self.console))
    }

    fn elapsed_status(&mut self, label: &str, value: &str) -> Result<(), ReportError> {
        let console = format!("            {label}: {}", self.highlight(value));
        let html = format!("            {label}: {value}");
        self.status(&console, &html, "tab3")
    }

    fn highlight(&self, value: &str) -> String {
        if self.color {
            format!("\x1b[{}m{value}\x1b[0m", Color::Red.to_fg_str())
        } else {
            value.to_string()
        }
    }

    fn status(&mut self, console: &str, html: &str, css: &str) -> Result<(), ReportError> {
        self.console_line(console)?;
        let fragment = self.renderer.render_status(html, css)?;
        self.write_html(&fragment)
    }

    fn ensure_preamble(&self) -> Result<(), ReportError> {
        if self.preamble_written {
            Ok(())
        } else {
            Err(ReportError::PreambleMissing {
                target: self.target.clone(),
            })
        }
    }

    fn console_line(&mut self, line: &str) -> Result<(), ReportError> {
        writeln!(self.console, "{line}").map_err(ReportError::ConsoleError)
    }

    fn write_html(&mut self, fragment: &str) -> Result<(), ReportError> {
        self.html
            .write_all(fragment.as_bytes())
            .map_err(|e| ReportError::WriteError {
                target: self.target.clone(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    type MemorySink = ReportSink<Vec<u8>, Vec<u8>>;

    fn sample_issue() -> Issue {
        Issue {
            number: 7,
            title: "Login <fails> on Safari".to_string(),
            html_url: "https://github.com/acme/web/issues/7".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            last_comment: Utc.with_ymd_and_hms(2024, 1, 20, 6, 30, 15).unwrap(),
        }
    }

    fn started_sink() -> MemorySink {
        let mut sink = ReportSink::new(Vec::new(), Vec::new(), "memory");
        sink.setup_html().unwrap();
        sink
    }

    fn outputs(sink: MemorySink) -> (String, String) {
        let (html, console) = sink.finish().unwrap();
        (
            String::from_utf8(html).unwrap(),
            String::from_utf8(console).unwrap(),
        )
    }

    fn body(html: &str) -> &str {
        let start = html.find("<body>\n").unwrap() + "<body>\n".len();
        let end = html.rfind(FOOTER).unwrap();
        &html[start..end]
    }

    #[test]
    fn setup_html_writes_preamble_once() {
        let (html, console) = outputs(started_sink());

        assert_eq!(html.matches("<html>").count(), 1);
        assert_eq!(html.matches("<head>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
        assert!(html.contains(".tab1"));
        assert!(html.contains(".tab2"));
        assert!(html.contains(".tab3"));
        assert!(html.ends_with("</body>\n</html>\n"));
        assert!(console.is_empty());
    }

    #[test]
    fn setup_html_returns_writer() {
        let mut sink = ReportSink::new(Vec::new(), Vec::new(), "memory");
        sink.setup_html().unwrap().write_all(b"<p>custom</p>").unwrap();

        let (html, _) = outputs(sink);
        assert!(body(&html).starts_with("<p>custom</p>"));
    }

    #[test]
    fn setup_html_twice_fails() {
        let mut sink = started_sink();
        let result = sink.setup_html();

        assert!(matches!(
            result,
            Err(ReportError::PreambleAlreadyWritten { .. })
        ));
    }

    #[test]
    fn fragments_require_preamble() {
        let mut sink: MemorySink = ReportSink::new(Vec::new(), Vec::new(), "memory");

        assert!(matches!(
            sink.print_break(),
            Err(ReportError::PreambleMissing { .. })
        ));
        assert!(matches!(
            sink.print_issue(&sample_issue()),
            Err(ReportError::PreambleMissing { .. })
        ));

        let (html, console) = sink.finish().unwrap();
        assert!(html.is_empty());
        assert!(console.is_empty());
    }

    #[test]
    fn print_issue_writes_console_and_html() {
        let mut sink = started_sink();
        sink.print_issue(&sample_issue()).unwrap();

        let (html, console) = outputs(sink);
        assert_eq!(
            console,
            "        7 : Login <fails> on Safari\n             https://github.com/acme/web/issues/7\n"
        );
        assert_eq!(
            body(&html),
            "<span class=\"tab2\">7 : <a href=\"https://github.com/acme/web/issues/7\" \
             target=\"_blank\">Login <fails> on Safari</a></span><br/>"
        );
    }

    #[test]
    fn print_status_wraps_css() {
        let mut sink = started_sink();
        sink.print_status("acme/web", "tab1").unwrap();
        sink.print_status("Done", "").unwrap();

        let (html, console) = outputs(sink);
        assert_eq!(console, "acme/web\nDone\n");
        assert_eq!(body(&html), "<span class='tab1'>acme/web<br/></span>Done<br/>");
    }

    #[test]
    fn print_stale_issue_reports_elapsed_times() {
        let mut sink = started_sink();
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        sink.print_stale_issue(&sample_issue(), now).unwrap();

        let (html, console) = outputs(sink);
        let body = body(&html);

        assert_eq!(body.matches("<span class='tab3'>").count(), 2);
        assert!(body.contains("Issue Age: 30 days 12:0:0<br/></span>"));
        assert!(body.contains("Last Comment: 11 days 5:29:45<br/></span>"));
        assert!(!body.contains('\u{1b}'));
        assert_eq!(body.matches("https://github.com/acme/web/issues/7").count(), 1);

        let lines: Vec<&str> = console.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "         7 : Login <fails> on Safari");
        assert!(lines[1].contains("Issue Age: "));
        assert!(lines[1].contains("30 days 12:0:0"));
        assert!(lines[2].contains("Last Comment: "));
        assert!(lines[2].contains("11 days 5:29:45"));
        assert_eq!(lines[3], "                 https://github.com/acme/web/issues/7");
    }

    #[test]
    fn print_stale_issue_colors_are_reset() {
        let mut sink = started_sink();
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        sink.print_stale_issue(&sample_issue(), now).unwrap();

        let (_, console) = outputs(sink);
        for line in console.lines().filter(|l| l.contains('\u{1b}')) {
            assert!(line.contains("\u{1b}[31m"));
            assert!(line.ends_with("\u{1b}[0m"));
        }
        assert_eq!(console.matches("\u{1b}[31m").count(), 2);
        assert_eq!(console.matches("\u{1b}[0m").count(), 2);
    }

    #[test]
    fn print_stale_issue_without_color() {
        let mut sink = ReportSink::new(Vec::new(), Vec::new(), "memory").with_color(false);
        sink.setup_html().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        sink.print_stale_issue(&sample_issue(), now).unwrap();

        let (_, console) = outputs(sink);
        assert!(!console.contains('\u{1b}'));
        assert!(console.contains("            Issue Age: 30 days 12:0:0\n"));
        assert!(console.contains("            Last Comment: 11 days 5:29:45\n"));
    }

    #[test]
    fn print_stale_issue_future_timestamps_are_zero() {
        let mut sink = started_sink();
        let issue = sample_issue();
        let now = issue.created_at - TimeDelta::hours(1);
        sink.print_stale_issue(&issue, now).unwrap();

        let (html, _) = outputs(sink);
        assert!(html.contains("Issue Age: 0 days 0:0:0"));
        assert!(html.contains("Last Comment: 0 days 0:0:0"));
    }

    #[test]
    fn print_break_appends_only_breaks() {
        let mut sink = started_sink();
        sink.print_break().unwrap();
        sink.print_break().unwrap();
        sink.print_break().unwrap();

        let (html, console) = outputs(sink);
        assert_eq!(body(&html), "<br/><br/><br/>");
        assert!(console.is_empty());
    }

    #[test]
    fn custom_title_and_format() {
        let mut sink = ReportSink::new(Vec::new(), Vec::new(), "memory")
            .with_title("Stale Issues")
            .with_elapsed_format(ElapsedFormat::parse("{days}d").unwrap());
        sink.setup_html().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        sink.print_stale_issue(&sample_issue(), now).unwrap();

        let (html, _) = outputs(sink);
        assert!(html.contains("<title>Stale Issues</title>"));
        assert!(html.contains("Issue Age: 30d<br/>"));
    }

    #[test]
    fn create_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("report.html");

        let mut sink = ReportSink::create(&path).unwrap();
        sink.setup_html().unwrap();
        sink.print_break().unwrap();
        drop(sink.finish().unwrap());

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<html>"));
        assert!(html.ends_with("<br/></body>\n</html>\n"));
    }

    #[test]
    fn create_fails_for_missing_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = ReportSink::create(&temp.path().join("missing/report.html"));

        assert!(matches!(result, Err(ReportError::CreateError { .. })));
    }
}
