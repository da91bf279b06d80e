//! Rendering of run reports.
//!
//! Every entry becomes one human-readable line on the diagnostic stream.
//! When annotations are enabled, each violation also becomes one GitHub
//! Actions workflow command on the annotation stream; I/O failures are never
//! annotated.

use std::io::{self, Write};

use crate::validation::{EntryKind, ReportEntry, RunReport};

/// Escapes a message for a single-line workflow command.
///
/// `%` is escaped first so the escapes themselves are not re-escaped.
pub fn escape_annotation(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Renders `<locale>/<relative path>: <message>`.
pub fn render_line(entry: &ReportEntry) -> String {
    entry.to_string()
}

/// Renders a `::error file=<path>::<message>` annotation.
pub fn annotation_line(entry: &ReportEntry) -> String {
    format!(
        "::error file={}::{}",
        entry.path.display(),
        escape_annotation(&entry.message)
    )
}

/// Writes report lines to a diagnostic writer and, optionally, an
/// annotation writer.
pub struct Reporter<D, A> {
    diagnostics: D,
    annotations: A,
    annotate: bool,
}

impl<D: Write, A: Write> Reporter<D, A> {
    /// Creates a reporter with annotations disabled.
    pub fn new(diagnostics: D, annotations: A) -> Self {
        Self {
            diagnostics,
            annotations,
            annotate: false,
        }
    }

    /// Enables or disables annotation output.
    pub fn with_annotations(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Writes every entry of the report in order.
    pub fn emit(&mut self, report: &RunReport) -> io::Result<()> {
        for entry in report {
            match entry.kind {
                EntryKind::Violation if self.annotate => {
                    writeln!(self.annotations, "{}", annotation_line(entry))?;
                }
                EntryKind::Violation | EntryKind::IoFailure => {}
            }
            writeln!(self.diagnostics, "{}", render_line(entry))?;
        }
        self.annotations.flush()?;
        self.diagnostics.flush()
    }

    /// Consumes the reporter and returns both writers.
    pub fn into_inner(self) -> (D, A) {
        (self.diagnostics, self.annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocaleDir;
    use std::path::Path;

    fn sample_report() -> RunReport {
        let locale = LocaleDir::new("en-US", "fastlane/metadata/android/en-US");
        let mut report = RunReport::new();
        report.push(ReportEntry::violation(
            &locale,
            Path::new("fastlane/metadata/android/en-US/title.txt"),
            "content length exceeded: expected=50, got=51",
        ));
        report.push(ReportEntry::io_failure(
            &locale,
            Path::new("fastlane/metadata/android/en-US/images/icon.png"),
            "failed to read image: 100% broken\r\nreally",
        ));
        report
    }

    fn render(report: &RunReport, annotate: bool) -> (String, String) {
        let mut reporter = Reporter::new(Vec::new(), Vec::new()).with_annotations(annotate);
        reporter.emit(report).unwrap();
        let (diagnostics, annotations) = reporter.into_inner();
        (
            String::from_utf8(diagnostics).unwrap(),
            String::from_utf8(annotations).unwrap(),
        )
    }

    #[test]
    fn test_escape_annotation() {
        assert_eq!(escape_annotation("50%"), "50%25");
        assert_eq!(escape_annotation("a\r\nb"), "a%0D%0Ab");
        assert_eq!(escape_annotation("%0A"), "%250A");
    }

    #[test]
    fn test_human_lines_only() {
        let (diagnostics, annotations) = render(&sample_report(), false);
        assert_eq!(
            diagnostics.lines().next(),
            Some("en-US/title.txt: content length exceeded: expected=50, got=51")
        );
        assert!(annotations.is_empty());
    }

    #[test]
    fn test_annotations_double_violation_output() {
        let report = sample_report();
        let (plain, _) = render(&report, false);
        let (diagnostics, annotations) = render(&report, true);

        assert_eq!(plain, diagnostics);
        assert_eq!(annotations.lines().count(), report.violation_count());
        assert_eq!(
            annotations.lines().next(),
            Some(
                "::error file=fastlane/metadata/android/en-US/title.txt::content length exceeded: expected=50, got=51"
            )
        );
    }

    #[test]
    fn test_io_failures_are_not_annotated() {
        let locale = LocaleDir::new("en-US", "m/en-US");
        let mut report = RunReport::new();
        report.push(ReportEntry::io_failure(
            &locale,
            Path::new("m/en-US/title.txt"),
            "failed to read file: missing",
        ));

        let (diagnostics, annotations) = render(&report, true);
        assert_eq!(diagnostics, "en-US/title.txt: failed to read file: missing\n");
        assert!(annotations.is_empty());
    }

    #[test]
    fn test_annotation_message_is_escaped() {
        let locale = LocaleDir::new("en-US", "m/en-US");
        let entry = ReportEntry::violation(
            &locale,
            Path::new("m/en-US/title.txt"),
            "100% broken\r\nreally",
        );
        assert_eq!(
            annotation_line(&entry),
            "::error file=m/en-US/title.txt::100%25 broken%0D%0Areally"
        );
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let (diagnostics, annotations) = render(&RunReport::new(), true);
        assert!(diagnostics.is_empty());
        assert!(annotations.is_empty());
    }
}
