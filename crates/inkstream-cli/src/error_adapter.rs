//! Turning [`InkstreamError`] into miette reports for the terminal.
//!
//! Parse failures become one report per diagnostic, each carrying the stream
//! text so miette can draw snippets. A failed parse may also hold warnings
//! (duplicate ids found before the first error); those keep their warning
//! severity so `main` can log them below the errors.

use miette::{LabeledSpan, MietteDiagnostic, Report, Severity};

use inkstream::InkstreamError;
use inkstream_parser::error::{self, Diagnostic};

/// Build the reports to print for `err`, errors first.
pub fn to_reports(err: &InkstreamError) -> Vec<Report> {
    let InkstreamError::Parse { err: parse_err, src } = err else {
        return vec![Report::new(plain_error(err))];
    };

    let (errors, warnings): (Vec<_>, Vec<_>) = parse_err
        .diagnostics()
        .iter()
        .partition(|diag| diag.severity().is_error());

    errors
        .into_iter()
        .chain(warnings)
        .map(|diag| Report::new(from_diagnostic(diag)).with_source_code(src.clone()))
        .collect()
}

/// Whether a report should be logged as a warning rather than an error.
pub fn is_warning(report: &Report) -> bool {
    report.severity() == Some(Severity::Warning)
}

fn from_diagnostic(diag: &Diagnostic) -> MietteDiagnostic {
    let severity = match diag.severity() {
        error::Severity::Error => Severity::Error,
        error::Severity::Warning => Severity::Warning,
    };

    let labels = diag.labels().iter().map(|label| {
        let span = (label.span().start(), label.span().len());
        let message = Some(label.message().to_string());
        if label.is_primary() {
            LabeledSpan::new_primary_with_span(message, span)
        } else {
            LabeledSpan::new_with_span(message, span)
        }
    });

    let mut report = MietteDiagnostic::new(diag.message())
        .with_severity(severity)
        .with_labels(labels);
    if let Some(code) = diag.code() {
        report = report.with_code(code.as_str());
    }
    if let Some(help) = diag.help() {
        report = report.with_help(help);
    }
    report
}

fn plain_error(err: &InkstreamError) -> MietteDiagnostic {
    let report = MietteDiagnostic::new(err.to_string());
    match err {
        InkstreamError::Io(_) => report.with_code("inkstream::io"),
        InkstreamError::Parse { .. } => report.with_code("inkstream::parse"),
        InkstreamError::Config(_) => report
            .with_code("inkstream::config")
            .with_help("check the [recovery] and [render] tables of the configuration file"),
        InkstreamError::Export(_) => report.with_code("inkstream::export"),
    }
}

#[cfg(test)]
mod tests {
    use inkstream_parser::{ParseConfig, Span, error::ErrorCode, error::ParseError, parse_complete};

    use super::*;

    fn labels(report: &Report) -> Vec<(Option<String>, usize, usize, bool)> {
        report
            .labels()
            .map(|labels| {
                labels
                    .map(|l| (l.label().map(str::to_string), l.offset(), l.len(), l.primary()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_diagnostic_fields_are_carried_over() {
        let diag = Diagnostic::error("expected a JSON array of elements, found an object")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(0..9), "not an array")
            .with_help("wrap the elements in `[` and `]`");
        let err = InkstreamError::new_parse_error(ParseError::from(diag), r#"{"id":1}"#);

        let reports = to_reports(&err);
        assert_eq!(reports.len(), 1);

        let report = &reports[0];
        assert_eq!(report.to_string(), "expected a JSON array of elements, found an object");
        assert_eq!(report.code().unwrap().to_string(), "E200");
        assert_eq!(report.help().unwrap().to_string(), "wrap the elements in `[` and `]`");
        assert!(report.source_code().is_some());
        assert!(!is_warning(report));
        assert_eq!(labels(report), vec![(Some("not an array".to_string()), 0, 9, true)]);
    }

    #[test]
    fn test_one_report_per_bad_entry() {
        let src = r#"[{"id":"a"},7,"x"]"#;
        let parse_err = parse_complete(src, &ParseConfig::default()).unwrap_err();
        let reports = to_reports(&InkstreamError::new_parse_error(parse_err, src));

        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.code().unwrap().to_string(), "E201");
        }
        assert_eq!(labels(&reports[1])[0].1, 14);
    }

    #[test]
    fn test_warnings_follow_errors() {
        let src = r#"[{"id":"a"},{"id":"a"},3]"#;
        let parse_err = parse_complete(src, &ParseConfig::default()).unwrap_err();
        let reports = to_reports(&InkstreamError::new_parse_error(parse_err, src));

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].code().unwrap().to_string(), "E201");
        assert!(!is_warning(&reports[0]));

        assert_eq!(reports[1].code().unwrap().to_string(), "W300");
        assert!(is_warning(&reports[1]));
        let spans = labels(&reports[1]);
        assert_eq!(spans.len(), 2);
        assert!(spans[0].3 && !spans[1].3);
    }

    #[test]
    fn test_plain_errors() {
        let config = to_reports(&InkstreamError::Config("bad strategy".to_string()));
        assert_eq!(config.len(), 1);
        assert_eq!(config[0].to_string(), "Configuration error: bad strategy");
        assert_eq!(config[0].code().unwrap().to_string(), "inkstream::config");
        assert!(config[0].help().is_some());

        let io = to_reports(&InkstreamError::from(std::io::Error::other("disk full")));
        assert_eq!(io[0].code().unwrap().to_string(), "inkstream::io");
        assert!(io[0].labels().is_none());
        assert!(io[0].source_code().is_none());
    }
}
