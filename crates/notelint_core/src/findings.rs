//! Parsing of the linter's raw findings report.
//!
//! The report is a JSON map of document name to an array of findings,
//! each carrying a rule id, a severity string, a 1-based line number
//! and a 1-based inclusive byte-column span. Coordinates are
//! normalized here to 0-based `BytePosition`s with exclusive ends; the
//! rest of the system never sees the raw convention.

use serde::Deserialize;
use tracing::debug;

use notelint_text::BytePosition;

use crate::alert::{Alert, AlertId, Severity};
use crate::error::CheckError;

#[derive(Debug, Deserialize)]
struct RawFinding {
    #[serde(rename = "Check")]
    check: String,
    #[serde(rename = "Severity")]
    severity: String,
    #[serde(rename = "Line")]
    line: u32,
    #[serde(rename = "Span")]
    span: [u32; 2],
    #[serde(rename = "Message")]
    message: String,
    #[serde(rename = "Action", default)]
    action: Option<RawAction>,
}

#[derive(Debug, Deserialize)]
struct RawAction {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Params", default)]
    params: Vec<String>,
}

/// Parses a raw report into alerts.
///
/// A malformed report fails the whole run: partial alert sets are never
/// produced. The report maps document names to findings; this client
/// checks one document per run, so the first entry is used.
pub fn parse_findings(raw: &str) -> Result<Vec<Alert>, CheckError> {
    let report: std::collections::BTreeMap<String, Vec<RawFinding>> =
        serde_json::from_str(raw).map_err(|e| CheckError::parse(e.to_string()))?;

    let findings = match report.into_iter().next() {
        Some((name, findings)) => {
            debug!(document = %name, count = findings.len(), "parsed findings");
            findings
        }
        None => return Ok(Vec::new()),
    };

    findings
        .into_iter()
        .enumerate()
        .map(|(i, f)| alert_from_finding(AlertId(i as u64), f))
        .collect()
}

fn alert_from_finding(id: AlertId, finding: RawFinding) -> Result<Alert, CheckError> {
    if finding.line == 0 {
        return Err(CheckError::parse("line numbers are 1-based, got 0"));
    }
    let [start_col, end_col] = finding.span;
    if start_col == 0 || end_col < start_col {
        return Err(CheckError::parse(format!(
            "invalid span [{start_col}, {end_col}]"
        )));
    }

    let line = finding.line - 1;
    let start = BytePosition::new(line, start_col - 1);
    // The raw span's end column is inclusive
    let end = BytePosition::new(line, end_col);

    let replacements = finding
        .action
        .filter(|a| a.name == "replace" || a.name == "suggest")
        .map(|a| a.params)
        .unwrap_or_default();

    Ok(Alert::new(id, finding.check, finding.message, start, end)
        .with_severity(Severity::from_report(&finding.severity))
        .with_replacements(replacements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const REPORT: &str = r#"{
        "note.md": [
            {
                "Check": "Style.Repetition",
                "Severity": "error",
                "Line": 3,
                "Span": [5, 12],
                "Message": "'very very' is repeated",
                "Action": { "Name": "replace", "Params": ["very"] }
            },
            {
                "Check": "Style.Weasel",
                "Severity": "suggestion",
                "Line": 1,
                "Span": [1, 4],
                "Message": "Avoid 'few'"
            }
        ]
    }"#;

    #[test]
    fn test_parse_report() {
        let alerts = parse_findings(REPORT).unwrap();
        assert_eq!(alerts.len(), 2);

        let first = &alerts[0];
        assert_eq!(first.id, AlertId(0));
        assert_eq!(first.rule_id, "Style.Repetition");
        assert_eq!(first.severity, Severity::Error);
        // 1-based inclusive [5, 12] becomes 0-based half-open [4, 12)
        assert_eq!(first.start, BytePosition::new(2, 4));
        assert_eq!(first.end, BytePosition::new(2, 12));
        assert_eq!(first.replacements, vec!["very".to_string()]);

        let second = &alerts[1];
        assert_eq!(second.severity, Severity::Suggestion);
        assert!(second.replacements.is_empty());
    }

    #[test]
    fn test_parse_empty_report() {
        assert!(parse_findings("{}").unwrap().is_empty());
        assert!(parse_findings(r#"{"note.md": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json_fails_whole_run() {
        let err = parse_findings("not json").unwrap_err();
        assert!(matches!(err, CheckError::Parse(_)));
    }

    #[test]
    fn test_invalid_span_fails_whole_run() {
        let raw = r#"{"note.md": [{
            "Check": "r", "Severity": "error", "Line": 1,
            "Span": [9, 2], "Message": "m"
        }]}"#;
        let err = parse_findings(raw).unwrap_err();
        assert!(matches!(err, CheckError::Parse(_)));
    }

    #[test]
    fn test_zero_line_fails_whole_run() {
        let raw = r#"{"note.md": [{
            "Check": "r", "Severity": "error", "Line": 0,
            "Span": [1, 2], "Message": "m"
        }]}"#;
        assert!(parse_findings(raw).is_err());
    }

    #[test]
    fn test_non_replace_action_ignored() {
        let raw = r#"{"note.md": [{
            "Check": "r", "Severity": "warning", "Line": 1,
            "Span": [1, 2], "Message": "m",
            "Action": { "Name": "remove", "Params": ["x"] }
        }]}"#;
        let alerts = parse_findings(raw).unwrap();
        assert!(alerts[0].replacements.is_empty());
    }
}
