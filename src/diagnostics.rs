//! Diagnostic aggregation and canonical ordering

use crate::models::{FileReport, Finding};

/// The canonically ordered findings of one analysis run.
///
/// Sorted by (file path, line number, rule code), ascending. The sort is
/// stable, so findings with equal keys keep their discovery order: lexical
/// rule registration order, then structural traversal order.
#[derive(Debug, Default)]
pub struct DiagnosticSet {
    findings: Vec<Finding>,
}

impl DiagnosticSet {
    /// Flatten per-file reports and apply the canonical ordering.
    /// No deduplication: distinct rules may report the same line.
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut findings: Vec<Finding> = reports
            .iter()
            .flat_map(|report| report.findings.iter().cloned())
            .collect();
        findings.sort_by(|a, b| {
            a.path
                .cmp(&b.path)
                .then(a.line.cmp(&b.line))
                .then(a.code.cmp(b.code))
        });
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Render every finding on its own line, in set order.
    pub fn render(&self) -> String {
        self.findings
            .iter()
            .map(|finding| format!("{}\n", finding))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(path: &str, line: usize, code: &'static str, message: &str) -> Finding {
        Finding::new(path, line, code, message.to_string())
    }

    fn report(path: &str, findings: Vec<Finding>) -> FileReport {
        FileReport {
            path: path.to_string(),
            findings,
            error: None,
        }
    }

    #[test]
    fn test_sorts_by_path_then_line_then_code() {
        let reports = vec![
            report(
                "b.py",
                vec![
                    finding("b.py", 2, "S003", "Unnecessary semicolon"),
                    finding("b.py", 1, "S001", "Too long"),
                ],
            ),
            report(
                "a.py",
                vec![
                    finding("a.py", 5, "S005", "TODO found"),
                    finding("a.py", 5, "S002", "Indentation is not a multiple of four"),
                ],
            ),
        ];

        let set = DiagnosticSet::from_reports(&reports);
        let keys: Vec<(&str, usize, &str)> = set
            .iter()
            .map(|f| (f.path.as_str(), f.line, f.code))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a.py", 5, "S002"),
                ("a.py", 5, "S005"),
                ("b.py", 1, "S001"),
                ("b.py", 2, "S003"),
            ]
        );
    }

    #[test]
    fn test_equal_keys_keep_discovery_order() {
        let reports = vec![report(
            "a.py",
            vec![
                finding("a.py", 1, "S010", "Argument name 'A' should be snake_case"),
                finding("a.py", 1, "S010", "Argument name 'B' should be snake_case"),
            ],
        )];

        let set = DiagnosticSet::from_reports(&reports);
        let messages: Vec<&str> = set.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Argument name 'A' should be snake_case",
                "Argument name 'B' should be snake_case",
            ]
        );
    }

    #[test]
    fn test_no_deduplication() {
        let reports = vec![report(
            "a.py",
            vec![
                finding("a.py", 3, "S003", "Unnecessary semicolon"),
                finding("a.py", 3, "S003", "Unnecessary semicolon"),
            ],
        )];
        assert_eq!(DiagnosticSet::from_reports(&reports).len(), 2);
    }

    #[test]
    fn test_render_format() {
        let reports = vec![report("a.py", vec![finding("a.py", 1, "S001", "Too long")])];
        let set = DiagnosticSet::from_reports(&reports);
        assert_eq!(set.render(), "a.py: Line 1: S001 Too long\n");
    }
}
