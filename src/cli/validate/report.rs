//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A sidebar link that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field path of the link, e.g. `sidebar[1].items[0].link`.
    pub field: String,
    /// The link as written.
    pub target: String,
    pub reason: String,
}

/// Unresolved links grouped by sidebar group.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Keyed by group position so groups print in sidebar order.
    groups: BTreeMap<usize, (String, Vec<ValidationError>)>,
}

impl ValidationReport {
    pub fn add(&mut self, group: usize, label: &str, error: ValidationError) {
        self.groups
            .entry(group)
            .or_insert_with(|| (label.to_string(), Vec::new()))
            .1
            .push(error);
    }

    /// Number of groups with at least one broken link.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn error_count(&self) -> usize {
        self.groups.values().map(|(_, errs)| errs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Errors in sidebar order.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationError> {
        self.groups.values().flat_map(|(_, errs)| errs)
    }

    /// Print the report to stderr.
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }
        eprintln!();

        let group_count = self.group_count();
        let error_count = self.error_count();
        eprintln!(
            "{} {}",
            "sidebar".red().bold(),
            format!(
                "({group_count} group{}, {error_count} broken link{})",
                plural_s(group_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (label, errs) in self.groups.values() {
            eprintln!("{}{}{}", "[".dimmed(), label.cyan(), "]".dimmed());
            for e in errs {
                eprintln!(
                    "{} {} {} {}",
                    "→".red(),
                    e.target,
                    e.reason,
                    format!("({})", e.field).dimmed()
                );
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", "all sidebar links resolve".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("broken link{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(target: &str) -> ValidationError {
        ValidationError {
            field: "sidebar[0].items[0].link".into(),
            target: target.into(),
            reason: "not found".into(),
        }
    }

    #[test]
    fn test_grouping_and_counts() {
        let mut report = ValidationReport::default();
        assert!(report.is_empty());

        report.add(2, "Config", error("/c"));
        report.add(0, "Docs", error("/a"));
        report.add(2, "Config", error("/d"));

        assert_eq!(report.group_count(), 2);
        assert_eq!(report.error_count(), 3);

        let targets: Vec<_> = report.errors().map(|e| e.target.as_str()).collect();
        assert_eq!(targets, ["/a", "/c", "/d"]);
    }

    #[test]
    fn test_display_summary() {
        let mut report = ValidationReport::default();
        assert!(report.to_string().contains("all sidebar links resolve"));

        report.add(0, "Docs", error("/a"));
        let summary = report.to_string();
        assert!(summary.contains("broken link"));
        assert!(!summary.contains("links"));
    }
}
