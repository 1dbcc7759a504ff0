//! Output formatter implementations.

use crate::path::RemotePath;
use crate::Result;

use super::{OutputFormatter, PathReport};

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &PathReport) -> Result<String> {
        let kind = match (report.empty, report.root, report.directory) {
            (true, _, _) => "empty",
            (false, true, _) => "root",
            (false, false, true) => "directory",
            (false, false, false) => "file",
        };
        let rooted = if report.absolute { "absolute" } else { "relative" };

        let mut lines = vec![
            format!("path:     {:?}", report.path),
            format!("kind:     {kind}, {rooted}"),
            format!("name:     {:?}", report.display_name),
            format!("segments: {}", report.segments.len()),
        ];
        for (index, segment) in report.segments.iter().enumerate() {
            lines.push(format!("  [{index}] {segment:?}"));
        }
        Ok(lines.join("\n"))
    }

    fn format_segments(&self, segments: &[RemotePath]) -> Result<String> {
        Ok(segments
            .iter()
            .map(RemotePath::native)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &PathReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_segments(&self, segments: &[RemotePath]) -> Result<String> {
        Ok(serde_json::to_string_pretty(segments)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_report() {
        let report = PathReport::new(&RemotePath::from("foo/bar/"));
        let output = HumanFormatter.format_report(&report).unwrap();
        assert!(output.contains("directory, relative"));
        assert!(output.contains("segments: 3"));
        assert!(output.contains("[2] \".\""));
    }

    #[test]
    fn test_human_report_empty_and_root() {
        let empty = HumanFormatter
            .format_report(&PathReport::new(&RemotePath::default()))
            .unwrap();
        assert!(empty.contains("empty, relative"));
        assert!(empty.contains("segments: 0"));

        let root = HumanFormatter
            .format_report(&PathReport::new(&RemotePath::root()))
            .unwrap();
        assert!(root.contains("root, absolute"));
    }

    #[test]
    fn test_human_segments_one_per_line() {
        let segments: Vec<RemotePath> = RemotePath::from("/a b/c").segments().collect();
        let output = HumanFormatter.format_segments(&segments).unwrap();
        assert_eq!(output, "/\na b\nc");
    }

    #[test]
    fn test_json_report() {
        let report = PathReport::new(&RemotePath::from("/Test Filename.txt"));
        let output = JsonFormatter.format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["path"], "/Test Filename.txt");
        assert_eq!(value["absolute"], true);
        assert_eq!(value["directory"], false);
        assert_eq!(value["segments"][1], "Test Filename.txt");
    }

    #[test]
    fn test_json_segments() {
        let segments: Vec<RemotePath> = RemotePath::from("foo/bar/").segments().collect();
        let output = JsonFormatter.format_segments(&segments).unwrap();
        let value: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(value, ["foo", "bar", "."]);
    }
}
