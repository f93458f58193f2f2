//! Pasted status block parsing.
//!
//! Best-effort recovery of fields from a previously posted block. The parser
//! never fails: lines matching neither the header nor the key-value shape are
//! dropped, unknown keys are ignored, and the worst case is an all-empty
//! result. Matching is plain prefix and `split_once` work, no regex engine.

use serde::Serialize;

use crate::fields::Role;

/// Fields recovered from pasted text. Absent fields stay `None` so a merge
/// into the form never clobbers values the paste did not mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    pub project: Option<String>,
    pub task: Option<String>,
    pub actor_name: Option<String>,
    pub role: Option<Role>,
    pub captured_time: Option<String>,
}

impl ParseResult {
    /// True when nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.project.is_none()
            && self.task.is_none()
            && self.actor_name.is_none()
            && self.role.is_none()
            && self.captured_time.is_none()
    }
}

/// Parse a pasted status block into its recoverable fields.
///
/// Each non-empty trimmed line is checked against the header shape
/// (`KIND - time`, keyword case-insensitive) before the key-value shape,
/// since captured times themselves contain colons. Later occurrences of a
/// key overwrite earlier ones.
pub fn parse_status(pasted: &str) -> ParseResult {
    let mut result = ParseResult::default();
    for line in pasted.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(time) = header_time(line) {
            result.captured_time = Some(time.to_string());
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        match key.as_str() {
            "project" => result.project = Some(value.to_string()),
            "task" => result.task = Some(value.to_string()),
            "dev" => {
                result.actor_name = Some(value.to_string());
                result.role = Some(Role::Dev);
            }
            "qa" => {
                result.actor_name = Some(value.to_string());
                result.role = Some(Role::Qa);
            }
            _ => {}
        }
    }
    result
}

/// Extract the captured time from a `KIND - time` header line, if this is one.
fn header_time(line: &str) -> Option<&str> {
    let (keyword, rest) = line.split_once('-')?;
    let keyword = keyword.trim();
    let known = keyword.eq_ignore_ascii_case("start")
        || keyword.eq_ignore_ascii_case("pause")
        || keyword.eq_ignore_ascii_case("stop");
    if !known {
        return None;
    }
    let time = rest.trim();
    if time.is_empty() {
        None
    } else {
        Some(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_block() {
        let text = "START - 3:11PM\nProject: Urban Space\nTask: Size guide popup\n\
                    Estimated Time: ~2.5h\nReference: Figma\nDev: Akash";
        let result = parse_status(text);
        assert_eq!(result.project.as_deref(), Some("Urban Space"));
        assert_eq!(result.task.as_deref(), Some("Size guide popup"));
        assert_eq!(result.actor_name.as_deref(), Some("Akash"));
        assert_eq!(result.role, Some(Role::Dev));
        assert_eq!(result.captured_time.as_deref(), Some("3:11PM"));
    }

    #[test]
    fn test_header_beats_key_value_on_same_line() {
        // "3:11PM" contains a colon, so a key-value-first parser would read
        // this line as key "START - 3".
        let result = parse_status("STOP - 3:11PM");
        assert_eq!(result.captured_time.as_deref(), Some("3:11PM"));
        assert!(result.project.is_none());
    }

    #[test]
    fn test_header_keyword_is_case_insensitive() {
        let result = parse_status("start - 9:05 AM");
        assert_eq!(result.captured_time.as_deref(), Some("9:05 AM"));
        let result = parse_status("Pause- 12:00PM");
        assert_eq!(result.captured_time.as_deref(), Some("12:00PM"));
    }

    #[test]
    fn test_header_without_time_is_ignored() {
        let result = parse_status("START\nProject: X");
        assert!(result.captured_time.is_none());
        assert_eq!(result.project.as_deref(), Some("X"));
    }

    #[test]
    fn test_qa_line_sets_role() {
        let result = parse_status("QA: Priya");
        assert_eq!(result.actor_name.as_deref(), Some("Priya"));
        assert_eq!(result.role, Some(Role::Qa));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let result = parse_status("Project: One\nProject: Two\nDev: A\nQA: B");
        assert_eq!(result.project.as_deref(), Some("Two"));
        assert_eq!(result.actor_name.as_deref(), Some("B"));
        assert_eq!(result.role, Some(Role::Qa));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let result = parse_status("Reference: Figma\nNotes: Build 134\nStatus: Done");
        assert!(result.is_empty());
    }

    #[test]
    fn test_never_fails_on_garbage() {
        assert!(parse_status("").is_empty());
        assert!(parse_status("\n\n   \n").is_empty());
        assert!(parse_status("}{%$#@!\n\u{0}\u{7}binary-ish").is_empty());
        assert!(parse_status("no delimiters here").is_empty());
    }

    #[test]
    fn test_fence_lines_are_ignored() {
        let result = parse_status("```\nSTART\nProject: X\n```");
        assert_eq!(result.project.as_deref(), Some("X"));
    }
}
