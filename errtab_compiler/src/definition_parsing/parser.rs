//! Paragraph-driven definition parser
//!
//! An explicit two-state machine over blank-line-separated paragraphs:
//! no entry open, or one entry open. A heading paragraph (seven leading
//! spaces, error symbol, space) flushes the open entry and opens a new one;
//! any other non-empty paragraph is prose for the open entry. End of input
//! flushes the final entry.

use crate::config::constants::compile_time::parsing::HEADING_INDENT;
use crate::logging::codes;
use crate::utils::{is_error_symbol, normalize_description};
use crate::{log_debug, log_success};

/// One parsed documentation entry, descriptions already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionTriple {
    pub name: String,
    pub short_description: String,
    /// May be empty: an entry with no trailing prose is valid.
    pub long_description: String,
}

/// Parser state machine.
#[derive(Debug, Default)]
pub struct DefinitionParser {
    entries: Vec<DefinitionTriple>,
    open: Option<DefinitionTriple>,
}

impl DefinitionParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one paragraph through the state machine.
    pub fn feed_paragraph(&mut self, paragraph: &str) {
        if paragraph.trim().is_empty() {
            return;
        }

        if let Some(name) = heading_symbol(paragraph) {
            // Transition: flush the open entry, open the new one
            self.flush();

            let short_description = normalize_description(
                paragraph
                    .split_whitespace()
                    .skip(1)
                    .collect::<Vec<_>>()
                    .join(" ")
                    .as_str(),
            );
            self.open = Some(DefinitionTriple {
                name: name.to_string(),
                short_description,
                long_description: String::new(),
            });
        } else if let Some(entry) = self.open.as_mut() {
            // Continuation prose for the open entry
            let prose = normalize_description(paragraph);
            if entry.long_description.is_empty() {
                entry.long_description = prose;
            } else {
                entry.long_description.push(' ');
                entry.long_description.push_str(&prose);
            }
        } else {
            // Prose before any heading has no entry to attach to
            log_debug!("Discarding prose before first heading",
                "chars" => paragraph.len()
            );
        }
    }

    fn flush(&mut self) {
        if let Some(entry) = self.open.take() {
            self.entries.push(entry);
        }
    }

    /// Flush the final open entry and yield the ordered triples.
    pub fn finish(mut self) -> Vec<DefinitionTriple> {
        self.flush();
        self.entries
    }
}

/// Parse a full documentation blob into ordered triples.
pub fn parse_definitions(text: &str) -> Vec<DefinitionTriple> {
    let mut parser = DefinitionParser::new();
    for paragraph in text.split("\n\n") {
        parser.feed_paragraph(paragraph);
    }
    let entries = parser.finish();

    log_success!(codes::success::DEFINITIONS_PARSED, "Documentation parsed",
        "entries" => entries.len()
    );
    entries
}

/// Extract the heading symbol if the paragraph's first line matches the
/// documentation convention: exactly seven leading spaces, an `E[A-Z0-9]+`
/// symbol, then a space.
fn heading_symbol(paragraph: &str) -> Option<&str> {
    let first_line = paragraph.lines().next()?;
    let indent = " ".repeat(HEADING_INDENT);
    let rest = first_line.strip_prefix(indent.as_str())?;

    let (symbol, after) = rest.split_at(rest.find(' ')?);
    if is_error_symbol(symbol) && after.starts_with(' ') {
        Some(symbol)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_entry_blob() {
        let blob = "       EPERM Operation not permitted\n\nNot super-user.\n\n       ENOENT No such file or directory\n\n";
        let entries = parse_definitions(blob);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "EPERM");
        assert_eq!(entries[0].short_description, "Operation not permitted");
        assert_eq!(entries[0].long_description, "Not super-user.");
        assert_eq!(entries[1].name, "ENOENT");
        assert_eq!(entries[1].short_description, "No such file or directory");
        assert_eq!(entries[1].long_description, "");
    }

    #[test]
    fn test_entry_without_prose_is_valid() {
        let entries = parse_definitions("       EPERM Operation not permitted\n\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].long_description.is_empty());
    }

    #[test]
    fn test_prose_before_first_heading_discarded() {
        let blob = "This page lists error numbers.\n\n       EPERM Operation not permitted\n\n";
        let entries = parse_definitions(blob);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "EPERM");
        assert!(entries[0].long_description.is_empty());
    }

    #[test]
    fn test_multiple_prose_paragraphs_append() {
        let blob = "       EAGAIN Try again\n\nResource temporarily unavailable.\n\nThe call might succeed if repeated.\n\n";
        let entries = parse_definitions(blob);
        assert_eq!(
            entries[0].long_description,
            "Resource temporarily unavailable. The call might succeed if repeated."
        );
    }

    #[test]
    fn test_malformed_heading_is_prose() {
        // Six spaces of indent fails the heading pattern and becomes prose
        let blob = "       EPERM Operation not permitted\n\n      ENOENT looks close but is prose\n\n";
        let entries = parse_definitions(blob);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].long_description,
            "ENOENT looks close but is prose"
        );
    }

    #[test]
    fn test_eight_space_indent_is_prose() {
        let blob = "        EPERM too deep\n\n";
        assert!(parse_definitions(blob).is_empty());
    }

    #[test]
    fn test_prose_whitespace_collapsed_and_escaped() {
        let blob = "       EIO I/O error\n\nA \"low-level\"   I/O\nfailure occurred.\n\n";
        let entries = parse_definitions(blob);
        assert_eq!(
            entries[0].long_description,
            "A \\\"low-level\\\" I/O failure occurred."
        );
    }

    #[test]
    fn test_discovery_order_preserved() {
        let blob = "       ENOENT No such file or directory\n\n       EPERM Operation not permitted\n\n       EIO I/O error\n\n";
        let names: Vec<_> = parse_definitions(blob)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["ENOENT", "EPERM", "EIO"]);
    }

    #[test]
    fn test_heading_requires_trailing_space() {
        assert_eq!(heading_symbol("       EPERM Operation"), Some("EPERM"));
        assert_eq!(heading_symbol("       EPERM"), None);
        assert_eq!(heading_symbol("       eperm x"), None);
        assert_eq!(heading_symbol("EPERM x"), None);
    }
}
