//! Merging a tag into the `tags` list of a note's front matter.
//!
//! The header is the span from line 0 (exactly `---`) to the next line that is
//! exactly `---`. Only the `tags:` key is understood: an inline `[a, b]` list,
//! a single scalar, or `- item` lines following the key. Everything else in
//! the header is passed through untouched; this is line matching, not YAML.

use serde::Serialize;

/// Line that opens and closes the front-matter block.
pub const DELIMITER: &str = "---";

const TAGS_KEY: &str = "tags:";
const ITEM_PREFIX: &str = "- ";

/// What [merge_tag] did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStatus {
    /// There was no header; one was created holding only the tag.
    Created,
    /// The tag was already listed; the text is unchanged.
    AlreadyPresent,
    /// The tag was appended to the existing header.
    Added,
}

/// Result of a merge: the full replacement text and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    pub text: String,
    pub status: MergeStatus,
}

/// Returns the index of the closing delimiter when `lines` starts with a
/// front-matter block.
pub fn find_block(lines: &[&str]) -> Option<usize> {
    if lines.first() != Some(&DELIMITER) {
        return None;
    }
    lines
        .iter()
        .skip(1)
        .position(|line| *line == DELIMITER)
        .map(|i| i + 1)
}

/// Tags currently declared in the front matter, in the order they appear.
/// Empty when the document has no header.
pub fn read_tags(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    match find_block(&lines) {
        Some(end) => scan_tags(&lines[1..end]).tags,
        None => Vec::new(),
    }
}

/// Adds `tag` to the front-matter `tags` list of `text`, creating the header
/// when there is none. `tag` is expected to be normalized already.
pub fn merge_tag(text: &str, tag: &str) -> Merge {
    let lines: Vec<&str> = text.split('\n').collect();
    let Some(end) = find_block(&lines) else {
        let line = tags_line(&[tag.to_string()]);
        return Merge {
            text: format!("{DELIMITER}\n{line}\n{DELIMITER}\n{text}"),
            status: MergeStatus::Created,
        };
    };

    let header = &lines[1..end];
    let mut scan = scan_tags(header);
    if scan.tags.iter().any(|t| t == tag) {
        return Merge {
            text: text.to_string(),
            status: MergeStatus::AlreadyPresent,
        };
    }
    scan.tags.push(tag.to_string());

    let mut out: Vec<String> = Vec::with_capacity(lines.len() + 1);
    out.push(DELIMITER.to_string());
    out.extend(rebuild_header(header, &tags_line(&scan.tags)));
    out.push(DELIMITER.to_string());
    out.extend(lines[end + 1..].iter().map(|line| line.to_string()));

    log::debug!(
        "event=frontmatter_merge module=frontmatter status=added tags={}",
        scan.tags.len()
    );
    Merge {
        text: out.join("\n"),
        status: MergeStatus::Added,
    }
}

struct TagScan {
    tags: Vec<String>,
    found_key: bool,
}

/// Collects tags from the header lines. Once `tags:` has been seen, every
/// later `- ` line counts as an item, up to the closing delimiter.
fn scan_tags(header: &[&str]) -> TagScan {
    let mut scan = TagScan {
        tags: Vec::new(),
        found_key: false,
    };
    for line in header {
        let line = line.trim();
        if let Some(value) = line.strip_prefix(TAGS_KEY) {
            scan.found_key = true;
            let value = value.trim();
            if let Some(list) = value.strip_prefix('[') {
                let list = list.strip_suffix(']').unwrap_or(list);
                for item in list.split(',') {
                    push_unique(&mut scan.tags, strip_quotes(item.trim()));
                }
            } else if !value.is_empty() {
                push_unique(&mut scan.tags, strip_quotes(value));
            }
        } else if scan.found_key {
            if let Some(item) = line.strip_prefix(ITEM_PREFIX) {
                push_unique(&mut scan.tags, strip_quotes(item.trim()));
            }
        }
    }
    scan
}

/// Replaces the first tag-related line with `tags_line`, drops the rest of
/// them, keeps every other line verbatim.
fn rebuild_header(header: &[&str], tags_line: &str) -> Vec<String> {
    let mut rebuilt = Vec::with_capacity(header.len() + 1);
    let mut key_seen = false;
    let mut inserted = false;
    for line in header {
        let trimmed = line.trim();
        let is_key = trimmed.starts_with(TAGS_KEY);
        key_seen |= is_key;
        if is_key || (key_seen && trimmed.starts_with(ITEM_PREFIX)) {
            if !inserted {
                rebuilt.push(tags_line.to_string());
                inserted = true;
            }
            continue;
        }
        rebuilt.push(line.to_string());
    }
    if !inserted {
        rebuilt.insert(0, tags_line.to_string());
    }
    rebuilt
}

fn tags_line(tags: &[String]) -> String {
    format!("tags: [{}]", tags.join(", "))
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}

/// Strips one matching pair of surrounding `"` or `'`.
fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|rest| rest.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_block_requires_both_delimiters() {
        assert_eq!(find_block(&["---", "a: 1", "---", "body"]), Some(2));
        assert_eq!(find_block(&["---", "---"]), Some(1));
        assert_eq!(find_block(&["---", "a: 1"]), None);
        assert_eq!(find_block(&["body", "---", "---"]), None);
        assert_eq!(find_block(&[" ---", "---"]), None);
    }

    #[test]
    fn merge_creates_header_when_missing() {
        let merged = merge_tag("# Title\n\nSome text.", "rust");
        assert_eq!(merged.status, MergeStatus::Created);
        assert_eq!(merged.text, "---\ntags: [rust]\n---\n# Title\n\nSome text.");
    }

    #[test]
    fn merge_creates_header_when_unclosed() {
        let merged = merge_tag("---\ntitle: x\nbody", "rust");
        assert_eq!(merged.status, MergeStatus::Created);
        assert_eq!(merged.text, "---\ntags: [rust]\n---\n---\ntitle: x\nbody");
    }

    #[test]
    fn merge_into_empty_document() {
        let merged = merge_tag("", "rust");
        assert_eq!(merged.text, "---\ntags: [rust]\n---\n");
    }

    #[test]
    fn merge_existing_inline_tag_is_unchanged() {
        let text = "---\ntags: [a, b]\n---\nbody";
        let merged = merge_tag(text, "b");
        assert_eq!(merged.status, MergeStatus::AlreadyPresent);
        assert_eq!(merged.text, text);
    }

    #[test]
    fn merge_appends_to_inline_list() {
        let text = "---\ntitle: Note\ntags: [a]\ndate: 2024-01-01\n---\nbody";
        let merged = merge_tag(text, "c");
        assert_eq!(merged.status, MergeStatus::Added);
        assert_eq!(
            merged.text,
            "---\ntitle: Note\ntags: [a, c]\ndate: 2024-01-01\n---\nbody"
        );
    }

    #[test]
    fn merge_collapses_block_list() {
        let text = "---\ntags:\n  - a\n  - b\n---\nbody";
        let merged = merge_tag(text, "c");
        assert_eq!(merged.status, MergeStatus::Added);
        assert_eq!(merged.text, "---\ntags: [a, b, c]\n---\nbody");
    }

    #[test]
    fn merge_detects_block_list_duplicate() {
        let text = "---\ntags:\n  - 'a'\n  - \"b\"\n---\nbody";
        assert_eq!(merge_tag(text, "b").status, MergeStatus::AlreadyPresent);
    }

    #[test]
    fn merge_strips_quotes_from_inline_items() {
        let text = "---\ntags: [\"a\", 'b']\n---\n";
        let merged = merge_tag(text, "c");
        assert_eq!(merged.text, "---\ntags: [a, b, c]\n---\n");
    }

    #[test]
    fn merge_scalar_tags_value() {
        let text = "---\ntags: \"solo\"\n---\nbody";
        assert_eq!(merge_tag(text, "solo").status, MergeStatus::AlreadyPresent);
        assert_eq!(
            merge_tag(text, "duo").text,
            "---\ntags: [solo, duo]\n---\nbody"
        );
    }

    #[test]
    fn merge_prepends_tags_line_when_key_missing() {
        let text = "---\ntitle: Note\n---\nbody";
        let merged = merge_tag(text, "x");
        assert_eq!(merged.status, MergeStatus::Added);
        assert_eq!(merged.text, "---\ntags: [x]\ntitle: Note\n---\nbody");
    }

    #[test]
    fn merge_keeps_list_items_before_tags_key() {
        let text = "---\naliases:\n  - other\ntags: [a]\n---\nbody";
        let merged = merge_tag(text, "b");
        assert_eq!(
            merged.text,
            "---\naliases:\n  - other\ntags: [a, b]\n---\nbody"
        );
    }

    #[test]
    fn merge_treats_items_after_tags_as_tags() {
        // Known limitation: `- ` lines under a later key still count as tags.
        let text = "---\ntags:\n  - a\naliases:\n  - other\n---\n";
        let merged = merge_tag(text, "b");
        assert_eq!(merged.text, "---\ntags: [a, other, b]\naliases:\n---\n");
    }

    #[test]
    fn merge_ignores_empty_inline_list() {
        let text = "---\ntags: []\n---\n";
        assert_eq!(merge_tag(text, "a").text, "---\ntags: [a]\n---\n");
    }

    #[test]
    fn merge_leaves_body_untouched() {
        let text = "---\ntags: [a]\n---\n---\ntags: [z]\n---\n";
        let merged = merge_tag(text, "b");
        assert_eq!(merged.text, "---\ntags: [a, b]\n---\n---\ntags: [z]\n---\n");
    }

    #[test]
    fn read_tags_in_order() {
        assert_eq!(
            read_tags("---\ntags: [b, a]\n  - c\n---\n"),
            vec!["b", "a", "c"]
        );
        assert!(read_tags("no header").is_empty());
    }

    #[test]
    fn merge_status_serializes_snake_case() {
        let json = serde_json::to_string(&MergeStatus::AlreadyPresent).expect("serialize");
        assert_eq!(json, "\"already_present\"");
    }
}
