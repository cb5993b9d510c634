//! "On this page" table of contents.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::tree::DocNode;
use crate::utils::slugify_heading;

pub const OVERVIEW_ANCHOR: &str = "overview";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub anchor: String,
    pub text: String,
    /// 0 for the page title, 1 for note titles, 1 + level for markdown headings
    pub depth: u8,
}

/// Anchor of the `index`-th page note
pub fn section_anchor(index: usize) -> String {
    format!("section-{}", index)
}

/// Outline of a page: its title, titled notes, and the headings inside each note.
pub fn outline(node: &DocNode) -> Vec<OutlineEntry> {
    let mut entries = vec![OutlineEntry {
        anchor: OVERVIEW_ANCHOR.to_string(),
        text: node.title().to_string(),
        depth: 0,
    }];

    for (idx, note) in node.page.page_notes.iter().enumerate() {
        if let Some(title) = note.title.as_deref().filter(|t| !t.trim().is_empty()) {
            entries.push(OutlineEntry {
                anchor: section_anchor(idx),
                text: title.to_string(),
                depth: 1,
            });
        }

        for (level, text) in markdown_headings(&note.content) {
            entries.push(OutlineEntry {
                anchor: slugify_heading(&text),
                text,
                depth: 1 + level,
            });
        }
    }

    entries
}

fn markdown_headings(text: &str) -> Vec<(u8, String)> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut headings = Vec::new();
    let mut pending: Option<(u8, String)> = None;

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                pending = Some((level as u8, String::new()));
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, buf)) = pending.as_mut() {
                    buf.push_str(&t);
                }
            }
            Event::End(TagEnd::Heading(..)) => {
                if let Some((level, buf)) = pending.take() {
                    let trimmed = buf.trim();
                    if !trimmed.is_empty() {
                        headings.push((level, trimmed.to_string()));
                    }
                }
            }
            _ => {}
        }
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageNote, PageRecord};
    use crate::tree::build_doc_tree;

    fn node_with_notes(notes: Vec<PageNote>) -> DocNode {
        let mut page = PageRecord::new("Install Guide");
        page.page_notes = notes;
        build_doc_tree(vec![page]).unwrap().roots.remove(0)
    }

    fn note(title: Option<&str>, content: &str) -> PageNote {
        PageNote {
            title: title.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_outline_titles_and_sections() {
        let node = node_with_notes(vec![
            note(Some("Requirements"), "Plain text."),
            note(None, "No title here."),
            note(Some("Steps"), ""),
        ]);

        let anchors: Vec<_> = outline(&node).into_iter().map(|e| e.anchor).collect();
        assert_eq!(anchors, vec!["overview", "section-0", "section-2"]);
    }

    #[test]
    fn test_outline_includes_markdown_headings() {
        let node = node_with_notes(vec![note(
            Some("Usage"),
            "Intro text\n\n## Run the `server`\n\nbody\n\n### Flags (optional)\n",
        )]);

        assert_eq!(
            outline(&node),
            vec![
                OutlineEntry {
                    anchor: "overview".into(),
                    text: "Install Guide".into(),
                    depth: 0,
                },
                OutlineEntry {
                    anchor: "section-0".into(),
                    text: "Usage".into(),
                    depth: 1,
                },
                OutlineEntry {
                    anchor: "run-the-server".into(),
                    text: "Run the server".into(),
                    depth: 3,
                },
                OutlineEntry {
                    anchor: "flags-optional".into(),
                    text: "Flags (optional)".into(),
                    depth: 4,
                },
            ]
        );
    }

    #[test]
    fn test_blank_note_title_is_skipped() {
        let node = node_with_notes(vec![note(Some("   "), "text")]);
        assert_eq!(outline(&node).len(), 1);
    }
}
