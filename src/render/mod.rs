//! Multi-format passage renderer.
//!
//! Rendering is a pure function of the passages and one `RenderConfig`.
//! Backends only differ in idiom; citation placement is decided here so every
//! backend follows the same policy.

mod citation;
mod format;
mod inline;
mod options;

pub use citation::citation_text;
pub use options::{
    BookNameStyle, OutputFormat, RefPosition, RefType, RenderConfig, Style, VerseNumberStyle,
    VersionTagStyle,
};

use crate::verses::Passage;
use citation::{footnote, wrap_inline};

/// Render one passage body in the configured dialect, without citation.
pub fn render_passage(passage: &Passage, config: &RenderConfig) -> String {
    format::render_body(passage, config)
}

/// Render all passages with citations placed per `ref_type` and
/// `ref_position`.
///
/// Combined citations are joined with `"; "` into a single block after (or
/// before) all bodies. Footnote definitions for markdown and org are appended
/// once at the end of the document.
pub fn render_document(passages: &[Passage], config: &RenderConfig) -> String {
    let mut bodies = Vec::with_capacity(passages.len());
    let mut combined = Vec::new();
    let mut definitions = Vec::new();

    for passage in passages {
        let body = render_passage(passage, config);
        let citation = match config.ref_position {
            RefPosition::None => None,
            RefPosition::Start | RefPosition::End => citation_text(passage, config),
        };
        let Some(text) = citation else {
            bodies.push(body);
            continue;
        };

        let placed = match config.ref_type {
            RefType::Inline => Some(wrap_inline(config.format, &text)),
            RefType::Footnote => {
                let note = footnote(config.format, &text, &footnote_label(definitions.len()));
                definitions.extend(note.definition);
                Some(note.call)
            }
            RefType::Combined => {
                combined.push(text);
                None
            }
        };
        bodies.push(match placed {
            Some(citation) => place(body, citation, config.ref_position),
            None => body,
        });
    }

    let mut out = bodies.join("\n\n");
    if !combined.is_empty() {
        let block = wrap_inline(config.format, &combined.join("; "));
        out = place(out, block, config.ref_position);
    }
    if !definitions.is_empty() {
        out.push_str("\n\n");
        out.push_str(&definitions.join("\n"));
    }
    tracing::debug!(
        passages = passages.len(),
        format = %config.format,
        "rendered document"
    );
    out
}

fn footnote_label(defined: usize) -> String {
    match defined {
        0 => "ref".to_string(),
        n => format!("ref{}", n + 1),
    }
}

fn place(body: String, citation: String, position: RefPosition) -> String {
    match position {
        RefPosition::Start => format!("{citation}\n{body}"),
        RefPosition::End => format!("{body}\n{citation}"),
        RefPosition::None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verses::{Line, Verse};

    fn passage(book: &str, chapter: u32, verses: &[u32]) -> Passage {
        Passage {
            book: book.to_string(),
            chapter,
            verses: verses
                .iter()
                .map(|&verse| Verse {
                    book: book.to_string(),
                    chapter,
                    verse,
                    lines: vec![Line::text(&format!("v{verse}"))],
                    has_small_caps: false,
                    notes: Vec::new(),
                })
                .collect(),
        }
    }

    fn two_passages() -> Vec<Passage> {
        vec![passage("Genesis", 1, &[1, 2]), passage("John", 3, &[16])]
    }

    fn config(format: OutputFormat, ref_type: RefType, position: RefPosition) -> RenderConfig {
        RenderConfig {
            format,
            ref_type,
            ref_position: position,
            module: Some("KJV".to_string()),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn inline_citation_follows_each_passage() {
        let cfg = config(OutputFormat::Plain, RefType::Inline, RefPosition::End);
        assert_eq!(
            render_document(&two_passages(), &cfg),
            "1. v1\n\n2. v2\n(Genesis 1:1-2 KJV)\n\n16. v16\n(John 3:16 KJV)"
        );
    }

    #[test]
    fn inline_citation_can_lead() {
        let cfg = config(OutputFormat::Markdown, RefType::Inline, RefPosition::Start);
        let out = render_document(&two_passages()[1..], &cfg);
        assert_eq!(out, "*(John 3:16 KJV)*\n16. v16");
    }

    #[test]
    fn combined_citation_is_emitted_once() {
        let cfg = config(OutputFormat::Org, RefType::Combined, RefPosition::End);
        let out = render_document(&two_passages(), &cfg);
        assert_eq!(
            out,
            "1. v1\n\n2. v2\n\n16. v16\n/(Genesis 1:1-2 KJV; John 3:16 KJV)/"
        );
        assert_eq!(out.matches("KJV)").count(), 1);
    }

    #[test]
    fn no_position_suppresses_every_citation() {
        for ref_type in [RefType::Inline, RefType::Footnote, RefType::Combined] {
            let cfg = config(OutputFormat::Plain, ref_type, RefPosition::None);
            assert_eq!(
                render_document(&two_passages(), &cfg),
                "1. v1\n\n2. v2\n\n16. v16"
            );
        }
    }

    #[test]
    fn markdown_footnotes_get_unique_labels_and_trailing_definitions() {
        let cfg = config(OutputFormat::Markdown, RefType::Footnote, RefPosition::End);
        assert_eq!(
            render_document(&two_passages(), &cfg),
            "1. v1\n\n2. v2\n[^ref]\n\n16. v16\n[^ref2]\n\n\
             [^ref]: Genesis 1:1-2 KJV\n[^ref2]: John 3:16 KJV"
        );
    }

    #[test]
    fn latex_footnote_is_native() {
        let cfg = config(OutputFormat::Latex, RefType::Footnote, RefPosition::End);
        let out = render_document(&two_passages()[1..], &cfg);
        assert_eq!(
            out,
            "\\textsuperscript{16.} v16\n\\footnote{John 3:16 KJV}"
        );
    }

    #[test]
    fn plain_footnote_falls_back_to_inline() {
        let cfg = config(OutputFormat::Plain, RefType::Footnote, RefPosition::End);
        let out = render_document(&two_passages()[1..], &cfg);
        assert_eq!(out, "16. v16\n(John 3:16 KJV)");
    }
}
