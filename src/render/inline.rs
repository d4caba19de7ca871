use super::options::{OutputFormat, VerseNumberStyle};
use crate::verses::{Line, Note, Segment};

/// Escape characters the target dialect would read as markup.
pub(super) fn escape_text(format: OutputFormat, text: &str) -> String {
    match format {
        OutputFormat::Latex => escape_latex(text),
        OutputFormat::Typst => escape_typst(text),
        OutputFormat::Plain | OutputFormat::Markdown | OutputFormat::Org => text.to_string(),
    }
}

fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '{' | '}' | '&' | '%' | '$' | '#' | '_' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn escape_typst(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(
            ch,
            '\\' | '#' | '[' | ']' | '*' | '_' | '`' | '$' | '<' | '>' | '@' | '~'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

fn small_caps(format: OutputFormat, text: &str) -> String {
    let text = escape_text(format, text);
    match format {
        OutputFormat::Typst => format!("#smallcaps[{text}]"),
        OutputFormat::Latex => format!("\\textsc{{{text}}}"),
        OutputFormat::Markdown => format!("**{text}**"),
        OutputFormat::Org => format!("*{text}*"),
        OutputFormat::Plain => text,
    }
}

fn italic(format: OutputFormat, text: &str) -> String {
    let text = escape_text(format, text);
    match format {
        OutputFormat::Typst => format!("#emph[{text}]"),
        OutputFormat::Latex => format!("\\emph{{{text}}}"),
        OutputFormat::Markdown => format!("*{text}*"),
        OutputFormat::Org => format!("/{text}/"),
        OutputFormat::Plain => text,
    }
}

/// Marker shown at the note's position in block mode, and in front of its
/// note line.
pub(super) fn note_call(format: OutputFormat, marker: &str) -> String {
    let marker = escape_text(format, marker);
    match format {
        OutputFormat::Latex => format!("\\textsuperscript{{{marker}}}"),
        OutputFormat::Typst => format!("#super[{marker}]"),
        OutputFormat::Org => format!("[fn:{marker}]"),
        OutputFormat::Markdown => format!("[^{marker}]"),
        OutputFormat::Plain => format!("[{marker}]"),
    }
}

/// Full note text at its point of occurrence.
fn inline_note(format: OutputFormat, note: &Note) -> String {
    let marker = escape_text(format, &note.marker);
    let content = escape_text(format, &note.content);
    match format {
        OutputFormat::Org => format!("[fn:: {marker}. {content}]"),
        OutputFormat::Markdown => format!("^[{marker}. {content}]"),
        OutputFormat::Latex => format!("\\footnote{{{marker}. {content}}}"),
        OutputFormat::Typst => format!("#footnote[{marker}. {content}]"),
        OutputFormat::Plain => format!("[{marker}. {content}]"),
    }
}

/// One line under a verse in block mode: `[1] note: text`.
pub(super) fn note_line(format: OutputFormat, note: &Note) -> String {
    format!(
        "{} {}: {}",
        note_call(format, &note.marker),
        note.kind.label(),
        escape_text(format, &note.content)
    )
}

pub(super) fn render_line(
    format: OutputFormat,
    line: &Line,
    notes: &[Note],
    inline_notes: bool,
) -> String {
    let mut out = String::new();
    for segment in &line.segments {
        match segment {
            Segment::Text(text) => out.push_str(&escape_text(format, text)),
            Segment::SmallCaps(text) => out.push_str(&small_caps(format, text)),
            Segment::Italic(text) => out.push_str(&italic(format, text)),
            Segment::NoteRef(idx) => {
                let Some(note) = notes.get(*idx) else {
                    continue;
                };
                if inline_notes {
                    out.push_str(&inline_note(format, note));
                } else {
                    out.push_str(&note_call(format, &note.marker));
                }
            }
        }
    }
    out
}

/// Side-column or superscript label: `5.` or `5:`.
pub(super) fn verse_label(number: u32, style: VerseNumberStyle) -> Option<String> {
    match style {
        VerseNumberStyle::Dots => Some(format!("{number}.")),
        VerseNumberStyle::Colons => Some(format!("{number}:")),
        VerseNumberStyle::None => None,
    }
}

/// Inline prefix in front of a verse's first line.
pub(super) fn verse_prefix(number: u32, style: VerseNumberStyle) -> String {
    verse_label(number, style)
        .map(|label| format!("{label} "))
        .unwrap_or_default()
}
