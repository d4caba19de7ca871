use super::inline::{note_line, render_line, verse_label, verse_prefix};
use super::options::{OutputFormat, RenderConfig, Style};
use crate::verses::{Passage, Verse};

/// A verse's rendered lines and, in block mode, its note lines.
struct VerseParts {
    number: u32,
    lines: Vec<String>,
    notes: Vec<String>,
}

fn verse_parts(verse: &Verse, config: &RenderConfig) -> VerseParts {
    let format = config.format;
    let lines = verse
        .lines
        .iter()
        .map(|line| render_line(format, line, &verse.notes, config.inline_notes))
        .collect();
    let notes = if config.inline_notes {
        Vec::new()
    } else {
        verse.notes.iter().map(|note| note_line(format, note)).collect()
    };
    VerseParts {
        number: verse.verse,
        lines,
        notes,
    }
}

fn parts(passage: &Passage, config: &RenderConfig) -> Vec<VerseParts> {
    passage
        .verses
        .iter()
        .map(|verse| verse_parts(verse, config))
        .collect()
}

pub(super) fn render_body(passage: &Passage, config: &RenderConfig) -> String {
    match (config.format, config.style) {
        (OutputFormat::Typst, Style::Table) => typst_table(passage, config),
        (OutputFormat::Typst, Style::Simple) => typst_simple(passage, config),
        (OutputFormat::Latex, Style::Table) => latex_verse(passage, config),
        (OutputFormat::Latex, Style::Simple) => latex_simple(passage, config),
        (OutputFormat::Markdown, Style::Table) => indented(passage, config, "    "),
        (OutputFormat::Markdown, Style::Simple) => markdown_simple(passage, config),
        (OutputFormat::Org, Style::Table) => org_verse(passage, config),
        (OutputFormat::Org, Style::Simple) => indented(passage, config, "   "),
        (OutputFormat::Plain, _) => indented(passage, config, "    "),
    }
}

fn typst_table(passage: &Passage, config: &RenderConfig) -> String {
    let mut rows = Vec::new();
    for verse in parts(passage, config) {
        let label = verse_label(verse.number, config.verse_numbers);
        for (idx, line) in verse.lines.iter().enumerate() {
            match (&label, idx) {
                (Some(label), 0) => rows.push(format!("    [#text(size:11pt)[{label}]], [{line}],")),
                _ => rows.push(format!("    [], [{line}],")),
            }
        }
        for note in &verse.notes {
            rows.push(format!("    [], [{note}],"));
        }
    }
    format!(
        "#table(columns: (auto, auto), stroke: none,\n{}\n)",
        rows.join("\n")
    )
}

fn typst_simple(passage: &Passage, config: &RenderConfig) -> String {
    let mut out = Vec::new();
    for verse in parts(passage, config) {
        let prefix = verse_label(verse.number, config.verse_numbers)
            .map(|label| format!("#super[{label}] "))
            .unwrap_or_default();
        let body: Vec<String> = verse.lines.into_iter().chain(verse.notes).collect();
        out.push(format!("{prefix}{}", body.join(" \\\n")));
    }
    out.join("\n\n")
}

fn latex_marker(number: u32, config: &RenderConfig) -> String {
    verse_label(number, config.verse_numbers)
        .map(|label| format!("\\textsuperscript{{{label}}} "))
        .unwrap_or_default()
}

fn latex_verse(passage: &Passage, config: &RenderConfig) -> String {
    let mut entries = Vec::new();
    for verse in parts(passage, config) {
        let marker = latex_marker(verse.number, config);
        let lines: Vec<String> = verse
            .lines
            .iter()
            .enumerate()
            .map(|(idx, line)| match idx {
                0 => format!("{marker}{line}"),
                _ => format!("\\vin {line}"),
            })
            .collect();
        entries.push(lines.join("\\\\\n"));
        for note in &verse.notes {
            entries.push(format!("\\quad {note}"));
        }
    }
    if passage.has_poetry() {
        format!(
            "\\begin{{verse}}\n{}\n\\end{{verse}}",
            entries.join("\\\\\n\n")
        )
    } else {
        entries.join("\n\n")
    }
}

fn latex_simple(passage: &Passage, config: &RenderConfig) -> String {
    let mut out = Vec::new();
    for verse in parts(passage, config) {
        let marker = latex_marker(verse.number, config);
        let mut lines = Vec::new();
        for (idx, line) in verse.lines.iter().enumerate() {
            if idx == 0 {
                lines.push(format!("{marker}{line}"));
            } else {
                lines.push(line.clone());
            }
        }
        lines.extend(verse.notes.iter().map(|note| format!("\\quad {note}")));
        out.push(lines.join(" \\\\\n"));
    }
    out.join(" \\\\\n\n")
}

/// Prefixed first line, indented continuation and note lines.
fn indented(passage: &Passage, config: &RenderConfig, indent: &str) -> String {
    let mut out = Vec::new();
    for verse in parts(passage, config) {
        let prefix = verse_prefix(verse.number, config.verse_numbers);
        let mut lines = Vec::new();
        for (idx, line) in verse.lines.iter().enumerate() {
            if idx == 0 {
                lines.push(format!("{prefix}{line}"));
            } else {
                lines.push(format!("{indent}{line}"));
            }
        }
        lines.extend(verse.notes.iter().map(|note| format!("{indent}{note}")));
        out.push(lines.join("\n"));
    }
    out.join("\n\n")
}

fn markdown_simple(passage: &Passage, config: &RenderConfig) -> String {
    let mut out = Vec::new();
    for verse in parts(passage, config) {
        let prefix = verse_prefix(verse.number, config.verse_numbers);
        let mut lines = verse.lines;
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, &prefix);
        }
        lines.extend(verse.notes);
        // Two trailing spaces are a markdown hard break.
        out.push(lines.join("  \n"));
    }
    out.join("\n\n")
}

fn org_verse(passage: &Passage, config: &RenderConfig) -> String {
    let content = indented(passage, config, "   ");
    if passage.has_poetry() {
        format!("#+BEGIN_VERSE\n{content}\n#+END_VERSE")
    } else {
        content
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
