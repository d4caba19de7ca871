use super::inline::escape_text;
use super::options::{BookNameStyle, OutputFormat, RenderConfig, VersionTagStyle};
use crate::books::{version_tag, NameStyle};
use crate::reference::AliasTable;
use crate::verses::Passage;

/// Localized book name for a name printed by the lookup tool. Names that do
/// not resolve are printed as given.
pub(super) fn display_book(book: &str, config: &RenderConfig) -> String {
    let style = match config.book_style {
        BookNameStyle::Full => NameStyle::Full,
        BookNameStyle::Abbr => NameStyle::Abbreviated,
    };
    match AliasTable::shared(true).from_source_name(book) {
        Some(id) if config.include_apocrypha || !id.is_apocryphal() => {
            id.display_name(config.locale(), style).to_string()
        }
        _ => book.to_string(),
    }
}

/// Citation text such as `Psalmen 23:1-3 HSV`.
pub fn citation_text(passage: &Passage, config: &RenderConfig) -> Option<String> {
    let range = passage.verse_range()?;
    let mut text = format!(
        "{} {}:{}",
        display_book(&passage.book, config),
        passage.chapter,
        range
    );
    if let Some(tag) = version_suffix(config) {
        text.push(' ');
        text.push_str(tag);
    }
    Some(text)
}

fn version_suffix(config: &RenderConfig) -> Option<&str> {
    let module = config.module.as_deref()?;
    match config.version_tag {
        VersionTagStyle::Auto => Some(version_tag(module)),
        VersionTagStyle::None => None,
    }
}

/// Parenthetical or italic citation placed beside the text.
pub(super) fn wrap_inline(format: OutputFormat, text: &str) -> String {
    let text = escape_text(format, text);
    match format {
        OutputFormat::Latex => format!("\\hfill ({text})"),
        OutputFormat::Typst => format!("#align(right)[({text})]"),
        OutputFormat::Markdown => format!("*({text})*"),
        OutputFormat::Org => format!("/({text})/"),
        OutputFormat::Plain => format!("({text})"),
    }
}

/// A citation rendered as a footnote: the text placed with the passage and,
/// for dialects with footnote definitions, the definition to append at the
/// end of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FootnoteCitation {
    pub call: String,
    pub definition: Option<String>,
}

/// `label` tells markdown and org definitions apart: `ref`, `ref2`, ...
pub(super) fn footnote(format: OutputFormat, text: &str, label: &str) -> FootnoteCitation {
    match format {
        OutputFormat::Latex => FootnoteCitation {
            call: format!("\\footnote{{{}}}", escape_text(format, text)),
            definition: None,
        },
        OutputFormat::Typst => FootnoteCitation {
            call: format!("#footnote[{}]", escape_text(format, text)),
            definition: None,
        },
        OutputFormat::Markdown => FootnoteCitation {
            call: format!("[^{label}]"),
            definition: Some(format!("[^{label}]: {text}")),
        },
        OutputFormat::Org => FootnoteCitation {
            call: format!("[fn:{label}]"),
            definition: Some(format!("[fn:{label}] {text}")),
        },
        OutputFormat::Plain => FootnoteCitation {
            call: wrap_inline(format, text),
            definition: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::Locale;
    use crate::verses::{Line, Verse};

    fn passage(book: &str, verses: &[u32]) -> Passage {
        Passage {
            book: book.to_string(),
            chapter: 23,
            verses: verses
                .iter()
                .map(|&verse| Verse {
                    book: book.to_string(),
                    chapter: 23,
                    verse,
                    lines: vec![Line::text("x")],
                    has_small_caps: false,
                    notes: Vec::new(),
                })
                .collect(),
        }
    }

    fn config(module: Option<&str>) -> RenderConfig {
        RenderConfig {
            module: module.map(str::to_string),
            ..RenderConfig::default()
        }
    }

    #[test]
    fn dutch_module_uses_dutch_names_and_tag() {
        let text = citation_text(&passage("Psalms", &[1, 2, 3]), &config(Some("HSV")));
        assert_eq!(text.as_deref(), Some("Psalmen 23:1-3 HSV"));
        let sv = citation_text(&passage("Psalms", &[1, 3]), &config(Some("DutSVV")));
        assert_eq!(sv.as_deref(), Some("Psalmen 23:1,3 SV"));
    }

    #[test]
    fn english_and_abbreviated_names() {
        let mut cfg = config(Some("KJV"));
        let p = passage("I Samuel", &[4]);
        assert_eq!(citation_text(&p, &cfg).as_deref(), Some("1 Samuel 23:4 KJV"));
        cfg.book_style = BookNameStyle::Abbr;
        cfg.version_tag = VersionTagStyle::None;
        assert_eq!(citation_text(&p, &cfg).as_deref(), Some("1 Sam. 23:4"));
        cfg.locale = Some(Locale::Dutch);
        assert_eq!(citation_text(&p, &cfg).as_deref(), Some("1 Sam. 23:4"));
    }

    #[test]
    fn unknown_books_and_missing_module() {
        let text = citation_text(&passage("Enoch", &[1]), &config(None));
        assert_eq!(text.as_deref(), Some("Enoch 23:1"));
    }

    #[test]
    fn apocryphal_names_localize_only_when_enabled() {
        let mut cfg = config(Some("DutSVVA"));
        let p = passage("Wisdom", &[1]);
        assert_eq!(citation_text(&p, &cfg).as_deref(), Some("Wisdom 23:1 SV"));
        cfg.include_apocrypha = true;
        assert_eq!(
            citation_text(&p, &cfg).as_deref(),
            Some("Wijsheid van Salomo 23:1 SV")
        );
    }

    #[test]
    fn footnote_idioms_per_backend() {
        assert_eq!(
            footnote(OutputFormat::Latex, "Ps 1:1", "ref").call,
            "\\footnote{Ps 1:1}"
        );
        let md = footnote(OutputFormat::Markdown, "Ps 1:1", "ref2");
        assert_eq!(md.call, "[^ref2]");
        assert_eq!(md.definition.as_deref(), Some("[^ref2]: Ps 1:1"));
        let plain = footnote(OutputFormat::Plain, "Ps 1:1", "ref");
        assert_eq!(plain.call, "(Ps 1:1)");
        assert_eq!(plain.definition, None);
    }

    #[test]
    fn citations_are_escaped_for_latex_and_typst() {
        let text = "Psalms 23:1 My_Bible#2";
        assert_eq!(
            wrap_inline(OutputFormat::Latex, text),
            "\\hfill (Psalms 23:1 My\\_Bible\\#2)"
        );
        assert_eq!(
            footnote(OutputFormat::Typst, text, "ref").call,
            "#footnote[Psalms 23:1 My\\_Bible\\#2]"
        );
        assert_eq!(
            wrap_inline(OutputFormat::Markdown, text),
            "*(Psalms 23:1 My_Bible#2)*"
        );
    }
}
