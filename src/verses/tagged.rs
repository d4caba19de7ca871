use super::plain::RawVerse;
use once_cell::sync::Lazy;
use regex::Regex;

static STRUCTURAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?:chapter|div)[^>]*/>").expect("valid structural pattern"));
static VERSE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)([\p{L}\p{N}][\p{L}\p{N} ]*?) (\d+):(\d+): <span[^>]*>(.*?)</span><br\s*/?>")
        .expect("valid verse block pattern")
});

/// Split a tag-annotated payload into raw verses.
///
/// Each verse is `Book C:V: <span ...>body</span><br />`. Raw newlines inside
/// a body are layout, not structure, so they become spaces.
pub(super) fn split_tagged(payload: &str) -> Vec<RawVerse> {
    let cleaned = STRUCTURAL.replace_all(payload, "");
    VERSE_BLOCK
        .captures_iter(&cleaned)
        .filter_map(|caps| {
            Some(RawVerse {
                book: caps[1].trim().to_string(),
                chapter: caps[2].parse().ok()?,
                verse: caps[3].parse().ok()?,
                body: caps[4].replace(['\r', '\n'], " "),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_span_wrapped_verses() {
        let payload = concat!(
            "<html><body>",
            "<div type=\"book\"/>Psalms 23:1: <span class=\"v\">The <hi type=\"small-caps\">LORD</hi>\n",
            "is my shepherd</span><br />\n",
            "Psalms 23:2: <span>He maketh me</span><br/>\n",
            "(KJV)</body></html>"
        );
        let verses = split_tagged(payload);
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].book, "Psalms");
        assert_eq!(verses[0].verse, 1);
        assert_eq!(
            verses[0].body,
            "The <hi type=\"small-caps\">LORD</hi> is my shepherd"
        );
        assert_eq!(verses[1].verse, 2);
        assert_eq!(verses[1].body, "He maketh me");
    }

    #[test]
    fn keeps_multi_word_book_names() {
        let payload = "I John 1:1: <span>That which was</span><br />";
        let verses = split_tagged(payload);
        assert_eq!(verses[0].book, "I John");
        assert_eq!(verses[0].chapter, 1);
    }

    #[test]
    fn keeps_localized_book_names() {
        let payload = "<body>Ezechiël 37:1: <span>De hand van de HEERE</span><br />\n\
                       Ezechiël 37:2: <span>Hij deed mij</span><br />(HSV)</body>";
        let verses = split_tagged(payload);
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].book, "Ezechiël");
        assert_eq!(verses[1].verse, 2);
    }
}
