use super::alias::AliasTable;
use super::matcher::match_book;
use super::normalize::normalize;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static VERSE_OR_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(-\d+)?$").expect("valid verse pattern"));

/// Context carried between fragments of one shorthand reference.
#[derive(Debug, Default)]
struct ExpandState {
    /// Alias text of the most recent book, as the user typed it.
    last_book: Option<String>,
    /// Chapter of the most recent `chapter:verse`, cleared at each `;`.
    last_chapter: Option<String>,
    out: Vec<String>,
}

/// Expand comma/semicolon shorthand into one explicit reference per fragment.
///
/// `,` continues the current chapter, `;` starts a new chapter of the same
/// book, and any fragment that names a book resets the context:
/// `"Ex 9:9,25; 10:1"` becomes `["Ex 9:9", "Ex 9:25", "Ex 10:1"]`.
pub fn expand_shorthand(reference: &str, table: &AliasTable) -> Result<Vec<String>> {
    let mut state = ExpandState::default();

    for semi_part in reference.split(';').map(str::trim) {
        if semi_part.is_empty() {
            continue;
        }
        state.last_chapter = None;
        for fragment in semi_part.split(',').map(str::trim) {
            if fragment.is_empty() {
                continue;
            }
            expand_fragment(fragment, table, &mut state)?;
        }
    }

    tracing::debug!(reference, fragments = state.out.len(), "expanded shorthand");
    Ok(state.out)
}

fn expand_fragment(fragment: &str, table: &AliasTable, state: &mut ExpandState) -> Result<()> {
    if handle_book_fragment(fragment, table, state) {
        return Ok(());
    }
    if handle_chapter_verse(fragment, state)? {
        return Ok(());
    }
    if handle_bare_number(fragment, state)? {
        return Ok(());
    }
    state.out.push(fragment.to_string());
    Ok(())
}

fn handle_book_fragment(fragment: &str, table: &AliasTable, state: &mut ExpandState) -> bool {
    let raw_tokens: Vec<&str> = fragment.split_whitespace().collect();
    let normalized: Vec<String> = raw_tokens.iter().map(|token| normalize(token)).collect();
    let Ok(found) = match_book(&normalized, table) else {
        return false;
    };

    state.out.push(fragment.to_string());
    state.last_book = Some(raw_tokens[..found.consumed].join(" "));
    let rest = raw_tokens[found.consumed..].join(" ");
    if let Some((chapter, _)) = rest.split_once(':') {
        state.last_chapter = Some(chapter.trim().to_string());
    }
    true
}

fn handle_chapter_verse(fragment: &str, state: &mut ExpandState) -> Result<bool> {
    let Some((chapter, _)) = fragment.split_once(':') else {
        return Ok(false);
    };
    let Some(book) = state.last_book.as_deref() else {
        return Err(Error::MissingBookContext(fragment.to_string()));
    };
    state.out.push(format!("{book} {fragment}"));
    state.last_chapter = Some(chapter.trim().to_string());
    Ok(true)
}

fn handle_bare_number(fragment: &str, state: &mut ExpandState) -> Result<bool> {
    if !VERSE_OR_RANGE.is_match(fragment) {
        return Ok(false);
    }
    match (state.last_book.as_deref(), state.last_chapter.as_deref()) {
        (Some(book), Some(chapter)) => {
            state.out.push(format!("{book} {chapter}:{fragment}"));
        }
        (Some(book), None) => {
            state.out.push(format!("{book} {fragment}"));
            state.last_chapter = Some(fragment.to_string());
        }
        _ => return Err(Error::MissingBookOrChapterContext(fragment.to_string())),
    }
    Ok(true)
}
