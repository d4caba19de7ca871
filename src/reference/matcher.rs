use super::alias::AliasTable;
use crate::books::CanonicalBookId;
use crate::error::{Error, Result};

/// Longest alias prefix found at the start of a token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMatch<'a, T> {
    pub book: CanonicalBookId,
    /// Number of leading tokens the alias consumed.
    pub consumed: usize,
    pub remainder: &'a [T],
}

/// Match the longest token prefix that is a known alias.
///
/// Tokens must already be normalized. Each candidate prefix is tried joined
/// with single spaces and with no spaces, from all tokens down to one, so a
/// two-word name always wins over a shorter alias it starts with.
pub fn match_book<'a, T: AsRef<str>>(
    tokens: &'a [T],
    table: &AliasTable,
) -> Result<BookMatch<'a, T>> {
    for len in (1..=tokens.len()).rev() {
        let candidate = tokens[..len]
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        let hit = table
            .get(&candidate)
            .or_else(|| table.get(&candidate.replace(' ', "")));
        if let Some(book) = hit {
            return Ok(BookMatch {
                book,
                consumed: len,
                remainder: &tokens[len..],
            });
        }
    }
    let first = tokens.first().map(|token| token.as_ref()).unwrap_or_default();
    Err(Error::UnknownBook(first.to_string()))
}
