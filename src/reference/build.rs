use super::alias::AliasTable;
use super::matcher::match_book;
use super::normalize::normalize;
use crate::error::{Error, Result};

/// Turn one expanded fragment into a `"Book chapter:verse"` lookup key.
///
/// A bare book resolves to its key alone; a single-chapter book followed by a
/// bare number reads the number as a verse (`"Jude 5"` becomes `"Jude 1:5"`).
pub fn build_reference(fragment: &str, table: &AliasTable) -> Result<String> {
    let normalized = normalize(fragment);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(Error::MalformedReference(fragment.to_string()));
    }

    let found = match_book(&tokens, table)?;
    let book = found.book.key();
    let remainder = found.remainder.join(" ");
    if remainder.is_empty() {
        return Ok(book.to_string());
    }
    if !remainder.contains(':') && found.book.is_single_chapter() {
        return Ok(format!("{book} 1:{remainder}"));
    }
    Ok(format!("{book} {remainder}"))
}

/// Build every fragment and join them into one compound lookup key.
pub fn build_compound<S: AsRef<str>>(fragments: &[S], table: &AliasTable) -> Result<String> {
    if fragments.is_empty() {
        return Err(Error::MalformedReference(String::new()));
    }
    let built = fragments
        .iter()
        .map(|fragment| build_reference(fragment.as_ref(), table))
        .collect::<Result<Vec<_>>>()?;
    Ok(built.join("; "))
}
