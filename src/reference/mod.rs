//! Free-form scripture reference resolution.
//!
//! A reference flows through four stages: `normalize` canonicalizes tokens,
//! `match_book` finds the longest alias prefix, `expand_shorthand` unrolls
//! comma/semicolon lists, and `build_compound` produces the `"; "`-joined
//! lookup key handed to the scripture tool.

mod alias;
mod build;
mod expand;
mod matcher;
mod normalize;

pub use alias::AliasTable;
pub use build::{build_compound, build_reference};
pub use expand::expand_shorthand;
pub use matcher::{match_book, BookMatch};
pub use normalize::normalize;

use crate::error::{Error, Result};

/// Resolve one free-form reference into its compound lookup key.
pub fn resolve(reference: &str, table: &AliasTable) -> Result<String> {
    if reference.trim().is_empty() {
        return Err(Error::MalformedReference(reference.to_string()));
    }
    let fragments = expand_shorthand(reference, table)?;
    let key = build_compound(&fragments, table)?;
    tracing::debug!(reference, key = %key, "resolved reference");
    Ok(key)
}

/// Resolve a batch; each reference succeeds or fails on its own.
pub fn resolve_all<'a, I>(references: I, table: &AliasTable) -> Vec<Result<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    references
        .into_iter()
        .map(|reference| resolve(reference, table))
        .collect()
}
