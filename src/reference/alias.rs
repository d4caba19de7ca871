use super::normalize::normalize;
use crate::books::{catalogue, CanonicalBookId};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static CANONICAL: Lazy<AliasTable> = Lazy::new(|| AliasTable::build(false));
static WITH_APOCRYPHA: Lazy<AliasTable> = Lazy::new(|| AliasTable::build(true));

/// Normalized alias spelling to canonical book id.
///
/// Each alias is stored both normalized and with its interior spaces removed,
/// so `"1 kor"` and `"1kor"` resolve the same way regardless of how the
/// caller tokenized the input.
#[derive(Debug)]
pub struct AliasTable {
    entries: HashMap<String, CanonicalBookId>,
    include_apocrypha: bool,
}

impl AliasTable {
    /// Process-wide table, built on first use.
    pub fn shared(include_apocrypha: bool) -> &'static AliasTable {
        if include_apocrypha {
            &WITH_APOCRYPHA
        } else {
            &CANONICAL
        }
    }

    pub fn build(include_apocrypha: bool) -> Self {
        let mut entries = HashMap::new();
        for info in catalogue(include_apocrypha) {
            for alias in info.aliases {
                let key = normalize(alias);
                entries.insert(key.replace(' ', ""), info.id);
                entries.insert(key, info.id);
            }
        }
        Self {
            entries,
            include_apocrypha,
        }
    }

    /// Look up an already-normalized key.
    pub fn get(&self, key: &str) -> Option<CanonicalBookId> {
        self.entries.get(key).copied()
    }

    pub fn includes_apocrypha(&self) -> bool {
        self.include_apocrypha
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a book name as printed by the lookup tool (`1Samuel`,
    /// `I Samuel`, `Lam`) back to its canonical id.
    pub fn from_source_name(&self, name: &str) -> Option<CanonicalBookId> {
        let key = normalize(name);
        self.get(&key).or_else(|| self.get(&key.replace(' ', "")))
    }
}
