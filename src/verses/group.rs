use super::model::{Passage, Verse};

/// Group verses into passages of one book and chapter, in emission order.
///
/// A new passage starts whenever the book or chapter changes, so a chapter
/// that reappears later forms a second passage. Verses are never re-sorted.
pub fn group(verses: Vec<Verse>) -> Vec<Passage> {
    let mut passages: Vec<Passage> = Vec::new();
    for verse in verses {
        match passages.last_mut() {
            Some(current) if current.book == verse.book && current.chapter == verse.chapter => {
                current.verses.push(verse);
            }
            _ => passages.push(Passage {
                book: verse.book.clone(),
                chapter: verse.chapter,
                verses: vec![verse],
            }),
        }
    }
    tracing::debug!(passages = passages.len(), "grouped passages");
    passages
}
