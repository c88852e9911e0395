use std::ops::Range;

use crate::prelude::Contact;

/// Trimmed, lowercased form of a search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn matches_query(contact: &Contact, normalized: &str) -> bool {
    contact.name.to_lowercase().contains(normalized)
        || contact.phone.to_lowercase().contains(normalized)
}

/// Every contact whose name or phone contains `query`, ignoring case and the
/// query's surrounding whitespace. Order of `contacts` is kept.
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    let normalized = normalize_query(query);

    if normalized.is_empty() {
        return contacts.iter().collect();
    }

    contacts
        .iter()
        .filter(|contact| matches_query(contact, &normalized))
        .collect()
}

/// Byte ranges of `text` that match `query` case-insensitively, left to right
/// and non-overlapping. Used for highlighting.
pub fn match_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle = normalize_query(query);
    let mut spans: Vec<Range<usize>> = Vec::new();

    if needle.is_empty() {
        return spans;
    }

    // Lowercasing can change byte lengths, so every byte of the lowered text
    // remembers the char of `text` it came from.
    let mut lowered = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());

    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        for lower in ch.to_lowercase() {
            let before = lowered.len();
            lowered.push(lower);
            origin.extend((before..lowered.len()).map(|_| (start, end)));
        }
    }

    let mut from = 0;
    while let Some(pos) = lowered[from..].find(&needle) {
        let hit_start = from + pos;
        let hit_end = hit_start + needle.len();
        let span = origin[hit_start].0..origin[hit_end - 1].1;

        match spans.last_mut() {
            Some(last) if last.end > span.start => last.end = span.end,
            _ => spans.push(span),
        }
        from = hit_end;
    }

    spans
}
