//! Submitted-URL validation against the static source-document rules.

/// Canonical prefix every submitted hadith URL must carry.
pub const HADITH_URL_PREFIX: &str = "https://thaqalayn.net/hadith";

/// Source documents the backend has no chain data for, keyed by the book
/// identifier segment of the URL. Identifier and title travel together so
/// the pair cannot drift; the rejection message is derived from this table.
const UNSUPPORTED_BOOKS: [(&str, &str); 4] = [
    ("34", "Man Lā Yaḥḍuruh al-Faqīh"),
    ("17", "Muʿjam al-Aḥādīth al-Muʿtabara"),
    ("33", "Risālat al-Ḥuqūq"),
    ("9", "Kitāb al-Ḍuʿafāʾ"),
];

/// Outcome of validating one submitted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The URL passed every rule and is forwarded unchanged.
    Accepted(String),
    /// The URL violated a rule; the payload is user-facing text.
    Rejected(String),
}

/// Classifies a submitted URL as acceptable or rejected.
///
/// Pure function of the input and the static rule tables. Empty or
/// malformed strings are ordinary inputs that fail the prefix rule, never a
/// programming error.
pub fn validate(url: &str) -> ValidationOutcome {
    if !url.starts_with(HADITH_URL_PREFIX) {
        return ValidationOutcome::Rejected(format!("URL must start with {HADITH_URL_PREFIX}"));
    }

    if let Some(book_id) = book_id_segment(url) {
        if UNSUPPORTED_BOOKS.iter().any(|(id, _)| *id == book_id) {
            return ValidationOutcome::Rejected(unsupported_books_message());
        }
    }

    ValidationOutcome::Accepted(url.to_string())
}

/// Extracts the book identifier: the first of at least two `/`-separated
/// segments after the `.../hadith/` prefix. A URL with no path after the
/// prefix, or a bare book id without a hadith number, carries no identifier
/// to check and is governed by the prefix rule alone.
fn book_id_segment(url: &str) -> Option<&str> {
    let path = url.strip_prefix(HADITH_URL_PREFIX)?.strip_prefix('/')?;
    let mut segments = path.split('/');
    let first = segments.next()?;
    segments.next()?;
    Some(first)
}

/// "The following books are not currently supported: A, B, C, and D."
fn unsupported_books_message() -> String {
    let titles: Vec<&str> = UNSUPPORTED_BOOKS.iter().map(|(_, title)| *title).collect();
    format!(
        "The following books are not currently supported: {}, and {}.",
        titles[..titles.len() - 1].join(", "),
        titles[titles.len() - 1]
    )
}
