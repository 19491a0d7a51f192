//! Query analysis module
//!
//! Handles everything derived from the user's query text:
//! - Search type selection (`general` / `evidence`)
//! - Keyword extraction for evidence sub-queries
//! - Construction of the evidence sub-query variants

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Keywords extracted from the query when building evidence variants
pub const EVIDENCE_MAX_KEYWORDS: usize = 5;

/// Number of evidence sub-queries actually issued
pub const EVIDENCE_QUERY_COUNT: usize = 3;

/// Filler words never used as keywords
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "that", "this", "these", "those", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "do", "does", "did", "should", "would", "could",
        "will", "shall", "may", "might", "must", "can", "resolved", "debate", "argument",
        "therefore", "thus", "hence", "because", "since",
    ]
    .into_iter()
    .collect()
});

/// Whitespace and line terminators as ECMAScript `\s` defines them
const JS_SPACE_CLASS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Anything that is neither an ASCII word character nor whitespace
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("[^A-Za-z0-9_{}]", JS_SPACE_CLASS)).expect("valid regex")
});

static SPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[{}]+", JS_SPACE_CLASS)).expect("valid regex"));

/// Whether `c` is whitespace under ECMAScript rules
///
/// Differs from `char::is_whitespace`: U+FEFF counts, U+0085 does not.
pub fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Kind of search requested by the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchType {
    /// Single pass-through query
    #[default]
    General,
    /// Fan-out into several evidence-oriented sub-queries
    Evidence,
}

impl SearchType {
    /// Parse a client-supplied value; anything unrecognised is a general search
    pub fn from_name(name: &str) -> Self {
        match name {
            "evidence" => Self::Evidence,
            _ => Self::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Evidence => "evidence",
        }
    }
}

/// Extract up to `max_keywords` keywords from free text, longest first
///
/// Stop words and tokens of three characters or fewer are skipped. Equal
/// length keywords keep their order of appearance.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, "");

    let mut keywords: Vec<String> = SPACE_RUN_RE
        .split(&cleaned)
        .filter(|word| word.len() > 3 && !STOP_WORDS.contains(*word))
        .map(str::to_string)
        .collect();

    // sort_by is stable
    keywords.sort_by(|a, b| b.len().cmp(&a.len()));
    keywords.truncate(max_keywords);
    keywords
}

/// Build the evidence sub-queries for a raw (untrimmed) query
pub fn evidence_queries(query: &str) -> Vec<String> {
    let keywords = extract_keywords(query, EVIDENCE_MAX_KEYWORDS);

    let mut queries = vec![
        format!("{} evidence statistics data", query),
        format!("{} research study findings", query),
    ];
    queries.extend(
        keywords
            .iter()
            .map(|keyword| format!("{} {} facts", keyword, query)),
    );

    queries.truncate(EVIDENCE_QUERY_COUNT);
    queries
}
