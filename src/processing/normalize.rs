//! Text normalization, tokenization and matching helpers shared by every scorer

use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Default number of graphemes kept on each side of a keyword snippet
pub const DEFAULT_CONTEXT_RADIUS: usize = 40;

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
    "by", "from", "is", "it", "as", "be", "was", "are", "were", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "may", "might", "must", "shall", "can", "this", "that", "these", "those",
    "i", "me", "my", "we", "our", "you", "your", "he", "she", "they", "them",
    "its", "his", "her", "their", "which", "what", "who", "whom", "how", "when",
    "where", "why", "not", "no", "nor", "so", "if", "then", "than", "too", "very",
    "just", "about", "also", "into", "over", "such", "after", "before",
];

/// Characters stripped from a line before it is tested as a section header
const HEADER_SEPARATORS: &[char] = &[':', '-', '—', '_', '|'];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Lowercase, unify quotes, flatten newlines and strip everything except
/// word characters, whitespace and `. @ / + # -`, then collapse whitespace.
pub fn normalize_text(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            c => c,
        })
        .map(|c| match c {
            '\r' | '\n' => ' ',
            c if c.is_ascii_alphanumeric() || c == '_' => c,
            c if c.is_whitespace() => c,
            '.' | '@' | '/' | '+' | '#' | '-' => c,
            _ => ' ',
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize then split on whitespace, dropping single-character tokens
pub fn tokenize(text: &str) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

pub fn remove_stop_words(tokens: &[String]) -> Vec<String> {
    let stop = stop_words();
    tokens
        .iter()
        .filter(|t| !stop.contains(t.as_str()))
        .cloned()
        .collect()
}

pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token)
}

/// Contiguous windows of `n` tokens joined by a single space
pub fn n_grams(tokens: &[String], n: usize) -> Vec<String> {
    if n == 0 || tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).map(|w| w.join(" ")).collect()
}

/// Whole-word, case-insensitive matcher for `pattern` taken as a literal
pub fn word_pattern(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() {
        return None;
    }
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(pattern)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Case-insensitive matcher for `keyword` anywhere, word boundaries ignored
pub fn literal_pattern(keyword: &str) -> Option<Regex> {
    if keyword.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Whole-word, case-insensitive count of `pattern` taken as a literal
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    word_pattern(pattern).map_or(0, |re| re.find_iter(text).count())
}

/// Split into trimmed, non-empty lines
pub fn extract_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip header separator punctuation and trim
pub fn strip_header_separators(line: &str) -> String {
    line.chars()
        .filter(|c| !HEADER_SEPARATORS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Heuristic: short upper-case lines, or short Title Case lines, are headers
pub fn is_section_header(line: &str) -> bool {
    let clean = strip_header_separators(line);
    let len = clean.chars().count();
    if !(2..=50).contains(&len) {
        return false;
    }
    if clean == clean.to_uppercase() && len < 40 {
        return true;
    }

    let words: Vec<&str> = clean.split_whitespace().collect();
    let title_case = words
        .iter()
        .all(|w| w.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    title_case && words.len() <= 5
}

/// Snippet around the first case-insensitive occurrence of `keyword`,
/// with `...` markers where the text was clipped.
pub fn get_context(text: &str, keyword: &str, radius: usize) -> String {
    literal_pattern(keyword)
        .map(|re| context_for(text, &re, radius))
        .unwrap_or_default()
}

/// Snippet around the first match of an already compiled `pattern`
pub fn context_for(text: &str, pattern: &Regex, radius: usize) -> String {
    let Some(found) = pattern.find(text) else {
        return String::new();
    };

    // Walk outwards from the match so the cost depends on `radius`, not on the offset
    let start = match radius {
        0 => found.start(),
        _ => text[..found.start()]
            .grapheme_indices(true)
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0),
    };

    let end = text[found.end()..]
        .grapheme_indices(true)
        .nth(radius)
        .map(|(i, _)| found.end() + i)
        .unwrap_or(text.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(text[start..end].trim());
    if end < text.len() {
        snippet.push_str("...");
    }
    snippet
}
