//! Job description parsing: title guess and required/preferred line pools

use crate::processing::normalize::{extract_lines, tokenize};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionData {
    pub raw_text: String,
    pub title: String,
    /// Raw requirement lines, bullet markers stripped
    pub required_keywords: Vec<String>,
    pub preferred_keywords: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pool {
    Required,
    Preferred,
}

pub struct JobParser {
    title_regex: Regex,
    required_regex: Regex,
    preferred_regex: Regex,
    bullet_regex: Regex,
}

impl Default for JobParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JobParser {
    pub fn new() -> Self {
        let title_regex = Regex::new(
            r"(?i)(engineer|developer|designer|manager|analyst|scientist|architect|consultant|lead|senior|junior|intern)",
        )
        .expect("Invalid job title regex");

        let required_regex = Regex::new(
            r"(required|must\s*have|requirements|qualifications|what\s*you.*(need|bring)|minimum)",
        )
        .expect("Invalid required section regex");

        let preferred_regex = Regex::new(
            r"(preferred|nice\s*to\s*have|bonus|desirable|plus|good\s*to\s*have|additional)",
        )
        .expect("Invalid preferred section regex");

        let bullet_regex = Regex::new(r"^[•\-*▪◦0-9.)\]]+\s*").expect("Invalid bullet regex");

        Self {
            title_regex,
            required_regex,
            preferred_regex,
            bullet_regex,
        }
    }

    pub fn parse(&self, raw_text: &str) -> JobDescriptionData {
        let lines = extract_lines(raw_text);

        let title = lines
            .iter()
            .find(|line| self.title_regex.is_match(line))
            .or_else(|| lines.first())
            .map(|line| line.trim().to_string())
            .unwrap_or_default();

        let (required_keywords, preferred_keywords) = self.split_pools(&lines);

        log::debug!(
            "Parsed job description '{}': {} required lines, {} preferred lines",
            title,
            required_keywords.len(),
            preferred_keywords.len()
        );

        JobDescriptionData {
            raw_text: raw_text.to_string(),
            title,
            required_keywords,
            preferred_keywords,
            word_count: tokenize(raw_text).len(),
        }
    }

    /// Sort lines into required and preferred pools. Lines seen before any
    /// marker count as required; marker lines themselves are dropped.
    fn split_pools(&self, lines: &[String]) -> (Vec<String>, Vec<String>) {
        let mut required = Vec::new();
        let mut preferred = Vec::new();
        let mut pool = Pool::Required;

        for line in lines {
            let lower = line.to_lowercase();

            if self.required_regex.is_match(&lower) {
                pool = Pool::Required;
                continue;
            }
            if self.preferred_regex.is_match(&lower) {
                pool = Pool::Preferred;
                continue;
            }

            let item = self.bullet_regex.replace(line, "").trim().to_string();
            // Three-letter acronyms (SQL, AWS) are real requirements
            if item.chars().count() < 3 {
                continue;
            }
            match pool {
                Pool::Required => required.push(item),
                Pool::Preferred => preferred.push(item),
            }
        }

        (required, preferred)
    }
}
