//! Keyword extraction from job description pools and matching against a resume

use crate::processing::job_parser::JobDescriptionData;
use crate::processing::normalize::{
    context_for, literal_pattern, normalize_text, remove_stop_words, tokenize, word_pattern,
    DEFAULT_CONTEXT_RADIUS,
};
use crate::processing::score::{KeywordSource, MatchedKeyword, MissingKeyword, MAX_KEYWORD_RELEVANCE};
use regex::Regex;
use std::collections::HashSet;

const REQUIRED_IMPORTANCE: f64 = 0.9;
const PREFERRED_IMPORTANCE: f64 = 0.5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatchResult {
    pub matched: Vec<MatchedKeyword>,
    pub missing: Vec<MissingKeyword>,
}

impl KeywordMatchResult {
    fn contains(&self, keyword: &str) -> bool {
        self.matched.iter().any(|m| m.keyword == keyword)
            || self.missing.iter().any(|m| m.keyword == keyword)
    }
}

/// Whole-word keyword matcher
pub struct KeywordMatcher {
    phrase_regex: Regex,
    context_radius: usize,
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self::with_context_radius(DEFAULT_CONTEXT_RADIUS)
    }

    pub fn with_context_radius(context_radius: usize) -> Self {
        // Capitalised runs of up to four words: "Node.js", "CI/CD", "Machine Learning"
        let phrase_regex =
            Regex::new(r"\b[A-Z][A-Za-z0-9_.+#/-]*(?:\s+[A-Z][A-Za-z0-9_.+#/-]*){0,3}\b")
                .expect("Invalid phrase regex");

        Self {
            phrase_regex,
            context_radius,
        }
    }

    /// Phrases and significant tokens from each line, deduplicated in first-seen order
    pub fn extract_keywords_from_lines(&self, lines: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for line in lines {
            let phrases = self.extract_phrases(line);
            let tokens = remove_stop_words(&tokenize(line))
                .into_iter()
                .filter(|t| t.chars().count() > 3);

            for keyword in phrases.into_iter().chain(tokens) {
                if seen.insert(keyword.clone()) {
                    keywords.push(keyword);
                }
            }
        }

        keywords
    }

    fn extract_phrases(&self, line: &str) -> Vec<String> {
        self.phrase_regex
            .find_iter(line)
            .map(|m| m.as_str().trim())
            .filter(|p| {
                let len = p.chars().count();
                len > 2 && len < 40
            })
            .map(str::to_lowercase)
            .collect()
    }

    /// Classify every JD keyword as matched or missing in the resume.
    /// Required keywords are processed first; a preferred keyword already
    /// classified on the required pass is skipped.
    pub fn match_keywords(&self, resume_text: &str, jd: &JobDescriptionData) -> KeywordMatchResult {
        let normalized_resume = normalize_text(resume_text);
        let mut result = KeywordMatchResult::default();

        let required = self.extract_keywords_from_lines(&jd.required_keywords);
        let preferred = self.extract_keywords_from_lines(&jd.preferred_keywords);

        for keyword in required {
            self.classify(&mut result, resume_text, &normalized_resume, keyword, KeywordSource::Required);
        }

        for keyword in preferred {
            if result.contains(&keyword) {
                continue;
            }
            self.classify(&mut result, resume_text, &normalized_resume, keyword, KeywordSource::Preferred);
        }

        log::debug!(
            "Keyword matching: {} matched, {} missing",
            result.matched.len(),
            result.missing.len()
        );

        result
    }

    fn classify(
        &self,
        result: &mut KeywordMatchResult,
        resume_text: &str,
        normalized_resume: &str,
        keyword: String,
        source: KeywordSource,
    ) {
        // Patterns are compiled once per keyword; context is only looked up on a hit
        let count = word_pattern(&keyword).map_or(0, |re| re.find_iter(normalized_resume).count());
        if count > 0 {
            let context = literal_pattern(&keyword)
                .map(|re| context_for(resume_text, &re, self.context_radius))
                .unwrap_or_default();
            result.matched.push(MatchedKeyword {
                keyword,
                source,
                count,
                context,
            });
        } else {
            let (importance, suggestion) = match source {
                KeywordSource::Required => (
                    REQUIRED_IMPORTANCE,
                    format!("Consider adding \"{}\" to your resume if you have this experience.", keyword),
                ),
                KeywordSource::Preferred => (
                    PREFERRED_IMPORTANCE,
                    format!("Adding \"{}\" could strengthen your application.", keyword),
                ),
            };
            result.missing.push(MissingKeyword {
                keyword,
                source,
                importance,
                suggestion,
            });
        }
    }
}

/// Keyword relevance out of 30. Required keywords carry 70% of the weight;
/// an empty pool counts as half satisfied and no keywords at all scores 15.
pub fn calculate_keyword_score(matched: &[MatchedKeyword], missing: &[MissingKeyword]) -> u32 {
    if matched.is_empty() && missing.is_empty() {
        return MAX_KEYWORD_RELEVANCE / 2;
    }

    let ratio = |source: KeywordSource| {
        let hits = matched.iter().filter(|m| m.source == source).count();
        let misses = missing.iter().filter(|m| m.source == source).count();
        let total = hits + misses;
        if total == 0 {
            0.5
        } else {
            hits as f64 / total as f64
        }
    };

    let raw = ratio(KeywordSource::Required) * 0.7 + ratio(KeywordSource::Preferred) * 0.3;
    (raw * MAX_KEYWORD_RELEVANCE as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::job_parser::JobParser;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn matched(source: KeywordSource) -> MatchedKeyword {
        MatchedKeyword {
            keyword: "k".to_string(),
            source,
            count: 1,
            context: String::new(),
        }
    }

    fn missing(source: KeywordSource) -> MissingKeyword {
        MissingKeyword {
            keyword: "k".to_string(),
            source,
            importance: 0.5,
            suggestion: String::new(),
        }
    }

    #[test]
    fn test_extract_phrases_and_tokens() {
        let matcher = KeywordMatcher::new();
        let keywords = matcher.extract_keywords_from_lines(&lines(&[
            "Experience with Machine Learning and CI/CD",
            "Strong python skills",
        ]));

        assert!(keywords.contains(&"machine learning".to_string()));
        assert!(keywords.contains(&"ci/cd".to_string()));
        assert!(keywords.contains(&"experience".to_string()));
        assert!(keywords.contains(&"python".to_string()));
        assert!(keywords.contains(&"strong".to_string()));
        assert!(!keywords.contains(&"with".to_string()));
        assert!(!keywords.contains(&"and".to_string()));
    }

    #[test]
    fn test_extracted_keywords_are_unique() {
        let matcher = KeywordMatcher::new();
        let keywords = matcher.extract_keywords_from_lines(&lines(&["Python", "Python", "python"]));
        assert_eq!(keywords, vec!["python"]);
    }

    #[test]
    fn test_short_acronym_kept_as_phrase() {
        let matcher = KeywordMatcher::new();
        let keywords = matcher.extract_keywords_from_lines(&lines(&["SQL"]));
        assert_eq!(keywords, vec!["sql"]);
    }

    #[test]
    fn test_match_keywords_scenario() {
        let jd = JobParser::new().parse("Senior Engineer\nRequirements:\n- Python\n- SQL\nPreferred:\n- AWS");
        let resume = "John Doe\njohn@example.com\nSoftware Engineer at Acme\nSKILLS\nPython, SQL";
        let result = KeywordMatcher::new().match_keywords(resume, &jd);

        let matched: Vec<_> = result.matched.iter().map(|m| m.keyword.as_str()).collect();
        assert!(matched.contains(&"python"));
        assert!(matched.contains(&"sql"));
        assert!(result.matched.iter().all(|m| m.source == KeywordSource::Required));

        let aws = result.missing.iter().find(|m| m.keyword == "aws").unwrap();
        assert_eq!(aws.source, KeywordSource::Preferred);
        assert_eq!(aws.importance, 0.5);
        assert_eq!(aws.suggestion, "Adding \"aws\" could strengthen your application.");
    }

    #[test]
    fn test_required_wins_over_preferred() {
        let jd = JobParser::new().parse("Requirements:\n- Docker\nPreferred:\n- Docker");
        let result = KeywordMatcher::new().match_keywords("kubernetes only", &jd);

        let docker: Vec<_> = result.missing.iter().filter(|m| m.keyword == "docker").collect();
        assert_eq!(docker.len(), 1);
        assert_eq!(docker[0].source, KeywordSource::Required);
        assert_eq!(docker[0].importance, 0.9);
    }

    #[test]
    fn test_matched_keyword_has_context() {
        let jd = JobParser::new().parse("Requirements:\n- Kubernetes");
        let result = KeywordMatcher::new().match_keywords("Ran Kubernetes clusters in production", &jd);

        assert_eq!(result.matched.len(), 1);
        assert_eq!(result.matched[0].count, 1);
        assert!(result.matched[0].context.contains("Kubernetes"));
    }

    #[test]
    fn test_keyword_score() {
        assert_eq!(calculate_keyword_score(&[], &[]), 15);

        let all_required = vec![matched(KeywordSource::Required); 2];
        // 1.0 * 0.7 + 0.5 * 0.3 = 0.85
        assert_eq!(calculate_keyword_score(&all_required, &[]), 26);

        let m = vec![matched(KeywordSource::Required), matched(KeywordSource::Preferred)];
        assert_eq!(calculate_keyword_score(&m, &[]), 30);

        let none = vec![missing(KeywordSource::Required), missing(KeywordSource::Preferred)];
        assert_eq!(calculate_keyword_score(&[], &none), 0);
    }

    #[test]
    fn test_context_for_keyword_deep_in_long_resume() {
        let jd = JobParser::new().parse("Requirements:\n- Terraform");
        let resume = format!("{}Managed Terraform modules", "filler line of text\n".repeat(5_000));
        let result = KeywordMatcher::with_context_radius(9).match_keywords(&resume, &jd);

        assert_eq!(result.matched.len(), 1);
        assert_eq!(result.matched[0].count, 1);
        assert_eq!(result.matched[0].context, "...Managed Terraform modules");
    }
}
