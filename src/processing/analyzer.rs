//! Main analysis engine combining every scorer into one ATS score

use crate::config::Config;
use crate::error::Result;
use crate::processing::formatting::assess_formatting;
use crate::processing::job_parser::JobParser;
use crate::processing::keywords::{calculate_keyword_score, KeywordMatcher};
use crate::processing::normalize::{count_occurrences, normalize_text, DEFAULT_CONTEXT_RADIUS};
use crate::processing::penalties::{calculate_penalties, total_penalty_points};
use crate::processing::resume_parser::{ResumeData, ResumeParser};
use crate::processing::score::{
    get_band, ATSScore, AnalysisMetadata, SectionScores, SkillCluster, Suggestion, SuggestionPriority,
    MAX_BONUS, MAX_TITLE_ALIGNMENT,
};
use crate::processing::similarity::calculate_similarity_score;
use crate::processing::skills::{match_skills, SkillsDictionary};
use chrono::{SecondsFormat, Utc};
use regex::Regex;
use std::time::Instant;

/// Verbs that mark achievement-oriented writing
pub const ACTION_VERBS: &[&str] = &[
    "achieved", "built", "created", "delivered", "designed", "developed", "engineered",
    "established", "executed", "generated", "implemented", "improved", "increased",
    "launched", "led", "managed", "optimized", "orchestrated", "pioneered", "reduced",
    "resolved", "scaled", "spearheaded", "streamlined", "transformed", "architected",
];

const QUANTIFIED_BONUS: u32 = 2;
const ACTION_VERB_BONUS: u32 = 1;
const LINKEDIN_BONUS: u32 = 1;
const GITHUB_BONUS: u32 = 1;
const MIN_ACTION_VERBS: usize = 3;

/// Orchestrates parsing and scoring. Holds only read-only state, so one
/// instance can serve any number of analyses.
pub struct ATSAnalyzer {
    resume_parser: ResumeParser,
    job_parser: JobParser,
    keyword_matcher: KeywordMatcher,
    dictionary: SkillsDictionary,
    quantified_regex: Regex,
}

impl ATSAnalyzer {
    /// Analyzer backed by the embedded skills dictionary
    pub fn new() -> Result<Self> {
        Ok(Self::with_dictionary(SkillsDictionary::builtin()?, DEFAULT_CONTEXT_RADIUS))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let dictionary = match &config.scoring.skills_dictionary {
            Some(path) => SkillsDictionary::load(path)?,
            None => SkillsDictionary::builtin()?,
        };
        Ok(Self::with_dictionary(dictionary, config.scoring.context_radius))
    }

    pub fn with_dictionary(dictionary: SkillsDictionary, context_radius: usize) -> Self {
        let quantified_regex = Regex::new(r"[0-9]+%|\$[0-9]+|\b[0-9]{2,}\b")
            .expect("Invalid quantified achievement regex");

        Self {
            resume_parser: ResumeParser::new(),
            job_parser: JobParser::new(),
            keyword_matcher: KeywordMatcher::with_context_radius(context_radius),
            dictionary,
            quantified_regex,
        }
    }

    pub fn dictionary(&self) -> &SkillsDictionary {
        &self.dictionary
    }

    /// Score one resume against one job description
    pub fn analyze(&self, resume_text: &str, job_text: &str, resume_file_name: Option<&str>) -> ATSScore {
        let start_time = Instant::now();

        let resume = self.resume_parser.parse(resume_text);
        let job = self.job_parser.parse(job_text);

        let keywords = self.keyword_matcher.match_keywords(resume_text, &job);
        let keyword_score = calculate_keyword_score(&keywords.matched, &keywords.missing);

        let jd_skills = self.dictionary.extract_jd_skills(job_text);
        let skills = match_skills(resume_text, &jd_skills);

        let formatting = assess_formatting(&resume);

        let sections = SectionScores {
            keyword_relevance: keyword_score,
            required_skills: skills.score,
            title_alignment: title_alignment(resume_text, &job.title),
            text_similarity: calculate_similarity_score(resume_text, job_text),
            formatting: formatting.score,
            bonus: self.bonus(&resume),
        };

        let penalties = calculate_penalties(&resume, &keywords.matched);
        let raw_total = sections.total();
        let overall = raw_total.saturating_sub(total_penalty_points(&penalties)).min(100);

        let suggestions = generate_suggestions(
            &sections,
            keywords.missing.len(),
            &skills.clusters,
            formatting.issues.len(),
            penalties.len(),
        );

        log::info!(
            "Analysis complete in {:?}: {}/100 (raw {}, {} penalties)",
            start_time.elapsed(),
            overall,
            raw_total,
            penalties.len()
        );

        ATSScore {
            overall,
            band: get_band(overall),
            sections,
            matched_keywords: keywords.matched,
            missing_keywords: keywords.missing,
            skills: skills.clusters,
            formatting_issues: formatting.issues,
            penalties,
            suggestions,
            metadata: AnalysisMetadata {
                analyzed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                resume_word_count: resume.word_count,
                jd_word_count: job.word_count,
                resume_file_name: resume_file_name.map(str::to_string),
                job_title: (!job.title.is_empty()).then_some(job.title),
            },
        }
    }

    fn bonus(&self, resume: &ResumeData) -> u32 {
        let mut bonus = 0;

        let quantified = resume
            .experiences
            .iter()
            .flat_map(|e| e.bullets.iter())
            .any(|b| self.quantified_regex.is_match(b));
        if quantified {
            bonus += QUANTIFIED_BONUS;
        }

        let normalized = normalize_text(&resume.raw_text);
        let verbs = ACTION_VERBS
            .iter()
            .filter(|verb| count_occurrences(&normalized, verb) > 0)
            .count();
        if verbs >= MIN_ACTION_VERBS {
            bonus += ACTION_VERB_BONUS;
        }

        if resume.contact_info.linkedin.is_some() {
            bonus += LINKEDIN_BONUS;
        }
        if resume.contact_info.github.is_some() {
            bonus += GITHUB_BONUS;
        }

        bonus.min(MAX_BONUS)
    }
}

/// Share of the job title's significant words found in the resume, out of 10.
/// A missing or trivial title scores a neutral 5.
pub fn title_alignment(resume_text: &str, job_title: &str) -> u32 {
    let neutral = MAX_TITLE_ALIGNMENT / 2;
    if job_title.is_empty() {
        return neutral;
    }

    let normalized_title = normalize_text(job_title);
    let tokens: Vec<&str> = normalized_title
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .collect();
    if tokens.is_empty() {
        return neutral;
    }

    let normalized_resume = normalize_text(resume_text);
    let matched = tokens
        .iter()
        .filter(|t| count_occurrences(&normalized_resume, t) > 0)
        .count();

    (matched as f64 / tokens.len() as f64 * MAX_TITLE_ALIGNMENT as f64).round() as u32
}

fn suggestion(
    id: &str,
    priority: SuggestionPriority,
    title: &str,
    description: impl Into<String>,
    impact: &str,
) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        priority,
        title: title.to_string(),
        description: description.into(),
        impact: impact.to_string(),
    }
}

/// Threshold-driven advice, ordered high to medium to low and stable within a tier
pub fn generate_suggestions(
    sections: &SectionScores,
    missing_keyword_count: usize,
    skill_clusters: &[SkillCluster],
    formatting_issue_count: usize,
    penalty_count: usize,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if sections.keyword_relevance < 20 {
        suggestions.push(suggestion(
            "improve-keywords",
            SuggestionPriority::High,
            "Add Missing Keywords",
            format!(
                "Your resume is missing {} keywords from the job description. Mirror the exact language used in the JD.",
                missing_keyword_count
            ),
            "+5-15 points",
        ));
    }

    if sections.required_skills < 20 {
        let missing: Vec<&str> = skill_clusters
            .iter()
            .flat_map(|c| c.missing.iter().map(String::as_str))
            .take(5)
            .collect();
        suggestions.push(suggestion(
            "add-skills",
            SuggestionPriority::High,
            "Add Required Skills",
            format!("Skills gap detected. Consider adding: {}", missing.join(", ")),
            "+5-15 points",
        ));
    }

    if sections.title_alignment < 5 {
        suggestions.push(suggestion(
            "align-title",
            SuggestionPriority::Medium,
            "Align with Job Title",
            "Your resume doesn't mention the target job title. Add it to your summary or headline.",
            "+3-8 points",
        ));
    }

    if sections.text_similarity < 8 {
        suggestions.push(suggestion(
            "improve-similarity",
            SuggestionPriority::Medium,
            "Use Similar Language",
            "Rephrase your experience to match the terminology used in the job description.",
            "+3-7 points",
        ));
    }

    if sections.formatting < 7 {
        suggestions.push(suggestion(
            "fix-formatting",
            SuggestionPriority::Medium,
            "Fix Formatting Issues",
            format!(
                "{} formatting issues detected. Fix these for better ATS parsing.",
                formatting_issue_count
            ),
            "+2-5 points",
        ));
    }

    if sections.bonus < 3 {
        suggestions.push(suggestion(
            "add-metrics",
            SuggestionPriority::Low,
            "Quantify Achievements",
            "Add numbers and percentages to your bullet points (e.g., \"increased revenue by 25%\").",
            "+2-5 points",
        ));
    }

    if penalty_count > 0 {
        suggestions.push(suggestion(
            "resolve-penalties",
            SuggestionPriority::High,
            "Resolve Penalties",
            format!(
                "{} penalties are reducing your score. Check the penalties section for details.",
                penalty_count
            ),
            "+3-10 points",
        ));
    }

    // sort_by_key is stable
    suggestions.sort_by_key(|s| s.priority);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::score::{KeywordSource, ScoreBand, SkillCategory};
    use crate::processing::skills::SkillEntry;

    const RESUME: &str = "John Doe\njohn@example.com\n\nEXPERIENCE\nSoftware Engineer at Acme\n• Built systems\n\nEDUCATION\nBS Computer Science, 2020\n\nSKILLS\nPython, SQL";
    const JOB: &str = "Senior Engineer\nRequirements:\n- Python\n- SQL\nPreferred:\n- AWS";

    fn analyzer() -> ATSAnalyzer {
        ATSAnalyzer::new().unwrap()
    }

    #[test]
    fn test_scenario() {
        let score = analyzer().analyze(RESUME, JOB, Some("resume.txt"));

        let matched: Vec<_> = score
            .matched_keywords
            .iter()
            .filter(|k| k.source == KeywordSource::Required)
            .map(|k| k.keyword.as_str())
            .collect();
        assert!(matched.contains(&"python"));
        assert!(matched.contains(&"sql"));

        let aws = score.missing_keywords.iter().find(|k| k.keyword == "aws").unwrap();
        assert_eq!(aws.source, KeywordSource::Preferred);

        assert!(score.overall > 0);
        assert!(!score.suggestions.is_empty());
        assert_eq!(score.metadata.resume_file_name.as_deref(), Some("resume.txt"));
        assert_eq!(score.metadata.job_title.as_deref(), Some("Senior Engineer"));
    }

    #[test]
    fn test_overall_is_clamped_total_minus_penalties() {
        let score = analyzer().analyze(RESUME, JOB, None);
        let expected = score
            .sections
            .total()
            .saturating_sub(score.total_penalty_points())
            .min(100);
        assert_eq!(score.overall, expected);
        assert_eq!(score.band, get_band(score.overall));
    }

    #[test]
    fn test_section_scores_within_maxima() {
        let score = analyzer().analyze(RESUME, JOB, None);
        for (label, value, max) in score.sections.rows() {
            assert!(value <= max, "{} = {} exceeds {}", label, value, max);
        }
    }

    #[test]
    fn test_empty_inputs_do_not_panic() {
        let score = analyzer().analyze("", "", None);
        assert_eq!(score.sections.keyword_relevance, 15);
        assert_eq!(score.sections.title_alignment, 5);
        assert_eq!(score.sections.text_similarity, 0);
        // Untouched skill categories count as satisfied: 15 + 30 + 5 = 50 raw,
        // less 31 points of missing-content penalties
        assert_eq!(score.sections.required_skills, 30);
        assert_eq!(score.overall, 19);
        assert_eq!(score.band, ScoreBand::Critical);
        assert!(score.metadata.job_title.is_none());
    }

    #[test]
    fn test_title_alignment() {
        assert_eq!(title_alignment("anything", ""), 5);
        assert_eq!(title_alignment("anything", "QA"), 5);
        assert_eq!(title_alignment("Senior backend engineer", "Senior Backend Engineer"), 10);
        assert_eq!(title_alignment("software engineer", "Senior Engineer"), 5);
        assert_eq!(title_alignment("gardener", "Data Scientist"), 0);
    }

    #[test]
    fn test_bonus_is_capped() {
        let resume = "Jane\nlinkedin.com/in/jane\ngithub.com/jane\nEXPERIENCE\nEngineer at Acme\n• Reduced costs by 40%\n• Led, built and scaled the platform";
        let analyzer = analyzer();
        let parsed = analyzer.resume_parser.parse(resume);
        // 2 + 1 + 1 + 1
        assert_eq!(analyzer.bonus(&parsed), 5);
    }

    #[test]
    fn test_bonus_quantified_only_counts_bullets() {
        let analyzer = analyzer();
        let parsed = analyzer.resume_parser.parse("Jane 2020\nEXPERIENCE\nEngineer at Acme\n• Wrote code");
        assert_eq!(analyzer.bonus(&parsed), 0);
    }

    #[test]
    fn test_suggestions_sorted_by_priority() {
        let sections = SectionScores::default();
        let clusters = vec![SkillCluster {
            category: SkillCategory::Hard,
            matched: vec![],
            missing: vec!["a", "b", "c", "d", "e", "f"].into_iter().map(String::from).collect(),
            score: 0,
        }];
        let suggestions = generate_suggestions(&sections, 4, &clusters, 2, 1);

        let ids: Vec<_> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "improve-keywords",
                "add-skills",
                "resolve-penalties",
                "align-title",
                "improve-similarity",
                "fix-formatting",
                "add-metrics",
            ]
        );
        assert_eq!(suggestions[1].description, "Skills gap detected. Consider adding: a, b, c, d, e");
        assert_eq!(
            suggestions[0].description,
            "Your resume is missing 4 keywords from the job description. Mirror the exact language used in the JD."
        );
    }

    #[test]
    fn test_no_suggestions_for_strong_sections() {
        let sections = SectionScores {
            keyword_relevance: 30,
            required_skills: 30,
            title_alignment: 10,
            text_similarity: 15,
            formatting: 10,
            bonus: 5,
        };
        assert!(generate_suggestions(&sections, 0, &[], 0, 0).is_empty());
    }

    #[test]
    fn test_custom_dictionary() {
        let dictionary = SkillsDictionary::from_entries(vec![SkillEntry {
            name: "cobol".to_string(),
            category: SkillCategory::Hard,
            synonyms: vec![],
            weight: 1.0,
        }])
        .unwrap();
        let analyzer = ATSAnalyzer::with_dictionary(dictionary, 20);
        let score = analyzer.analyze("Maintained COBOL batch jobs", "Requirements:\n- COBOL", None);

        assert_eq!(score.skills[0].matched, vec!["cobol"]);
        assert_eq!(score.sections.required_skills, 30);
    }
}
