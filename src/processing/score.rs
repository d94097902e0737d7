//! Result model produced by one analysis run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum points per section; the maxima sum to 100
pub const MAX_KEYWORD_RELEVANCE: u32 = 30;
pub const MAX_REQUIRED_SKILLS: u32 = 30;
pub const MAX_TITLE_ALIGNMENT: u32 = 10;
pub const MAX_TEXT_SIMILARITY: u32 = 15;
pub const MAX_FORMATTING: u32 = 10;
pub const MAX_BONUS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandInfo {
    pub min: u32,
    pub max: u32,
    pub band: ScoreBand,
    pub label: &'static str,
    pub color: &'static str,
}

pub const SCORE_BANDS: [BandInfo; 5] = [
    BandInfo { min: 85, max: 100, band: ScoreBand::Excellent, label: "Excellent Match", color: "#22c55e" },
    BandInfo { min: 70, max: 84, band: ScoreBand::Good, label: "Good Match", color: "#3b82f6" },
    BandInfo { min: 50, max: 69, band: ScoreBand::Fair, label: "Fair Match", color: "#f59e0b" },
    BandInfo { min: 30, max: 49, band: ScoreBand::Poor, label: "Poor Match", color: "#f97316" },
    BandInfo { min: 0, max: 29, band: ScoreBand::Critical, label: "Needs Work", color: "#ef4444" },
];

/// First band whose inclusive range contains `score`, falling back to the lowest
pub fn band_info(score: u32) -> &'static BandInfo {
    SCORE_BANDS
        .iter()
        .find(|b| score >= b.min && score <= b.max)
        .unwrap_or(&SCORE_BANDS[SCORE_BANDS.len() - 1])
}

pub fn get_band(score: u32) -> ScoreBand {
    band_info(score).band
}

impl ScoreBand {
    pub fn label(&self) -> &'static str {
        SCORE_BANDS
            .iter()
            .find(|b| b.band == *self)
            .map(|b| b.label)
            .unwrap_or("Needs Work")
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
            ScoreBand::Critical => "critical",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Hard,
    Tool,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [SkillCategory::Hard, SkillCategory::Tool, SkillCategory::Soft];
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Hard => write!(f, "hard"),
            SkillCategory::Tool => write!(f, "tool"),
            SkillCategory::Soft => write!(f, "soft"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordSource {
    Required,
    Preferred,
}

impl fmt::Display for KeywordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordSource::Required => write!(f, "required"),
            KeywordSource::Preferred => write!(f, "preferred"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedKeyword {
    pub keyword: String,
    pub source: KeywordSource,
    pub count: usize,
    /// Snippet of the resume around the first occurrence
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingKeyword {
    pub keyword: String,
    pub source: KeywordSource,
    /// 0.0 - 1.0
    pub importance: f64,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCluster {
    pub category: SkillCategory,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// 0 - 100
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltySeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    pub id: String,
    pub name: String,
    pub severity: PenaltySeverity,
    pub points: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingIssue {
    pub id: String,
    pub severity: IssueSeverity,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub keyword_relevance: u32,
    pub required_skills: u32,
    pub title_alignment: u32,
    pub text_similarity: u32,
    pub formatting: u32,
    pub bonus: u32,
}

impl SectionScores {
    pub fn total(&self) -> u32 {
        self.keyword_relevance
            + self.required_skills
            + self.title_alignment
            + self.text_similarity
            + self.formatting
            + self.bonus
    }

    /// (label, score, maximum) rows in display order
    pub fn rows(&self) -> [(&'static str, u32, u32); 6] {
        [
            ("Keyword Relevance", self.keyword_relevance, MAX_KEYWORD_RELEVANCE),
            ("Required Skills", self.required_skills, MAX_REQUIRED_SKILLS),
            ("Title Alignment", self.title_alignment, MAX_TITLE_ALIGNMENT),
            ("Text Similarity", self.text_similarity, MAX_TEXT_SIMILARITY),
            ("Formatting", self.formatting, MAX_FORMATTING),
            ("Bonus", self.bonus, MAX_BONUS),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub priority: SuggestionPriority,
    pub title: String,
    pub description: String,
    /// Expected score improvement, e.g. "+5-15 points"
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp
    pub analyzed_at: String,
    pub resume_word_count: usize,
    pub jd_word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// Complete outcome of scoring one resume against one job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ATSScore {
    /// 0 - 100
    pub overall: u32,
    pub band: ScoreBand,
    pub sections: SectionScores,
    pub matched_keywords: Vec<MatchedKeyword>,
    pub missing_keywords: Vec<MissingKeyword>,
    pub skills: Vec<SkillCluster>,
    pub formatting_issues: Vec<FormattingIssue>,
    pub penalties: Vec<Penalty>,
    pub suggestions: Vec<Suggestion>,
    pub metadata: AnalysisMetadata,
}

impl ATSScore {
    pub fn band_info(&self) -> &'static BandInfo {
        band_info(self.overall)
    }

    pub fn total_penalty_points(&self) -> u32 {
        self.penalties.iter().map(|p| p.points).sum()
    }
}
