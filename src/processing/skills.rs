//! Skills dictionary and synonym-aware skills matching

use crate::error::{AtsError, Result};
use crate::processing::normalize::{count_occurrences, normalize_text};
use crate::processing::score::{SkillCategory, SkillCluster, MAX_REQUIRED_SKILLS};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_DICTIONARY: &str = include_str!("../../data/skills_dictionary.json");

/// Share of the skills score carried by each category
const HARD_WEIGHT: f64 = 0.5;
const TOOL_WEIGHT: f64 = 0.35;
const SOFT_WEIGHT: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub weight: f64,
}

impl SkillEntry {
    /// Canonical name followed by its synonyms
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }

    /// Whole-word occurrence of any name in already normalized text
    pub fn occurs_in(&self, normalized_text: &str) -> bool {
        self.names()
            .any(|name| count_occurrences(normalized_text, &normalize_text(name)) > 0)
    }
}

/// Read-only skill catalogue shared by every analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsDictionary {
    #[serde(default)]
    pub version: String,
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchResult {
    /// One cluster per category, in hard, tool, soft order
    pub clusters: Vec<SkillCluster>,
    /// 0 - 30
    pub score: u32,
}

#[derive(Default)]
struct CategoryTally {
    matched: Vec<String>,
    missing: Vec<String>,
    total_weight: f64,
    matched_weight: f64,
}

impl SkillsDictionary {
    /// Dictionary compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DICTIONARY)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::from_json(&content)?;
        log::info!(
            "Loaded {} skills from {}",
            dictionary.skills.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let dictionary: SkillsDictionary = serde_json::from_str(content)
            .map_err(|e| AtsError::SkillsDictionary(format!("Failed to parse skills dictionary: {}", e)))?;
        dictionary.validate()?;
        if dictionary.is_empty() {
            log::warn!("Skills dictionary is empty; every skill category will score 100");
        }
        Ok(dictionary)
    }

    pub fn from_entries(skills: Vec<SkillEntry>) -> Result<Self> {
        let dictionary = Self {
            version: String::new(),
            skills,
        };
        dictionary.validate()?;
        Ok(dictionary)
    }

    fn validate(&self) -> Result<()> {
        for skill in &self.skills {
            if skill.name.trim().is_empty() {
                return Err(AtsError::SkillsDictionary("Skill with empty name".to_string()));
            }
            if !skill.weight.is_finite() || skill.weight <= 0.0 {
                return Err(AtsError::SkillsDictionary(format!(
                    "Skill '{}' has invalid weight {}",
                    skill.name, skill.weight
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn by_category(&self, category: SkillCategory) -> impl Iterator<Item = &SkillEntry> {
        self.skills.iter().filter(move |s| s.category == category)
    }

    /// Skills whose name or a synonym appears in the job description
    pub fn extract_jd_skills(&self, jd_text: &str) -> Vec<&SkillEntry> {
        let normalized = normalize_text(jd_text);
        self.skills
            .iter()
            .filter(|skill| skill.occurs_in(&normalized))
            .collect()
    }
}

/// Weighted per-category coverage of the JD skills by the resume.
/// A category the JD never asks for scores 100.
pub fn match_skills(resume_text: &str, jd_skills: &[&SkillEntry]) -> SkillMatchResult {
    let normalized_resume = normalize_text(resume_text);
    let mut tallies: [CategoryTally; 3] = Default::default();

    for skill in jd_skills {
        let tally = &mut tallies[category_index(skill.category)];
        tally.total_weight += skill.weight;

        if skill.occurs_in(&normalized_resume) {
            tally.matched.push(skill.name.clone());
            tally.matched_weight += skill.weight;
        } else {
            tally.missing.push(skill.name.clone());
        }
    }

    let clusters: Vec<SkillCluster> = SkillCategory::ALL
        .iter()
        .zip(tallies)
        .map(|(category, tally)| {
            let score = if tally.total_weight > 0.0 {
                (tally.matched_weight / tally.total_weight * 100.0).round() as u32
            } else {
                100
            };
            SkillCluster {
                category: *category,
                matched: tally.matched,
                missing: tally.missing,
                score,
            }
        })
        .collect();

    let cluster_ratio = |category: SkillCategory| {
        clusters
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.score as f64 / 100.0)
            .unwrap_or(1.0)
    };

    let weighted = cluster_ratio(SkillCategory::Hard) * HARD_WEIGHT
        + cluster_ratio(SkillCategory::Tool) * TOOL_WEIGHT
        + cluster_ratio(SkillCategory::Soft) * SOFT_WEIGHT;
    let score = (weighted * MAX_REQUIRED_SKILLS as f64).round() as u32;

    log::debug!("Skills matching: {} JD skills, score {}/30", jd_skills.len(), score);

    SkillMatchResult { clusters, score }
}

fn category_index(category: SkillCategory) -> usize {
    match category {
        SkillCategory::Hard => 0,
        SkillCategory::Tool => 1,
        SkillCategory::Soft => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, category: SkillCategory, synonyms: &[&str], weight: f64) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            category,
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            weight,
        }
    }

    #[test]
    fn test_builtin_dictionary_loads() {
        let dictionary = SkillsDictionary::builtin().unwrap();
        assert!(!dictionary.is_empty());
        for category in SkillCategory::ALL {
            assert!(dictionary.by_category(category).count() > 0);
        }
        assert!(dictionary.skills.iter().any(|s| s.name == "python"));
    }

    #[test]
    fn test_extract_jd_skills_uses_synonyms() {
        let dictionary = SkillsDictionary::from_entries(vec![
            entry("kubernetes", SkillCategory::Tool, &["k8s"], 1.0),
            entry("python", SkillCategory::Hard, &[], 1.0),
            entry("communication", SkillCategory::Soft, &[], 1.0),
        ])
        .unwrap();

        let found = dictionary.extract_jd_skills("Run K8s clusters; strong Communication skills");
        let names: Vec<_> = found.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["kubernetes", "communication"]);
    }

    #[test]
    fn test_match_skills_weighted_clusters() {
        let hard_a = entry("python", SkillCategory::Hard, &["py"], 3.0);
        let hard_b = entry("rust", SkillCategory::Hard, &[], 1.0);
        let tool = entry("docker", SkillCategory::Tool, &[], 1.0);
        let jd_skills = vec![&hard_a, &hard_b, &tool];

        let result = match_skills("Wrote Python services and deployed them with Docker", &jd_skills);

        let hard = &result.clusters[0];
        assert_eq!(hard.category, SkillCategory::Hard);
        assert_eq!(hard.matched, vec!["python"]);
        assert_eq!(hard.missing, vec!["rust"]);
        assert_eq!(hard.score, 75);

        assert_eq!(result.clusters[1].score, 100);
        // Soft skills were never requested
        assert_eq!(result.clusters[2].score, 100);
        assert!(result.clusters[2].matched.is_empty());

        // (0.75 * 0.5 + 1.0 * 0.35 + 1.0 * 0.15) * 30 = 26.25
        assert_eq!(result.score, 26);
    }

    #[test]
    fn test_match_skills_records_canonical_name() {
        let skill = entry("kubernetes", SkillCategory::Tool, &["k8s"], 1.0);
        let result = match_skills("Operated k8s in production", &[&skill]);
        assert_eq!(result.clusters[1].matched, vec!["kubernetes"]);
    }

    #[test]
    fn test_no_jd_skills_scores_full() {
        let result = match_skills("anything", &[]);
        assert_eq!(result.score, 30);
        assert!(result.clusters.iter().all(|c| c.score == 100));
    }

    #[test]
    fn test_invalid_dictionary_rejected() {
        let err = SkillsDictionary::from_entries(vec![entry("x", SkillCategory::Hard, &[], 0.0)]).unwrap_err();
        assert!(matches!(err, AtsError::SkillsDictionary(_)));

        let err = SkillsDictionary::from_json("{ not json").unwrap_err();
        assert!(matches!(err, AtsError::SkillsDictionary(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        std::fs::write(
            &path,
            r#"{"version":"2","skills":[{"name":"haskell","category":"hard","weight":1.0}]}"#,
        )
        .unwrap();

        let dictionary = SkillsDictionary::load(&path).unwrap();
        assert_eq!(dictionary.version, "2");
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.skills[0].synonyms.is_empty());
    }
}
