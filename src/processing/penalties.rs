//! Red-flag detection with point deductions taken from the overall score

use crate::processing::formatting::{MAX_WORD_COUNT, MIN_WORD_COUNT};
use crate::processing::resume_parser::{starts_with_bullet, ResumeData};
use crate::processing::score::{MatchedKeyword, Penalty, PenaltySeverity};

/// A matched keyword seen more often than this is treated as stuffing
pub const STUFFING_THRESHOLD: usize = 8;

const MISSING_EMAIL_POINTS: u32 = 5;
const MISSING_PHONE_POINTS: u32 = 3;
const KEYWORD_STUFFING_POINTS: u32 = 10;
const TOO_SHORT_POINTS: u32 = 8;
const TOO_LONG_POINTS: u32 = 4;
const NO_EXPERIENCE_POINTS: u32 = 10;
const NO_EDUCATION_POINTS: u32 = 5;
const NO_BULLETS_POINTS: u32 = 5;

fn penalty(id: &str, name: &str, severity: PenaltySeverity, points: u32, reason: impl Into<String>) -> Penalty {
    Penalty {
        id: id.to_string(),
        name: name.to_string(),
        severity,
        points,
        reason: reason.into(),
    }
}

pub fn calculate_penalties(resume: &ResumeData, matched_keywords: &[MatchedKeyword]) -> Vec<Penalty> {
    let mut penalties = Vec::new();

    if resume.contact_info.email.is_none() {
        penalties.push(penalty(
            "no-email",
            "Missing Email",
            PenaltySeverity::High,
            MISSING_EMAIL_POINTS,
            "No email address detected. Recruiters need a way to contact you.",
        ));
    }

    if resume.contact_info.phone.is_none() {
        penalties.push(penalty(
            "no-phone",
            "Missing Phone",
            PenaltySeverity::Medium,
            MISSING_PHONE_POINTS,
            "No phone number detected.",
        ));
    }

    let stuffed: Vec<String> = matched_keywords
        .iter()
        .filter(|k| k.count > STUFFING_THRESHOLD)
        .map(|k| format!("\"{}\" ({}x)", k.keyword, k.count))
        .collect();
    if !stuffed.is_empty() {
        // Flat deduction however many keywords are stuffed
        penalties.push(penalty(
            "keyword-stuffing",
            "Keyword Stuffing",
            PenaltySeverity::Critical,
            KEYWORD_STUFFING_POINTS,
            format!(
                "Keywords repeated excessively: {}. ATS systems flag this.",
                stuffed.join(", ")
            ),
        ));
    }

    if resume.word_count < MIN_WORD_COUNT {
        penalties.push(penalty(
            "too-short",
            "Insufficient Content",
            PenaltySeverity::High,
            TOO_SHORT_POINTS,
            format!(
                "Resume has only {} words. Most ATS-optimized resumes have 300-700 words.",
                resume.word_count
            ),
        ));
    }

    if resume.word_count > MAX_WORD_COUNT {
        penalties.push(penalty(
            "too-long",
            "Excessive Length",
            PenaltySeverity::Low,
            TOO_LONG_POINTS,
            format!(
                "Resume has {} words. Consider trimming for ATS readability.",
                resume.word_count
            ),
        ));
    }

    if resume.experiences.is_empty() {
        penalties.push(penalty(
            "no-experience",
            "No Experience",
            PenaltySeverity::High,
            NO_EXPERIENCE_POINTS,
            "No work experience section detected.",
        ));
    }

    if resume.educations.is_empty() {
        penalties.push(penalty(
            "no-education",
            "No Education",
            PenaltySeverity::Medium,
            NO_EDUCATION_POINTS,
            "No education section detected.",
        ));
    }

    if !has_bullet_line(&resume.raw_text) && !resume.experiences.is_empty() {
        penalties.push(penalty(
            "no-bullets",
            "No Bullet Points",
            PenaltySeverity::Medium,
            NO_BULLETS_POINTS,
            "No bullet points found. Use bullets to list achievements for better ATS parsing.",
        ));
    }

    penalties
}

/// Any raw line, untrimmed, that opens with a bullet marker
fn has_bullet_line(raw_text: &str) -> bool {
    raw_text
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(starts_with_bullet)
}

pub fn total_penalty_points(penalties: &[Penalty]) -> u32 {
    penalties.iter().map(|p| p.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analyzer::ATSAnalyzer;
    use crate::processing::resume_parser::ResumeParser;
    use crate::processing::score::KeywordSource;

    fn complete_resume(skills_line: &str) -> String {
        let filler = "Delivered reliable backend services for payments and logistics teams. ".repeat(30);
        format!(
            "Jane Smith\njane@example.com\n555-123-4567\n\nSUMMARY\n{}\n\nEXPERIENCE\nEngineer at Acme\n• Built APIs\n• Scaled systems\n\nEDUCATION\nBS Computer Science 2015\n\nSKILLS\n{}",
            filler, skills_line
        )
    }

    fn keyword(name: &str, count: usize) -> MatchedKeyword {
        MatchedKeyword {
            keyword: name.to_string(),
            source: KeywordSource::Required,
            count,
            context: String::new(),
        }
    }

    fn ids(penalties: &[Penalty]) -> Vec<&str> {
        penalties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_sparse_resume_penalties() {
        let resume = ResumeParser::new().parse("nothing to see here");
        let penalties = calculate_penalties(&resume, &[]);

        assert_eq!(
            ids(&penalties),
            vec!["no-email", "no-phone", "too-short", "no-experience", "no-education"]
        );
        assert_eq!(total_penalty_points(&penalties), 5 + 3 + 8 + 10 + 5);
    }

    #[test]
    fn test_keyword_stuffing_is_flat() {
        let resume = ResumeParser::new().parse("jane@example.com 555-123-4567");
        let matched = vec![keyword("python", 9), keyword("sql", 12), keyword("aws", 8)];
        let penalties = calculate_penalties(&resume, &matched);

        let stuffing = penalties.iter().find(|p| p.id == "keyword-stuffing").unwrap();
        assert_eq!(stuffing.points, 10);
        assert_eq!(stuffing.severity, PenaltySeverity::Critical);
        assert_eq!(
            stuffing.reason,
            "Keywords repeated excessively: \"python\" (9x), \"sql\" (12x). ATS systems flag this."
        );
    }

    #[test]
    fn test_no_bullets_only_with_experience() {
        let parser = ResumeParser::new();

        let resume = parser.parse("EXPERIENCE\nEngineer at Acme\nShipped the billing platform");
        assert!(ids(&calculate_penalties(&resume, &[])).contains(&"no-bullets"));

        let resume = parser.parse("EXPERIENCE\nEngineer at Acme\n• Shipped the billing platform");
        assert!(!ids(&calculate_penalties(&resume, &[])).contains(&"no-bullets"));

        let resume = parser.parse("no experience listed at all");
        assert!(!ids(&calculate_penalties(&resume, &[])).contains(&"no-bullets"));
    }

    #[test]
    fn test_indented_bullet_does_not_count() {
        let resume = ResumeParser::new().parse("EXPERIENCE\nEngineer at Acme\n  • Shipped the billing platform");
        assert!(ids(&calculate_penalties(&resume, &[])).contains(&"no-bullets"));
    }

    #[test]
    fn test_too_long_resume() {
        let text = format!("jane@example.com 555-123-4567\n{}", "word ".repeat(1600));
        let resume = ResumeParser::new().parse(&text);
        let penalties = calculate_penalties(&resume, &[]);

        let too_long = penalties.iter().find(|p| p.id == "too-long").unwrap();
        assert_eq!(too_long.points, 4);
        assert!(!ids(&penalties).contains(&"too-short"));
    }

    #[test]
    fn test_complete_resume_has_no_penalties() {
        let resume = ResumeParser::new().parse(&complete_resume("rust, go, sql"));
        assert!(calculate_penalties(&resume, &[]).is_empty());
    }

    #[test]
    fn test_missing_contact_costs_exactly_eight_points() {
        let parser = ResumeParser::new();

        let text = complete_resume("rust, go, sql").replace("jane@example.com\n555-123-4567\n", "");
        let penalties = calculate_penalties(&parser.parse(&text), &[]);
        assert_eq!(ids(&penalties), vec!["no-email", "no-phone"]);
        assert_eq!(total_penalty_points(&penalties), 5 + 3);

        let text = complete_resume("rust, go, sql").replace("555-123-4567\n", "");
        let penalties = calculate_penalties(&parser.parse(&text), &[]);
        assert_eq!(ids(&penalties), vec!["no-phone"]);
        assert_eq!(total_penalty_points(&penalties), 3);
    }

    #[test]
    fn test_stuffing_threshold_from_resume_text() {
        let analyzer = ATSAnalyzer::new().unwrap();
        let job = "Requirements:\n- Python";

        let stuffed = analyzer.analyze(&complete_resume(&"python ".repeat(9)), job, None);
        let python = stuffed.matched_keywords.iter().find(|k| k.keyword == "python").unwrap();
        assert_eq!(python.count, 9);
        let stuffing = stuffed.penalties.iter().find(|p| p.id == "keyword-stuffing").unwrap();
        assert_eq!(stuffing.points, 10);
        assert_eq!(stuffed.total_penalty_points(), 10);

        let heavy = analyzer.analyze(&complete_resume(&"python ".repeat(8)), job, None);
        assert!(heavy.penalties.is_empty());
    }
}
