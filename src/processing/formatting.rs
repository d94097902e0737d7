//! Deduction-based assessment of resume structure and ATS readability

use crate::processing::normalize::extract_lines;
use crate::processing::resume_parser::{starts_with_bullet, ResumeData, SectionName};
use crate::processing::score::{FormattingIssue, IssueSeverity, MAX_FORMATTING};

pub const MIN_WORD_COUNT: usize = 200;
pub const MAX_WORD_COUNT: usize = 1500;
pub const MIN_BULLET_LINES: usize = 3;

/// Sections every resume is expected to label
pub const REQUIRED_SECTIONS: [SectionName; 3] =
    [SectionName::Experience, SectionName::Education, SectionName::Skills];

#[derive(Debug, Clone, PartialEq)]
pub struct FormattingAssessment {
    pub issues: Vec<FormattingIssue>,
    /// 0 - 10
    pub score: u32,
}

fn issue(id: impl Into<String>, severity: IssueSeverity, message: impl Into<String>, suggestion: impl Into<String>) -> FormattingIssue {
    FormattingIssue {
        id: id.into(),
        severity,
        message: message.into(),
        suggestion: suggestion.into(),
    }
}

pub fn assess_formatting(resume: &ResumeData) -> FormattingAssessment {
    let mut issues = Vec::new();
    let mut deductions = 0u32;

    if resume.contact_info.email.is_none() {
        issues.push(issue(
            "no-email",
            IssueSeverity::Error,
            "Missing email address",
            "Add your professional email address at the top of your resume.",
        ));
        deductions += 2;
    }

    if resume.contact_info.phone.is_none() {
        issues.push(issue(
            "no-phone",
            IssueSeverity::Warning,
            "Missing phone number",
            "Include a phone number for easier recruiter contact.",
        ));
        deductions += 1;
    }

    for section in REQUIRED_SECTIONS {
        if !resume.sections.is_present(section) {
            issues.push(issue(
                format!("missing-{}", section),
                IssueSeverity::Error,
                format!("Missing \"{}\" section", section),
                format!("Add a clearly labeled \"{}\" section to your resume.", section),
            ));
            deductions += 2;
        }
    }

    if resume.word_count < MIN_WORD_COUNT {
        issues.push(issue(
            "too-short",
            IssueSeverity::Warning,
            format!("Resume is too short ({} words)", resume.word_count),
            format!(
                "Aim for at least {} words. Add more detail to your experience and skills.",
                MIN_WORD_COUNT
            ),
        ));
        deductions += 2;
    } else if resume.word_count > MAX_WORD_COUNT {
        issues.push(issue(
            "too-long",
            IssueSeverity::Info,
            format!("Resume is quite long ({} words)", resume.word_count),
            format!("Consider trimming to under {} words for ATS readability.", MAX_WORD_COUNT),
        ));
        deductions += 1;
    }

    let bullet_lines = extract_lines(&resume.raw_text)
        .iter()
        .filter(|line| starts_with_bullet(line))
        .count();
    if bullet_lines < MIN_BULLET_LINES && !resume.experiences.is_empty() {
        issues.push(issue(
            "few-bullets",
            IssueSeverity::Warning,
            "Limited use of bullet points",
            "Use bullet points to list your achievements and responsibilities. ATS systems parse bullets better.",
        ));
        deductions += 1;
    }

    // Informational only
    if resume.contact_info.linkedin.is_none() {
        issues.push(issue(
            "no-linkedin",
            IssueSeverity::Info,
            "No LinkedIn profile detected",
            "Adding your LinkedIn URL can strengthen your application.",
        ));
    }

    if !resume.sections.is_present(SectionName::Summary) {
        issues.push(issue(
            "no-summary",
            IssueSeverity::Info,
            "No professional summary detected",
            "A brief professional summary helps ATS systems understand your profile quickly.",
        ));
        deductions += 1;
    }

    FormattingAssessment {
        issues,
        score: MAX_FORMATTING.saturating_sub(deductions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::resume_parser::ResumeParser;

    fn ids(assessment: &FormattingAssessment) -> Vec<&str> {
        assessment.issues.iter().map(|i| i.id.as_str()).collect()
    }

    fn long_resume() -> String {
        let filler = "Delivered reliable backend services for payments and logistics teams. ".repeat(30);
        format!(
            "Jane Smith\njane@example.com\n555-123-4567\nlinkedin.com/in/jane\n\nSUMMARY\n{}\n\nEXPERIENCE\nEngineer at Acme\n• Built APIs\n• Scaled systems\n• Led migrations\n\nEDUCATION\nBS Computer Science 2015\n\nSKILLS\nrust, go, sql",
            filler
        )
    }

    #[test]
    fn test_clean_resume_has_full_score() {
        let resume = ResumeParser::new().parse(&long_resume());
        let assessment = assess_formatting(&resume);

        assert!(assessment.issues.is_empty(), "unexpected issues: {:?}", ids(&assessment));
        assert_eq!(assessment.score, 10);
    }

    #[test]
    fn test_sparse_resume_floors_at_zero() {
        let resume = ResumeParser::new().parse("Just a line of text with nothing useful");
        let assessment = assess_formatting(&resume);

        assert_eq!(
            ids(&assessment),
            vec![
                "no-email",
                "no-phone",
                "missing-experience",
                "missing-education",
                "missing-skills",
                "too-short",
                "no-linkedin",
                "no-summary",
            ]
        );
        // 2 + 1 + 6 + 2 + 1 = 12 deducted
        assert_eq!(assessment.score, 0);
    }

    #[test]
    fn test_issue_messages() {
        let resume = ResumeParser::new().parse("Just a line of text with nothing useful");
        let assessment = assess_formatting(&resume);

        let missing = assessment.issues.iter().find(|i| i.id == "missing-skills").unwrap();
        assert_eq!(missing.message, "Missing \"skills\" section");
        assert_eq!(missing.severity, IssueSeverity::Error);

        let short = assessment.issues.iter().find(|i| i.id == "too-short").unwrap();
        assert_eq!(short.message, "Resume is too short (7 words)");
    }

    #[test]
    fn test_few_bullets_requires_experience() {
        let text = long_resume().replace("• Scaled systems\n• Led migrations\n", "");
        let resume = ResumeParser::new().parse(&text);
        let assessment = assess_formatting(&resume);

        assert_eq!(ids(&assessment), vec!["few-bullets"]);
        assert_eq!(assessment.score, 9);
    }

    #[test]
    fn test_linkedin_is_informational() {
        let text = long_resume().replace("linkedin.com/in/jane\n", "");
        let resume = ResumeParser::new().parse(&text);
        let assessment = assess_formatting(&resume);

        assert_eq!(ids(&assessment), vec!["no-linkedin"]);
        assert_eq!(assessment.score, 10);
    }

    #[test]
    fn test_missing_contact_deductions_are_independent() {
        let parser = ResumeParser::new();
        let cases = [
            ("jane@example.com\n", vec!["no-email"], 8),
            ("555-123-4567\n", vec!["no-phone"], 9),
            ("jane@example.com\n555-123-4567\n", vec!["no-email", "no-phone"], 7),
        ];

        for (removed, expected_ids, expected_score) in cases {
            let resume = parser.parse(&long_resume().replace(removed, ""));
            let assessment = assess_formatting(&resume);

            assert_eq!(ids(&assessment), expected_ids);
            assert_eq!(assessment.score, expected_score);
        }
    }
}
