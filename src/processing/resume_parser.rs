//! Resume parsing: section detection and structured entity extraction

use crate::processing::normalize::{extract_lines, is_section_header, strip_header_separators, tokenize};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters that open a bullet line
pub const BULLET_MARKERS: &[char] = &['•', '-', '*', '▪', '◦'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Other,
}

impl SectionName {
    pub const ALL: [SectionName; 8] = [
        SectionName::Contact,
        SectionName::Summary,
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Certifications,
        SectionName::Other,
    ];
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionName::Contact => "contact",
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Certifications => "certifications",
            SectionName::Other => "other",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub contact: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
    pub certifications: String,
    pub other: String,
}

impl ResumeSections {
    pub fn get(&self, name: SectionName) -> &str {
        match name {
            SectionName::Contact => &self.contact,
            SectionName::Summary => &self.summary,
            SectionName::Experience => &self.experience,
            SectionName::Education => &self.education,
            SectionName::Skills => &self.skills,
            SectionName::Projects => &self.projects,
            SectionName::Certifications => &self.certifications,
            SectionName::Other => &self.other,
        }
    }

    fn buffer_mut(&mut self, name: SectionName) -> &mut String {
        match name {
            SectionName::Contact => &mut self.contact,
            SectionName::Summary => &mut self.summary,
            SectionName::Experience => &mut self.experience,
            SectionName::Education => &mut self.education,
            SectionName::Skills => &mut self.skills,
            SectionName::Projects => &mut self.projects,
            SectionName::Certifications => &mut self.certifications,
            SectionName::Other => &mut self.other,
        }
    }

    pub fn is_present(&self, name: SectionName) -> bool {
        !self.get(name).trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
}

/// Everything extracted from one resume. Built once per analysis and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    pub raw_text: String,
    pub sections: ResumeSections,
    pub contact_info: ContactInfo,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub skills_list: Vec<String>,
    pub word_count: usize,
}

/// Line-oriented heuristic resume parser
pub struct ResumeParser {
    section_patterns: Vec<(SectionName, Regex)>,
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    github_regex: Regex,
    url_scheme_regex: Regex,
    url_host_regex: Regex,
    title_company_regex: Regex,
    duration_regex: Regex,
    bullet_regex: Regex,
    degree_regex: Regex,
    year_regex: Regex,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        // Priority order matters: the first matching header wins.
        let section_patterns = vec![
            (SectionName::Contact, r"(?i)^(contact\s*(info|information|details)?|personal\s*(info|information|details)?)$"),
            (SectionName::Summary, r"(?i)^(summary|objective|profile|about\s*me|professional\s*summary|career\s*summary)$"),
            (SectionName::Experience, r"(?i)^(experience|work\s*experience|employment|professional\s*experience|work\s*history)$"),
            (SectionName::Education, r"(?i)^(education|academic|qualifications|educational\s*background)$"),
            (SectionName::Skills, r"(?i)^(skills|technical\s*skills|core\s*competencies|competencies|technologies|tech\s*stack)$"),
            (SectionName::Projects, r"(?i)^(projects|personal\s*projects|key\s*projects|portfolio)$"),
            (SectionName::Certifications, r"(?i)^(certifications?|licenses?|credentials|accreditations?)$"),
        ]
        .into_iter()
        .map(|(name, pattern)| (name, Regex::new(pattern).expect("Invalid section header regex")))
        .collect();

        let email_regex = Regex::new(r"[A-Za-z0-9_.+-]+@[A-Za-z0-9_-]+\.[A-Za-z0-9_.]+")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{2,4}\)?[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4}")
            .expect("Invalid phone regex");

        let linkedin_regex = Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+")
            .expect("Invalid LinkedIn regex");

        let github_regex = Regex::new(r"(?i)github\.com/[A-Za-z0-9_-]+")
            .expect("Invalid GitHub regex");

        let url_scheme_regex = Regex::new(r"(?i)https?://").expect("Invalid URL scheme regex");

        let url_host_regex = Regex::new(r"^[A-Za-z0-9_.-]+\.[A-Za-z0-9_]{2,}")
            .expect("Invalid URL host regex");

        let title_company_regex = Regex::new(r"(?i)^(.+?)\s*(?:at|@|,|–|-|—|\|)\s*(.+)")
            .expect("Invalid title/company regex");

        let duration_regex = Regex::new(
            r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|january|february|march|april|may|june|july|august|september|october|november|december)\s*[0-9]{0,4}\s*[-–—to]+\s*(present|[A-Za-z0-9_]+\s*[0-9]{0,4})",
        )
        .expect("Invalid duration regex");

        let bullet_regex = Regex::new(r"^[•\-*▪◦]\s*").expect("Invalid bullet regex");

        let degree_regex = Regex::new(
            r"(?i)(bachelor|master|phd|doctorate|associate|b\.?s\.?|m\.?s\.?|b\.?a\.?|m\.?a\.?|b\.?e\.?|m\.?e\.?|b\.?tech|m\.?tech|mba|bba|diploma)",
        )
        .expect("Invalid degree regex");

        let year_regex = Regex::new(r"\b(19|20)[0-9]{2}\b").expect("Invalid year regex");

        Self {
            section_patterns,
            email_regex,
            phone_regex,
            linkedin_regex,
            github_regex,
            url_scheme_regex,
            url_host_regex,
            title_company_regex,
            duration_regex,
            bullet_regex,
            degree_regex,
            year_regex,
        }
    }

    /// Parse raw resume text into structured data
    pub fn parse(&self, raw_text: &str) -> ResumeData {
        let sections = self.detect_sections(raw_text);
        let contact_info = self.extract_contact_info(raw_text);
        let experiences = self.extract_experiences(&sections.experience);
        let educations = self.extract_education(&sections.education);
        let projects = self.extract_projects(&sections.projects);
        let certifications = self.extract_certifications(&sections.certifications);
        let skills_list = extract_skills_list(&sections.skills);
        let word_count = tokenize(raw_text).len();

        log::debug!(
            "Parsed resume: {} words, {} experiences, {} education entries, {} skills",
            word_count,
            experiences.len(),
            educations.len(),
            skills_list.len()
        );

        ResumeData {
            raw_text: raw_text.to_string(),
            sections,
            contact_info,
            experiences,
            educations,
            projects,
            certifications,
            skills_list,
            word_count,
        }
    }

    /// Split text into labeled sections with a running "current section" pointer
    pub fn detect_sections(&self, text: &str) -> ResumeSections {
        let mut sections = ResumeSections::default();
        let mut current = SectionName::Contact;

        for line in extract_lines(text) {
            let clean = strip_header_separators(&line);

            if let Some(name) = self.match_section_header(&clean) {
                current = name;
                continue;
            }

            // Unrecognised header: start an "other" block, header itself dropped
            if is_section_header(&line) && clean.chars().count() > 2 {
                current = SectionName::Other;
                continue;
            }

            let buffer = sections.buffer_mut(current);
            buffer.push_str(&line);
            buffer.push('\n');
        }

        for name in SectionName::ALL {
            let buffer = sections.buffer_mut(name);
            *buffer = buffer.trim().to_string();
        }

        sections
    }

    fn match_section_header(&self, clean: &str) -> Option<SectionName> {
        self.section_patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(clean))
            .map(|(name, _)| *name)
    }

    pub fn extract_contact_info(&self, text: &str) -> ContactInfo {
        let find = |re: &Regex| re.find(text).map(|m| m.as_str().to_string());

        let name = extract_lines(text).into_iter().next().and_then(|first| {
            if self.email_regex.is_match(&first) || first.chars().count() >= 60 {
                return None;
            }
            let cleaned: String = first
                .chars()
                .filter(|c| !matches!(c, '|' | ',' | '-' | ':'))
                .collect();
            let cleaned = cleaned.trim();
            (!cleaned.is_empty()).then(|| cleaned.to_string())
        });

        ContactInfo {
            name,
            email: find(&self.email_regex),
            phone: find(&self.phone_regex),
            linkedin: find(&self.linkedin_regex),
            github: find(&self.github_regex),
            website: self.find_website(text),
            location: None,
        }
    }

    /// First http(s) URL whose line does not point at LinkedIn or GitHub
    fn find_website(&self, text: &str) -> Option<String> {
        for scheme in self.url_scheme_regex.find_iter(text) {
            let rest = &text[scheme.end()..];
            let line_end = rest
                .find(['\n', '\r', '\u{2028}', '\u{2029}'])
                .unwrap_or(rest.len());
            let line = rest[..line_end].to_lowercase();
            if line.contains("linkedin.com") || line.contains("github.com") {
                continue;
            }
            if let Some(host) = self.url_host_regex.find(rest) {
                return Some(text[scheme.start()..scheme.end() + host.end()].to_string());
            }
        }
        None
    }

    pub fn extract_experiences(&self, text: &str) -> Vec<Experience> {
        let mut experiences = Vec::new();
        let mut current: Option<Experience> = None;

        for line in extract_lines(text) {
            if !starts_with_bullet(&line) {
                if let Some(caps) = self.title_company_regex.captures(&line) {
                    if let Some(done) = current.take() {
                        experiences.push(done);
                    }
                    current = Some(Experience {
                        title: caps[1].trim().to_string(),
                        company: caps[2].trim().to_string(),
                        ..Default::default()
                    });
                    continue;
                }
            }

            let Some(entry) = current.as_mut() else {
                continue;
            };

            if self.duration_regex.is_match(&line) {
                entry.duration = line.trim().to_string();
            } else if starts_with_bullet(&line) {
                entry.bullets.push(self.strip_bullet(&line));
            } else if line.chars().count() > 10 {
                // Unmarked achievement lines are kept as bullets too; this
                // over-includes stray paragraph text under an open entry.
                entry.bullets.push(line.trim().to_string());
            }
        }

        if let Some(done) = current {
            experiences.push(done);
        }
        experiences
    }

    pub fn extract_education(&self, text: &str) -> Vec<Education> {
        let mut educations: Vec<Education> = Vec::new();

        for line in extract_lines(text) {
            if self.degree_regex.is_match(&line) {
                educations.push(Education {
                    degree: line.trim().to_string(),
                    institution: String::new(),
                    year: self.year_regex.find(&line).map(|m| m.as_str().to_string()),
                });
            } else if let Some(last) = educations.last_mut() {
                if last.institution.is_empty() {
                    last.institution = line.trim().to_string();
                }
            }
        }

        educations
    }

    pub fn extract_projects(&self, text: &str) -> Vec<Project> {
        let mut projects = Vec::new();
        let mut current: Option<Project> = None;

        for line in extract_lines(text) {
            if !starts_with_bullet(&line) && line.chars().count() < 80 {
                if let Some(done) = current.take() {
                    projects.push(done);
                }
                current = Some(Project {
                    name: line.trim().to_string(),
                    description: String::new(),
                });
            } else if let Some(project) = current.as_mut() {
                if !project.description.is_empty() {
                    project.description.push(' ');
                }
                project.description.push_str(&self.strip_bullet(&line));
            }
        }

        if let Some(done) = current {
            projects.push(done);
        }
        projects
    }

    pub fn extract_certifications(&self, text: &str) -> Vec<Certification> {
        extract_lines(text)
            .iter()
            .map(|line| Certification { name: self.strip_bullet(line) })
            .collect()
    }

    fn strip_bullet(&self, line: &str) -> String {
        self.bullet_regex.replace(line, "").trim().to_string()
    }
}

pub fn starts_with_bullet(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS)
}

/// Split the skills section on common list separators
pub fn extract_skills_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split([',', '|', '•', '-', '*', '\n', ';'])
        .map(str::trim)
        .filter(|s| {
            let len = s.chars().count();
            len > 1 && len < 50
        })
        .map(str::to_string)
        .collect()
}
