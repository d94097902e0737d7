//! Resume and job description analysis pipeline

pub mod analyzer;
pub mod formatting;
pub mod job_parser;
pub mod keywords;
pub mod normalize;
pub mod penalties;
pub mod resume_parser;
pub mod score;
pub mod similarity;
pub mod skills;
