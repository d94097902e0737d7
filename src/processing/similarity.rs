//! N-gram Jaccard similarity between resume and job description

use crate::processing::normalize::{n_grams, remove_stop_words, tokenize};
use crate::processing::score::MAX_TEXT_SIMILARITY;
use std::collections::HashSet;
use std::hash::Hash;

/// Raw similarity at or above this earns full marks
const FULL_CREDIT_SIMILARITY: f64 = 0.3;

/// |A ∩ B| / |A ∪ B|, zero when both sets are empty
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

fn gram_set(tokens: &[String], n: usize) -> HashSet<String> {
    n_grams(tokens, n).into_iter().collect()
}

/// Weighted blend of unigram, bigram and trigram overlap in [0, 1]
pub fn compute_similarity(resume_text: &str, jd_text: &str) -> f64 {
    let resume_tokens = remove_stop_words(&tokenize(resume_text));
    let jd_tokens = remove_stop_words(&tokenize(jd_text));

    if resume_tokens.is_empty() || jd_tokens.is_empty() {
        return 0.0;
    }

    let unigram = jaccard(&gram_set(&resume_tokens, 1), &gram_set(&jd_tokens, 1));
    let bigram = jaccard(&gram_set(&resume_tokens, 2), &gram_set(&jd_tokens, 2));
    let trigram = jaccard(&gram_set(&resume_tokens, 3), &gram_set(&jd_tokens, 3));

    unigram * 0.4 + bigram * 0.4 + trigram * 0.2
}

pub fn calculate_similarity_score(resume_text: &str, jd_text: &str) -> u32 {
    calculate_similarity_score_with_max(resume_text, jd_text, MAX_TEXT_SIMILARITY)
}

pub fn calculate_similarity_score_with_max(resume_text: &str, jd_text: &str, max_points: u32) -> u32 {
    let similarity = compute_similarity(resume_text, jd_text);
    let scaled = (similarity / FULL_CREDIT_SIMILARITY).min(1.0);
    log::debug!("Text similarity {:.3} (scaled {:.3})", similarity, scaled);
    (scaled * max_points as f64).round() as u32
}
