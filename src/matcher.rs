use crate::types::{FitResult, SkillSet};

/// Built-in skill vocabulary used when no skills file is supplied
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "spark",
    "react",
    "node",
    "ci/cd",
    "jenkins",
    "linux",
    "git",
];

/// The built-in vocabulary as owned strings
pub fn default_vocabulary() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

/// Collect every vocabulary term occurring in the text.
///
/// Matching is case-insensitive and purely substring based, so "java"
/// also matches inside "javascript".
pub fn extract_skills(text: &str, vocabulary: &[String]) -> SkillSet {
    let text = text.to_lowercase();

    vocabulary
        .iter()
        .filter(|skill| text.contains(skill.as_str()))
        .cloned()
        .collect()
}

/// Score a resume against a job description over the given vocabulary.
///
/// The score is the percentage of job-description skills also found in
/// the resume, rounded to the nearest integer. An empty job-description
/// skill set scores 0.
pub fn calculate_fit_score(resume_text: &str, jd_text: &str, vocabulary: &[String]) -> FitResult {
    let resume_skills = extract_skills(resume_text, vocabulary);
    let jd_skills = extract_skills(jd_text, vocabulary);

    let matched: SkillSet = resume_skills.intersection(&jd_skills).cloned().collect();
    let missing: SkillSet = jd_skills.difference(&resume_skills).cloned().collect();

    let score = if jd_skills.is_empty() {
        0
    } else {
        ((matched.len() as f64 / jd_skills.len() as f64) * 100.0).round() as u32
    };

    FitResult {
        score,
        matched,
        missing,
    }
}

/// Fixed recommendation text for a score tier
pub fn recommendation(score: u32) -> &'static str {
    if score >= 80 {
        "Great fit! Consider prioritizing this candidate."
    } else if score >= 50 {
        "Moderate fit. May require some upskilling or training."
    } else {
        "Low fit. May not be suitable unless gaps are addressed."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vec<String> {
        default_vocabulary()
    }

    #[test]
    fn test_extract_skills_subset_of_vocabulary() {
        let v = vocab();
        let skills = extract_skills("python aws rust cobol docker", &v);
        assert!(skills.iter().all(|s| v.contains(s)));
    }

    #[test]
    fn test_extract_skills_case_insensitive() {
        let v = vocab();
        assert_eq!(extract_skills("PYTHON", &v), extract_skills("python", &v));
    }

    #[test]
    fn test_extract_skills_substring_quirk() {
        // "java" matches inside "javascript"; no word-boundary check
        let skills = extract_skills("javascript", &vocab());
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("java"));
    }

    #[test]
    fn test_fit_score_end_to_end() {
        let result = calculate_fit_score(
            "Experienced in Python, AWS, and Docker projects",
            "Looking for Python, Kubernetes, and SQL skills",
            &vocab(),
        );

        assert_eq!(result.score, 33);
        assert_eq!(
            result.matched.iter().collect::<Vec<_>>(),
            vec!["python"]
        );
        assert_eq!(
            result.missing.iter().collect::<Vec<_>>(),
            vec!["kubernetes", "sql"]
        );
    }

    #[test]
    fn test_matched_and_missing_partition_jd_skills() {
        let v = vocab();
        let resume = "python docker git linux";
        let jd = "python sql aws git jenkins";

        let result = calculate_fit_score(resume, jd, &v);
        let jd_skills = extract_skills(jd, &v);

        assert!(result.matched.is_disjoint(&result.missing));
        let union: crate::types::SkillSet = result
            .matched
            .union(&result.missing)
            .cloned()
            .collect();
        assert_eq!(union, jd_skills);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let result = calculate_fit_score("python aws docker", "", &vocab());
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_texts_score_zero() {
        let result = calculate_fit_score("", "", &vocab());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_score_in_range() {
        let v = vocab();
        for (resume, jd) in [
            ("", "python"),
            ("python", "python"),
            ("python aws", "python aws docker sql git jenkins linux"),
            ("no relevant terms here", "python sql"),
        ] {
            let result = calculate_fit_score(resume, jd, &v);
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn test_full_match_scores_hundred() {
        let result = calculate_fit_score("python and sql", "python, sql", &vocab());
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_recommendation_tiers() {
        assert!(recommendation(100).starts_with("Great fit"));
        assert!(recommendation(80).starts_with("Great fit"));
        assert!(recommendation(79).starts_with("Moderate fit"));
        assert!(recommendation(50).starts_with("Moderate fit"));
        assert!(recommendation(49).starts_with("Low fit"));
        assert!(recommendation(0).starts_with("Low fit"));
    }

    #[test]
    fn test_custom_vocabulary() {
        let v = vec!["rust".to_string(), "tokio".to_string()];
        let result = calculate_fit_score("rust services", "rust with tokio", &v);
        assert_eq!(result.score, 50);
        assert!(result.matched.contains("rust"));
        assert!(result.missing.contains("tokio"));
    }
}
