//! Interview preparation: likely questions and talking points

const LIKELY_QUESTIONS: [&str; 10] = [
    "Walk me through your background and how it fits this role.",
    "Tell me about a tough troubleshooting issue you solved—what was your process?",
    "How do you prioritize multiple incoming requests or tickets?",
    "Describe a time you improved a process or automated something.",
    "How do you communicate with non-technical stakeholders during an incident?",
    "What’s your approach to documenting work and building repeatable playbooks?",
    "Tell me about a time you made a mistake—how did you handle it?",
    "How do you ensure accuracy and avoid assumptions when diagnosing problems?",
    "What tools or systems have you used to manage work (ticketing, docs, version control)?",
    "What would your first 30 days look like in this role?",
];

const MAX_KEYWORDS_PER_POINT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewPack {
    pub questions: Vec<String>,
    pub talking_points: Vec<String>,
}

/// Build the interview section from matched and missing single-word keywords
pub fn build_interview_pack(overlap: &[String], missing: &[String]) -> InterviewPack {
    let questions = LIKELY_QUESTIONS.iter().map(|q| q.to_string()).collect();

    let mut talking_points = Vec::new();
    if !overlap.is_empty() {
        talking_points.push(format!(
            "Emphasize matching keywords you already have: {}.",
            first_n(overlap)
        ));
    }
    if !missing.is_empty() {
        talking_points.push(format!(
            "Prepare honest answers for missing areas: {} (frame as 'learning plan').",
            first_n(missing)
        ));
    }
    talking_points.push("Use STAR format for behavioral answers (Situation, Task, Action, Result).".to_string());
    talking_points.push("Keep claims grounded—no tool name-dropping unless you’ve used it.".to_string());

    InterviewPack {
        questions,
        talking_points,
    }
}

fn first_n(keywords: &[String]) -> String {
    keywords
        .iter()
        .take(MAX_KEYWORDS_PER_POINT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_with_keywords() {
        let overlap = vec!["jira".to_string(), "sql".to_string()];
        let missing: Vec<String> = (0..12).map(|i| format!("kw{}", i)).collect();

        let pack = build_interview_pack(&overlap, &missing);

        assert_eq!(pack.questions.len(), 10);
        assert_eq!(pack.talking_points.len(), 4);
        assert_eq!(pack.talking_points[0], "Emphasize matching keywords you already have: jira, sql.");
        assert!(pack.talking_points[1].contains("kw9 (frame"));
        assert!(!pack.talking_points[1].contains("kw10"));
    }

    #[test]
    fn test_pack_without_keywords_keeps_generic_points() {
        let pack = build_interview_pack(&[], &[]);
        assert_eq!(pack.talking_points.len(), 2);
        assert!(pack.talking_points[0].starts_with("Use STAR format"));
    }
}
