//! Canned service responses shared by unit tests.

use super::analysis::ResultDocument;

/// A response as the analysis service emits it, extra fields included.
pub const SAMPLE_RESPONSE: &str = r#"{
    "statistics": {
        "word_count": 1234,
        "char_count": 8456,
        "sentence_count": 57,
        "readability_score": 61.72
    },
    "overall_rating": {"score": 78.35, "rating": "Good"},
    "scores": {
        "completeness": 80,
        "skills": 65.4,
        "experience": 59.6,
        "education": 40,
        "readability": 39.99,
        "length": 100,
        "bonus": 12
    },
    "skills": ["Python", "SQL", "Docker"],
    "sections": {
        "contact": true,
        "summary": false,
        "experience": true,
        "education": false,
        "skills": true,
        "projects": false,
        "certifications": false
    },
    "suggestions": [
        {"type": "skills", "priority": "high", "message": "Add more keywords"}
    ],
    "entities": {
        "emails": ["jane@example.com"],
        "phones": ["555-123-4567"],
        "urls": ["https://github.com/jane", "https://jane.dev"],
        "dates": ["2019", "2023"]
    },
    "education": {"degrees": ["bachelor"], "institutions": []},
    "experience": {"years_mentioned": [5], "job_titles": []}
}"#;

pub fn sample_document() -> ResultDocument {
    serde_json::from_str(SAMPLE_RESPONSE).expect("sample response must parse")
}
