use serde::{Deserialize, Serialize};

/// Body of both question mutations. A PUT replaces the whole row, so the
/// create and update payloads are the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub text: String,
    pub alternatives: Vec<String>,
    pub correct_index: i32,
    pub category: Option<String>,
    pub level: Option<String>,
    pub tags: Option<Vec<String>>,
    pub points: Option<i32>,
}

impl QuestionPayload {
    /// Omitted and zero both fall back to the default of 10 points.
    pub fn effective_points(&self) -> i32 {
        match self.points {
            Some(points) if points != 0 => points,
            _ => 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionIdResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(points: Option<i32>) -> QuestionPayload {
        QuestionPayload {
            text: "Qual a capital do Brasil?".into(),
            alternatives: vec!["Rio de Janeiro".into(), "Brasília".into()],
            correct_index: 1,
            category: None,
            level: None,
            tags: None,
            points,
        }
    }

    #[test]
    fn points_default_when_absent_or_zero() {
        assert_eq!(payload(None).effective_points(), 10);
        assert_eq!(payload(Some(0)).effective_points(), 10);
        assert_eq!(payload(Some(25)).effective_points(), 25);
    }
}
