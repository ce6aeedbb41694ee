use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Strikes are capped at three per question board, standard quiz rules.
pub const MAX_STRIKES: u8 = 3;

/// Award used by the points endpoint when no amount is given.
pub const DEFAULT_POINTS_AWARD: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub score: i64,
    #[serde(default)]
    pub revealed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    /// Display order; reveal-next walks this front to back.
    pub answers: Vec<Answer>,
}

impl Question {
    /// Index of the first answer still hidden, if any.
    pub fn next_hidden(&self) -> Option<usize> {
        self.answers.iter().position(|a| !a.revealed)
    }
}

/// The two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    A,
    B,
}

impl FromStr for Team {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Team::A),
            "B" => Ok(Team::B),
            other => Err(GameError::InvalidTeam(other.to_string())),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Team::A => "A",
            Team::B => "B",
        })
    }
}

/// Scores keyed by team. Serializes as `{"A": n, "B": n}`; a struct rather
/// than a map so no other team key can ever appear.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamScores {
    #[serde(rename = "A")]
    pub a: i64,
    #[serde(rename = "B")]
    pub b: i64,
}

impl TeamScores {
    pub fn get(&self, team: Team) -> i64 {
        match team {
            Team::A => self.a,
            Team::B => self.b,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut i64 {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub current_question: Option<Question>,
    pub team_scores: TeamScores,
    pub strikes: u8,
}

/// Answer as submitted by the admin form. Scores arrive loosely typed.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub text: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: i64,
}

/// Body of `POST /api/game/question`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionInput {
    pub text: String,
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
}

/// Accepts numbers, numeric strings, or anything else (treated as 0).
/// Fractions truncate toward zero, negatives clamp to 0.
fn lenient_score<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_score(&value))
}

pub fn coerce_score(value: &serde_json::Value) -> i64 {
    use serde_json::Value;

    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.trunc() as i64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    };
    raw.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_coercion() {
        assert_eq!(coerce_score(&json!(40)), 40);
        assert_eq!(coerce_score(&json!("25")), 25);
        assert_eq!(coerce_score(&json!(" 7 ")), 7);
        assert_eq!(coerce_score(&json!(12.9)), 12);
        assert_eq!(coerce_score(&json!("abc")), 0);
        assert_eq!(coerce_score(&json!(null)), 0);
        assert_eq!(coerce_score(&json!(-5)), 0);
        assert_eq!(coerce_score(&json!([1])), 0);
    }

    #[test]
    fn test_question_input_accepts_loose_scores() {
        let input: QuestionInput = serde_json::from_value(json!({
            "text": "Name a fruit",
            "answers": [
                {"text": "Apple", "score": "40"},
                {"text": "Banana"},
                {"text": "Cherry", "score": "lots"}
            ]
        }))
        .unwrap();

        let scores: Vec<i64> = input.answers.iter().map(|a| a.score).collect();
        assert_eq!(scores, vec![40, 0, 0]);
    }

    #[test]
    fn test_question_input_rejects_bad_shape() {
        assert!(serde_json::from_value::<QuestionInput>(json!({"answers": []})).is_err());
        assert!(
            serde_json::from_value::<QuestionInput>(json!({"text": "Q", "answers": "nope"}))
                .is_err()
        );
    }

    #[test]
    fn test_game_state_json_shape() {
        let value = serde_json::to_value(GameState::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "current_question": null,
                "team_scores": {"A": 0, "B": 0},
                "strikes": 0
            })
        );
    }

    #[test]
    fn test_team_parsing() {
        assert_eq!("A".parse::<Team>().unwrap(), Team::A);
        assert_eq!("B".parse::<Team>().unwrap(), Team::B);
        assert!(matches!("C".parse::<Team>(), Err(GameError::InvalidTeam(t)) if t == "C"));
        assert!("a".parse::<Team>().is_err());
    }
}
