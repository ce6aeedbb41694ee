use super::GameStore;
use crate::error::{GameError, GameResult};
use crate::types::{Answer, AnswerInput, GameState, Question};

/// Result of a reveal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The answer at this index just became visible.
    Revealed(usize),
    /// The requested answer was already visible.
    AlreadyRevealed(usize),
    /// No question is set, or every answer is already visible.
    NothingToReveal,
}

impl GameStore {
    /// Replace the current question. Every answer starts hidden; scores and
    /// strikes carry over.
    pub async fn set_question(&self, text: String, answers: Vec<AnswerInput>) -> GameState {
        let question = Question {
            text,
            answers: answers
                .into_iter()
                .map(|a| Answer {
                    text: a.text,
                    score: a.score.max(0),
                    revealed: false,
                })
                .collect(),
        };

        tracing::info!(
            "Setting question '{}' with {} answers",
            question.text,
            question.answers.len()
        );

        self.mutate_infallible(|state| {
            state.current_question = Some(question);
            ((), true)
        })
        .await
        .1
    }

    /// Reveal the lowest-index hidden answer.
    pub async fn reveal_next(&self) -> (RevealOutcome, GameState) {
        let (outcome, state) = self
            .mutate_infallible(|state| {
                let Some(question) = state.current_question.as_mut() else {
                    return (RevealOutcome::NothingToReveal, false);
                };
                match question.next_hidden() {
                    Some(index) => {
                        question.answers[index].revealed = true;
                        (RevealOutcome::Revealed(index), true)
                    }
                    None => (RevealOutcome::NothingToReveal, false),
                }
            })
            .await;

        log_outcome(outcome);
        (outcome, state)
    }

    /// Reveal a specific answer chosen by the host.
    pub async fn reveal_at(&self, index: usize) -> GameResult<(RevealOutcome, GameState)> {
        let (outcome, state) = self
            .mutate(|state| -> GameResult<(RevealOutcome, bool)> {
                let Some(question) = state.current_question.as_mut() else {
                    return Ok((RevealOutcome::NothingToReveal, false));
                };
                let len = question.answers.len();
                let answer = question
                    .answers
                    .get_mut(index)
                    .ok_or(GameError::InvalidAnswerIndex { index, len })?;
                if answer.revealed {
                    Ok((RevealOutcome::AlreadyRevealed(index), false))
                } else {
                    answer.revealed = true;
                    Ok((RevealOutcome::Revealed(index), true))
                }
            })
            .await?;

        log_outcome(outcome);
        Ok((outcome, state))
    }
}

fn log_outcome(outcome: RevealOutcome) {
    match outcome {
        RevealOutcome::Revealed(index) => tracing::info!("Revealed answer {}", index),
        RevealOutcome::AlreadyRevealed(index) => {
            tracing::debug!("Answer {} was already revealed", index)
        }
        RevealOutcome::NothingToReveal => tracing::debug!("Nothing to reveal"),
    }
}
