use super::GameStore;
use crate::types::GameState;

impl GameStore {
    /// Get current game state
    pub async fn get(&self) -> GameState {
        self.snapshot().await.1
    }

    /// Put every field back to its default: no question, zero scores, zero strikes
    pub async fn reset(&self) -> GameState {
        tracing::info!("Resetting game");
        self.replace(GameState::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerInput, Team};

    #[tokio::test]
    async fn test_reset_after_mutations() {
        let store = GameStore::new();
        store
            .set_question(
                "Name a fruit".to_string(),
                vec![AnswerInput {
                    text: "Apple".to_string(),
                    score: 40,
                }],
            )
            .await;
        store.reveal_next().await;
        store.add_points(Team::A, 30).await;
        store.add_points(Team::B, 5).await;
        store.add_strike().await;
        store.add_strike().await;

        let state = store.reset().await;

        assert_eq!(state, GameState::default());
        assert_eq!(store.get().await, GameState::default());
    }

    #[tokio::test]
    async fn test_reset_bumps_revision() {
        let store = GameStore::new();
        store.reset().await;
        assert_eq!(store.revision().await, 1);
    }

    #[tokio::test]
    async fn test_get_has_no_side_effects() {
        let store = GameStore::new();
        store.add_strike().await;

        let before = store.revision().await;
        let first = store.get().await;
        let second = store.get().await;

        assert_eq!(first, second);
        assert_eq!(store.revision().await, before);
    }
}
