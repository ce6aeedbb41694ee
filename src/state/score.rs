use super::GameStore;
use crate::types::{GameState, Team, MAX_STRIKES};

impl GameStore {
    /// Add one strike, saturating at `MAX_STRIKES`
    pub async fn add_strike(&self) -> GameState {
        let (strikes, state) = self
            .mutate_infallible(|state| {
                if state.strikes >= MAX_STRIKES {
                    return (state.strikes, false);
                }
                state.strikes += 1;
                (state.strikes, true)
            })
            .await;

        tracing::info!("Strikes now {}/{}", strikes, MAX_STRIKES);
        state
    }

    /// Award `amount` points to a team. Negative amounts are allowed for corrections.
    pub async fn add_points(&self, team: Team, amount: i64) -> GameState {
        let (total, state) = self
            .mutate_infallible(|state| {
                let score = state.team_scores.get_mut(team);
                let before = *score;
                *score = score.saturating_add(amount);
                (*score, *score != before)
            })
            .await;

        tracing::info!("Team {} awarded {} points (total {})", team, amount, total);
        state
    }
}
