pub mod export;
mod game;
mod question;
mod score;

pub use question::RevealOutcome;

use crate::protocol::ServerMessage;
use crate::types::GameState;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Game state plus the number of mutations committed so far.
#[derive(Debug, Default)]
pub(crate) struct Board {
    pub state: GameState,
    pub revision: u64,
}

/// Owner of the single live game. Cloning shares the same board.
///
/// All mutations go through the write lock, so concurrent strikes or point
/// awards are applied one after another and none are lost.
#[derive(Clone)]
pub struct GameStore {
    board: Arc<RwLock<Board>>,
    /// Broadcast channel for pushing state changes to WebSocket clients
    pub broadcast: broadcast::Sender<ServerMessage>,
}

impl GameStore {
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            board: Arc::new(RwLock::new(Board::default())),
            broadcast: tx,
        }
    }

    /// Apply `f` under the write lock. `f` returns its output plus whether it
    /// changed anything; changes bump the revision and are broadcast. An `Err`
    /// must be returned before the state is touched.
    pub(crate) async fn mutate<T, E, F>(&self, f: F) -> Result<(T, GameState), E>
    where
        F: FnOnce(&mut GameState) -> Result<(T, bool), E>,
    {
        let mut board = self.board.write().await;
        let (out, changed) = f(&mut board.state)?;
        if changed {
            board.revision += 1;
            // Ignore send errors (no subscribers is fine)
            let _ = self.broadcast.send(ServerMessage::State {
                revision: board.revision,
                state: board.state.clone(),
            });
        }
        Ok((out, board.state.clone()))
    }

    /// `mutate` for operations that cannot be rejected.
    pub(crate) async fn mutate_infallible<T, F>(&self, f: F) -> (T, GameState)
    where
        F: FnOnce(&mut GameState) -> (T, bool),
    {
        match self.mutate(|state| Ok::<_, Infallible>(f(state))).await {
            Ok(result) => result,
            Err(never) => match never {},
        }
    }

    /// Replace the whole board, used by reset and import.
    pub(crate) async fn replace(&self, state: GameState) -> GameState {
        let mut board = self.board.write().await;
        board.state = state;
        board.revision += 1;
        let _ = self.broadcast.send(ServerMessage::State {
            revision: board.revision,
            state: board.state.clone(),
        });
        board.state.clone()
    }

    /// Current state and its revision, read together.
    pub async fn snapshot(&self) -> (u64, GameState) {
        let board = self.board.read().await;
        (board.revision, board.state.clone())
    }

    pub async fn revision(&self) -> u64 {
        self.board.read().await.revision
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}
