use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// No game was started yet.
    Idle,
    /// A board build is in flight.
    Loading,
    /// The current board is playable.
    Ready,
    /// The last build failed, any previous board is kept but not playable.
    Failed(BuildAborted),
}

impl SessionStatus {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Owner of the board for one page session, replaced wholesale by each successful build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    board: Option<Board>,
    status: SessionStatus,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_playable(&self) -> bool {
        matches!(self.status, SessionStatus::Ready) && self.board.is_some()
    }

    /// Marks a build as started, returns `false` if one is already running.
    pub fn begin_build(&mut self) -> bool {
        if self.status.is_loading() {
            log::debug!("build already in flight");
            return false;
        }
        self.status = SessionStatus::Loading;
        true
    }

    pub fn finish_build(&mut self, result: core::result::Result<Board, BuildAborted>) {
        match result {
            Ok(board) => {
                log::info!(
                    "board ready: {} categories, {} rows",
                    board.category_count(),
                    board.clue_count()
                );
                self.board = Some(board);
                self.status = SessionStatus::Ready;
            }
            Err(aborted) => {
                log::error!("{}: {}", aborted, aborted.cause);
                self.status = SessionStatus::Failed(aborted);
            }
        }
    }

    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome> {
        if !matches!(self.status, SessionStatus::Ready) {
            return Err(GameError::NotReady);
        }
        self.board
            .as_mut()
            .ok_or(GameError::NotReady)?
            .reveal(cell)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            playable: self.is_playable(),
        }
    }
}

/// Serializable view of a session, used for debugging dumps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Option<Board>,
    pub playable: bool,
}
