//! Turn-loop orchestration for front ends
//!
//! [`Game`] applies moves, decides termination (win before draw) and keeps
//! the history. [`run_selfplay`] drives two engines against each other.

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::error::GameError;
use crate::rules::{find_five_positions, game_status, GameStatus};
use crate::strategy::{AgentConfig, Matchup};

/// One committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub pos: Pos,
    pub stone: Stone,
}

/// A game in progress. Black moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_turn: Stone,
    status: GameStatus,
    history: Vec<PlayedMove>,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::Black,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Play a stone for the side to move.
    ///
    /// The turn passes to the opponent only while the game continues.
    pub fn play(&mut self, row: i32, col: i32) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let color = self.current_turn;
        let pos = self.board.apply_move(row, col, color)?;
        self.history.push(PlayedMove { pos, stone: color });

        self.status = game_status(&self.board, color);
        if self.status == GameStatus::InProgress {
            self.current_turn = color.opponent();
        }
        debug!(%pos, ?color, status = ?self.status, "move played");
        Ok(self.status)
    }

    /// Let `engine` choose and commit a move for the side to move, using
    /// the engine's own settings.
    pub fn play_ai(&mut self, engine: &mut AIEngine) -> Result<MoveResult, GameError> {
        let EngineConfig { algorithm, depth, .. } = engine.config();
        self.play_agent(engine, AgentConfig::new(algorithm, depth))
    }

    /// Like [`Game::play_ai`], overriding algorithm and depth for this move.
    pub fn play_agent(
        &mut self,
        engine: &mut AIEngine,
        agent: AgentConfig,
    ) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let color = self.current_turn;
        let result = engine.search_with(&mut self.board, color, agent.algorithm, agent.depth);
        // An unfinished game always has an empty cell
        let pos = result.best_move.ok_or(GameError::GameOver)?;
        self.play(i32::from(pos.row), i32::from(pos.col))?;
        Ok(result)
    }

    /// Take back the last move. Returns it, or `None` on an empty history.
    pub fn undo(&mut self) -> Option<PlayedMove> {
        let last = self.history.pop()?;
        self.board.remove_stone(last.pos);
        self.current_turn = last.stone;
        self.status = GameStatus::InProgress;
        Some(last)
    }

    /// Stones of the winning run, if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match self.status {
            GameStatus::Won(winner) => find_five_positions(&self.board, winner),
            _ => None,
        }
    }

    /// Winner, if any
    #[must_use]
    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::Won(winner) => Some(winner),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an engine-versus-engine game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<PlayedMove>,
    pub status: GameStatus,
    pub board: Board,
    /// Nodes searched by Black and White
    pub nodes: [u64; 2],
}

impl GameRecord {
    #[must_use]
    pub fn winner(&self) -> Option<Stone> {
        match self.status {
            GameStatus::Won(winner) => Some(winner),
            _ => None,
        }
    }
}

/// Play one game with each side searching per `matchup`.
///
/// Stops at a win, a draw, or after `max_moves` moves when given; the
/// record's status stays `InProgress` in the last case.
pub fn run_selfplay(
    matchup: &Matchup,
    seed: Option<u64>,
    max_moves: Option<usize>,
) -> Result<GameRecord, GameError> {
    let mut engine = AIEngine::with_config(EngineConfig {
        seed,
        ..EngineConfig::default()
    });
    let mut game = Game::new();
    let mut nodes = [0u64; 2];

    while !game.is_over() && max_moves.map_or(true, |max| game.history().len() < max) {
        let color = game.current_turn();
        let agent = matchup.select(color);
        let result = game.play_agent(&mut engine, agent)?;
        nodes[usize::from(color == Stone::White)] += result.nodes;
    }

    info!(
        status = ?game.status(),
        moves = game.history().len(),
        black = %matchup.black,
        white = %matchup.white,
        "self-play finished"
    );

    Ok(GameRecord {
        status: game.status(),
        board: game.board().clone(),
        moves: game.history,
        nodes,
    })
}
