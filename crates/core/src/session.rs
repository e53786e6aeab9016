//! Session module - the game state machine
//!
//! A session owns the grid, the falling piece, the score and the phase. It is
//! mutated only through [`Session::tick`] and [`Session::handle_input`]; both
//! are synchronous and return a [`StepOutcome`] instead of failing. The host
//! decides when to call `tick` (normally every `drop_interval`) and stops once
//! the phase is [`Phase::GameOver`].

use std::time::Duration;

use log::{debug, info, trace};

use crate::collision::{is_legal, lock, try_move, try_rotate};
use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::PieceSource;
use crate::scoring::{clear_completed_lines, ScoringPolicy};
use crate::snapshot::Snapshot;
use crate::types::{Input, Phase, PieceKind};

/// What a piece lock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// The follow-up spawn collided and the session ended.
    pub game_over: bool,
}

/// Result of a tick or an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The session is over; nothing happened.
    Ignored,
    /// The piece moved or rotated.
    Moved,
    /// The move was illegal; the piece stayed where it was.
    Blocked,
    /// The piece could not fall further and was locked.
    Locked(LockEvent),
}

/// Build a session with explicit dimensions and drop interval, default
/// scoring and the full piece catalog.
pub fn create_session(
    rows: usize,
    cols: usize,
    drop_interval_ms: u32,
) -> Result<Session, ConfigError> {
    Session::new(SessionConfig::new(rows, cols).with_drop_interval_ms(drop_interval_ms))
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    /// `None` once the game is over.
    active: Option<ActivePiece>,
    source: PieceSource,
    scoring: ScoringPolicy,
    score: u32,
    lines: u32,
    phase: Phase,
    pieces_spawned: u32,
}

impl Session {
    /// Create a session on an empty grid and spawn the first piece.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.rows, config.cols)?;
        Self::start(config, grid)
    }

    /// Create a session on a prepared grid and spawn the first piece.
    ///
    /// The grid must have the configured dimensions. If the first spawn
    /// collides the session starts out over.
    pub fn with_grid(config: SessionConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.rows() != config.rows || grid.cols() != config.cols {
            return Err(ConfigError::GridMismatch {
                rows: config.rows,
                cols: config.cols,
                actual_rows: grid.rows(),
                actual_cols: grid.cols(),
            });
        }
        Self::start(config, grid)
    }

    fn start(config: SessionConfig, grid: Grid) -> Result<Self, ConfigError> {
        info!(
            "new session {}x{}, drop every {}ms, seed {}",
            config.rows, config.cols, config.drop_interval_ms, config.seed
        );
        let source = PieceSource::uniform(&config.piece_set, config.seed)?;
        let scoring = ScoringPolicy::linear(config.points_per_line);
        let mut session = Self {
            config,
            grid,
            active: None,
            source,
            scoring,
            score: 0,
            lines: 0,
            phase: Phase::Running,
            pieces_spawned: 0,
        };
        session.spawn();
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total lines cleared so far.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// How often the host should call [`Session::tick`].
    pub fn drop_interval(&self) -> Duration {
        self.config.drop_interval()
    }

    /// Spawn a new piece at the top centre, replacing any active piece.
    ///
    /// Returns `false` and ends the session when the spawn position
    /// collides. Does nothing once the session is over.
    pub fn spawn(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let kind = self.source.draw();
        self.place_spawned(kind)
    }

    fn place_spawned(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::spawn(kind, self.grid.cols());
        if !is_legal(&piece, &self.grid) {
            self.active = None;
            self.phase = Phase::GameOver;
            info!(
                "spawn of {:?} at ({}, {}) blocked, game over with score {}",
                kind, piece.row, piece.col, self.score
            );
            return false;
        }
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!("spawned {:?} at ({}, {})", kind, piece.row, piece.col);
        self.active = Some(piece);
        true
    }

    /// Advance gravity by one row, locking the piece when it cannot fall.
    pub fn tick(&mut self) -> StepOutcome {
        let Some(active) = self.running_piece() else {
            return StepOutcome::Ignored;
        };

        match try_move(&active, 1, 0, &self.grid) {
            Some(moved) => {
                trace!("fell to row {}", moved.row);
                self.active = Some(moved);
                StepOutcome::Moved
            }
            None => StepOutcome::Locked(self.lock_active(active)),
        }
    }

    /// Apply one discrete input. Ignored once the session is over.
    pub fn handle_input(&mut self, input: Input) -> StepOutcome {
        let Some(active) = self.running_piece() else {
            return StepOutcome::Ignored;
        };

        let next = match input {
            Input::SoftDrop => return self.tick(),
            Input::Left => try_move(&active, 0, -1, &self.grid),
            Input::Right => try_move(&active, 0, 1, &self.grid),
            Input::RotateCw => try_rotate(&active, true, &self.grid),
            Input::RotateCcw => try_rotate(&active, false, &self.grid),
        };

        match next {
            Some(piece) => {
                trace!("{} -> ({}, {}) {:?}", input.as_str(), piece.row, piece.col, piece.rotation);
                self.active = Some(piece);
                StepOutcome::Moved
            }
            None => StepOutcome::Blocked,
        }
    }

    fn running_piece(&self) -> Option<ActivePiece> {
        if self.is_game_over() {
            return None;
        }
        self.active
    }

    /// Lock, clear lines, score, then spawn the next piece.
    fn lock_active(&mut self, piece: ActivePiece) -> LockEvent {
        lock(&piece, &mut self.grid);
        self.active = None;

        let lines_cleared = clear_completed_lines(&mut self.grid);
        if lines_cleared > 0 {
            self.lines = self.lines.saturating_add(lines_cleared);
            self.score = self.score.saturating_add(self.scoring.award(lines_cleared));
        }
        debug!(
            "locked {:?} at ({}, {}), cleared {} line(s), score {}",
            piece.kind, piece.row, piece.col, lines_cleared, self.score
        );

        let spawned = self.spawn();
        LockEvent {
            lines_cleared,
            game_over: !spawned,
        }
    }

    /// Write a snapshot into `out`, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        self.grid.write_rows(&mut out.grid);
        out.active_cells.clear();
        if let Some(active) = self.active {
            out.active_cells.extend(active.cells());
        }
        out.active_kind = self.active.map(|piece| piece.kind);
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
