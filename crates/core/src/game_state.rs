//! Game state module - the session loop state machine
//!
//! `GameState` owns the board, the active/next/held pieces and the scoring
//! counters of one session. Every tick the driver polls one input and calls
//! [`GameState::step`], which runs the cycle
//! Spawning → Falling → Locking → (row clear) → Spawning until GameOver, and
//! only leaves GameOver on a restart.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::scoring::Scoring;
use crate::snapshot::{GameSnapshot, Phase};
use crate::types::{GameAction, LockEvent};

/// Result of a piece operation: keep falling, or go to Locking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Lock,
}

/// Result of one session-loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing left the Falling (or GameOver) phase
    Continue,
    /// A piece locked and the next piece spawned
    Locked(LockEvent),
    /// The session just ended
    GameOver,
    /// A new session started after game over
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    held: Option<Piece>,
    /// Set once hold was used since the last spawn
    hold_used: bool,
    scoring: Scoring,
    gravity_timer: u32,
    phase: Phase,
    rng: PieceRng,
    /// Last lock/line-clear event (consumed by the presentation layer).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let next = Piece::new(rng.draw());

        Self {
            board: Board::new(),
            active: None,
            next,
            held: None,
            hold_used: false,
            scoring: Scoring::new(),
            gravity_timer: 0,
            phase: Phase::Ready,
            rng,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Falling;
        log::info!("session started: seed={}", self.rng.seed());
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Ready
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn lines(&self) -> u32 {
        self.scoring.lines()
    }

    pub fn gravity_interval(&self) -> u32 {
        self.scoring.gravity_interval()
    }

    pub fn gravity_timer(&self) -> u32 {
        self.gravity_timer
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece (used to set up positions)
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Take and clear the last lock/line-clear event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_color_grid(&mut out.board);

        out.active = self.active;
        out.ghost = self.ghost();
        out.next = self.started().then_some(self.next);
        out.held = self.held;
        out.can_hold = !self.hold_used;
        out.phase = self.phase;
        out.score = self.scoring.score();
        out.level = self.scoring.level();
        out.lines = self.scoring.lines();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the lookahead piece and draw a new one.
    ///
    /// Returns false (and ends the session) when the new piece collides at
    /// the spawn anchor.
    pub fn spawn_piece(&mut self) -> bool {
        let mut piece = self.next;
        piece.reset_position();
        self.next = Piece::new(self.rng.draw());
        self.hold_used = false;

        if self.board.collides(&piece) {
            self.active = None;
            self.enter_game_over();
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active piece; rolled back on collision
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.try_shift(&self.board, dx, dy),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate the active piece clockwise with positional clamping
    pub fn rotate(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => {
                piece.rotate();
                true
            }
            None => false,
        }
    }

    /// Move down one row, or go to Locking when the row below is blocked
    pub fn soft_drop(&mut self) -> Transition {
        if self.active.is_none() || self.try_move(0, 1) {
            Transition::Continue
        } else {
            Transition::Lock
        }
    }

    /// Gravity step; same rule as a soft drop
    pub fn gravity_tick(&mut self) -> Transition {
        self.soft_drop()
    }

    /// Drop the active piece to its landing row and go to Locking
    pub fn hard_drop(&mut self) -> Transition {
        let Some(piece) = self.active.as_mut() else {
            return Transition::Continue;
        };
        *piece = piece.landing(&self.board);
        Transition::Lock
    }

    /// Set the active piece aside, at most once per spawn.
    ///
    /// The first hold promotes the lookahead piece; later holds swap with
    /// the held piece. Either way the new active piece restarts at the spawn
    /// anchor.
    pub fn hold(&mut self) -> bool {
        if self.hold_used {
            return false;
        }
        let Some(current) = self.active else {
            return false;
        };

        let mut incoming = match self.held.take() {
            Some(held) => held,
            None => {
                let promoted = self.next;
                self.next = Piece::new(self.rng.draw());
                promoted
            }
        };
        incoming.reset_position();

        self.held = Some(current);
        self.active = Some(incoming);
        self.hold_used = true;
        true
    }

    /// Dispatch one player action to the matching piece operation
    pub fn apply_action(&mut self, action: GameAction) -> Transition {
        match action {
            GameAction::MoveLeft => {
                self.move_left();
                Transition::Continue
            }
            GameAction::MoveRight => {
                self.move_right();
                Transition::Continue
            }
            GameAction::Rotate => {
                self.rotate();
                Transition::Continue
            }
            GameAction::Hold => {
                self.hold();
                Transition::Continue
            }
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            // Only honored after game over.
            GameAction::Restart => Transition::Continue,
        }
    }

    /// Lock the active piece, clear rows, score and spawn the next piece.
    ///
    /// A piece that settles with its anchor in the top two rows ends the
    /// session instead; its cells are written only if they do not overlap
    /// the stack.
    pub fn lock_piece(&mut self) -> StepOutcome {
        let Some(piece) = self.active.take() else {
            return StepOutcome::Continue;
        };

        let embedded = self.board.collides(&piece);
        if piece.y <= 1 {
            if !embedded {
                self.board.lock(&piece);
            }
            self.enter_game_over();
            return StepOutcome::GameOver;
        }

        self.board.lock(&piece);
        let cleared = self.board.clear_completed_rows();
        let event = self.scoring.record_clear(cleared.len());
        log::debug!(
            "locked {:?} at ({}, {}), cleared rows {:?}",
            piece.kind,
            piece.x,
            piece.y,
            cleared.as_slice()
        );
        self.last_event = Some(event);

        if !self.spawn_piece() {
            return StepOutcome::GameOver;
        }
        StepOutcome::Locked(event)
    }

    /// Run one session-loop iteration with the input polled for this tick
    pub fn step(&mut self, input: Option<GameAction>) -> StepOutcome {
        match self.phase {
            Phase::Ready => StepOutcome::Continue,
            Phase::GameOver => {
                if input == Some(GameAction::Restart) {
                    self.restart();
                    StepOutcome::Restarted
                } else {
                    StepOutcome::Continue
                }
            }
            Phase::Falling => self.step_falling(input),
        }
    }

    fn step_falling(&mut self, input: Option<GameAction>) -> StepOutcome {
        let Some(active) = self.active else {
            return StepOutcome::Continue;
        };

        // A rotation clamp or hold swap can leave the piece overlapping the stack.
        if self.board.collides(&active) {
            return self.lock_piece();
        }

        let mut transition = match input {
            Some(action) => self.apply_action(action),
            None => Transition::Continue,
        };

        // The timer counts every iteration, including ones whose action locks.
        self.gravity_timer += 1;
        if self.gravity_timer >= self.scoring.gravity_interval() {
            self.gravity_timer = 0;
            if transition == Transition::Continue {
                transition = self.gravity_tick();
            }
        }

        match transition {
            Transition::Continue => StepOutcome::Continue,
            Transition::Lock => self.lock_piece(),
        }
    }

    /// Reset the board and all counters and spawn a fresh piece
    pub fn restart(&mut self) {
        self.board.clear();
        self.scoring.reset();
        self.active = None;
        self.held = None;
        self.hold_used = false;
        self.gravity_timer = 0;
        self.last_event = None;
        self.next = Piece::new(self.rng.draw());
        self.phase = Phase::Falling;
        log::info!("session restarted");
        self.spawn_piece();
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        log::info!(
            "game over: score={} lines={} level={}",
            self.scoring.score(),
            self.scoring.lines(),
            self.scoring.level()
        );
    }

    /// Where the active piece would land
    pub fn ghost(&self) -> Option<Piece> {
        self.active.map(|piece| piece.landing(&self.board))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
