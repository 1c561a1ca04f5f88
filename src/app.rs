//! The tick-driven game loop.
//!
//! Each iteration draws the current frame, polls input for at most one tick
//! and feeds the result to [`GameState::step`]. Line-clear and level-up
//! banners block the loop for their display time, the same way the piece
//! animation pauses in a classic terminal Tetris.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState, StepOutcome};
use crate::input::{InputSource, KeyInput};
use crate::term::{Banner, FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{LockEvent, LEVEL_UP_BANNER_MS, LINE_CLEAR_BANNER_MS};

/// Where frames go, and how the loop waits while a banner is up
pub trait Screen {
    fn viewport(&self) -> Viewport;
    fn show(&mut self, fb: &FrameBuffer) -> Result<()>;
    fn pause(&mut self, ms: u32);
}

/// The real terminal
pub struct TerminalScreen {
    renderer: TerminalRenderer<io::Stdout>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn viewport(&self) -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    fn show(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.renderer.draw(fb)
    }

    fn pause(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(ms as u64));
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player quit
    Quit,
    /// The input source ran dry
    InputClosed,
}

pub struct App {
    game: GameState,
    view: GameView,
    fb: FrameBuffer,
    snap: GameSnapshot,
    tick: Duration,
    skip_menu: bool,
    ticks: u64,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: GameState::new(config.seed),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            snap: GameSnapshot::default(),
            tick: config.tick(),
            skip_menu: config.skip_menu,
            ticks: 0,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Mutable game access for setting up positions
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Number of game ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Show the menu, then play until the player quits
    pub fn run(&mut self, input: &mut impl InputSource, screen: &mut impl Screen) -> Result<Exit> {
        if !self.skip_menu {
            if let Some(exit) = self.menu(input, screen)? {
                return Ok(exit);
            }
        }
        self.game.start();
        self.play(input, screen)
    }

    /// Cycle the logo until any key. Returns an exit if the player quit instead.
    fn menu(&mut self, input: &mut impl InputSource, screen: &mut impl Screen) -> Result<Option<Exit>> {
        let mut frame = 0u32;
        loop {
            self.view.render_menu_into(frame, screen.viewport(), &mut self.fb);
            screen.show(&self.fb)?;

            match input.poll(self.tick) {
                Ok(Some(KeyInput::Quit)) => return Ok(Some(Exit::Quit)),
                Ok(Some(_)) => return Ok(None),
                Ok(None) => frame = frame.wrapping_add(1),
                Err(err) => return input_closed(err).map(Some),
            }
        }
    }

    fn play(&mut self, input: &mut impl InputSource, screen: &mut impl Screen) -> Result<Exit> {
        loop {
            self.draw(None, screen)?;

            let action = match input.poll(self.tick) {
                Ok(Some(KeyInput::Quit)) => {
                    log::info!("quit after {} ticks, score={}", self.ticks, self.game.score());
                    return Ok(Exit::Quit);
                }
                Ok(Some(KeyInput::Action(action))) => Some(action),
                Ok(Some(KeyInput::Other)) | Ok(None) => None,
                Err(err) => return input_closed(err),
            };

            let outcome = self.game.step(action);
            self.ticks += 1;
            if let Some(action) = action {
                log::trace!("tick {}: {:?} -> {:?}", self.ticks, action, outcome);
            }

            if let Some(event) = self.game.take_last_event() {
                self.show_banners(event, screen)?;
            }
            if outcome == StepOutcome::Restarted {
                log::debug!("restarted at tick {}", self.ticks);
            }
        }
    }

    fn show_banners(&mut self, event: LockEvent, screen: &mut impl Screen) -> Result<()> {
        if event.lines_cleared > 0 {
            self.draw(
                Some(Banner::LinesCleared {
                    lines: event.lines_cleared,
                    points: event.line_clear_score,
                }),
                screen,
            )?;
            screen.pause(LINE_CLEAR_BANNER_MS);
        }
        if event.leveled_up {
            self.draw(Some(Banner::LevelUp), screen)?;
            screen.pause(LEVEL_UP_BANNER_MS);
            self.draw(None, screen)?;
            screen.pause(LEVEL_UP_BANNER_MS);
        }
        Ok(())
    }

    fn draw(&mut self, banner: Option<Banner>, screen: &mut impl Screen) -> Result<()> {
        self.game.snapshot_into(&mut self.snap);
        self.view
            .render_into(&self.snap, banner, screen.viewport(), &mut self.fb);
        screen.show(&self.fb)
    }
}

/// A scripted source signals its end with `UnexpectedEof`; anything else is fatal.
fn input_closed(err: anyhow::Error) -> Result<Exit> {
    match err.downcast_ref::<io::Error>() {
        Some(io_err) if io_err.kind() == io::ErrorKind::UnexpectedEof => Ok(Exit::InputClosed),
        _ => Err(err),
    }
}
