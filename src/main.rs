//! Terminal Tetris runner (default binary).
//!
//! Configuration comes from `TETRIS_*` environment variables; see
//! [`tty_tetris::config`].

use anyhow::Result;

use tty_tetris::app::{App, TerminalScreen};
use tty_tetris::config::AppConfig;
use tty_tetris::input::TerminalInput;
use tty_tetris::logging::init_log;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    if let Some(path) = config.log_path.as_deref() {
        init_log(config.log_level, path)?;
    }
    log::info!("config: {:?}", config);

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let mut app = App::new(&config);
    let result = app.run(&mut TerminalInput::new(), &mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();

    let exit = result?;
    log::info!("exit: {:?}", exit);
    println!(
        "Score: {}  Lines: {}  Level: {}",
        app.game().score(),
        app.game().lines(),
        app.game().level()
    );
    Ok(())
}
