use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::Duration;

use wrapsnek::config::Config;
use wrapsnek::input::{self, Command};
use wrapsnek::render::{self, Phase, Screen};
use wrapsnek::score::{FileStore, Scoreboard};
use wrapsnek::ticker::Ticker;
use wrapsnek::{Game, GameError, TickResult};

/// Input poll timeout while no ticks are scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::parse();

    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create(&config.log_file)
            .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?,
    )
    .context("Failed to initialize logger")?;

    info!("Starting wrapsnek with {:?}", config);

    // Bad configuration is reported before the terminal is taken over
    let mut app = App::new(config)?;

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal; every step runs even if an earlier one fails
    if let Err(e) = disable_raw_mode() {
        error!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        error!("Failed to leave alternate screen: {}", e);
    }
    if let Err(e) = terminal.show_cursor() {
        error!("Failed to show cursor: {}", e);
    }

    info!("Exiting with best score {}", app.scoreboard.best());
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        let timeout = match app.state {
            AppState::Playing => app.ticker.time_until_next(),
            _ => IDLE_POLL,
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_command(input::command_for(key))?;
            }
        }

        app.update();

        if app.state == AppState::Exit {
            break;
        }
    }

    Ok(())
}

/// Where a session ends up when a tick fails. A full board is a win.
fn state_after_error(e: &GameError) -> AppState {
    match e {
        GameError::NoSpace => AppState::Cleared,
        _ => AppState::GameOver,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppState {
    Playing,
    Paused,
    GameOver,
    Cleared,
    Exit,
}

/// The host around one game session at a time: drives ticks, routes input,
/// and keeps the best score up to date.
struct App {
    config: Config,
    sessions: u64,
    game: Game,
    ticker: Ticker,
    last_tick: TickResult,
    scoreboard: Scoreboard<FileStore>,
    state: AppState,
}

impl App {
    fn new(config: Config) -> Result<Self, GameError> {
        let scoreboard = Scoreboard::new(FileStore::new(&config.best_score_file));
        let (game, ticker, last_tick) = Self::new_session(&config, 0)?;

        Ok(App {
            config,
            sessions: 1,
            game,
            ticker,
            last_tick,
            scoreboard,
            state: AppState::Playing,
        })
    }

    fn new_session(config: &Config, session: u64) -> Result<(Game, Ticker, TickResult), GameError> {
        let mut game = match config.seed {
            Some(seed) => Game::seeded(config.board_size, config.speed, seed.wrapping_add(session))?,
            None => Game::new(config.board_size, config.speed)?,
        };
        let ticker = Ticker::from_speed(game.speed())?;
        let started = game.start()?;
        Ok((game, ticker, started))
    }

    fn restart(&mut self) -> Result<(), GameError> {
        let (game, ticker, last_tick) = Self::new_session(&self.config, self.sessions)?;
        self.sessions += 1;
        self.game = game;
        self.ticker = ticker;
        self.last_tick = last_tick;
        self.state = AppState::Playing;
        info!("Session {} started", self.sessions);
        Ok(())
    }

    fn handle_command(&mut self, command: Command) -> Result<(), GameError> {
        match (self.state, command) {
            (_, Command::Quit) => self.state = AppState::Exit,
            (_, Command::Restart) => self.restart()?,
            (AppState::Playing, Command::Turn(direction)) => {
                self.game.turn(direction);
            }
            (AppState::Playing, Command::Toggle) => self.state = AppState::Paused,
            (AppState::Paused, Command::Toggle) => self.state = AppState::Playing,
            (AppState::GameOver | AppState::Cleared, Command::Toggle) => self.restart()?,
            _ => {}
        }
        Ok(())
    }

    fn update(&mut self) {
        if self.state != AppState::Playing || !self.ticker.due() {
            return;
        }

        match self.game.advance() {
            Ok(result) => {
                self.scoreboard.record(result.score);
                if result.is_over() {
                    self.finish(result.score, AppState::GameOver);
                }
                self.last_tick = result;
            }
            Err(e) => {
                let state = state_after_error(&e);
                if state == AppState::Cleared {
                    info!("Session {} filled the board", self.sessions);
                } else {
                    error!("Ending session {}: {}", self.sessions, e);
                }
                self.finish(self.last_tick.score, state);
            }
        }
    }

    fn finish(&mut self, score: u32, state: AppState) {
        self.ticker.stop();
        let best = self.scoreboard.record(score);
        info!("Session {} over, score {}, best {}", self.sessions, score, best);
        self.state = state;
    }

    fn render(&self, frame: &mut Frame) {
        let phase = match self.state {
            AppState::Paused => Phase::Paused,
            AppState::GameOver => Phase::GameOver,
            AppState::Cleared => Phase::Cleared,
            _ => Phase::Playing,
        };
        render::draw(
            frame,
            &Screen {
                board_size: self.game.board_size(),
                tick: &self.last_tick,
                best: self.scoreboard.best(),
                phase,
            },
        );
    }
}
