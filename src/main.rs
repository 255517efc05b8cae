use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use thiserror::Error;

use desk_wm::config::{ConfigError, WmConfig};
use desk_wm::drivers::CellScale;
use desk_wm::drivers::console::ConsoleInputDriver;
use desk_wm::layout::Viewport;
use desk_wm::runner::{Desktop, run_desktop};
use desk_wm::tracing_sub;
use desk_wm::window::WindowManager;

#[derive(Parser, Debug)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating desktop window manager in the terminal"
)]
struct Cli {
    /// Viewport width in pixels at or below which windows open full screen.
    #[arg(long, value_name = "PX", default_value_t = desk_wm::constants::MOBILE_BREAKPOINT)]
    breakpoint: u32,

    /// Smallest width a resize may produce.
    #[arg(long, value_name = "PX", default_value_t = desk_wm::constants::MIN_WINDOW_WIDTH)]
    min_width: u32,

    /// Smallest height a resize may produce.
    #[arg(long, value_name = "PX", default_value_t = desk_wm::constants::MIN_WINDOW_HEIGHT)]
    min_height: u32,

    /// Pixels represented by one terminal column.
    #[arg(long, value_name = "PX", default_value_t = 8)]
    px_per_col: u32,

    /// Pixels represented by one terminal row.
    #[arg(long, value_name = "PX", default_value_t = 16)]
    px_per_row: u32,

    /// Append debug logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum DemoConfigError {
    #[error(transparent)]
    Layout(#[from] ConfigError),
    #[error("cell scale must be non-zero, got {cols}x{rows}")]
    ZeroScale { cols: u32, rows: u32 },
}

struct DemoConfig {
    wm: WmConfig,
    scale: CellScale,
    log_file: Option<PathBuf>,
}

impl TryFrom<&Cli> for DemoConfig {
    type Error = DemoConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.px_per_col == 0 || cli.px_per_row == 0 {
            return Err(DemoConfigError::ZeroScale {
                cols: cli.px_per_col,
                rows: cli.px_per_row,
            });
        }
        let wm = WmConfig {
            mobile_breakpoint: cli.breakpoint,
            min_width: cli.min_width,
            min_height: cli.min_height,
            ..WmConfig::default()
        };
        wm.validate()?;
        Ok(Self {
            wm,
            scale: CellScale {
                px_per_col: cli.px_per_col,
                px_per_row: cli.px_per_row,
            },
            log_file: cli.log_file.clone(),
        })
    }
}

fn main() -> io::Result<()> {
    let args = Cli::parse();
    let config = DemoConfig::try_from(&args).map_err(io::Error::other)?;
    tracing_sub::init_default(config.log_file.as_deref())?;

    let wm = WindowManager::new(config.wm, Viewport::default());
    let mut desktop = Desktop::new(wm, config.scale);

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run_desktop(
        &mut terminal,
        ConsoleInputDriver::new(),
        &mut desktop,
        Duration::from_millis(16),
    );

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
