use anyhow::{Context, Result};
use bitcube::config::AppConfig;
use bitcube::core::{BinaryClock, CubeRotator, Session};
use bitcube::displayers::{render_frame, TerminalClockFace, TerminalCube};
use bitcube::sources::SystemClockSource;
use bitcube::ui::spawn_line_reader;
use bitcube_core::{ClockEncoder, DisplayMode, DragRotator, HourMode, TimeSource};
use clap::Parser;
use log::{error, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// bitcube - a binary/BCD clock cube you can drag to rotate
#[derive(Parser, Debug, Clone)]
#[command(name = "bitcube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to load instead of the user config
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render a single frame and exit
    #[arg(long = "once")]
    once: bool,

    /// Start in BCD mode
    #[arg(long = "bcd")]
    bcd: bool,

    /// Start in 12-hour mode
    #[arg(long = "twelve-hour")]
    twelve_hour: bool,

    /// Timezone ID (e.g., "Local", "Europe/London")
    #[arg(short = 't', long = "timezone", value_name = "TZ")]
    timezone: Option<String>,

    /// Degrees of rotation per cell of pointer movement
    #[arg(short = 's', long = "sensitivity", value_name = "DEG")]
    sensitivity: Option<f64>,

    /// Start without a rotatable cube
    #[arg(long = "no-rotation")]
    no_rotation: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

impl Cli {
    /// Command line flags win over the config file
    fn apply_to(&self, config: &mut AppConfig) {
        if self.bcd {
            config.clock.display_mode = DisplayMode::Bcd;
        }
        if self.twelve_hour {
            config.clock.hour_mode = HourMode::H12;
        }
        if let Some(ref timezone) = self.timezone {
            config.clock.timezone = timezone.clone();
        }
        if let Some(sensitivity) = self.sensitivity {
            config.rotation.sensitivity = sensitivity;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting bitcube v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match cli.config {
        Some(ref path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load().context("Failed to load user config")?,
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let mut source = SystemClockSource::new(&config.clock.timezone);
    source.update()?;
    let reading = source.reading();
    info!("Using {} time", source.timezone_name());

    let encoder = ClockEncoder::new(config.clock.display_mode, config.clock.hour_mode);
    let mut face = TerminalClockFace::new();
    let clock = match BinaryClock::attach(&mut face, encoder, &reading) {
        Ok(clock) => clock,
        Err(e) => {
            print!("{}", render_frame(&face, None));
            return Err(e.into());
        }
    };

    let mut cube = if cli.no_rotation {
        TerminalCube::disabled()
    } else {
        TerminalCube::default()
    };
    let rotator = match CubeRotator::attach(&mut cube, DragRotator::from_config(&config.rotation)) {
        Ok(rotator) => Some(rotator),
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    let session = Session::new(clock, rotator, Box::new(source));
    let mut stdout = std::io::stdout();

    if cli.once {
        return session.without_clear_screen().draw(&mut stdout);
    }

    session.draw(&mut stdout)?;
    let interval = Duration::from_millis(config.clock.update_interval_ms);
    let input = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
        .context("Failed to start input reader")?;
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    if let Err(e) = session.run(input, interval, &mut stdout, shutdown).await {
        error!("Clock session failed: {:#}", e);
        return Err(e);
    }

    writeln!(stdout).ok();
    Ok(())
}
