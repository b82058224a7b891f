use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use heartworks::{Config, Recorder, Renderer, Rgb, TerminalCanvas, TickClock, TickReport, World};
use std::fs::File;
use std::io::{BufWriter, Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "heartworks")]
#[command(about = "Heart-shaped fireworks in the terminal")]
struct Cli {
    /// JSON file overriding any of the default settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Background color as hex (e.g. 1a1b26)
    #[arg(long, value_parser = parse_hex_color)]
    bg_color: Option<Rgb>,
    /// Simulation ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,
    /// Ticks between launch batches
    #[arg(long)]
    launch_interval: Option<u32>,
    /// Explosion depth (1 = hearts only)
    #[arg(long)]
    generations: Option<u8>,
    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,
    /// Run without a terminal and print a summary (needs --max-ticks)
    #[arg(long)]
    headless: bool,
    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_hex_color(hex: &str) -> Result<Rgb, String> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err("expected RRGGBB (e.g. 1a1b26)".to_string());
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("invalid hex color: {e}"))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

impl Cli {
    fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(color) = self.bg_color {
            config.background = color;
        }
        if let Some(rate) = self.tick_rate {
            config.tick_rate = rate;
        }
        if let Some(interval) = self.launch_interval {
            config.launch_interval = interval;
        }
        if let Some(cap) = self.generations {
            config.generation_cap = cap;
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn init_logging(log_file: Option<&PathBuf>, headless: bool) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Totals {
    ticks: u64,
    launched: u64,
    exploded: u64,
    spawned: u64,
    retired: u64,
}

impl Totals {
    fn add(&mut self, report: TickReport) {
        self.ticks += 1;
        self.launched += report.launched as u64;
        self.exploded += report.exploded as u64;
        self.spawned += report.spawned as u64;
        self.retired += report.retired as u64;
    }

    fn log(&self, world: &World) {
        info!(
            ticks = self.ticks,
            launched = self.launched,
            exploded = self.exploded,
            spawned = self.spawned,
            retired = self.retired,
            rockets = world.projectiles().len(),
            fireworks = world.fireworks().len(),
            loose = world.loose_particles().len(),
            "show finished"
        );
    }
}

fn run_headless(mut world: World, max_ticks: u64) -> Result<()> {
    let mut recorder = Recorder::new();
    let mut totals = Totals::default();
    for _ in 0..max_ticks {
        totals.add(world.tick(&mut recorder));
        recorder.present()?;
    }
    totals.log(&world);
    println!(
        "{} ticks: {} launched, {} burst, {} shed, {} faded; {} rockets, {} fireworks, {} loose particles live",
        totals.ticks,
        totals.launched,
        totals.exploded,
        totals.spawned,
        totals.retired,
        world.projectiles().len(),
        world.fireworks().len(),
        world.loose_particles().len()
    );
    Ok(())
}

/// Waits for the next tick boundary while watching for input. Returns true
/// when the user asked to quit.
fn wait_for_tick(
    clock: &mut TickClock,
    canvas: &mut TerminalCanvas<BufWriter<Stdout>>,
    config: &Config,
) -> Result<bool> {
    loop {
        let remaining = clock.remaining(Instant::now());
        if !event::poll(remaining)? {
            break;
        }
        match event::read()? {
            Event::Key(key)
                if key.code == KeyCode::Char('q')
                    || key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)) =>
            {
                return Ok(true);
            }
            Event::Resize(cols, rows) => {
                let out = BufWriter::with_capacity(1024 * 64, stdout());
                *canvas = TerminalCanvas::new(
                    out,
                    cols as usize,
                    rows as usize,
                    config.width,
                    config.height,
                );
                let mut term = stdout();
                execute!(term, Clear(ClearType::All))?;
            }
            _ => {}
        }
    }
    clock.advance(Instant::now());
    Ok(false)
}

fn show(world: &mut World, max_ticks: Option<u64>) -> Result<Totals> {
    let (cols, rows) = terminal::size()?;
    let config = world.config().clone();
    let out = BufWriter::with_capacity(1024 * 64, stdout());
    let mut canvas = TerminalCanvas::new(
        out,
        cols as usize,
        rows as usize,
        config.width,
        config.height,
    );
    let mut clock = TickClock::new(config.tick_rate);
    let mut totals = Totals::default();

    while max_ticks.is_none_or(|max| totals.ticks < max) {
        totals.add(world.tick(&mut canvas));
        canvas.present().context("writing frame")?;
        if wait_for_tick(&mut clock, &mut canvas, &config)? {
            break;
        }
    }
    Ok(totals)
}

fn run_terminal(mut world: World, max_ticks: Option<u64>) -> Result<()> {
    let mut stdout = stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

    let result = show(&mut world, max_ticks);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result?.log(&world);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.build_config()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging(cli.log_file.as_ref(), cli.headless)?;
    info!(?config, "starting");

    let world = World::new(config)?;
    if cli.headless {
        let Some(max_ticks) = cli.max_ticks else {
            bail!("--headless needs --max-ticks");
        };
        run_headless(world, max_ticks)
    } else {
        run_terminal(world, cli.max_ticks)
    }
}
