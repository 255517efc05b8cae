use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use desk_wm::apps::SIDEBAR_APPS;
use desk_wm::config::WmConfig;
use desk_wm::drivers::{PointerEvent, PointerPhase};
use desk_wm::layout::Viewport;
use desk_wm::layout::floating::ResizeEdge;
use desk_wm::window::WindowManager;

#[derive(Parser, Debug)]
#[command(
    name = "wm-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replays synthetic drag and resize gestures against the window manager"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 5.0
    )]
    duration_seconds: f64,

    /// Pointer moves per gesture.
    #[arg(short = 'm', long = "moves", value_name = "COUNT", default_value_t = 120)]
    moves_per_gesture: u32,

    /// Viewport width in pixels.
    #[arg(long, value_name = "PX", default_value_t = 1440)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, value_name = "PX", default_value_t = 900)]
    height: u32,

    /// Fixed seed for repeatable runs. Defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,
}

struct BenchConfig {
    duration: Duration,
    moves_per_gesture: u32,
    viewport: Viewport,
    seed: u64,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(0.1..=600.0).contains(&cli.duration_seconds) {
            return Err("duration must be between 0.1 and 600 seconds".to_string());
        }
        if !(1..=10_000).contains(&cli.moves_per_gesture) {
            return Err("moves must be between 1 and 10000".to_string());
        }
        if cli.width == 0 || cli.height == 0 {
            return Err("viewport must be non-empty".to_string());
        }
        let seed = cli.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
        Ok(Self {
            duration: Duration::from_secs_f64(cli.duration_seconds),
            moves_per_gesture: cli.moves_per_gesture,
            viewport: Viewport::new(cli.width, cli.height),
            seed: seed | 1,
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let stats = run_benchmark(&config);
    println!("{}", stats.final_report(&config));
    if stats.floor_violations > 0 {
        return Err(io::Error::other(format!(
            "{} geometries fell below the minimum size",
            stats.floor_violations
        )));
    }
    Ok(())
}

fn run_benchmark(config: &BenchConfig) -> BenchStats {
    let wm_config = WmConfig::default();
    let mut wm = WindowManager::new(wm_config.clone(), config.viewport);
    for app in SIDEBAR_APPS.iter() {
        wm.open_app(app.id);
    }
    wm.take_events();

    let mut rng = XorShift::new(config.seed);
    let mut stats = BenchStats::new();
    let span_x = config.viewport.width as i32;
    let span_y = config.viewport.height as i32;

    while stats.start.elapsed() < config.duration {
        let app = SIDEBAR_APPS[rng.below(SIDEBAR_APPS.len() as u64) as usize].id;
        let start = PointerEvent::new(rng.span(span_x), rng.span(span_y));
        if stats.gestures % 2 == 0 {
            wm.start_drag(start, app);
        } else {
            let edge = ResizeEdge::ALL[rng.below(ResizeEdge::ALL.len() as u64) as usize];
            wm.start_resize(start, app, edge);
        }
        for _ in 0..config.moves_per_gesture {
            let pointer = PointerEvent::new(rng.span(span_x), rng.span(span_y));
            wm.handle_pointer(PointerPhase::Move, pointer);
            stats.pointer_events += 1;
        }
        wm.handle_pointer(PointerPhase::Up, start);
        stats.pointer_events += 1;
        stats.gestures += 1;

        stats.window_events += wm.take_events().len() as u64;
        stats.floor_violations += wm
            .windows()
            .filter(|w| {
                let g = w.geometry();
                g.width < wm_config.min_width || g.height < wm_config.min_height
            })
            .count() as u64;
    }
    stats.completed_at = Some(Instant::now());
    stats
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    gestures: u64,
    pointer_events: u64,
    window_events: u64,
    floor_violations: u64,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            gestures: 0,
            pointer_events: 0,
            window_events: 0,
            floor_violations: 0,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let per_second = |count: u64| {
            if elapsed > 0.0 {
                count as f64 / elapsed
            } else {
                0.0
            }
        };

        indoc::formatdoc!(
            r#"
            Pointer bench finished.
            Duration: {elapsed:.2}s (target {target:.2}s) | seed {seed}
            Viewport: {width}x{height}
            Gestures: {gestures} | Pointer events: {pointer} (~{pointer_rate:.0}/s)
            Window events: {events} (~{event_rate:.0}/s)
            Floor violations: {violations}
            "#,
            elapsed = elapsed,
            target = config.duration.as_secs_f64(),
            seed = config.seed,
            width = config.viewport.width,
            height = config.viewport.height,
            gestures = self.gestures,
            pointer = self.pointer_events,
            pointer_rate = per_second(self.pointer_events),
            events = self.window_events,
            event_rate = per_second(self.window_events),
            violations = self.floor_violations,
        )
    }
}

struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound.max(1)
    }

    /// Coordinate in `-span/2 ..= span * 3/2` so gestures overshoot the
    /// viewport on every side.
    fn span(&mut self, span: i32) -> i32 {
        let range = (span as i64 * 2).max(1);
        (self.below(range as u64) as i64 - span as i64 / 2) as i32
    }
}
