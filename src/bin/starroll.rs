use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use starroll::choreography::Choreography;
use starroll::config::Settings;
use starroll::motion::{Family, RateFunc};
use starroll::path::SampleParams;
use starroll::rolling::{RollKind, RollingBody, RollingState};

#[derive(Parser, Debug)]
#[command(name = "starroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the full choreography as JSON.
    Plan(ConfigArg),
    /// Print the sampled star path as JSON.
    Path(PathArgs),
    /// Print one family's posed polygons at a travel progress.
    Frame(FrameArgs),
    /// Print the rolling body after running a rolling phase up to a time.
    Roll(RollArgs),
}

#[derive(Parser, Debug)]
struct ConfigArg {
    /// Settings file (INI).
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct PathArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Number of segments; defaults to a count derived from the star.
    #[arg(long)]
    samples: Option<usize>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Family to pose.
    #[arg(long, value_enum)]
    family: FamilyChoice,

    /// Travel progress in [0, 1].
    #[arg(long)]
    alpha: f64,

    /// Rate function applied to `alpha`.
    #[arg(long, value_enum, default_value_t = EaseChoice::Linear)]
    ease: EaseChoice,
}

#[derive(Parser, Debug)]
struct RollArgs {
    #[command(flatten)]
    config: ConfigArg,

    /// Rolling phase to run.
    #[arg(long, value_enum)]
    phase: PhaseChoice,

    /// Seconds into the phase.
    #[arg(long)]
    time: f64,

    /// Ticks per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FamilyChoice {
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    Smooth,
    InQuad,
    OutQuad,
    InOutQuad,
    InOutCubic,
    ThereAndBack,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PhaseChoice {
    StarPath,
    Green,
    GreenUnrolling,
    Blue,
}

impl From<FamilyChoice> for Family {
    fn from(choice: FamilyChoice) -> Self {
        match choice {
            FamilyChoice::Green => Family::Forward,
            FamilyChoice::Blue => Family::Reverse,
        }
    }
}

impl From<EaseChoice> for RateFunc {
    fn from(choice: EaseChoice) -> Self {
        match choice {
            EaseChoice::Linear => RateFunc::Linear,
            EaseChoice::Smooth => RateFunc::Smooth,
            EaseChoice::InQuad => RateFunc::InQuad,
            EaseChoice::OutQuad => RateFunc::OutQuad,
            EaseChoice::InOutQuad => RateFunc::InOutQuad,
            EaseChoice::InOutCubic => RateFunc::InOutCubic,
            EaseChoice::ThereAndBack => RateFunc::ThereAndBack,
        }
    }
}

impl From<PhaseChoice> for RollKind {
    fn from(choice: PhaseChoice) -> Self {
        match choice {
            PhaseChoice::StarPath => RollKind::StarPath,
            PhaseChoice::Green => RollKind::GreenRolling,
            PhaseChoice::GreenUnrolling => RollKind::GreenUnrolling,
            PhaseChoice::Blue => RollKind::BlueRolling,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Default: WARN for everything, INFO for starroll.
    // Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("starroll=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(&args),
        Command::Path(args) => cmd_path(&args),
        Command::Frame(args) => cmd_frame(&args),
        Command::Roll(args) => cmd_roll(&args),
    }
}

fn load(path: &Path) -> anyhow::Result<Choreography> {
    let settings = Settings::from_path(path)
        .with_context(|| format!("load settings '{}'", path.display()))?;
    Choreography::build(&settings).with_context(|| "build choreography")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).with_context(|| "serialize output")?;
    println!("{out}");
    Ok(())
}

fn cmd_plan(args: &ConfigArg) -> anyhow::Result<()> {
    let choreo = load(&args.config)?;
    print_json(&choreo)
}

fn cmd_path(args: &PathArgs) -> anyhow::Result<()> {
    let choreo = load(&args.config.config)?;
    let params = args.samples.map_or_else(SampleParams::default, SampleParams::fixed);
    print_json(&choreo.path().sample(&params))
}

fn cmd_frame(args: &FrameArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.alpha) {
        anyhow::bail!("alpha must be in [0, 1], got {}", args.alpha);
    }
    let choreo = load(&args.config.config)?;
    let groups = choreo
        .pose_family(args.family.into(), args.alpha, args.ease.into())
        .with_context(|| "pose family")?;
    print_json(&groups)
}

#[derive(Serialize)]
struct RollReport<'a> {
    phase: RollKind,
    time: f64,
    state: &'a RollingState,
    body: &'a RollingBody,
}

fn cmd_roll(args: &RollArgs) -> anyhow::Result<()> {
    if !args.time.is_finite() || args.time < 0.0 {
        anyhow::bail!("time must be a non-negative number of seconds, got {}", args.time);
    }
    if !args.fps.is_finite() || args.fps <= 0.0 {
        anyhow::bail!("fps must be positive, got {}", args.fps);
    }
    let choreo = load(&args.config.config)?;
    let mut body = choreo.rolling_body();
    let mut phase = choreo.rolling_phase(args.phase.into());
    phase
        .run(&mut body, args.time, 1.0 / args.fps)
        .with_context(|| format!("run {:?} phase", phase.kind()))?;
    print_json(&RollReport {
        phase: phase.kind(),
        time: args.time,
        state: phase.state(),
        body: &body,
    })
}
