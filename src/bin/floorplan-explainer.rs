use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use floorplan_explainer::{
    Advance, COLOR_LEGEND, DisplayHint, FrameRequest, FrameSource, ManualFrameSource, Player,
    Revision, RevisionConfig, STAGES, SceneFrame, SceneResolver, framing_connector_width,
    time_readout,
};

#[derive(Parser, Debug)]
#[command(name = "floorplan-explainer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved scene frame at one timeline position as JSON.
    Resolve(ResolveArgs),
    /// Print the boundary table of a revision.
    Table(TableArgs),
    /// Simulate playback and print every scene transition.
    Play(PlayArgs),
    /// Print the color legend and stage descriptors as JSON.
    Legend,
}

#[derive(Args, Debug)]
struct RevisionArgs {
    /// Built-in revision to use.
    #[arg(long, value_enum, default_value_t = RevisionChoice::Canonical)]
    revision: RevisionChoice,

    /// Revision config JSON; overrides `--revision`.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TableArgs {
    #[command(flatten)]
    revision: RevisionArgs,

    /// Print the full revision config as JSON instead of the table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    #[command(flatten)]
    revision: RevisionArgs,

    /// Timeline position in seconds (clamped to the revision's range).
    #[arg(long = "t", allow_hyphen_values = true)]
    t: f64,

    /// Report layout hints for a compact display.
    #[arg(long)]
    compact: bool,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    revision: RevisionArgs,

    /// Start position; defaults to the revision's initial position.
    #[arg(long)]
    from: Option<f64>,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 24)]
    fps: u32,

    /// Sleep between frames instead of simulating time.
    #[arg(long)]
    realtime: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RevisionChoice {
    Initial,
    Extended,
    Canonical,
}

impl From<RevisionChoice> for Revision {
    fn from(choice: RevisionChoice) -> Self {
        match choice {
            RevisionChoice::Initial => Revision::Initial,
            RevisionChoice::Extended => Revision::Extended,
            RevisionChoice::Canonical => Revision::Canonical,
        }
    }
}

/// Wall-clock frame source: frames are delivered by sleeping one refresh interval.
struct SleepFrameSource {
    origin: Instant,
    next_id: u64,
}

impl SleepFrameSource {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
            next_id: 0,
        }
    }
}

impl FrameSource for SleepFrameSource {
    fn now_secs(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn request_frame(&mut self) -> FrameRequest {
        let req = FrameRequest(self.next_id);
        self.next_id += 1;
        req
    }

    fn cancel_frame(&mut self, req: FrameRequest) {
        tracing::trace!(?req, "frame cancelled");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Table(args) => cmd_table(args),
        Command::Play(args) => cmd_play(args),
        Command::Legend => cmd_legend(),
    }
}

fn load_resolver(args: &RevisionArgs) -> anyhow::Result<SceneResolver> {
    let config = match &args.config {
        Some(path) => RevisionConfig::from_path(path)
            .with_context(|| format!("load revision config '{}'", path.display()))?,
        None => Revision::from(args.revision).config()?,
    };
    Ok(SceneResolver::new(config)?)
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let resolver = load_resolver(&args.revision)?;
    let frame = resolver.resolve(args.t);
    let hint = DisplayHint {
        compact: args.compact,
    };

    let out = serde_json::json!({
        "revision": resolver.config().name,
        "label": frame.counter_label(),
        "title": frame.scene.title(),
        "frame": frame,
        "layout": {
            "compact": hint.compact,
            "framing_connector_width": framing_connector_width(hint),
        },
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("serialize scene frame")?
    );
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let resolver = load_resolver(&args.revision)?;
    if args.json {
        println!("{}", resolver.config().to_json_pretty()?);
        return Ok(());
    }
    let table = resolver.boundaries();
    println!(
        "{} ({} scenes, {:.1}s at {}x)",
        resolver.config().name,
        table.len(),
        table.t_max(),
        resolver.config().speed
    );
    for (i, b) in table.entries().iter().enumerate() {
        println!(
            "  {:>6.1}s - {:>6.1}s  Scene {:>2} / {}  {}",
            b.at,
            table.end_of_index(i),
            i + 1,
            table.len(),
            b.scene.title()
        );
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    let resolver = load_resolver(&args.revision)?;
    let interval = 1.0 / f64::from(args.fps);

    if args.realtime {
        let mut player = Player::new(resolver, SleepFrameSource::new())?;
        run_playback(&mut player, args.from, |player| {
            std::thread::sleep(Duration::from_secs_f64(interval));
            player.source().now_secs()
        })
    } else {
        let mut player = Player::new(resolver, ManualFrameSource::new())?;
        run_playback(&mut player, args.from, |player| {
            let pending = player.pending();
            let source = player.source_mut();
            let now = source.advance_by(interval);
            // The display loop fires the oldest request; the player keeps only one.
            let fired = source.take_next();
            debug_assert_eq!(fired, pending);
            now
        })
    }
}

fn run_playback<S: FrameSource>(
    player: &mut Player<S>,
    from: Option<f64>,
    mut wait_for_frame: impl FnMut(&mut Player<S>) -> f64,
) -> anyhow::Result<()> {
    if let Some(t) = from {
        player.seek(t);
    }
    player.play();

    let mut current = player.frame();
    print_transition(&current, player.clock().t_max());
    let mut frames = 0u64;

    while let Some(req) = player.pending() {
        let stamp = wait_for_frame(player);
        let outcome = player.on_frame(req, stamp);
        frames += 1;

        let frame = player.frame();
        if frame.scene != current.scene {
            print_transition(&frame, player.clock().t_max());
        }
        current = frame;

        if outcome == Advance::Finished {
            break;
        }
    }

    eprintln!("played {frames} frames, stopped at {:.1}s", player.clock().t());
    Ok(())
}

fn print_transition(frame: &SceneFrame, t_max: f64) {
    let (elapsed, total) = time_readout(frame.t, t_max);
    println!(
        "{elapsed:>4} / {total}  {}  {}",
        frame.counter_label(),
        frame.scene.title()
    );
}

fn cmd_legend() -> anyhow::Result<()> {
    let out = serde_json::json!({
        "colors": COLOR_LEGEND,
        "stages": STAGES,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("serialize legend")?
    );
    Ok(())
}
