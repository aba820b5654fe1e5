use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use neumorph::{
    Color, ElementOverrides, InteractionState, PaintLog, Presets, Stage, StyleTree, SurfacePaint,
};

#[derive(Parser, Debug)]
#[command(name = "neumorph", version, about = "Pressure-sensitive emboss styling")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an element's resting paint as CSS.
    Paint(PaintArgs),
    /// Run one interaction transition headlessly and print every frame.
    Animate(AnimateArgs),
    /// Print a pigment-mixing ramp between two colors.
    Mix(MixArgs),
}

#[derive(Parser, Debug)]
struct PaintArgs {
    /// Input style tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Element id inside the style tree.
    #[arg(long)]
    node: String,

    /// Print JSON instead of CSS.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Input style tree JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Element id inside the style tree.
    #[arg(long)]
    node: String,

    /// Interaction state to transition into.
    #[arg(long, value_enum, default_value_t = StateChoice::Base)]
    state: StateChoice,

    /// Presets JSON; built-in presets when omitted.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Stop after this many frames even if the transition is unfinished.
    #[arg(long, default_value_t = 10_000)]
    max_frames: usize,

    /// Print one JSON object per frame instead of CSS.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct MixArgs {
    /// Start color (`#rgb` or `#rrggbb`).
    #[arg(long)]
    from: String,

    /// End color (`#rgb` or `#rrggbb`).
    #[arg(long)]
    to: String,

    /// Number of intervals in the ramp.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StateChoice {
    Base,
    Hover,
    Active,
}

impl From<StateChoice> for InteractionState {
    fn from(choice: StateChoice) -> Self {
        match choice {
            StateChoice::Base => Self::Base,
            StateChoice::Hover => Self::Hover,
            StateChoice::Active => Self::Active,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Paint(args) => cmd_paint(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Mix(args) => cmd_mix(args),
    }
}

fn load_tree(path: &std::path::Path) -> anyhow::Result<StyleTree> {
    StyleTree::from_path(path).with_context(|| format!("load style tree '{}'", path.display()))
}

fn cmd_paint(args: PaintArgs) -> anyhow::Result<()> {
    let tree = load_tree(&args.in_path)?;
    let node = tree
        .node(&args.node)
        .with_context(|| format!("node '{}' not found", args.node))?;

    let params = neumorph::resolve_defaults(&tree, node, &ElementOverrides::default())
        .with_context(|| format!("resolve node '{}'", args.node))?;
    let paint = neumorph::render(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&paint)?);
    } else {
        print_css(&paint);
    }
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be a positive number");
    }

    let tree = load_tree(&args.in_path)?;
    let node = tree
        .node(&args.node)
        .with_context(|| format!("node '{}' not found", args.node))?;
    let presets = match &args.presets {
        Some(path) => {
            Presets::from_path(path).with_context(|| format!("load presets '{}'", path.display()))?
        }
        None => Presets::default(),
    };

    let interval = 1000.0 / args.fps;
    let mut stage = Stage::new();
    let key = stage
        .insert(&tree, node, &ElementOverrides::default(), PaintLog::new())
        .with_context(|| format!("resolve node '{}'", args.node))?;

    // Settle the initial snap frame before the transition starts.
    let settle = stage.run_until_idle(0.0, interval, args.max_frames);
    stage.animate(key, presets.for_state(args.state.into()));
    let ticks = stage.run_until_idle(settle as f64 * interval, interval, args.max_frames);
    if !stage.is_idle() {
        tracing::warn!(ticks, "transition did not finish within --max-frames");
    }

    let element = stage
        .element(key)
        .context("element missing from stage")?;
    for (i, paint) in element.surface().frames().iter().enumerate().skip(settle) {
        if args.json {
            println!("{}", serde_json::to_string(paint)?);
        } else {
            println!("frame {}:", i - settle);
            print_css(paint);
        }
    }
    Ok(())
}

fn cmd_mix(args: MixArgs) -> anyhow::Result<()> {
    let from =
        Color::from_hex(&args.from).with_context(|| format!("parse --from '{}'", args.from))?;
    let to = Color::from_hex(&args.to).with_context(|| format!("parse --to '{}'", args.to))?;
    let steps = args.steps.max(1);

    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        println!("{t:.3} {}", from.blend(to, t));
    }
    Ok(())
}

fn print_css(paint: &SurfacePaint) {
    for (property, value) in paint.css_declarations() {
        println!("{property}: {value};");
    }
}
