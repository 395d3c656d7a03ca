use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "mosaic-quality", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every pixel of one RGBA scene and report the result.
    Score(ScoreArgs),
    /// List registered quality methods.
    Methods,
}

#[derive(Parser, Debug)]
struct ScoreArgs {
    /// Input RGBA raster (PNG or TIFF). Alpha < 128 marks pixels as absent.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scene metadata JSON: `{"filename": ..., "quality_measures": {name: value}}`.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Strategy parameters JSON: a flat object of string values.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Strategy parameter, e.g. `-s scene_measure cloud_frac`. `quality` selects the method.
    #[arg(
        short = 's',
        long = "strategy",
        num_args = 2,
        value_names = ["KEY", "VALUE"],
        action = ArgAction::Append
    )]
    strategy: Vec<String>,

    /// Scene quality measure, e.g. `--qm cloud_frac 20`.
    #[arg(long = "qm", num_args = 2, value_names = ["NAME", "VALUE"], action = ArgAction::Append)]
    qm: Vec<String>,

    /// Optional 8-bit PNG visualisation of the scores.
    #[arg(long)]
    out: Option<PathBuf>,
}

const METHOD_KEY: &str = "quality";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let registry = mosaic_quality::QualityRegistry::with_builtins();
    match cli.cmd {
        Command::Score(args) => cmd_score(&registry, args),
        Command::Methods => {
            for name in registry.names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn read_params(args: &ScoreArgs) -> anyhow::Result<mosaic_quality::StrategyParams> {
    let mut params = match &args.params {
        Some(path) => {
            let s = read_text(path)?;
            mosaic_quality::StrategyParams::from_json_str(&s)
                .with_context(|| format!("parse strategy params '{}'", path.display()))?
        }
        None => mosaic_quality::StrategyParams::new(),
    };
    for kv in args.strategy.chunks_exact(2) {
        params.set(kv[0].as_str(), kv[1].as_str());
    }
    Ok(params)
}

fn read_scene(args: &ScoreArgs) -> anyhow::Result<mosaic_quality::Scene> {
    let mut scene = match &args.scene {
        Some(path) => {
            let s = read_text(path)?;
            mosaic_quality::Scene::from_json_str(&s)
                .with_context(|| format!("parse scene metadata '{}'", path.display()))?
        }
        None => mosaic_quality::Scene::new(args.in_path.display().to_string()),
    };
    for nv in args.qm.chunks_exact(2) {
        let value: f64 = nv[1].parse().with_context(|| {
            format!("quality measure '{}' is not a number: '{}'", nv[0], nv[1])
        })?;
        scene.set_measure(nv[0].as_str(), value);
    }
    Ok(scene)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn cmd_score(registry: &mosaic_quality::QualityRegistry, args: ScoreArgs) -> anyhow::Result<()> {
    let params = read_params(&args)?;
    let scene = read_scene(&args)?;
    let method_name = params
        .fetch_name_value_def(METHOD_KEY, mosaic_quality::SceneMeasureQuality::NAME)
        .to_string();

    let image = image::open(&args.in_path)
        .with_context(|| format!("open raster '{}'", args.in_path.display()))?
        .to_rgba8();

    let ctx = mosaic_quality::QualityContext::new(params);
    let method = registry.create(&method_name, &ctx, &scene)?;
    let map = mosaic_quality::score_rgba(method.as_ref(), &image)?;

    println!("method: {}", method.name());
    println!("scene: {}", scene.filename);
    println!("valid pixels: {}/{}", map.valid_count(), map.values.len());
    if let Some(first) = map.values.iter().find(|&&q| q != mosaic_quality::INVALID_QUALITY) {
        println!("score: {first}");
    }

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        mosaic_quality::quality_to_luma(&map)
            .save_with_format(out, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}
