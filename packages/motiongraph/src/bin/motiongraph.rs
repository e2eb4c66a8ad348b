//! Motion Graph CLI
//!
//! Build a scene graph from an annotation file and query it. Every command
//! prints JSON (or YAML for `config`) to stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Node-link export of the whole graph
//! cargo run --bin motiongraph -- build --annotation scene.json
//!
//! # Trajectory of one object with the tolerant preset
//! cargo run --bin motiongraph -- trajectory --annotation scene.json --object 3 --preset tolerant
//!
//! # Collisions between two objects
//! RUST_LOG=motiongraph=debug cargo run --bin motiongraph -- collisions --annotation scene.json --pair 1 4
//! ```

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use motiongraph::features::graph_search::SceneSearchTool;
use motiongraph::{Annotation, GraphBuildConfig, ObjectId, Preset};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "motiongraph")]
#[command(about = "Spatio-temporal scene graphs from per-frame object annotations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SceneArgs {
    /// Annotation JSON file
    #[arg(short, long)]
    annotation: PathBuf,

    /// Build configuration (YAML, schema v1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preset to start from (ignored when --config is given)
    #[arg(short, long, default_value = "strict")]
    preset: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph and print its node-link export
    Build {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Build the graph and print node/edge counts
    Stats {
        #[command(flatten)]
        scene: SceneArgs,
    },

    /// Trajectory of one object
    Trajectory {
        #[command(flatten)]
        scene: SceneArgs,

        /// Object id
        #[arg(short, long)]
        object: ObjectId,
    },

    /// Collisions between two objects
    Collisions {
        #[command(flatten)]
        scene: SceneArgs,

        /// The two object ids, in any order
        #[arg(long, num_args = 2, value_names = ["A", "B"])]
        pair: Vec<ObjectId>,
    },

    /// Print a preset as YAML
    Config {
        #[arg(short, long, default_value = "strict")]
        preset: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { scene } => {
            let tool = load_scene(&scene)?;
            print_json(&tool.graph().export())?;
        }
        Commands::Stats { scene } => {
            let tool = load_scene(&scene)?;
            print_json(&tool.graph().stats())?;
        }
        Commands::Trajectory { scene, object } => {
            let tool = load_scene(&scene)?;
            println!("{}", tool.search_object_trajectory_json(object));
        }
        Commands::Collisions { scene, pair } => {
            let (a, b) = match pair.as_slice() {
                [a, b] => (*a, *b),
                _ => return Err(anyhow!("--pair takes exactly two object ids")),
            };
            let tool = load_scene(&scene)?;
            println!("{}", tool.search_collision_between_json(a, b));
        }
        Commands::Config { preset } => {
            let config = GraphBuildConfig::preset(parse_preset(&preset)?);
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}

fn parse_preset(name: &str) -> anyhow::Result<Preset> {
    Preset::from_str(name).map_err(|e| anyhow!(e))
}

fn load_config(scene: &SceneArgs) -> anyhow::Result<GraphBuildConfig> {
    match &scene.config {
        Some(path) => {
            let path = path
                .to_str()
                .ok_or_else(|| anyhow!("config path is not valid UTF-8: {:?}", path))?;
            Ok(GraphBuildConfig::from_yaml(path)?)
        }
        None => Ok(GraphBuildConfig::preset(parse_preset(&scene.preset)?)),
    }
}

fn load_scene(scene: &SceneArgs) -> anyhow::Result<SceneSearchTool> {
    let config = load_config(scene)?;
    info!(config = %config.describe(), "building scene graph");

    let annotation = Annotation::from_path(&scene.annotation)
        .with_context(|| format!("failed to load annotation {:?}", scene.annotation))?;
    let tool = SceneSearchTool::new(annotation, config)?;
    Ok(tool)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
