//! Rayscene CLI - Command-line interface for scene generation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayscene_core::{Preset, SceneConfig, generate};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rayscene")]
#[command(about = "Procedural scene files for tag-based ray tracers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a scene file
    Generate {
        /// Built-in scene to generate
        #[arg(short, long, value_enum, default_value = "ice-cream")]
        preset: PresetArg,

        /// JSON scene description (overrides --preset)
        #[arg(short, long)]
        scene: Option<PathBuf>,

        /// Output file, or "-" for stdout
        #[arg(short, long, default_value = "generated.xml")]
        output: PathBuf,

        /// Seed for scattered layers (defaults to the system clock)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the built-in scenes
    Presets,

    /// Print a built-in scene as a JSON description
    Describe {
        /// Built-in scene to describe
        #[arg(short, long, value_enum)]
        preset: PresetArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Helix,
    IceCream,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Helix => Preset::Helix,
            PresetArg::IceCream => Preset::IceCream,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `-o -` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            preset,
            scene,
            output,
            seed,
        } => {
            run_generate(preset.into(), scene.as_deref(), &output, seed)?;
        }
        Commands::Presets => {
            for preset in Preset::ALL {
                println!("{:<10} {}", preset.name(), preset.description());
            }
        }
        Commands::Describe { preset } => {
            let config = Preset::from(preset).config();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn run_generate(
    preset: Preset,
    scene: Option<&Path>,
    output: &Path,
    seed: Option<u64>,
) -> Result<()> {
    let config = match scene {
        Some(path) => load_scene(path)?,
        None => {
            tracing::info!("Using preset '{}'", preset);
            preset.config()
        }
    };
    let seed = seed.unwrap_or_else(clock_seed);
    tracing::debug!("Scatter seed: {}", seed);

    let stats = if output.as_os_str() == "-" {
        generate(&config, BufWriter::new(io::stdout().lock()), seed)?
    } else {
        let file = File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let stats = generate(&config, BufWriter::new(file), seed)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        tracing::info!("Saved to: {}", output.display());
        stats
    };

    tracing::info!(
        "{} lights, {} shaders, {} surfaces",
        stats.lights,
        stats.shaders,
        stats.surfaces
    );
    Ok(())
}

fn load_scene(path: &Path) -> Result<SceneConfig> {
    tracing::info!("Loading scene description: {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid scene description {}", path.display()))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
