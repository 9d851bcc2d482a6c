use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use vantage_core::{DatasetLayout, VantageConfig};
use vantage_label::{label_scenes, FsMaskSource, LabelComposer};
use vantage_sweep::{CommandHost, ManifestObject, OrbitSweep, SceneHost, SceneManifest, SweepRunner};

#[derive(Parser)]
#[command(
    name = "vantage",
    version,
    about = "Vantage — synthetic anomaly-dataset generation",
    long_about = "Vantage drives an external 3D scene renderer through a camera sweep with\nrandomized object perturbations, then composites the per-object masks into\n8-bit anomaly label maps."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the camera sweep for one scene, harvesting depth and mask frames
    Sweep {
        /// Scene ID to generate (names the numbered scene directory)
        #[arg(long, default_value_t = 0)]
        scene: u32,

        /// Path to the config file
        #[arg(short, long, default_value = "vantage.toml")]
        config: PathBuf,

        /// Delete the dataset tree and start from empty staging directories
        #[arg(long)]
        reset: bool,
    },

    /// Composite per-object masks into anomaly label maps
    Label {
        /// First scene to label (inclusive)
        #[arg(long, default_value_t = 0)]
        start: u32,

        /// Last scene to label (exclusive)
        #[arg(long, default_value_t = 1)]
        end: u32,

        /// Path to the config file
        #[arg(short, long, default_value = "vantage.toml")]
        config: PathBuf,
    },

    /// Scaffold a vantage.toml config and a scene manifest stub
    Init,

    /// Display version and configuration info
    Info {
        /// Path to the config file
        #[arg(short, long, default_value = "vantage.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Sweep {
            scene,
            config,
            reset,
        } => cmd_sweep(config, scene, reset),
        Commands::Label { start, end, config } => cmd_label(config, start, end),
        Commands::Init => cmd_init(),
        Commands::Info { config } => cmd_info(config),
    }
}

fn load_config(path: &PathBuf) -> Result<VantageConfig> {
    VantageConfig::load_from_file(path)
        .with_context(|| format!("failed to load config from {}", path.display()))
}

fn cmd_sweep(config_path: PathBuf, scene: u32, reset: bool) -> Result<()> {
    let config = load_config(&config_path)?;

    let mut runner = SweepRunner::new(&config);
    let mut host = CommandHost::new(&config.host, runner.layout())
        .with_context(|| "failed to set up the renderer host")?;

    if !host.is_available() {
        anyhow::bail!(
            "renderer command '{}' is not available; check [host] in {}",
            config.host.command,
            config_path.display()
        );
    }
    tracing::info!("using renderer command '{}'", config.host.command);

    if reset {
        let objects = host.object_names();
        runner.layout().reset(&objects)?;
    }

    let report = runner.run(&mut host, scene)?;

    println!(
        "Scene {}: rendered {} frames ({} perturbations, {} missing outputs)",
        scene, report.frames, report.anomalies_applied, report.missing_outputs
    );
    Ok(())
}

fn cmd_label(config_path: PathBuf, start: u32, end: u32) -> Result<()> {
    if end <= start {
        anyhow::bail!("scene range is empty: start {} end {}", start, end);
    }
    let config = load_config(&config_path)?;

    let layout =
        DatasetLayout::new(&config.dataset.data_dir).with_label_dir(&config.label.dir_name);
    let composer = LabelComposer::new(&config.objects, &config.label);
    let source = FsMaskSource::new(layout.clone());

    let frames = label_scenes(&layout, &composer, &source, start, end)?;

    println!("Labeled {} frames across scenes {}..{}", frames, start, end);
    Ok(())
}

fn cmd_init() -> Result<()> {
    let config_path = PathBuf::from("vantage.toml");
    if config_path.exists() {
        anyhow::bail!("vantage.toml already exists");
    }

    let config = VantageConfig::default();
    config
        .save_to_file(&config_path)
        .with_context(|| "failed to write vantage.toml")?;

    if !config.host.manifest.exists() {
        let manifest = SceneManifest {
            objects: config
                .objects
                .iter()
                .map(|o| ManifestObject {
                    name: o.name.clone(),
                    pose: Default::default(),
                })
                .collect(),
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        std::fs::write(&config.host.manifest, json)
            .with_context(|| format!("failed to write {}", config.host.manifest.display()))?;
    }

    println!("Created vantage.toml and {}", config.host.manifest.display());
    println!("Next steps:");
    println!("  1. Point [host] at your renderer command");
    println!("  2. vantage sweep --scene 0");
    println!("  3. vantage label --start 0 --end 1");
    Ok(())
}

fn cmd_info(config_path: PathBuf) -> Result<()> {
    println!("Vantage dataset toolkit");
    println!("   Version:  {}", env!("CARGO_PKG_VERSION"));

    if config_path.exists() {
        let config = load_config(&config_path)?;
        let views = OrbitSweep::new(&config.sweep).view_count();
        println!("   Config:   {}", config_path.display());
        println!("   Dataset:  {}", config.dataset.data_dir.display());
        println!("   Objects:  {}", config.objects.len());
        println!("   Views:    {} per scene", views);
        println!(
            "   Labels:   {}x{} u8, threshold {}",
            config.label.width, config.label.height, config.label.threshold
        );
    } else {
        println!("   Config:   {} (not found; run `vantage init`)", config_path.display());
    }
    Ok(())
}
