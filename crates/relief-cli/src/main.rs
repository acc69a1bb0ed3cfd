//! Relief CLI — terrain generation, particle runs, and inspection.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use relief_cli::commands::{self, ParticleArgs, TerrainArgs};

#[derive(Parser)]
#[command(name = "relief")]
#[command(version, about = "Relief — fault-line terrain and particle box simulation")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fault-line terrain.
    Terrain {
        /// Scene config (TOML); flags override its terrain section.
        #[arg(short, long)]
        config: Option<String>,

        /// Quads per axis.
        #[arg(short, long)]
        resolution: Option<u32>,

        /// Number of fault passes.
        #[arg(short, long)]
        iterations: Option<u32>,

        /// Random seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write the mesh as a JSON scene.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run the particle box simulation on a synthetic clock.
    Particles {
        /// Scene config (TOML); flags override its particles section.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of particles.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: u64,

        /// Host milliseconds between frames.
        #[arg(long, default_value_t = 1000.0 / 60.0)]
        frame_ms: f64,

        /// Random seed.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Advance to the exact contact time on wall hits instead of rejecting the step.
        #[arg(long)]
        time_of_impact: bool,

        /// Write per-frame spheres as a JSON scene.
        #[arg(short, long)]
        output: Option<String>,

        /// Write the final particle state as a binary snapshot.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Load an OBJ mesh and print its statistics.
    Mesh {
        /// Path to the OBJ file.
        path: String,

        /// Write the mesh as a JSON scene.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a particle snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a scene config (TOML).
    Validate {
        /// Path to config file.
        path: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Terrain {
            config,
            resolution,
            iterations,
            seed,
            output,
        } => commands::terrain(&TerrainArgs {
            config,
            resolution,
            iterations,
            seed,
            output,
        }),
        Commands::Particles {
            config,
            count,
            frames,
            frame_ms,
            seed,
            time_of_impact,
            output,
            snapshot,
        } => commands::particles(&ParticleArgs {
            config,
            count,
            frames,
            frame_ms,
            seed,
            time_of_impact,
            output,
            snapshot,
        }),
        Commands::Mesh { path, output } => commands::mesh(&path, output.as_deref()),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
