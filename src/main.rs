#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use goban::{init_logging, run_interactive, run_replay, GridConfig, Palette};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place stones interactively, one point per line.
    Play {
        #[arg(long, value_delimiter = ',', help = "Marker styles to cycle through (e.g., --palette black-stone,white-stone)")]
        palette: Vec<String>,
    },
    /// Apply a list of points and print the resulting board.
    Replay {
        #[arg(long, value_delimiter = ',', help = "Marker styles to cycle through (e.g., --palette black-stone,white-stone)")]
        palette: Vec<String>,
        /// Points to activate, in order (e.g., D4 Q16 K10).
        moves: Vec<String>,
    },
}

#[cfg(feature = "std")]
fn palette_from(styles: Vec<String>) -> anyhow::Result<Palette> {
    if styles.is_empty() {
        Ok(Palette::default())
    } else {
        Ok(Palette::new(styles)?)
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GridConfig::default();

    let summary = match cli.command {
        Commands::Play { palette } => run_interactive(config, palette_from(palette)?).await?,
        Commands::Replay { palette, moves } => {
            run_replay(config, palette_from(palette)?, &moves).await?
        }
    };
    println!(
        "{} stones placed, {} activations dropped",
        summary.placed, summary.dropped
    );
    Ok(())
}
