mod font;
mod generate;
mod palette;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "jin-icons", about = "Generate PWA icon assets for Project JIN")]
struct Cli {
    /// Output directory for the generated PNG files
    #[arg(long, default_value = "client/public/icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("jin_icons=debug".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Generating icons into {}", cli.output.display());

    generate::generate_all(&cli.output)
}
