use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use briefly::{BriefStore, TaglineClient, TaglineConfig};

#[derive(Parser)]
#[command(name = "briefly")]
#[command(about = "Submit project briefs and get AI-generated taglines")]
struct Cli {
    /// Path to the brief data file
    #[arg(long, value_name = "FILE", default_value = "briefs.json")]
    data_file: PathBuf,

    /// Directory holding uploaded attachment files
    #[arg(long, value_name = "DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose {
        "briefly=debug"
    } else {
        "briefly=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // HF_TOKEN must be present; refuse to start without the generator.
    let config = TaglineConfig::from_env()?;
    let tagline = TaglineClient::new(config)?;
    let store = BriefStore::open(&args.data_file, &args.upload_dir)?;

    tracing::info!(
        data_file = ?store.data_file(),
        upload_dir = ?store.upload_dir(),
        "starting briefly"
    );

    #[cfg(feature = "gui")]
    {
        briefly::gui::run(store, tagline)
            .map_err(|err| anyhow::anyhow!("Failed to run the briefly window: {err}"))?;
        Ok(())
    }

    #[cfg(not(feature = "gui"))]
    {
        let _ = (store, tagline);
        anyhow::bail!("briefly was built without the `gui` feature")
    }
}
