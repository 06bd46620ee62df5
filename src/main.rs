use clap::Parser;
use std::path::PathBuf;

use dsa_sheet::api::DEFAULT_API_URL;
use dsa_sheet::session::SessionStore;

#[derive(Parser)]
#[command(name = "dsa-sheet")]
#[command(about = "Portfolio landing page and DSA practice sheet client")]
struct Cli {
    /// Base URL of the sheet backend
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory for the persisted session (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let data_dir = args.data_dir.unwrap_or_else(SessionStore::default_dir);
    log::debug!("backend {} / session store {}", args.api_url, data_dir.display());

    run(args.api_url, data_dir)
}

#[cfg(feature = "gui")]
fn run(api_url: String, data_dir: PathBuf) -> anyhow::Result<()> {
    dsa_sheet::gui::run(dsa_sheet::gui::AppConfig { api_url, data_dir })?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn run(_api_url: String, _data_dir: PathBuf) -> anyhow::Result<()> {
    anyhow::bail!("this binary was built without the gui feature")
}
