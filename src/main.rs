use clap::Parser;
use std::path::PathBuf;

use localcast::config::{FileConfig, Overrides, ServeConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse and play a gPodder download archive over HTTP")]
struct Args {
    /// Path to config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// gPodder directory path (overrides config file)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Port to listen on (overrides config file, default 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind (overrides config file, default [::])
    #[arg(long)]
    bind: Option<String>,

    /// Database file (default: <path>/Database)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Open the database in SQLite immutable mode (read-only media only)
    #[arg(long)]
    immutable: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = ServeConfig::resolve(
        file_config,
        Overrides {
            archive_root: args.path,
            port: args.port,
            bind: args.bind,
            database: args.database,
            immutable: args.immutable,
        },
    )?;

    localcast::serve::run(config)
}
