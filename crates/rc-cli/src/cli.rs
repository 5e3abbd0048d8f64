use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "redditclone",
    about = "redditclone — posts, comments, and votes over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ServeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on (overrides the file)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Token signing secret (overrides the file)
    #[arg(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,
    /// Token lifetime in hours (overrides the file)
    #[arg(long)]
    pub token_ttl_hours: Option<u64>,
}
