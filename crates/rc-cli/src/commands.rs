use anyhow::Context;

use rc_server::{RedditServer, ServerConfig};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Config(args) => {
            let config = resolve_config(&args)?;
            print!("{}", toml::to_string(&config).context("rendering configuration")?);
            Ok(())
        }
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let server = RedditServer::new(config).context("invalid server configuration")?;
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    runtime.block_on(server.serve())?;
    Ok(())
}

/// File settings first, then command-line and environment overrides.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(secret) = &args.jwt_secret {
        config.jwt_secret = Some(secret.clone());
    }
    if let Some(hours) = args.token_ttl_hours {
        config.token_ttl_hours = hours;
    }
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}
