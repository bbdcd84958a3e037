mod cli;

use smilseq::{config, server};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn init_tracing(verbose: bool) {
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "smilseq=debug,smilseq_core=debug,tower_http=debug".to_string()
        } else {
            "smilseq=info,smilseq_core=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config, then start logging and report what was loaded.
fn load_config_with_tracing(custom_path: Option<&Path>, verbose: bool) -> Result<config::Config> {
    let path = config::resolve_config_path(custom_path);
    let config = match &path {
        Some(p) => config::load_config(p)?,
        None => config::Config::default(),
    };

    init_tracing(verbose || config.debug);

    match &path {
        Some(p) => tracing::debug!("Using config file {:?}", p),
        None => tracing::debug!("No config file found, using defaults"),
    }
    for warning in config.warnings() {
        tracing::warn!("Config warning: {warning}");
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = load_config_with_tracing(cli.config.as_deref(), cli.verbose)?;

            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(server::start_server(config))
        }
        Commands::Translate { file, base, pretty } => {
            let config = load_config_with_tracing(cli.config.as_deref(), cli.verbose)?;

            let base = base.unwrap_or(config.root_dir);
            translate_file(&file, &base, pretty)
        }
        Commands::Validate {
            config: config_path,
        } => {
            init_tracing(cli.verbose);
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("smilseq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn translate_file(file: &Path, base: &Path, pretty: bool) -> Result<()> {
    tracing::info!("Translating {:?} against {:?}", file, base);

    let result = smilseq_core::translate_file(file, base)
        .with_context(|| format!("Failed to translate {:?}", file))?;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            for warning in config.warnings() {
                println!("  Warning: {}", warning);
            }
            println!("  Server: {}:{}", config.host, config.port);
            println!("  Root directory: {}", config.root_dir.display());
            println!("  Debug: {}", config.debug);
            match config.request_timeout() {
                Some(limit) => println!("  Request timeout: {}s", limit.as_secs()),
                None => println!("  Request timeout: disabled"),
            }
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.host, config.port);
            println!("  Root directory: {}", config.root_dir.display());
        }
    }

    Ok(())
}
