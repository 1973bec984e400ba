use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Server logging: `RUST_LOG` wins, otherwise the crate logs at `default_level`.
pub fn init_server_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "career_agents={default_level},tower_http={default_level}"
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// CLI logging goes to stderr so reports on stdout stay clean.
pub fn init_cli_logging(verbose: bool) {
    let default = if verbose {
        "career_agents=debug,info"
    } else {
        "career_agents=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
