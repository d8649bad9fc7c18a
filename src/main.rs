use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use slug_shortener::config::Config;
use slug_shortener::server;

/// URL shortener server.
///
/// Every flag overrides the matching environment variable.
#[derive(Parser)]
#[command(name = "slug-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Public name of the service, including protocol and optionally port [env: SERVER_NAME]
    #[arg(long)]
    server_name: Option<String>,

    /// Secret required to create new short links [env: SECRET]
    #[arg(long)]
    secret: Option<String>,

    /// Number of characters in generated slugs, using a-zA-Z0-9 [env: SLUG_LENGTH]
    #[arg(long = "space", value_name = "LENGTH")]
    slug_length: Option<usize>,

    /// Host to listen on [env: HOST]
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on [env: PORT]
    #[arg(long)]
    port: Option<u16>,

    /// File storing all short links; read at startup, rewritten on every new link [env: STORAGE_FILE]
    #[arg(long)]
    storage_file: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(server_name) = self.server_name {
            config.server_name = server_name;
        }
        if let Some(secret) = self.secret {
            config.secret = secret;
        }
        if let Some(slug_length) = self.slug_length {
            config.slug_length = slug_length;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(storage_file) = self.storage_file {
            config.storage_file = storage_file;
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    init_tracing(&config);

    config.validate()?;
    config.print_summary();

    server::run(config).await
}
