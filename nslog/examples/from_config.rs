//! Configure nslog from a YAML file instead of `DEBUG`:
//!
//! ```sh
//! cargo run --example from_config -- nslog.yaml
//! ```
//!
//! Without an argument a built-in configuration enabling `db` and `net:*`
//! is used.

use anyhow::Result;
use nslog::prelude::*;

const DEFAULT_CONFIG: &str = r#"
patterns:
  - db
  - "net:*"
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ConfigLoader::from_yaml_file(path)?,
        None => ConfigLoader::from_yaml_str(DEFAULT_CONFIG)?,
    };
    nslog::try_init_from_config(&config)?;

    let db = create_logger_to("db", std::io::stdout());
    let http = create_logger_to("net:http", std::io::stdout());
    let cache = create_logger_to("cache", std::io::stdout());

    nslog!(db, "connected to {}", "postgres://localhost/app")?;
    nslog!(http, "GET {} -> {}", "/health", 200)?;
    nslog!(cache, "warmed {} keys", 1024)?;

    println!("<end>");
    Ok(())
}
