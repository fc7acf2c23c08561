//! Run with different `DEBUG` values to see which namespaces print:
//!
//! ```sh
//! cargo run --example namespaces
//! DEBUG=* cargo run --example namespaces
//! DEBUG=foo cargo run --example namespaces
//! DEBUG=foo:* cargo run --example namespaces
//! ```
//!
//! nslog's own diagnostics go through `tracing`; set `RUST_LOG=nslog=debug`
//! to see how the patterns were read.

use nslog::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let log = create_logger("package");
    let foolog = create_logger("foo");
    let barlog = create_logger("bar");
    let foobarlog = create_logger("foo:bar");
    let foobazlog = create_logger("foo:baz");
    let quxlog = create_logger("qux");

    log.println(&"This is a log")?;
    foolog.println(&"This is a log")?;
    barlog.println(&"This is a log")?;
    foobarlog.println(&"This is a log")?;
    foobazlog.println(&"This is a log")?;
    quxlog.println(&"This is a log")?;

    let enabled = [&log, &foolog, &barlog, &foobarlog, &foobazlog, &quxlog]
        .iter()
        .filter(|logger| logger.is_enabled())
        .count();
    nslog!(log, "{enabled} of 6 loggers enabled")?;

    println!("<end>");
    Ok(())
}
