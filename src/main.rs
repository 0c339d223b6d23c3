//! route-audit
//!
//! Lists every route a web application exposes, with its methods, handler
//! and schema.
//!
//! # Architecture Overview
//!
//! ```text
//!   project path ──▶ config ──▶ manifest ──▶ routing ──▶ report ──▶ stdout
//!                    (toml)    (locate +    (collect +   (text /
//!                               parse)       extract)     json)
//!
//!   --watch: manifest watcher ──▶ rescan ──▶ report (until interrupted)
//! ```

use std::path::PathBuf;

use clap::Parser;

use route_audit::config::loader::add_cli_exclude_prefixes;
use route_audit::config::{resolve_config, OutputFormat};
use route_audit::manifest::ManifestWatcher;
use route_audit::observability::logging;
use route_audit::report::render;
use route_audit::scan::{scan_manifest, scan_project};

#[derive(Parser)]
#[command(name = "route-audit")]
#[command(
    about = "List the routes, methods, handlers and schemas of an application",
    long_about = None
)]
struct Cli {
    /// Project directory or route manifest file
    project_path: PathBuf,

    /// Exclude routes whose path starts with this prefix (repeatable)
    #[arg(long = "exclude-prefix", value_name = "PREFIX")]
    exclude_prefix: Vec<String>,

    /// Configuration file (defaults to route-audit.toml in the project)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Rescan whenever the manifest changes
    #[arg(short, long)]
    watch: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = resolve_config(cli.config.as_deref(), &cli.project_path)?;
    logging::init(&config.observability);

    add_cli_exclude_prefixes(&mut config, cli.exclude_prefix);

    let format = cli.format.unwrap_or(config.output.format);

    tracing::debug!(
        project = %cli.project_path.display(),
        exclude_prefixes = ?config.scan.exclude_prefixes,
        ?format,
        "Configuration loaded"
    );

    let report = scan_project(&cli.project_path, &config.scan)?;
    println!("{}", render(&report.routes, format)?.trim_end());

    if !cli.watch {
        return Ok(());
    }

    let (watcher, changes) = ManifestWatcher::new(&report.manifest);
    let _watcher = watcher.run()?;

    while changes.recv().is_ok() {
        // Editors emit several events per save; collapse them into one rescan.
        while changes.try_recv().is_ok() {}

        match scan_manifest(&report.manifest, &config.scan.exclude_prefixes) {
            Ok(rescan) => println!("{}", render(&rescan.routes, format)?.trim_end()),
            Err(e) => tracing::error!("Rescan failed: {}. Waiting for next change.", e),
        }
    }

    Ok(())
}
