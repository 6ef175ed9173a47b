use anyhow::{bail, Result};
use jpms_deps::impls::{ConsoleDeclarationSink, TracingWarningSink};
use jpms_deps::Workspace;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let manifest_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from("jpms-deps.toml"),
    };
    if args.next().is_some() {
        bail!("usage: jpms-deps [workspace-manifest.toml]");
    }

    tracing::info!("loading workspace manifest {}", manifest_path.display());
    let workspace = Workspace::load(&manifest_path)?;

    let mut sink = ConsoleDeclarationSink::new();
    let mut warnings = TracingWarningSink;
    let summary = workspace.declare_all(&mut sink, &mut warnings)?;

    eprintln!(
        "{} dependency declaration(s), {} platform module(s), {} unresolved",
        summary.declared, summary.platform, summary.unresolved
    );
    Ok(())
}
