fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cipherkeep_core::cli::run() {
        tracing::error!(%err, "command failed");
        eprintln!("\u{2717} {err}");
        std::process::exit(1);
    }

    Ok(())
}
