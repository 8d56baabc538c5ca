use anyhow::{Context, Result};
use loglens_core::conf::LoglensConfig;

pub fn run_check(path: &str) -> Result<()> {
    let cfg = LoglensConfig::from_file(path)
        .with_context(|| format!("failed to load config {path}"))?;

    println!("config OK: {} sources", cfg.sources.len());
    for source in &cfg.sources {
        println!(
            "  {} <- {} ({} total codes)",
            source.name,
            source.input.display(),
            source.taxonomy.total_codes.len()
        );
    }

    Ok(())
}
