use clap::Parser;
use skygrad::utils::status::print_preset_summary;
use skygrad::{Cli, Config, batch};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::builtin()?;

    let missing = cli.apply(&mut config);
    if !missing.is_empty() {
        anyhow::bail!("unknown preset(s): {}", missing.join(", "));
    }

    print_preset_summary(&config.presets, config.height, config.flip);
    if cli.list {
        return Ok(());
    }

    let report = batch::run(&config)?;
    if !report.is_success() {
        let names: Vec<_> = report.failed.iter().map(|(name, _)| name.as_str()).collect();
        anyhow::bail!(
            "{} preset(s) failed: {}",
            report.failed.len(),
            names.join(", ")
        );
    }
    Ok(())
}
