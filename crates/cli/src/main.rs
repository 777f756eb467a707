use anyhow::{Context, bail};

use tally_cli::CliConfig;

fn main() -> anyhow::Result<()> {
    tally_observability::init();

    let config = CliConfig::from_env();
    if config.inputs.is_empty() {
        bail!("usage: tally <file.json>... (or set TALLY_INPUT)");
    }

    let report = tally_cli::run(&config).context("failed to import line items")?;
    let rendered = report
        .render(config.output)
        .context("failed to render report")?;

    print!("{rendered}");
    if config.output == tally_cli::OutputFormat::Json {
        println!();
    }

    Ok(())
}
