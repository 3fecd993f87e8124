// Argument handling for the idr-format binary
use crate::config::settings::FormatterSettings;
use anyhow::{anyhow, bail, Context, Result};
use std::ffi::OsString;
use std::io::Write;
use tracing::info;

pub const USAGE: &str = "\
Usage: idr-format [--config PATH] [--locale TAG] [--label TEXT] AMOUNT...

Amounts may be written plainly (1234567) or in the locale's own
convention (1.234.567 for Indonesian).";

/// Formats every amount named in `args`, one line each, into `out`.
pub fn run(mut args: pico_args::Arguments, out: &mut impl Write) -> Result<()> {
    if args.contains(["-h", "--help"]) {
        writeln!(out, "{}", USAGE)?;
        return Ok(());
    }

    let config_path: Option<String> = args.opt_value_from_str("--config")?;
    let locale: Option<String> = args.opt_value_from_str("--locale")?;
    let label: Option<String> = args.opt_value_from_str("--label")?;
    let amounts = free_arguments(args.finish())?;

    if amounts.is_empty() {
        bail!("no amounts given\n\n{}", USAGE);
    }

    let settings = match &config_path {
        Some(path) => FormatterSettings::load_from_path(path)
            .with_context(|| format!("failed to load settings from '{}'", path))?,
        None => FormatterSettings::default(),
    }
    .with_overrides(locale, label);

    let formatter = settings.build_formatter().context("invalid formatter settings")?;
    info!(
        locale = %formatter.config().locale,
        label = %formatter.config().currency_label,
        count = amounts.len(),
        "Formatting amounts"
    );

    for text in &amounts {
        let amount = formatter.parse(text)?;
        let formatted = formatter.format(amount)?;
        writeln!(out, "{}", formatted)?;
    }
    Ok(())
}

// Leftover arguments are the amounts; a bare "--" only separates them from flags.
fn free_arguments(rest: Vec<OsString>) -> Result<Vec<String>> {
    rest.into_iter()
        .filter(|arg| arg != "--")
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| anyhow!("amount is not valid UTF-8: {:?}", raw))
        })
        .collect()
}
