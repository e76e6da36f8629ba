use forge_config::ForgeConfig;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `forge config`.
///
/// `--format raw` prints TOML that can be pasted into a `config.toml`.
pub fn handle(config: &ForgeConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let redacted = config.redacted();
    if flags.format == OutputFormat::Raw {
        print!("{}", to_toml(&redacted)?);
        return Ok(());
    }
    output(&redacted, flags.format)
}

fn to_toml(config: &ForgeConfig) -> anyhow::Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
