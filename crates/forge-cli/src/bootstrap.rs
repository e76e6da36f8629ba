use anyhow::Context;
use forge_config::ForgeConfig;
use forge_store::Workspace;

use crate::cli::GlobalFlags;

/// Load `.env`, every config layer, and the `--data-dir` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<ForgeConfig> {
    let mut config = ForgeConfig::load_with_dotenv().context("failed to load forge configuration")?;
    if let Some(dir) = &flags.data_dir {
        config.storage.data_dir.clone_from(dir);
    }
    Ok(config)
}

/// Warn about `FORGE_LLM*` variables that did not reach the `[llm]` section,
/// usually a single underscore where `__` was meant.
pub fn warn_unconfigured(config: &ForgeConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ForgeConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    let mistyped = env
        .into_iter()
        .any(|(key, _)| key.starts_with("FORGE_LLM") && !key.starts_with("FORGE_LLM__"));
    if !config.llm.is_configured() && mistyped {
        warnings.push(
            "LLM config appears default while FORGE_LLM* env vars exist. Use double underscores (example: FORGE_LLM__API_KEY)."
                .to_string(),
        );
    }
    warnings
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub workspace: Workspace,
    pub config: ForgeConfig,
}

impl AppContext {
    pub fn init(config: ForgeConfig) -> anyhow::Result<Self> {
        let client = forge_llm::connect(&config.llm).context("failed to build completion client")?;
        let workspace = Workspace::open(&config, client).with_context(|| {
            format!(
                "failed to open data directory {}",
                config.storage.data_dir.display()
            )
        })?;
        Ok(Self { workspace, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|k| ((*k).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn single_underscore_key_is_flagged() {
        let warnings =
            collect_unconfigured_warnings(&ForgeConfig::default(), env(&["FORGE_LLM_API_KEY"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("FORGE_LLM__API_KEY"));
    }

    #[test]
    fn well_formed_or_absent_keys_are_quiet() {
        let config = ForgeConfig::default();
        assert!(collect_unconfigured_warnings(&config, env(&["FORGE_LLM__MODEL"])).is_empty());
        assert!(collect_unconfigured_warnings(&config, env(&["HOME"])).is_empty());
    }
}
