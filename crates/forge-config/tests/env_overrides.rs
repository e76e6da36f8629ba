use figment::Jail;
use forge_config::ForgeConfig;

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "FORGE_LLM__API_KEY".to_string(),
            "sk_from_external".to_string(),
        )];

        let config = ForgeConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.llm.api_key, "sk_from_external");
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("FORGE_LLM__API_KEY", "sk_from_env");
        let overrides = vec![(
            "FORGE_LLM__API_KEY".to_string(),
            "sk_from_external".to_string(),
        )];

        let config = ForgeConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.llm.api_key, "sk_from_env");
        Ok(())
    });
}

#[test]
fn numeric_overrides_are_typed() {
    Jail::expect_with(|_jail| {
        let overrides = vec![
            ("FORGE_LLM__MAX_TOKENS".to_string(), "900".to_string()),
            ("FORGE_GENERAL__INSERT_ORDER".to_string(), "submission".to_string()),
        ];

        let config = ForgeConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.llm.max_tokens, Some(900));
        assert_eq!(
            config.general.insert_order,
            forge_core::enums::InsertOrder::Submission
        );
        Ok(())
    });
}

#[test]
fn unprefixed_overrides_are_ignored() {
    Jail::expect_with(|_jail| {
        let overrides = vec![("LLM__API_KEY".to_string(), "ignored".to_string())];
        let config = ForgeConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert!(!config.llm.is_configured());
        Ok(())
    });
}

#[test]
fn openai_api_key_is_a_well_known_alias() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-openai");
        let overrides = ForgeConfig::well_known_overrides();
        assert_eq!(
            overrides,
            vec![("FORGE_LLM__API_KEY".to_string(), "sk-openai".to_string())]
        );

        let config = ForgeConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.llm.api_key, "sk-openai");
        Ok(())
    });
}
