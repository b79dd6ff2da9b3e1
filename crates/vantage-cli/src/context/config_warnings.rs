use vantage_config::VantageConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VantageConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VantageConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_single_underscore_key(&env_keys, "VANTAGE_GEMINI") {
        warnings.push(
            "Gemini config appears default while VANTAGE_GEMINI* env vars exist. Use double underscores (example: VANTAGE_GEMINI__API_KEY) or set GEMINI_API_KEY."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "VANTAGE_SERVER") {
        warnings.push(
            "VANTAGE_SERVER* env vars without double underscores are ignored. Use VANTAGE_SERVER__PORT or VANTAGE_SERVER__HOST."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "VANTAGE_STORE") {
        warnings.push(
            "VANTAGE_STORE* env vars without double underscores are ignored. Use VANTAGE_STORE__DIR or VANTAGE_STORE__QUOTA_BYTES."
                .to_string(),
        );
    }

    warnings
}

/// `VANTAGE_GEMINI_API_KEY` matches; `VANTAGE_GEMINI__API_KEY` does not.
fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with("__"))
    })
}
