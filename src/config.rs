//! Server configuration, read from the environment.

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::images::CloudflareCredentials;
use crate::llm::{LlmBackend, LlmConfig};

/// Port used when `BRAND_KIT_PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub llm: LlmConfig,
    /// `None` disables image generation; logo and banner come back empty.
    pub cloudflare: Option<CloudflareCredentials>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("BRAND_KIT_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "BRAND_KIT_PORT".to_string(),
                message: format!("{raw:?} is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let backend = match get("BRAND_KIT_LLM_BACKEND") {
            Some(raw) => raw.parse::<LlmBackend>()?,
            None => LlmBackend::Anthropic,
        };

        let api_key = get(backend.api_key_var())
            .ok_or_else(|| ConfigError::MissingEnvVar(backend.api_key_var().to_string()))?;

        let model = get("BRAND_KIT_MODEL").unwrap_or_else(|| backend.default_model().to_string());

        let cloudflare = CloudflareCredentials::from_parts(
            get("CLOUDFLARE_ACCOUNT_ID"),
            get("CLOUDFLARE_API_TOKEN"),
        );

        Ok(Self {
            port,
            llm: LlmConfig {
                backend,
                api_key: SecretString::from(api_key),
                model,
            },
            cloudflare,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_only_anthropic_key() {
        let config = AppConfig::from_lookup(lookup(&[("ANTHROPIC_API_KEY", "sk-ant-test")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.llm.backend, LlmBackend::Anthropic);
        assert_eq!(config.llm.model, "claude-sonnet-4-20250514");
        assert_eq!(config.llm.api_key.expose_secret(), "sk-ant-test");
        assert!(config.cloudflare.is_none());
    }

    #[test]
    fn openai_backend_needs_openai_key() {
        let err = AppConfig::from_lookup(lookup(&[
            ("BRAND_KIT_LLM_BACKEND", "openai"),
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref var) if var == "OPENAI_API_KEY"));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BRAND_KIT_PORT", "8088"),
            ("BRAND_KIT_LLM_BACKEND", "OpenAI"),
            ("OPENAI_API_KEY", "sk-test"),
            ("BRAND_KIT_MODEL", "gpt-4o-mini"),
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_TOKEN", "token"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(config.llm.backend, LlmBackend::OpenAi);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        let cloudflare = config.cloudflare.unwrap();
        assert_eq!(cloudflare.account_id, "acct");
    }

    #[test]
    fn blank_cloudflare_token_disables_images() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("CLOUDFLARE_ACCOUNT_ID", "acct"),
            ("CLOUDFLARE_API_TOKEN", "  "),
        ]))
        .unwrap();
        assert!(config.cloudflare.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("ANTHROPIC_API_KEY", "sk-ant-test"),
            ("BRAND_KIT_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "BRAND_KIT_PORT"));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("BRAND_KIT_LLM_BACKEND", "gemini")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
