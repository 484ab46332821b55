use tracing::warn;

/// Upstream credentials and model identifiers, resolved once at startup.
///
/// A missing key is not fatal here: the corresponding provider calls will
/// fail at request time and the caller sees the fixed error body, which is
/// the behavior the deployment has always had.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_key: String,
    pub openai_key: String,
    pub aiml_key: String,
    pub gemini_model: String,
    pub openai_model: String,
    pub aiml_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_key: required_key("GEMINI_KEY"),
            openai_key: required_key("OPENAI_KEY"),
            aiml_key: required_key("AIML_KEY"),
            gemini_model: std::env::var("NICOL_GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            openai_model: std::env::var("NICOL_OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            aiml_model: std::env::var("NICOL_AIML_MODEL")
                .unwrap_or_else(|_| "mistralai/mistral-7b-instruct-v0.2".to_string()),
        }
    }
}

fn required_key(var: &str) -> String {
    match std::env::var(var) {
        Ok(value) => value,
        Err(_) => {
            warn!(var = %var, "API key not set, upstream calls will fail");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_defaults_models() {
        std::env::remove_var("NICOL_GEMINI_MODEL");
        std::env::remove_var("NICOL_OPENAI_MODEL");
        std::env::remove_var("NICOL_AIML_MODEL");
        let config = Config::from_env();
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.aiml_model, "mistralai/mistral-7b-instruct-v0.2");
    }

    #[test]
    fn test_missing_key_is_empty() {
        std::env::remove_var("NICOL_TEST_MISSING_KEY");
        assert_eq!(required_key("NICOL_TEST_MISSING_KEY"), "");
    }
}
