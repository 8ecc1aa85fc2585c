/// How composed requirement text is rendered.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Prepended to every statement
    pub prefix: String,

    /// Appended to every statement
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: "<br/>".to_string(),
        }
    }
}

impl RenderConfig {
    /// Build a render configuration from the environment, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            prefix: std::env::var("REQUIREMENTS_PREFIX").unwrap_or_default(),
            separator: std::env::var("REQUIREMENTS_SEPARATOR")
                .unwrap_or_else(|_| "<br/>".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix_empty_separator_line_break() {
        let render = RenderConfig::default();
        assert_eq!(render.prefix, "");
        assert_eq!(render.separator, "<br/>");
    }
}
