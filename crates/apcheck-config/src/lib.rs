//! Config module.

mod drivers;

use std::env;

pub use drivers::{ApiDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver (raw value, validated at startup).
    pub driver: String,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

impl ApiConfig {
    /// Parse the configured API driver.
    pub fn driver(&self) -> Result<ApiDriver, DriverError> {
        self.driver.parse()
    }
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// Reviews requested per page.
    pub page_size: u32,
}

/// Values provided by the workflow runner.
#[derive(Debug, Clone, Default)]
pub struct GitHubEnvConfig {
    /// Authentication token.
    pub token: Option<String>,
    /// Repository path, as `owner/name`.
    pub repository: Option<String>,
    /// Path to the JSON event payload.
    pub event_path: Option<String>,
    /// Name of the triggering event.
    pub event_name: Option<String>,
}

/// Action inputs, as raw strings.
#[derive(Debug, Clone, Default)]
pub struct InputsConfig {
    /// Wanted approvals count.
    pub approvals_count: String,
    /// Only accept an exact approvals count.
    pub only_equal: String,
}

/// Runner file commands.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Step outputs file.
    pub output_file: Option<String>,
    /// Exported environment file.
    pub env_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runner environment.
    pub github: GitHubEnvConfig,
    /// Action inputs.
    pub inputs: InputsConfig,
    /// Runner file commands.
    pub runner: RunnerConfig,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Self::from_lookup(version, |name| env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(version: String, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        Config {
            github: GitHubEnvConfig {
                token: vars.optional_str("GITHUB_TOKEN"),
                repository: vars.optional_str("GITHUB_REPOSITORY"),
                event_path: vars.optional_str("GITHUB_EVENT_PATH"),
                event_name: vars.optional_str("GITHUB_EVENT_NAME"),
            },
            inputs: InputsConfig {
                approvals_count: vars.input("approvalsCount"),
                only_equal: vars.input("onlyEqual"),
            },
            runner: RunnerConfig {
                output_file: vars.optional_str("GITHUB_OUTPUT"),
                env_file: vars.optional_str("GITHUB_ENV"),
            },
            api: ApiConfig {
                driver: vars.str("APCHECK_API_DRIVER", "github"),
                github: ApiGitHubConfig {
                    connect_timeout: vars.u64("APCHECK_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: vars.str("GITHUB_API_URL", "https://api.github.com"),
                    page_size: vars.u32("APCHECK_API_GITHUB_PAGE_SIZE", 100),
                },
            },
            logging: LoggingConfig {
                use_bunyan: vars.bool("APCHECK_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn u64(&self, name: &str, default: u64) -> u64 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn u32(&self, name: &str, default: u32) -> u32 {
        (self.0)(name)
            .map(|e| e.parse().unwrap_or(default))
            .unwrap_or(default)
    }

    fn bool(&self, name: &str, default: bool) -> bool {
        (self.0)(name).map(|e| !e.is_empty()).unwrap_or(default)
    }

    fn str(&self, name: &str, default: &str) -> String {
        (self.0)(name).unwrap_or_else(|| default.to_string())
    }

    fn optional_str(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|e| !e.is_empty())
    }

    /// Action inputs are exposed as `INPUT_<NAME>`, upper-cased with spaces
    /// replaced by underscores.
    fn input(&self, name: &str) -> String {
        let var_name = format!("INPUT_{}", name.replace(' ', "_").to_uppercase());
        (self.0)(&var_name)
            .map(|e| e.trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup("1.2.3".into(), |name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);

        assert_eq!(config.github.token, None);
        assert_eq!(config.github.repository, None);
        assert_eq!(config.github.event_path, None);
        assert_eq!(config.inputs.approvals_count, "");
        assert_eq!(config.inputs.only_equal, "");
        assert_eq!(config.api.driver().unwrap(), ApiDriver::GitHub);
        assert_eq!(config.api.github.root_url, "https://api.github.com");
        assert_eq!(config.api.github.connect_timeout, 5000);
        assert_eq!(config.api.github.page_size, 100);
        assert!(!config.logging.use_bunyan);
        assert_eq!(config.version, "1.2.3");
    }

    #[test]
    fn runner_values() {
        let config = config_from(&[
            ("GITHUB_TOKEN", "abcdef"),
            ("GITHUB_REPOSITORY", "me/test"),
            ("GITHUB_EVENT_PATH", "/tmp/event.json"),
            ("GITHUB_EVENT_NAME", "pull_request_review"),
            ("GITHUB_OUTPUT", ""),
            ("INPUT_APPROVALSCOUNT", " 2 "),
            ("INPUT_ONLYEQUAL", "TRUE"),
            ("APCHECK_API_DRIVER", "null"),
            ("APCHECK_API_GITHUB_PAGE_SIZE", "not-a-number"),
        ]);

        assert_eq!(config.github.token.as_deref(), Some("abcdef"));
        assert_eq!(config.github.repository.as_deref(), Some("me/test"));
        assert_eq!(config.github.event_path.as_deref(), Some("/tmp/event.json"));
        assert_eq!(
            config.github.event_name.as_deref(),
            Some("pull_request_review")
        );
        // Empty values are treated as missing
        assert_eq!(config.runner.output_file, None);
        assert_eq!(config.inputs.approvals_count, "2");
        assert_eq!(config.inputs.only_equal, "TRUE");
        assert_eq!(config.api.driver().unwrap(), ApiDriver::Null);
        assert_eq!(config.api.github.page_size, 100);
    }

    #[test]
    fn invalid_driver() {
        let config = config_from(&[("APCHECK_API_DRIVER", "gitlab")]);
        assert!(config.api.driver().is_err());
    }
}
