use std::path::PathBuf;

use anyhow::Result;
use apcheck_actions::{ActionsService, RunnerActionsService};
use apcheck_config::{ApiDriver, Config};
use apcheck_core::{
    use_cases::{
        context::validate_execution_context,
        reviews::{HandleReviewEventInterface, ReviewOutcome},
    },
    CoreContext, CoreModule, DomainError,
};
use apcheck_ghapi_github::GithubApiService;
use apcheck_ghapi_interface::ApiService;
use apcheck_ghapi_null::NullApiService;
use clap::Parser;
use shaku::HasComponent;
use tracing::{error, info};

use crate::build;

/// Check that a pull request reached its wanted approvals count.
#[derive(Parser, Debug, Default)]
#[command(author, version, long_version = build::CLAP_LONG_VERSION, about, long_about = None)]
pub(crate) struct Args {
    /// Wanted approvals count (overrides the `approvalsCount` input)
    #[arg(long)]
    pub approvals_count: Option<String>,

    /// Only accept an exact approvals count (overrides the `onlyEqual` input)
    #[arg(long)]
    pub only_equal: Option<bool>,

    /// Event payload path (overrides GITHUB_EVENT_PATH)
    #[arg(long)]
    pub event_path: Option<PathBuf>,
}

impl Args {
    pub fn apply_overrides(self, config: &mut Config) {
        if let Some(approvals_count) = self.approvals_count {
            config.inputs.approvals_count = approvals_count;
        }

        if let Some(only_equal) = self.only_equal {
            config.inputs.only_equal = only_equal.to_string();
        }

        if let Some(event_path) = self.event_path {
            config.github.event_path = Some(event_path.to_string_lossy().into());
        }
    }
}

pub(crate) struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(mut config: Config, args: Args) -> Result<()> {
        args.apply_overrides(&mut config);

        let driver = config.api.driver()?;
        let actions_service = RunnerActionsService::stdout(&config);

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::run(&config, driver, &actions_service))
    }

    /// Handle the review event, reporting any failure to the runner.
    pub async fn run(
        config: &Config,
        driver: ApiDriver,
        actions_service: &dyn ActionsService,
    ) -> Result<()> {
        match Self::handle_review_event(config, driver, actions_service).await {
            Ok(outcome) => {
                info!(?outcome, "Review event handled");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Could not handle review event");
                actions_service.set_failed(&e.to_string())?;
                Err(e.into())
            }
        }
    }

    async fn handle_review_event(
        config: &Config,
        driver: ApiDriver,
        actions_service: &dyn ActionsService,
    ) -> Result<ReviewOutcome, DomainError> {
        let execution_context = validate_execution_context(&config.github)?;

        let api_service: Box<dyn ApiService> = match driver {
            ApiDriver::GitHub => {
                info!("Using GitHub API driver");
                Box::new(GithubApiService::new(
                    config.clone(),
                    execution_context.token.clone(),
                ))
            }
            ApiDriver::Null => {
                info!("Using null API driver");
                Box::new(NullApiService::new())
            }
        };

        let core_module = CoreModule::builder().build();
        let ctx = CoreContext {
            config,
            core_module: &core_module,
            api_service: api_service.as_ref(),
            actions_service,
        };

        let handle_review_event: &dyn HandleReviewEventInterface = core_module.resolve_ref();
        handle_review_event.run(&ctx, &execution_context).await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io::Write,
        sync::{Arc, Mutex},
    };

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn write_payload(payload: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(payload.as_bytes()).unwrap();
        file
    }

    fn arrange_config(vars: &[(&str, &str)]) -> Config {
        let mut vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        vars.insert("APCHECK_API_DRIVER".into(), "null".into());
        vars.insert("GITHUB_EVENT_NAME".into(), "pull_request_review".into());
        Config::from_lookup("0.0.0".into(), |name| vars.get(name).cloned())
    }

    fn arrange_runner_config(event_path: &str) -> Config {
        arrange_config(&[
            ("GITHUB_TOKEN", "abcdef"),
            ("GITHUB_REPOSITORY", "me/test"),
            ("GITHUB_EVENT_PATH", event_path),
        ])
    }

    async fn test_run(config: &Config) -> (Result<()>, String) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let actions_service =
            RunnerActionsService::new(config, Arc::new(Mutex::new(SharedBuffer(buffer.clone()))));

        let result = CommandExecutor::run(config, ApiDriver::Null, &actions_service).await;
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    #[tokio::test]
    async fn missing_runner_values() {
        let config = arrange_config(&[("GITHUB_TOKEN", "abcdef")]);
        let (result, output) = test_run(&config).await;

        assert!(result.is_err());
        assert_eq!(
            output,
            "::error::GITHUB_TOKEN, GITHUB_REPOSITORY or GITHUB_EVENT_PATH is not set\n"
        );
    }

    #[tokio::test]
    async fn unsupported_event() {
        let payload = write_payload(
            r#"{"action": "submitted", "review": {"state": "commented"}, "pull_request": {"number": 1}}"#,
        );
        let config = arrange_runner_config(&payload.path().to_string_lossy());
        let (result, output) = test_run(&config).await;

        assert!(result.is_ok());
        assert_eq!(
            output,
            "pull_request_review/submitted/commented doesn't support.\n"
        );
    }

    #[tokio::test]
    async fn missing_pull_request() {
        let payload = write_payload(r#"{"action": "submitted", "review": {"state": "approved"}}"#);
        let config = arrange_runner_config(&payload.path().to_string_lossy());
        let (result, output) = test_run(&config).await;

        assert!(result.is_err());
        assert_eq!(output, "::error::This event doesn't contain PR\n");
    }

    #[tokio::test]
    async fn approval_without_reviews() {
        let payload = write_payload(
            r#"{"action": "submitted", "review": {"state": "approved"}, "pull_request": {"number": 1}}"#,
        );
        let config = arrange_runner_config(&payload.path().to_string_lossy());
        let (result, output) = test_run(&config).await;

        assert!(result.is_ok());
        assert_eq!(output, "");
    }

    #[test]
    fn overrides() {
        let mut config = arrange_config(&[
            ("INPUT_APPROVALSCOUNT", "2"),
            ("GITHUB_EVENT_PATH", "/tmp/event.json"),
        ]);

        Args::default().apply_overrides(&mut config);
        assert_eq!(config.inputs.approvals_count, "2");
        assert_eq!(config.inputs.only_equal, "");

        Args {
            approvals_count: Some("3".into()),
            only_equal: Some(true),
            event_path: Some("/tmp/other.json".into()),
        }
        .apply_overrides(&mut config);
        assert_eq!(config.inputs.approvals_count, "3");
        assert_eq!(config.inputs.only_equal, "true");
        assert_eq!(config.github.event_path.as_deref(), Some("/tmp/other.json"));
    }
}
