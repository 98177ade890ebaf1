//! Runner implementation.

use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use apcheck_config::Config;

use crate::{
    commands::{format_command, format_key_value},
    ActionsError, ActionsService, Result,
};

/// Workflow runner service.
///
/// Uses the runner files when they are available, and falls back to
/// workflow commands on the writer otherwise.
#[derive(Clone)]
pub struct RunnerActionsService {
    output_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
    writer: Arc<Mutex<dyn Write + Send>>,
}

impl RunnerActionsService {
    /// Creates a runner service writing workflow commands to `writer`.
    pub fn new(config: &Config, writer: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self {
            output_file: config.runner.output_file.as_ref().map(PathBuf::from),
            env_file: config.runner.env_file.as_ref().map(PathBuf::from),
            writer,
        }
    }

    /// Creates a runner service writing workflow commands to stdout.
    pub fn stdout(config: &Config) -> Self {
        Self::new(config, Arc::new(Mutex::new(std::io::stdout())))
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock().map_err(|_| ActionsError::PoisonedWriter)?;
        writeln!(writer, "{line}").map_err(|e| ActionsError::WriterError { source: e })
    }

    fn append_to_file(path: &PathBuf, content: &str) -> Result<()> {
        let to_error = |e| ActionsError::FileCommandError {
            path: path.clone(),
            source: e,
        };

        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(to_error)?
            .write_all(content.as_bytes())
            .map_err(to_error)
    }
}

impl ActionsService for RunnerActionsService {
    #[tracing::instrument(skip(self))]
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => Self::append_to_file(path, &format_key_value(name, value)?),
            None => self.write_line(&format_command("set-output", &[("name", name)], value)),
        }
    }

    #[tracing::instrument(skip(self))]
    fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        match &self.env_file {
            Some(path) => Self::append_to_file(path, &format_key_value(name, value)?),
            None => self.write_line(&format_command("set-env", &[("name", name)], value)),
        }
    }

    fn info(&self, message: &str) -> Result<()> {
        self.write_line(message)
    }

    #[tracing::instrument(skip(self))]
    fn set_failed(&self, message: &str) -> Result<()> {
        self.write_line(&format_command("error", &[], message))
    }
}
