use std::str::FromStr;

use thiserror::Error;

use crate::RepositoryPath;

/// Type error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum PullRequestHandleError {
    /// Invalid pull request handle.
    #[error("Invalid pull request handle: {}", path)]
    InvalidPullRequestHandle { path: String },
}

/// Pull request handle: repository path and number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHandle {
    repository: RepositoryPath,
    number: u64,
}

impl std::fmt::Display for PullRequestHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} (#{})", self.repository, self.number))
    }
}

impl PullRequestHandle {
    /// Creates a new handle.
    pub fn new(repository: RepositoryPath, number: u64) -> Self {
        Self { repository, number }
    }

    /// Repository path.
    pub fn repository_path(&self) -> &RepositoryPath {
        &self.repository
    }

    /// Pull request number.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Repository owner.
    pub fn owner(&self) -> &str {
        self.repository.owner()
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        self.repository.name()
    }
}

impl From<(&str, &str, u64)> for PullRequestHandle {
    fn from((owner, name, number): (&str, &str, u64)) -> Self {
        Self {
            repository: (owner, name).into(),
            number,
        }
    }
}

impl FromStr for PullRequestHandle {
    type Err = PullRequestHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl TryFrom<&str> for PullRequestHandle {
    type Error = PullRequestHandleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || PullRequestHandleError::InvalidPullRequestHandle { path: value.into() };

        let (path, number) = value.rsplit_once('/').ok_or_else(invalid)?;
        let repository = RepositoryPath::try_from(path).map_err(|_| invalid())?;
        let number = number.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self::new(repository, number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let handle: PullRequestHandle = "me/test/12".parse().unwrap();
        assert_eq!(handle, ("me", "test", 12).into());
        assert_eq!(handle.to_string(), "me/test (#12)");

        assert!("me/test".parse::<PullRequestHandle>().is_err());
        assert!("me/test/abc".parse::<PullRequestHandle>().is_err());
    }
}
