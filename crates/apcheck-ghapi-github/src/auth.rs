//! Auth.

use std::time::Duration;

use apcheck_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(
    config: &Config,
    token: &str,
) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config);

    let mut authorization = header::HeaderValue::from_str(&format!("token {token}"))
        .map_err(|e| GitHubError::InvalidTokenError { source: e })?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );
    headers.insert(header::AUTHORIZATION, authorization);

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(GITHUB_ACCEPT_HEADER),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.api.github.connect_timeout))
        .user_agent(format!("apcheck/{}", config.version))
        .default_headers(headers)
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!(
        "{}{}",
        config.api.github.root_url.trim_end_matches('/'),
        path.into()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrange_config() -> Config {
        let mut config = Config::from_lookup("1.0.0".into(), |_| None);
        config.api.github.root_url = "https://ghe.example.com/api/v3/".into();
        config
    }

    #[test]
    fn test_build_github_url() {
        let config = arrange_config();

        assert_eq!(
            build_github_url(&config, "/repos/me/test/pulls/1/reviews"),
            "https://ghe.example.com/api/v3/repos/me/test/pulls/1/reviews"
        );
    }

    #[test]
    fn test_get_authenticated_client_builder() {
        let config = arrange_config();

        get_authenticated_client_builder(&config, "abcdef")
            .unwrap()
            .build()
            .unwrap();
    }

    #[test]
    fn test_invalid_token() {
        let config = arrange_config();

        assert!(matches!(
            get_authenticated_client_builder(&config, "abc\ndef"),
            Err(GitHubError::InvalidTokenError { .. })
        ));
    }
}
