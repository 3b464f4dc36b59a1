use serde::Deserialize;

/// Default TMDb v3 API root used when `TMDB_BASE_URL` is not set.
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub tmdb_access_token: String,
    pub tmdb_base_url: String,
    pub route_prefix: Option<String>,
    pub tmdb_timeout_secs: Option<u64>, // None keeps the HTTP client default
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` feeds this with the process environment; tests feed it a map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))
                .and_then(|port| {
                    if port == 0 {
                        anyhow::bail!("PORT must be a valid number between 1-65535");
                    }
                    Ok(port)
                })?,
            tmdb_access_token: lookup("TMDB_ACCESS_TOKEN")
                .or_else(|| lookup("ACCESS_TOKEN"))
                .ok_or_else(|| {
                    anyhow::anyhow!("TMDB_ACCESS_TOKEN or ACCESS_TOKEN environment variable required")
                })
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("TMDB_ACCESS_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            tmdb_base_url: parse_base_url(
                lookup("TMDB_BASE_URL")
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            )?,
            route_prefix: lookup("ROUTE_PREFIX")
                .map(|p| p.trim().trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .map(|prefix| {
                    if !prefix.starts_with('/') {
                        anyhow::bail!("ROUTE_PREFIX must start with '/'");
                    }
                    Ok(prefix)
                })
                .transpose()?,
            tmdb_timeout_secs: lookup("TMDB_TIMEOUT_SECS")
                .filter(|s| !s.trim().is_empty())
                .map(|raw| {
                    raw.trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!("TMDB_TIMEOUT_SECS must be a positive number of seconds")
                        })
                })
                .transpose()?,
        };

        // Never log the access token
        tracing::debug!("TMDb Base URL: {}", config.tmdb_base_url);
        tracing::debug!("Server Port: {}", config.port);
        if let Some(ref prefix) = config.route_prefix {
            tracing::info!("Routes mounted under prefix: {}", prefix);
        }
        if let Some(secs) = config.tmdb_timeout_secs {
            tracing::debug!("TMDb request timeout: {}s", secs);
        }

        Ok(config)
    }
}

fn parse_base_url(raw: String) -> anyhow::Result<String> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| anyhow::anyhow!("TMDB_BASE_URL is not a valid URL: {}", e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("TMDB_BASE_URL must start with http:// or https://");
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_token_only() {
        let config = load(&[("TMDB_ACCESS_TOKEN", "secret")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.tmdb_access_token, "secret");
        assert_eq!(config.tmdb_base_url, DEFAULT_TMDB_BASE_URL);
        assert!(config.route_prefix.is_none());
        assert!(config.tmdb_timeout_secs.is_none());
    }

    #[test]
    fn test_access_token_fallback() {
        let config = load(&[("ACCESS_TOKEN", "legacy")]).unwrap();
        assert_eq!(config.tmdb_access_token, "legacy");
    }

    #[test]
    fn test_missing_or_blank_token_rejected() {
        assert!(load(&[]).is_err());
        assert!(load(&[("TMDB_ACCESS_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn test_base_url_validation() {
        let config = load(&[
            ("TMDB_ACCESS_TOKEN", "t"),
            ("TMDB_BASE_URL", "http://127.0.0.1:9000/3/"),
        ])
        .unwrap();
        assert_eq!(config.tmdb_base_url, "http://127.0.0.1:9000/3");

        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("TMDB_BASE_URL", "not a url")]).is_err());
        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("TMDB_BASE_URL", "ftp://x.org")]).is_err());
    }

    #[test]
    fn test_port_validation() {
        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("PORT", "abc")]).is_err());
        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("PORT", "0")]).is_err());
        let config = load(&[("TMDB_ACCESS_TOKEN", "t"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_route_prefix() {
        let config = load(&[("TMDB_ACCESS_TOKEN", "t"), ("ROUTE_PREFIX", "/api/")]).unwrap();
        assert_eq!(config.route_prefix.as_deref(), Some("/api"));

        let config = load(&[("TMDB_ACCESS_TOKEN", "t"), ("ROUTE_PREFIX", "")]).unwrap();
        assert!(config.route_prefix.is_none());

        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("ROUTE_PREFIX", "api")]).is_err());
    }

    #[test]
    fn test_timeout_parsing() {
        let config = load(&[("TMDB_ACCESS_TOKEN", "t"), ("TMDB_TIMEOUT_SECS", "5")]).unwrap();
        assert_eq!(config.tmdb_timeout_secs, Some(5));

        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("TMDB_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("TMDB_ACCESS_TOKEN", "t"), ("TMDB_TIMEOUT_SECS", "soon")]).is_err());
    }
}
