use crate::consts::cli_consts::DEFAULT_API_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The analytics backend the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine at the default address.
    #[default]
    Local,
    /// Any other backend, addressed by its full analytics URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the analytics endpoint URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => DEFAULT_API_URL.to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Resolves the endpoint once at startup.
    ///
    /// Precedence: command-line flag, then environment variable, then the
    /// config file. Blank or unparsable values fall through to the next
    /// source; with nothing left the local default is used.
    pub fn resolve(
        cli_url: Option<&str>,
        env_url: Option<&str>,
        config_url: Option<&str>,
    ) -> Environment {
        [cli_url, env_url, config_url]
            .into_iter()
            .flatten()
            .find_map(|candidate| candidate.parse::<Environment>().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") || s == DEFAULT_API_URL {
            return Ok(Environment::Local);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: s.to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(DEFAULT_API_URL.parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://sensors.example.com/api/v1/analytics".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "https://sensors.example.com/api/v1/analytics".to_string()
            })
        );
        assert!("ftp://nope".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }

    #[test]
    // The command-line flag beats the environment variable, which beats the config file.
    fn test_resolve_precedence() {
        let cli = Some("http://cli:8000/a");
        let env = Some("http://env:8000/a");
        let cfg = Some("http://cfg:8000/a");

        assert_eq!(Environment::resolve(cli, env, cfg).api_url(), "http://cli:8000/a");
        assert_eq!(Environment::resolve(None, env, cfg).api_url(), "http://env:8000/a");
        assert_eq!(Environment::resolve(None, None, cfg).api_url(), "http://cfg:8000/a");
        assert_eq!(Environment::resolve(None, None, None), Environment::Local);
    }

    #[test]
    // A blank environment variable does not mask the config file.
    fn test_resolve_skips_invalid_values() {
        let resolved = Environment::resolve(None, Some("  "), Some("http://cfg:8000/a"));
        assert_eq!(resolved.api_url(), "http://cfg:8000/a");
    }
}
