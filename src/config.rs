// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
    scanner_user_agents: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://articles.db".into()
}

fn default_database_max_connections() -> u32 {
    16
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_scanner_user_agents() -> Vec<String> {
    vec!["ZAP/2.7".into()]
}

/// Splits a comma-separated list of regexes. Commas inside `{m,n}`
/// repetitions, `[...]` classes or escaped as `\,` stay in the pattern.
fn split_patterns(raw: &str) -> Vec<String> {
    let mut patterns = Vec::new();
    let mut current = String::new();
    let (mut braces, mut in_class, mut escaped) = (0usize, false, false);

    for ch in raw.chars() {
        if escaped {
            escaped = false;
        } else {
            match ch {
                '\\' => escaped = true,
                '[' if !in_class => in_class = true,
                ']' if in_class => in_class = false,
                '{' if !in_class => braces += 1,
                '}' if !in_class => braces = braces.saturating_sub(1),
                ',' if !in_class && braces == 0 => {
                    patterns.push(std::mem::take(&mut current));
                    continue;
                }
                _ => {}
            }
        }
        current.push(ch);
    }
    patterns.push(current);

    patterns
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => default_database_max_connections(),
        };

        // An explicitly empty value disables the scanner block.
        let scanner_user_agents = lookup("SCANNER_USER_AGENTS")
            .map(|raw| split_patterns(&raw))
            .unwrap_or_else(default_scanner_user_agents);

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            scanner_user_agents,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// User-agent patterns (regular expressions) refused on the new-article form.
    ///
    /// `SCANNER_USER_AGENTS` is split on top-level commas only, so
    /// `ZAP/2\.[7-9]{1,2},sqlmap` yields two patterns.
    pub fn scanner_user_agents(&self) -> &[String] {
        &self.scanner_user_agents
    }
}
