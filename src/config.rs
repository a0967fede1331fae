//! Runtime Configuration
//!
//! Command-line flags take precedence over environment variables, which take
//! precedence over built-in defaults.
//!
//! | Flag            | Environment          | Default          |
//! |-----------------|----------------------|------------------|
//! | `--bind`        | `SEARCH_BIND`        | `127.0.0.1:3000` |
//! | `--posts`       | `POSTS_PATH`         | (required)       |
//! | `--max-results` | `SEARCH_MAX_RESULTS` | `10`             |

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Display settings shared with the HTTP handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Items listed per response when the request has no `limit`. 0 lists all matches.
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub posts_path: PathBuf,
    pub search: SearchSettings,
}

impl Config {
    pub fn from_env_and_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, |key| std::env::var(key).ok())
    }

    /// Builds a config from `args` (program name excluded) with `env` as the fallback lookup.
    pub fn parse<E>(args: &[String], env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = None;
        let mut posts: Option<String> = None;
        let mut max_results: Option<String> = None;

        let mut i = 0;
        while i < args.len() {
            let slot = match args[i].as_str() {
                "--bind" => &mut bind,
                "--posts" => &mut posts,
                "--max-results" => &mut max_results,
                other => {
                    tracing::warn!("Ignoring unknown argument {}", other);
                    i += 1;
                    continue;
                }
            };
            let value = args
                .get(i + 1)
                .with_context(|| format!("Missing value for {}", args[i]))?;
            *slot = Some(value.clone());
            i += 2;
        }

        let bind = bind
            .or_else(|| env("SEARCH_BIND"))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("Invalid bind address {}", bind))?;

        let Some(posts_path) = posts.or_else(|| env("POSTS_PATH")) else {
            bail!("A posts source is required: pass --posts <path> or set POSTS_PATH");
        };

        let max_results = match max_results.or_else(|| env("SEARCH_MAX_RESULTS")) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid max results {}", raw))?,
            None => DEFAULT_MAX_RESULTS,
        };

        Ok(Self {
            bind_addr,
            posts_path: PathBuf::from(posts_path),
            search: SearchSettings { max_results },
        })
    }
}
