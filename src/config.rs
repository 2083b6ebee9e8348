use std::path::PathBuf;

use crate::{board::Board, error::Error};

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seed {
    #[default]
    Demo,
    Empty,
}

impl Seed {
    pub fn board(self) -> Board {
        match self {
            Seed::Demo => Board::demo(),
            Seed::Empty => Board::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: Seed,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: Seed::Demo,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let seed = std::env::var("KANBAN_SEED").ok();
        let log_file = std::env::var("KANBAN_LOG_FILE").ok();
        let log_filter = std::env::var("KANBAN_LOG").ok();

        Self::from_parts(seed, log_file, log_filter)
    }

    fn from_parts(
        seed: Option<String>,
        log_file: Option<String>,
        log_filter: Option<String>,
    ) -> Result<Self, Error> {
        let seed = match seed.as_deref().map(str::trim) {
            None | Some("") => Seed::default(),
            Some(v) if v.eq_ignore_ascii_case("demo") => Seed::Demo,
            Some(v) if v.eq_ignore_ascii_case("empty") => Seed::Empty,
            Some(v) => {
                return Err(Error::Config {
                    var: "KANBAN_SEED",
                    msg: format!("expected demo or empty, got {v:?}"),
                });
            }
        };

        let log_file = log_file.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            }
        });

        let log_filter = match log_filter {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => DEFAULT_LOG_FILTER.to_string(),
        };

        Ok(Self {
            seed,
            log_file,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = Config::from_parts(None, None, None).unwrap();

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = Config::from_parts(
            Some(" ".to_string()),
            Some("  ".to_string()),
            Some("".to_string()),
        )
        .unwrap();

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn parses_seed_case_insensitively() {
        let cfg = Config::from_parts(Some("EMPTY".to_string()), None, None).unwrap();
        assert_eq!(cfg.seed, Seed::Empty);
        assert_eq!(cfg.seed.board().card_count(), 0);

        let cfg = Config::from_parts(Some("demo".to_string()), None, None).unwrap();
        assert_eq!(cfg.seed.board().card_count(), 2);
    }

    #[test]
    fn unknown_seed_is_config_error() {
        let err = Config::from_parts(Some("full".to_string()), None, None).unwrap_err();

        match err {
            Error::Config { var, .. } => assert_eq!(var, "KANBAN_SEED"),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn keeps_log_file_and_filter() {
        let cfg = Config::from_parts(
            None,
            Some("/tmp/kanban.log".to_string()),
            Some("kanban=debug".to_string()),
        )
        .unwrap();

        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/kanban.log")));
        assert_eq!(cfg.log_filter, "kanban=debug");
    }
}
