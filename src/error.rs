use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {var}: {msg}")]
    Config { var: &'static str, msg: String },
    #[error("{op} failed for {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("terminal: {0}")]
    Terminal(#[from] io::Error),
    #[error("telemetry: {0}")]
    Telemetry(String),
}
