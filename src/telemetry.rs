use std::{
    fs::{self, File, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::Error};

/// Installs the global subscriber. Returns false when logging is disabled.
///
/// The terminal belongs to the UI, so events only ever go to the log file.
pub fn init(cfg: &Config) -> Result<bool, Error> {
    let Some(path) = cfg.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&cfg.log_filter).map_err(|e| Error::Config {
        var: "KANBAN_LOG",
        msg: e.to_string(),
    })?;
    let file = open_log(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Telemetry(e.to_string()))?;

    Ok(true)
}

fn open_log(path: &Path) -> Result<File, Error> {
    let map = |source: io::Error| Error::Io {
        op: "open_log",
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(map)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(map)
}
