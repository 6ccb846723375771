//! Per-user directories for codearea.
//!
//! | kind   | macOS                          | Linux                                   | Windows         |
//! |--------|--------------------------------|-----------------------------------------|-----------------|
//! | Data   | ~/Library/Application Support  | $XDG_DATA_HOME or ~/.local/share        | %APPDATA%       |
//! | Config | ~/Library/Application Support  | $XDG_CONFIG_HOME or ~/.config           | %APPDATA%       |
//!
//! Every path ends in a `codearea` subdirectory.

use std::path::PathBuf;

const APP_NAME: &str = "codearea";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Data,
    Config,
}

impl DirKind {
    /// Environment override checked before the home-relative fallback.
    fn env_override(self) -> Option<&'static str> {
        if cfg!(target_os = "windows") {
            return Some("APPDATA");
        }
        if cfg!(target_os = "linux") {
            return Some(match self {
                DirKind::Data => "XDG_DATA_HOME",
                DirKind::Config => "XDG_CONFIG_HOME",
            });
        }
        None
    }

    fn home_relative(self) -> Option<&'static str> {
        if cfg!(target_os = "macos") {
            return Some("Library/Application Support");
        }
        if cfg!(target_os = "linux") {
            return Some(match self {
                DirKind::Data => ".local/share",
                DirKind::Config => ".config",
            });
        }
        None
    }
}

pub fn app_dir(kind: DirKind) -> Option<PathBuf> {
    let from_env = kind
        .env_override()
        .and_then(|var| std::env::var_os(var))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);
    let base = match from_env {
        Some(base) => base,
        None => {
            let rel = kind.home_relative()?;
            PathBuf::from(std::env::var_os("HOME")?).join(rel)
        }
    };
    Some(base.join(APP_NAME))
}

pub fn get_log_dir() -> Option<PathBuf> {
    app_dir(DirKind::Data).map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
