//! Service adapters: OS specific implementations (IO).

pub mod dirs;
pub mod keybinding;
pub mod settings;

pub use dirs::{app_dir, ensure_log_dir, get_log_dir, DirKind};
pub use keybinding::{parse_keybinding, KeybindingService};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, SettingsFile,
};
