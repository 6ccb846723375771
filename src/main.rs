//! Usage: `codearea [--key <binding>]... [script]...`
//!
//! Loads each script as a document, then feeds every `--key` binding
//! (e.g. `ctrl+up`, `ctrl+n`, `x`) through the keymap to the current document.

use std::{env, fs, io};

use codearea::core::Key;
use codearea::kernel::services::adapters::{
    ensure_settings_file, load_settings, parse_keybinding, KeybindingService,
};
use codearea::kernel::services::ports::Selector;
use codearea::kernel::CodeArea;

mod logging;

struct Args {
    paths: Vec<String>,
    keys: Vec<Key>,
}

fn parse_args() -> io::Result<Args> {
    let mut args = Args {
        paths: Vec::new(),
        keys: Vec::new(),
    };
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg != "--key" {
            args.paths.push(arg);
            continue;
        }
        let value = iter.next().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "--key needs a binding")
        })?;
        let key = parse_keybinding(&value).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid key binding: {value}"),
            )
        })?;
        args.keys.push(key);
    }
    Ok(args)
}

fn main() -> io::Result<()> {
    let logging = logging::init();
    let args = parse_args()?;

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let keymap = KeybindingService::with_settings(&settings);
    let mut area = CodeArea::headless(settings.editor);

    if args.paths.is_empty() {
        area.new_document();
    }
    for path in &args.paths {
        let text = fs::read_to_string(path)?;
        let id = area.add(&text);
        tracing::info!(path = %path, doc = %id, "loaded script");
    }

    for key in args.keys {
        let (changed, effects) = area.handle_key(&keymap, key);
        tracing::debug!(?key, changed, effects = effects.len(), "key handled");
    }

    let current = area.selector().current_index();
    for (index, doc) in area.documents().iter().enumerate() {
        let marker = if Some(index) == current { '*' } else { ' ' };
        println!("{} {:>3}  {}  {}", marker, index, doc.id, doc.title);
    }

    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "done");
    }
    Ok(())
}
