//! Module metadata from installed SWORD `.conf` files.
//!
//! Only consulted for modules outside the built-in Dutch list, and only
//! when no `--lang` or settings `lang` was given.
use bible_fmt::books::Locale;
use std::fs;
use std::path::PathBuf;

/// `mods.d` directories in search order: `$SWORD_PATH`, `~/.sword`, then the
/// system share.
pub fn conf_dirs() -> Vec<PathBuf> {
    let mut found = Vec::new();
    if let Some(root) = std::env::var_os("SWORD_PATH") {
        found.push(PathBuf::from(root).join("mods.d"));
    }
    if let Some(home) = dirs::home_dir() {
        found.push(home.join(".sword").join("mods.d"));
    }
    found.push(PathBuf::from("/usr/share/sword/mods.d"));
    found
}

/// Lowercased `Lang=` value from the `.conf` file that declares `[module]`.
pub fn module_language(module: &str, search: &[PathBuf]) -> Option<String> {
    let header = format!("[{module}]");
    for dir in search {
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "conf"))
            .collect();
        paths.sort();
        for path in paths {
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            let text = String::from_utf8_lossy(&bytes);
            if !text.lines().any(|line| line.trim() == header) {
                continue;
            }
            tracing::debug!(path = %path.display(), module, "found module conf");
            return text
                .lines()
                .find_map(|line| line.strip_prefix("Lang="))
                .map(|lang| lang.trim().to_lowercase());
        }
    }
    None
}

pub fn locale_from_language(lang: &str) -> Option<Locale> {
    (lang.starts_with("nl") || lang.starts_with("dut")).then_some(Locale::Dutch)
}

/// Dutch for an unlisted module whose conf declares a Dutch language.
pub fn conf_locale(module: &str, search: &[PathBuf]) -> Option<Locale> {
    if Locale::for_module(Some(module)) == Locale::Dutch {
        return None;
    }
    module_language(module, search)
        .as_deref()
        .and_then(locale_from_language)
}
