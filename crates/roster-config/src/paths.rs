use std::path::PathBuf;

const APP_DIR: &str = "roster";
const CONFIG_FILE: &str = "config.toml";

/// `$XDG_CONFIG_HOME/roster`, else `$HOME/.config/roster`, else `./.config/roster`.
pub fn get_config_dir() -> PathBuf {
    resolve_config_dir(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE)
}

fn resolve_config_dir(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    // XDG requires an absolute path; relative values are ignored.
    let base = match xdg_config_home {
        Some(xdg) if xdg.is_absolute() => xdg,
        _ => home.unwrap_or_else(|| PathBuf::from(".")).join(".config"),
    };
    base.join(APP_DIR)
}
