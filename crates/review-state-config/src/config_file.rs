use std::path::PathBuf;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE: &str = ".review-state.toml";

const APP_NAME: &str = "review-state";

/// Load config file content from CWD first, then the user config directory
///
/// Searches for the config in:
/// 1. Current working directory as .review-state.toml
/// 2. `<config_dir>/review-state/config.toml`
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(user_config) = user_config_path() {
        if let Ok(content) = std::fs::read_to_string(&user_config) {
            log::debug!("Loaded config from {}", user_config.display());
            return Some(content);
        }
    }

    None
}

/// Path of the config file inside the platform config directory
///
/// ~/.config/review-state/config.toml on Linux,
/// ~/Library/Application Support/review-state/config.toml on macOS
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
}
