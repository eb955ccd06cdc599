use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "CareMatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Named slot the doctor-answer store is persisted under.
pub const STORE_SLOT: &str = "doctorAnswers";

/// Environment override for the data directory (tests, portable installs).
pub const DATA_DIR_ENV: &str = "CAREMATCH_DATA_DIR";

/// Get the application data directory.
/// `$CAREMATCH_DATA_DIR` if set, otherwise ~/CareMatch/ on all platforms.
/// `None` when no home directory can be determined.
pub fn app_data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(APP_NAME))
}

/// File backing a named storage slot inside `data_dir`.
pub fn slot_path(data_dir: &std::path::Path, slot: &str) -> PathBuf {
    data_dir.join(format!("{slot}.json"))
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,carematch_lib=debug"
}
