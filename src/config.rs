use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Pathlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the analytics store written by the refresh batch.
pub const STORE_FILE: &str = "pathway_analytics.db";

/// Get the application data directory
/// ~/Pathlens/ on all platforms (user-visible, shared with the refresh batch)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Pathlens")
}

/// Default location of the analytics store.
pub fn default_store_path() -> PathBuf {
    app_data_dir().join(STORE_FILE)
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "pathlens=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Pathlens"));
    }

    #[test]
    fn store_path_under_app_data() {
        let store = default_store_path();
        assert!(store.starts_with(app_data_dir()));
        assert!(store.ends_with(STORE_FILE));
    }
}
