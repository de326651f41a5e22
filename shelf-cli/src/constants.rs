/// Application name used for the config location and the default data directory.
pub const SHELF_CLI: &str = "shelf";

pub const DEFAULT_LOG_FILTER: &str = "shelf=info,shelf_core=info";
pub const VERBOSE_LOG_FILTER: &str = "shelf=debug,shelf_core=debug";
