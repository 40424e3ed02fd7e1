pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DEVIATION_CHARTS: bool = false;
pub const DEFAULT_DARK: bool = false;
pub const DEFAULT_JSON: bool = false;
