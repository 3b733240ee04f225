/// Input format
pub const DEFAULT_DELIMITER: u8 = b',';
pub const DATE_SEPARATOR: char = '/';
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Report defaults
pub const DEFAULT_PRECISION: usize = 3;
pub const UNDEFINED_VALUE: &str = "n/a";

/// Configuration
pub const ENV_PREFIX: &str = "SEASONAL";
