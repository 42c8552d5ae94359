/// Exit code: success.
pub const SUCCESS: i32 = 0;

/// Exit code: runtime error (stdout could not be written).
pub const RUNTIME_ERROR: i32 = 1;

/// Exit code: usage / input error (bad arguments, non-positive total).
///
/// Matches the code clap uses for its own parse errors.
pub const USAGE_ERROR: i32 = 2;
