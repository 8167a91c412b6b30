//! Exit status for mathmysteryctl

use mathmystery_common::MysteryError;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when input data (mode, answer script) is unusable
pub const EXIT_INVALID_INPUT: i32 = 65;

/// Exit code when the config file cannot be read or parsed
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Map a failure to its exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MysteryError>() {
        Some(MysteryError::Toml(_)) => EXIT_CONFIG_ERROR,
        Some(MysteryError::InvalidMode(_)) => EXIT_INVALID_INPUT,
        _ => EXIT_GENERAL_ERROR,
    }
}
