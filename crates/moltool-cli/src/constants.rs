//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Standard input ended while a prompt was waiting.
    pub const INPUT_CLOSED: i32 = 6;

    /// Directory creation fell back to the base path.
    pub const DEGRADED: i32 = 7;
}

/// Banner title printed before interactive commands.
pub const PROGRAM_TITLE: &str = "Basic Kit";
