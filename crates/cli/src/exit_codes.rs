//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                              |
//! |------|------------------------------------------------------|
//! | 0    | Success                                              |
//! | 1    | General error (unspecified)                          |
//! | 2    | CLI usage error (bad args, no input files)           |
//! | 3    | Input file unreadable or in an unsupported format    |
//! | 4    | Policy file invalid                                  |
//! | 5    | Conflicting results present (`--fail-on-conflicts`)  |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

/// An input file could not be read, decoded, or is not a table format.
pub const EXIT_IO: u8 = 3;

/// Policy TOML failed to parse or validate.
pub const EXIT_POLICY_INVALID: u8 = 4;

/// Classification produced conflicting results and `--fail-on-conflicts` was set.
pub const EXIT_CONFLICTS: u8 = 5;
