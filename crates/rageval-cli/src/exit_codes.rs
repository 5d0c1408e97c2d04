//! Process exit codes. Part of the public contract of `rageval`.

use rageval_core::errors::RunError;

pub const SUCCESS: i32 = 0;
pub const FAILURES_FOUND: i32 = 1; // Only with --fail-on-failures
pub const CONFIG_ERROR: i32 = 2; // Bad flags, config file or dataset
pub const INFRA_ERROR: i32 = 3; // Judge unavailable or outputs not writable

pub fn exit_code_for(err: &RunError) -> i32 {
    if err.kind.is_config() {
        CONFIG_ERROR
    } else {
        INFRA_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_codes() {
        assert_eq!(exit_code_for(&RunError::invalid_args("x")), CONFIG_ERROR);
        assert_eq!(
            exit_code_for(&RunError::missing_input("a.json", "gone")),
            CONFIG_ERROR
        );
        assert_eq!(
            exit_code_for(&RunError::judge_unavailable(None, "down")),
            INFRA_ERROR
        );
        assert_eq!(
            exit_code_for(&RunError::output_write("out", "read-only")),
            INFRA_ERROR
        );
    }
}
