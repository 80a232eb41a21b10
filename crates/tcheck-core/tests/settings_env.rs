//! Environment overrides live in their own test binary with a single test,
//! since the process environment is shared between threads.

use std::env;

use tcheck_core::errors::codes;
use tcheck_core::settings::{ENV_FILE_CHUNK_SIZE, ENV_MAX_MISMATCHES};
use tcheck_core::Settings;

fn clear() {
    for name in ["NO_COLOR", ENV_MAX_MISMATCHES, ENV_FILE_CHUNK_SIZE] {
        env::remove_var(name);
    }
}

#[test]
fn environment_overrides_defaults() {
    clear();
    assert_eq!(Settings::from_env().expect("defaults"), Settings::default());

    env::set_var("NO_COLOR", "1");
    env::set_var(ENV_MAX_MISMATCHES, "7");
    env::set_var(ENV_FILE_CHUNK_SIZE, " 128 ");
    let settings = Settings::from_env().expect("overrides");
    assert!(!settings.colored_text_diff);
    assert_eq!(settings.max_consecutive_mismatches, 7);
    assert_eq!(settings.file_chunk_size, 128);

    // an empty NO_COLOR does not count
    env::set_var("NO_COLOR", "");
    assert!(Settings::from_env().expect("empty no_color").colored_text_diff);

    env::set_var(ENV_MAX_MISMATCHES, "many");
    let err = Settings::from_env().unwrap_err();
    assert_eq!(err.info().code, codes::SETTINGS_INVALID);
    assert_eq!(err.info().context.get("variable").map(String::as_str), Some(ENV_MAX_MISMATCHES));
    assert_eq!(err.info().context.get("value").map(String::as_str), Some("many"));

    env::remove_var(ENV_MAX_MISMATCHES);
    env::set_var(ENV_FILE_CHUNK_SIZE, "0");
    let err = Settings::from_env().unwrap_err();
    assert_eq!(err.info().code, codes::SETTINGS_INVALID);

    clear();
}
