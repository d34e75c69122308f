use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _env = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.session.file.as_str(), eq(crate::DEFAULT_SESSION_FILE));
    assert_that!(
        config.session.verify_timeout_secs,
        eq(crate::DEFAULT_VERIFY_TIMEOUT_SECS)
    );
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [logging]
            level = "debug"
            colored = false

            [session]
            file = "current-user.json"
            verify_timeout_secs = 10
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.file.as_str(), eq("current-user.json"));
    assert_that!(config.session.verify_timeout_secs, eq(10));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins() {
    // Given
    let _env = setup_config_dir();
    let _file = EnvGuard::set("SD_SESSION_FILE", "override.json");
    let _timeout = EnvGuard::set("SD_VERIFY_TIMEOUT_SECS", "30");
    let _level = EnvGuard::set("SD_LOG_LEVEL", "trace");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.file.as_str(), eq("override.json"));
    assert_that!(config.session.verify_timeout_secs, eq(30));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Trace));
}

#[test]
#[serial]
fn given_unparseable_env_override_when_load_then_value_kept() {
    // Given
    let _env = setup_config_dir();
    let _timeout = EnvGuard::set("SD_VERIFY_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(
        config.session.verify_timeout_secs,
        eq(crate::DEFAULT_VERIFY_TIMEOUT_SECS)
    );
}

// =========================================================================
// Error Path Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[session\nfile = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result.is_err(), eq(true));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("does/not/exist");
    let _dir = EnvGuard::set("SD_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}

#[test]
#[serial]
fn given_config_when_session_path_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.session_path().unwrap();

    // Then
    assert_that!(path.starts_with(temp.path()), eq(true));
    assert_that!(path.ends_with(crate::DEFAULT_SESSION_FILE), eq(true));
}
