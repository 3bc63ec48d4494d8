use std::time::{SystemTime, UNIX_EPOCH};

use readalong::config::{HighlighterConfig, CONFIG_ENV, CPM_ENV};
use readalong::error::{ConfigError, ScriptError};
use readalong::script::{load_script, Turn};

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "readalong_{}_{}",
        tag,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

// Env vars are process-wide, so every env case lives in this one test.
#[test]
fn test_from_env_file_and_rate_override() {
    let dir = scratch_dir("env");
    let path = dir.join("highlighter.json");
    std::fs::write(
        &path,
        r#"{ "characters_per_minute": 500, "transition_out_secs": 0.25 }"#,
    )
    .expect("write should succeed");

    std::env::remove_var(CPM_ENV);
    std::env::remove_var(CONFIG_ENV);
    assert_eq!(HighlighterConfig::from_env().unwrap(), HighlighterConfig::default());

    std::env::set_var(CONFIG_ENV, &path);
    let config = HighlighterConfig::from_env().unwrap();
    assert_eq!(config.characters_per_minute, 500.0);
    assert_eq!(config.transition_out_secs, 0.25);
    assert_eq!(config.transition_in_secs, 0.05, "Missing keys keep defaults");

    std::env::set_var(CPM_ENV, " 1200 ");
    let config = HighlighterConfig::from_env().unwrap();
    assert_eq!(config.characters_per_minute, 1200.0, "Override wins over the file");
    assert_eq!(config.transition_out_secs, 0.25);

    std::env::set_var(CPM_ENV, "fast");
    match HighlighterConfig::from_env() {
        Err(ConfigError::InvalidRateOverride(raw)) => assert_eq!(raw, "fast"),
        other => panic!("expected InvalidRateOverride, got {:?}", other),
    }

    std::env::set_var(CPM_ENV, "-10");
    assert!(matches!(
        HighlighterConfig::from_env(),
        Err(ConfigError::InvalidRate(v)) if v == -10.0
    ));

    std::env::remove_var(CPM_ENV);
    std::env::set_var(CONFIG_ENV, dir.join("missing.json"));
    assert!(matches!(HighlighterConfig::from_env(), Err(ConfigError::Read(_))));

    std::env::remove_var(CONFIG_ENV);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_script_from_file() {
    let dir = scratch_dir("script");
    let path = dir.join("script.json");
    std::fs::write(
        &path,
        r#"[{"speaker": "Host", "text": "Welcome back"}, {"speaker": "Guest", "text": "Thanks"}]"#,
    )
    .expect("write should succeed");

    let turns = load_script(&path).unwrap();
    assert_eq!(
        turns,
        vec![Turn::new("Host", "Welcome back"), Turn::new("Guest", "Thanks")]
    );

    std::fs::write(&path, "{ not a list").expect("write should succeed");
    assert!(matches!(load_script(&path), Err(ScriptError::Parse(_))));

    assert!(matches!(
        load_script(dir.join("missing.json")),
        Err(ScriptError::Read(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}
