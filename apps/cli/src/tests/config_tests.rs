use std::collections::HashMap;

use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn missing_file_and_env_yield_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");

    let settings = load_settings_with(&dir.path().join("client.toml"), env_from(&[]))
        .expect("settings");

    assert_eq!(settings, Settings::default());
    assert_eq!(settings.notification_duration(), NOTIFICATION_DURATION);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        "summarizer_url = \"https://summaries.example\"\nnotification_ms = 1200\n",
    )
    .expect("write config");

    let settings = load_settings_with(&path, env_from(&[])).expect("settings");

    assert_eq!(settings.summarizer_url, "https://summaries.example");
    assert_eq!(settings.weather_url, Settings::default().weather_url);
    assert_eq!(settings.notification_ms, 1200);
}

#[test]
fn prefixed_env_wins_over_bare_env_and_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    fs::write(&path, "weather_url = \"http://file.example\"\n").expect("write config");

    let settings = load_settings_with(
        &path,
        env_from(&[
            ("WEATHER_URL", "http://bare.example"),
            ("APP__WEATHER_URL", "http://prefixed.example"),
            ("DOWNLOAD_DIR", "/tmp/summaries"),
            ("APP__NOTIFICATION_MS", "500"),
        ]),
    )
    .expect("settings");

    assert_eq!(settings.weather_url, "http://prefixed.example");
    assert_eq!(settings.download_dir, PathBuf::from("/tmp/summaries"));
    assert_eq!(settings.notification_duration(), Duration::from_millis(500));
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");

    let err = load_settings_with(&path, env_from(&[("SUMMARIZER_URL", "localhost:5000")]))
        .expect_err("scheme-less url");
    assert!(err.to_string().contains("summarizer_url"));

    assert!(load_settings_with(&path, env_from(&[("APP__NOTIFICATION_MS", "soon")])).is_err());

    fs::write(&path, "bind_addr = \"0.0.0.0\"\n").expect("write config");
    assert!(load_settings_with(&path, env_from(&[])).is_err());
}
