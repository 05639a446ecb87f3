use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_crest_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CREST_CONFIG_PATH", "/tmp/crest-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/crest-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("crest")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("crest")
            .join("config.toml")
    );
}

#[test]
fn defaults_are_sane_and_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert!(s.playback.autoplay_on_ready);
    assert_eq!(s.waveform.resolution, 480);
    assert_eq!(s.playlist.assets_dir, std::path::PathBuf::from("assets"));
    assert_eq!(s.ui.time_separator, " / ");
}

#[test]
fn validate_rejects_tiny_waveform_resolution() {
    let mut s = Settings::default();
    s.waveform.resolution = 4;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[ui]
header_text = "hello"
time_separator = " | "

[waveform]
resolution = 128

[playback]
autoplay_on_ready = false

[playlist]
assets_dir = "/srv/beats"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CREST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("CREST__WAVEFORM__RESOLUTION");

    let s = Settings::load().unwrap();
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.time_separator, " | ");
    assert_eq!(s.waveform.resolution, 128);
    assert!(!s.playback.autoplay_on_ready);
    assert_eq!(s.playlist.assets_dir, std::path::PathBuf::from("/srv/beats"));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[waveform]
resolution = 128
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CREST_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CREST__WAVEFORM__RESOLUTION", "64");

    let s = Settings::load().unwrap();
    assert_eq!(s.waveform.resolution, 64);
}
