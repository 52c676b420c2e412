// src/config.rs
use serde::Deserialize;
use std::sync::OnceLock;

/// Global config — loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub keys: Keys,
    pub paths: Paths,
    pub features: Features,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Keys {
    /// Passphrase the 256-bit cipher key is derived from
    pub cipher_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub notes_db: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub use_dev_keys: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("ENOTE_CONFIG").unwrap_or_else(|_| "dev-config.toml".to_string());

        let mut conf: Config = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read config file");
            toml::from_str(&content).expect("Invalid TOML in config file")
        } else {
            eprintln!("Warning: {config_path} not found — using built-in defaults");
            Config {
                keys: Keys {
                    cipher_key: "dev-notes-master-passphrase-2026".into(),
                },
                paths: Paths {
                    notes_db: "tests/data/notes.db".into(),
                },
                features: Features { use_dev_keys: true },
            }
        };

        // Critical for tests: force real env-var keys instead of dev keys
        if std::env::var("ENOTE_TEST_MODE").is_ok() {
            conf.features.use_dev_keys = false;
        }

        conf
    })
}
