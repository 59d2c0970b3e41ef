use std::env;
use std::path::PathBuf;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the server binds on.
    pub port: u16,
    /// Path of the JSON file holding all notes.
    pub notes_path: PathBuf,
}

impl Config {
    /// Build a config from the environment: `PORT` (default 3000) and
    /// `NOTES_FILE` (default `notes.json` in the working directory).
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        let notes_path = env::var("NOTES_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("notes.json"));

        Self { port, notes_path }
    }
}
