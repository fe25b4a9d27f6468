use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const ENV_DATA_DIR: &str = "SIMPLE_DB_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";
const HISTORY_FILE_NAME: &str = ".simpledb_history";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Where REPL history is persisted; `None` when no home directory
    /// could be resolved.
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from the environment: the data directory
    /// comes from `SIMPLE_DB_DATA_DIR` (default `./data`) and is created
    /// if missing.
    pub fn from_env() -> io::Result<Self> {
        let data_dir = match env::var(ENV_DATA_DIR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_DATA_DIR),
        };
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)?;
            println!("Created data directory: {}", data_dir.display());
        }

        let history_file = dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME));

        Ok(Self {
            data_dir,
            history_file,
        })
    }
}
