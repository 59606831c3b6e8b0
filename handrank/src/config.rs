use std::env;
use std::path::PathBuf;

/// Default file name for the standard (52-card, no joker) rank table.
pub const DEFAULT_STANDARD_FILE: &str = "standard_handranks.dat";

/// Default file name for the joker (56-card) rank table.
pub const DEFAULT_JOKER_FILE: &str = "handranks.dat";

/// Where the rank tables live and whether they should be built eagerly.
///
/// `dir` defaults to the `HANDRANK_TABLE_DIR` environment variable, falling
/// back to the current directory, mirroring how the original C++ took its
/// table directory as a command-line argument to its `generate` step.
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub standard_file: String,
    pub joker_file: String,
    /// If set, [`crate::init`] builds and persists missing tables
    /// immediately. Otherwise table construction is deferred to the first
    /// [`crate::lookup`] call that needs it.
    pub eager: bool,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Config {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn standard_path(&self) -> PathBuf {
        self.dir.join(&self.standard_file)
    }

    pub fn joker_path(&self) -> PathBuf {
        self.dir.join(&self.joker_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        let dir = env::var_os("HANDRANK_TABLE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Config {
            dir,
            standard_file: DEFAULT_STANDARD_FILE.to_string(),
            joker_file: DEFAULT_JOKER_FILE.to_string(),
            eager: false,
        }
    }
}
