use crate::error::{Result, TixError};
use crate::model::User;
use console::Term;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WIDTH: usize = 80;

/// Everything rendering depends on, fixed at printer construction.
///
/// Immutable by design: the printer never consults ambient globals, so
/// concurrent rendering with a shared config is safe.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Target terminal width in cells.
    pub width: usize,
    /// Whether to emit ANSI color. Plain output has identical display widths.
    pub use_color: bool,
    /// The viewing user, for the assigned-to-me status override.
    pub me: Option<User>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            use_color: false,
            me: None,
        }
    }
}

impl RenderConfig {
    /// Default config with color support detected from stdout.
    pub fn detect() -> Self {
        Self {
            use_color: Term::stdout().features().colors_supported(),
            ..Self::default()
        }
    }
}

/// Persistent configuration for tix, stored in <config dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TixConfig {
    /// Terminal width for rendered output
    #[serde(default = "default_width")]
    pub width: usize,

    /// Force color on/off; absent means auto-detect from the terminal
    #[serde(default)]
    pub color: Option<bool>,

    /// Tracker account name of the viewer (for the assigned-to-me style)
    #[serde(default)]
    pub user: Option<String>,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for TixConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: None,
            user: None,
        }
    }
}

impl TixConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TixError::Io)?;
        let config: TixConfig = serde_json::from_str(&content).map_err(TixError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TixError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TixError::Serialization)?;
        fs::write(config_path, content).map_err(TixError::Io)?;
        Ok(())
    }

    /// Resolves the file config into a concrete render config, auto-detecting
    /// color support when the file does not force it either way.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            use_color: self
                .color
                .unwrap_or_else(|| Term::stdout().features().colors_supported()),
            me: self.user.as_deref().map(User::new),
        }
    }
}
