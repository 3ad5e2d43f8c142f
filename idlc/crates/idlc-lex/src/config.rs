//! Lexer configuration.
//!
//! A [`LexerConfig`] chooses which token kinds are suppressed and how
//! identifier values are decoded. It can be built in code or loaded from a
//! TOML file:
//!
//! ```toml
//! # idlc.toml
//! suppressed = ["COMMENT"]
//! strip_identifier_underscore = true
//! ```
//!
//! Kinds are written by their token type name (see
//! [`TokenKind::from_name`]).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::token::TokenKind;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "idlc.toml";

/// Options controlling what the lexer emits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    /// Kinds that are scanned (and count lines) but never returned.
    #[serde(default = "default_suppressed")]
    pub suppressed: Vec<TokenKind>,

    /// Remove one leading `_` from identifier values.
    #[serde(default = "default_true")]
    pub strip_identifier_underscore: bool,
}

fn default_suppressed() -> Vec<TokenKind> {
    vec![TokenKind::Comment]
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            suppressed: default_suppressed(),
            strip_identifier_underscore: true,
        }
    }
}

impl LexerConfig {
    /// A configuration that suppresses nothing, so comments are returned.
    pub fn emit_comments() -> Self {
        Self {
            suppressed: Vec::new(),
            ..Self::default()
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::{LexerConfig, TokenKind};
    ///
    /// let config = LexerConfig::from_toml_str(r#"suppressed = ["COMMENT", ";"]"#).unwrap();
    /// assert_eq!(config.suppressed, vec![TokenKind::Comment, TokenKind::Semicolon]);
    /// assert!(config.strip_identifier_underscore);
    ///
    /// assert!(LexerConfig::from_toml_str(r#"suppressed = ["comment"]"#).is_err());
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads configuration from a specific path.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Saves configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> ConfigResult<()> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(io_error)
    }

    /// Loads `idlc.toml` from `dir`, or the default configuration if the
    /// directory has none.
    pub fn discover(dir: &Path) -> ConfigResult<Self> {
        match Self::config_path_in(dir) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    fn config_path_in(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }
}
