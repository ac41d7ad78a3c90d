//! Run configuration for the blit benchmark.
//!
//! Every field has a default matching the classic test (a 640x480 borderless
//! topmost window at 256,16), so running without a config file reproduces it.
//! A JSON file can override any subset of the keys.

use crate::error::Error;
use crate::types::Dimensions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame width in pixels; window and pattern buffer share it.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Window title (hidden when `borderless`).
    pub title: String,
    /// Window position on screen.
    pub position_x: isize,
    pub position_y: isize,
    /// No title bar or frame.
    pub borderless: bool,
    /// Keep the window above others so it isn't occluded mid-run.
    pub topmost: bool,
    /// Ask "continue or stop?" on the console after each report.
    pub prompt: bool,
    /// If set, the test pattern is written here as a PNG before the run.
    pub pattern_png: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            title: "Blit Bench".to_string(),
            position_x: 256,
            position_y: 16,
            borderless: true,
            topmost: true,
            prompt: true,
            pattern_png: None,
        }
    }
}

impl Config {
    /// Defaults when `path` is `None`, otherwise the file merged over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let config = match path {
            None => Self::default(),
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
                Self::from_json(&text)
                    .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "frame size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.dimensions().checked_frame_bytes().is_none() {
            return Err(Error::Config(format!(
                "frame size {}x{} is too large to allocate",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// The effective config as one line of JSON, for the startup log.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}
