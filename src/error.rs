// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),    // Creating the window failed
    WindowUpdate(String),  // Pushing the buffer to the window failed (a failed blit)
    BufferAlloc(String),   // The pattern buffer could not be allocated
    Config(String),        // Reading or validating the config failed
    PatternExport(String), // Writing the pattern PNG failed
    Present(String),       // Showing the report / reading the user's answer failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::BufferAlloc(s) => write!(f, "Buffer allocation error: {s}"),
            Error::Config(s) => write!(f, "Config error: {s}"),
            Error::PatternExport(s) => write!(f, "Pattern export error: {s}"),
            Error::Present(s) => write!(f, "Report error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
