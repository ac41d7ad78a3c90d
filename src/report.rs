// Turns the best (smallest) blit time into frames/sec and MB/sec,
// then shows it to the user and asks whether to keep going.

use crate::error::Error;
use crate::types::{Dimensions, Ticks};
use std::fmt::{self, Display};
use std::io::{BufRead, Write};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Best-case throughput derived from the running minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub fps: f64,
    pub bandwidth_mb: f64,
    pub dims: Dimensions,
}

impl Report {
    /// `None` means "no data": no sample yet, or a sample too short for the
    /// clock to resolve. Never divides by the sentinel or by zero.
    pub fn compute(minimum: Option<Ticks>, frequency: u64, dims: Dimensions) -> Option<Report> {
        let m = minimum.filter(|&m| m > 0)?;
        let fps = frequency as f64 / m as f64;
        let bandwidth_mb = fps * dims.frame_bytes() as f64 / BYTES_PER_MB;
        Some(Report { fps, bandwidth_mb, dims })
    }

    /// Dialog-style title line.
    pub fn heading(&self) -> String {
        format!(
            "Performance Results ({}x{} {}-bit ARGB top-down)",
            self.dims.width,
            self.dims.height,
            self.dims.bytes_per_pixel * 8
        )
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best is {:.1} frames per second ({:.1} MB/sec bandwidth).",
            self.fps, self.bandwidth_mb
        )
    }
}

/// What the user picked after seeing a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    Continue,
    Stop,
}

/// Shows a report (or the lack of one) and returns the user's choice.
pub trait Presenter {
    fn present(&mut self, report: Option<&Report>) -> Result<UserChoice, Error>;
}

/// Prints to a writer and, when `prompt` is on, reads one answer line.
pub struct ConsolePresenter<R, W> {
    input: R,
    output: W,
    prompt: bool,
}

impl ConsolePresenter<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio(prompt: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), prompt)
    }
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    pub fn new(input: R, output: W, prompt: bool) -> Self {
        Self { input, output, prompt }
    }

    fn ask(&mut self) -> Result<UserChoice, Error> {
        write!(self.output, "[Enter] keep running, [q] stop: ").map_err(io_err)?;
        self.output.flush().map_err(io_err)?;

        let mut line = String::new();
        // EOF reads 0 bytes and falls through to Continue.
        self.input.read_line(&mut line).map_err(io_err)?;
        Ok(parse_choice(&line))
    }
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn present(&mut self, report: Option<&Report>) -> Result<UserChoice, Error> {
        match report {
            Some(r) => {
                writeln!(self.output, "{}", r.heading()).map_err(io_err)?;
                writeln!(self.output, "  {r}").map_err(io_err)?;
            }
            None => {
                writeln!(self.output, "No frames measured yet.").map_err(io_err)?;
            }
        }

        if self.prompt { self.ask() } else { Ok(UserChoice::Continue) }
    }
}

/// `q`, `n` or `stop` (any case) stop the run; everything else continues.
pub fn parse_choice(line: &str) -> UserChoice {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "n" | "stop" => UserChoice::Stop,
        _ => UserChoice::Continue,
    }
}

fn io_err(e: std::io::Error) -> Error {
    Error::Present(e.to_string())
}
