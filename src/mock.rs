// Scripted stand-ins for the window, clock and report dialog.

use crate::error::Error;
use crate::report::{Presenter, Report, UserChoice};
use crate::surface::{Event, EventSource, Surface};
use crate::types::{PixelBuffer, Ticks};
use std::cell::Cell;
use std::collections::VecDeque;

/// Hands out one batch of events per poll, then empty batches.
pub struct MockWindow {
    batches: VecDeque<Vec<Event>>,
    blits: usize,
    flushes: usize,
    fail_blit_at: Option<usize>,
    shown: Vec<Report>,
}

impl MockWindow {
    pub fn new(batches: Vec<Vec<Event>>) -> Self {
        Self { batches: batches.into(), blits: 0, flushes: 0, fail_blit_at: None, shown: Vec::new() }
    }

    /// Make the n-th blit (1-based) fail.
    pub fn fail_blit_at(mut self, n: usize) -> Self {
        self.fail_blit_at = Some(n);
        self
    }

    pub fn blits(&self) -> usize {
        self.blits
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn shown(&self) -> &[Report] {
        &self.shown
    }

    pub fn pending_batches(&self) -> usize {
        self.batches.len()
    }
}

impl Surface for MockWindow {
    fn blit(&mut self, buffer: &PixelBuffer) -> Result<(), Error> {
        if self.fail_blit_at == Some(self.blits + 1) {
            return Err(Error::WindowUpdate("mock blit failure".into()));
        }
        assert_eq!(buffer.pixels().len(), buffer.dims().pixel_count());
        self.blits += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        assert_eq!(self.flushes, self.blits - 1, "flush without a blit");
        self.flushes += 1;
        Ok(())
    }

    fn show_report(&mut self, report: &Report) {
        self.shown.push(*report);
    }
}

impl EventSource for MockWindow {
    fn poll_events(&mut self) -> Result<Vec<Event>, Error> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}

/// Returns the given readings in order; panics if the loop reads too many.
pub struct ScriptedClock {
    frequency: u64,
    readings: Vec<Ticks>,
    next: Cell<usize>,
}

impl ScriptedClock {
    pub fn new(frequency: u64, readings: &[Ticks]) -> Self {
        Self { frequency, readings: readings.to_vec(), next: Cell::new(0) }
    }
}

impl crate::clock::Clock for ScriptedClock {
    fn now(&self) -> Ticks {
        let i = self.next.get();
        self.next.set(i + 1);
        self.readings[i]
    }

    fn frequency(&self) -> u64 {
        self.frequency
    }
}

/// Records every report it is shown and answers from a script.
pub struct ScriptedPresenter {
    answers: VecDeque<UserChoice>,
    seen: Vec<Option<Report>>,
}

impl ScriptedPresenter {
    pub fn new(answers: &[UserChoice]) -> Self {
        Self { answers: answers.iter().copied().collect(), seen: Vec::new() }
    }

    pub fn seen(&self) -> &[Option<Report>] {
        &self.seen
    }
}

impl Presenter for ScriptedPresenter {
    fn present(&mut self, report: Option<&Report>) -> Result<UserChoice, Error> {
        self.seen.push(report.copied());
        Ok(self.answers.pop_front().unwrap_or(UserChoice::Continue))
    }
}
