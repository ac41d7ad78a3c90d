// The timed copy loop: drain input, then time one blit + flush, keep the fastest.
// Only the fastest frame counts, so a frame slowed by the OS scheduler can't
// drag the result down.

use crate::clock::Clock;
use crate::error::Error;
use crate::report::{Presenter, Report, UserChoice};
use crate::surface::{Event, EventSource, Surface};
use crate::types::{PixelBuffer, Ticks};
use log::{debug, info, trace, warn};

/// Where the loop is in its life. Stop requests take effect at the next
/// iteration boundary, never in the middle of a timed blit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    StopRequested,
    Stopped,
}

/// Running minimum of per-frame blit times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinLatency {
    best: Option<Ticks>, // None = no sample yet
    samples: u64,
}

impl MinLatency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one sample. Returns true if it became the new minimum.
    pub fn record(&mut self, elapsed: Ticks) -> bool {
        self.samples += 1;
        match self.best {
            Some(best) if elapsed >= best => false,
            _ => {
                self.best = Some(elapsed);
                true
            }
        }
    }

    pub fn best(&self) -> Option<Ticks> {
        self.best
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }
}

/// What `CopyLoop::run` hands back once the loop is stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub best: Option<Ticks>,
    pub samples: u64,
    pub report: Option<Report>,
}

/// Owns the window, the pattern buffer and the clock for the whole run.
pub struct CopyLoop<W, C, P> {
    window: W,
    buffer: PixelBuffer,
    clock: C,
    presenter: P,
    min: MinLatency,
    state: RunState,
}

impl<W, C, P> CopyLoop<W, C, P>
where
    W: Surface + EventSource,
    C: Clock,
    P: Presenter,
{
    pub fn new(window: W, buffer: PixelBuffer, clock: C, presenter: P) -> Self {
        Self { window, buffer, clock, presenter, min: MinLatency::new(), state: RunState::Running }
    }

    /// Throughput from the current minimum; `None` until a usable sample exists.
    pub fn current_report(&self) -> Option<Report> {
        Report::compute(self.min.best(), self.clock.frequency(), self.buffer.dims())
    }

    /// Spin until the user stops the run. Any blit or window error ends it.
    pub fn run(&mut self) -> Result<RunSummary, Error> {
        let dims = self.buffer.dims();
        info!(
            "Blitting {}x{} ({} bytes/frame); clock at {} ticks/sec",
            dims.width,
            dims.height,
            dims.frame_bytes(),
            self.clock.frequency()
        );

        while self.step()? != RunState::Stopped {}

        info!("Stopped after {} timed frames", self.min.samples());
        Ok(RunSummary {
            best: self.min.best(),
            samples: self.min.samples(),
            report: self.current_report(),
        })
    }

    /// One iteration: drain events, then (unless a stop came in) one timed blit.
    pub fn step(&mut self) -> Result<RunState, Error> {
        if self.state == RunState::Stopped {
            return Ok(self.state);
        }

        /* 1) Empty the event queue. Not timed. */
        for event in self.window.poll_events()? {
            self.handle_event(event)?;
        }

        if self.state == RunState::StopRequested {
            self.state = RunState::Stopped;
            return Ok(self.state);
        }

        /* 2..5) t0, blit + flush, t1, fold into the minimum. */
        let elapsed = self.timed_blit()?;
        if self.min.record(elapsed) {
            debug!("New best frame: {elapsed} ticks (sample {})", self.min.samples());
        } else {
            trace!("Frame: {elapsed} ticks");
        }

        Ok(self.state)
    }

    fn timed_blit(&mut self) -> Result<Ticks, Error> {
        let t0 = self.clock.now();
        self.window.blit(&self.buffer)?;
        // Without the flush we'd only time how long it takes to queue the copy.
        self.window.flush()?;
        let t1 = self.clock.now();
        Ok(t1.saturating_sub(t0))
    }

    fn handle_event(&mut self, event: Event) -> Result<(), Error> {
        match event {
            Event::CloseRequested => self.request_stop(),
            Event::ReportRequested => self.report()?,
            Event::Other => {}
        }
        Ok(())
    }

    fn report(&mut self) -> Result<(), Error> {
        let report = self.current_report();
        match &report {
            Some(r) => {
                info!("{r}");
                self.window.show_report(r);
            }
            None => warn!("Report requested before any frame was measured"),
        }

        if self.presenter.present(report.as_ref())? == UserChoice::Stop {
            info!("Stop chosen from the report");
            self.request_stop();
        }
        Ok(())
    }

    fn request_stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::StopRequested;
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> RunState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn min_latency(&self) -> MinLatency {
        self.min
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> &W {
        &self.window
    }

    #[cfg(test)]
    pub(crate) fn presenter(&self) -> &P {
        &self.presenter
    }
}
