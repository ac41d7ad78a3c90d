// The pieces of the OS the timed loop talks to.
// `draw::Drawer` implements them with a minifb window; tests use `mock`.

use crate::error::Error;
use crate::report::Report;
use crate::types::PixelBuffer;

/// What the user did since the last poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CloseRequested,
    ReportRequested,
    Other,
}

/// On-screen blit target with the same dimensions as the pattern buffer.
pub trait Surface {
    /// Copy the whole buffer to the drawable.
    fn blit(&mut self, buffer: &PixelBuffer) -> Result<(), Error>;

    /// Block until every previous blit is committed.
    fn flush(&mut self) -> Result<(), Error>;

    /// Optionally show the latest result on the surface itself.
    fn show_report(&mut self, _report: &Report) {}
}

/// Non-blocking event queue. Returns an empty vec when nothing is pending.
pub trait EventSource {
    fn poll_events(&mut self) -> Result<Vec<Event>, Error>;
}
