// Window side of the benchmark.
// Visual effects provided here:
// 1) A fixed-size window that shows the test pattern on every frame.
// 2) The latest result written into the title bar after a report.
// Input: left click (release) or Space asks for a report, Esc or closing quits.

use crate::config::Config;
use crate::error::Error;
use crate::report::Report;
use crate::surface::{Event, EventSource, Surface};
use crate::types::{Dimensions, PixelBuffer};
use log::info;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    dims: Dimensions,
    left_button: ReleaseEdge,
}

impl Drawer {
    /// Create the blit target at the configured size and position.
    /// Visual: an empty window appears; no frame limiter, so it redraws flat out.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let dims = config.dimensions();
        let options = WindowOptions {
            borderless: config.borderless,
            topmost: config.topmost,
            ..WindowOptions::default()
        };
        let mut window = Window::new(&config.title, dims.width, dims.height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;

        window.set_position(config.position_x, config.position_y);
        // minifb caps updates by default; the benchmark must saturate the copy path.
        window.set_target_fps(0);

        info!(
            "Window {}x{} at ({}, {}), borderless={}, topmost={}",
            dims.width, dims.height, config.position_x, config.position_y, config.borderless, config.topmost
        );
        Ok(Self { window, dims, left_button: ReleaseEdge::default() })
    }
}

impl Surface for Drawer {
    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the pattern again.
    fn blit(&mut self, buffer: &PixelBuffer) -> Result<(), Error> {
        debug_assert_eq!(buffer.dims(), self.dims);
        self.window
            .update_with_buffer(buffer.pixels(), self.dims.width, self.dims.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    // minifb has no sync call: update_with_buffer ends with XFlush (not
    // XSync) on X11, so the frame is sent but not confirmed as drawn.
    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// Visual: the title bar shows e.g. "Best is 812.3 frames per second (...)".
    fn show_report(&mut self, report: &Report) {
        self.window.set_title(&report.to_string());
    }
}

impl EventSource for Drawer {
    // Reads the input state pumped by the last update_with_buffer. minifb
    // forbids mixing Window::update with it, so there's no separate pump here.
    fn poll_events(&mut self) -> Result<Vec<Event>, Error> {
        let mouse_down = self.window.get_mouse_down(MouseButton::Left);
        let input = InputSnapshot {
            open: self.window.is_open(),
            esc_down: self.window.is_key_down(Key::Escape),
            keys: self.window.get_keys_pressed(KeyRepeat::No),
            mouse_released: self.left_button.released(mouse_down),
            mouse_inside: self.window.get_mouse_pos(MouseMode::Discard).is_some(),
        };

        Ok(input.into_events())
    }
}

/// Turns "button held" samples into a single release per press.
#[derive(Default)]
struct ReleaseEdge {
    was_down: bool,
}

impl ReleaseEdge {
    fn released(&mut self, down: bool) -> bool {
        let released = self.was_down && !down;
        self.was_down = down;
        released
    }
}

/// Window state read in one poll, before it is turned into events.
struct InputSnapshot {
    open: bool,
    esc_down: bool,
    keys: Vec<Key>,
    mouse_released: bool,
    mouse_inside: bool,
}

impl InputSnapshot {
    fn into_events(self) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.open || self.esc_down {
            events.push(Event::CloseRequested);
        }
        for key in self.keys {
            events.push(match key {
                Key::Escape => continue, // already covered by esc_down
                Key::Space => Event::ReportRequested,
                _ => Event::Other,
            });
        }
        if self.mouse_released && self.mouse_inside {
            events.push(Event::ReportRequested);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> InputSnapshot {
        InputSnapshot { open: true, esc_down: false, keys: Vec::new(), mouse_released: false, mouse_inside: true }
    }

    #[test]
    fn idle_window_has_no_events() {
        assert!(idle().into_events().is_empty());
    }

    #[test]
    fn closed_window_or_escape_requests_close() {
        let closed = InputSnapshot { open: false, ..idle() };
        assert_eq!(closed.into_events(), vec![Event::CloseRequested]);

        let esc = InputSnapshot { esc_down: true, keys: vec![Key::Escape], ..idle() };
        assert_eq!(esc.into_events(), vec![Event::CloseRequested]);
    }

    #[test]
    fn click_release_inside_window_requests_report() {
        let click = InputSnapshot { mouse_released: true, ..idle() };
        assert_eq!(click.into_events(), vec![Event::ReportRequested]);

        let outside = InputSnapshot { mouse_released: true, mouse_inside: false, ..idle() };
        assert!(outside.into_events().is_empty());
    }

    #[test]
    fn one_report_per_click_across_polls() {
        // Button state as seen on successive polls: two separate clicks.
        let samples = [false, true, true, true, false, false, true, false, false];
        let mut edge = ReleaseEdge::default();

        let reports: usize = samples
            .iter()
            .map(|&down| {
                InputSnapshot { mouse_released: edge.released(down), ..idle() }
                    .into_events()
                    .into_iter()
                    .filter(|e| *e == Event::ReportRequested)
                    .count()
            })
            .sum();
        assert_eq!(reports, 2);
    }

    #[test]
    fn space_reported_once_per_poll_it_appears_in() {
        // minifb lists a key as pressed only on the update that saw it go down.
        let polls = [vec![], vec![Key::Space], vec![], vec![]];
        let events: Vec<Event> = polls
            .into_iter()
            .flat_map(|keys| InputSnapshot { keys, ..idle() }.into_events())
            .collect();
        assert_eq!(events, vec![Event::ReportRequested]);
    }

    #[test]
    fn keys_map_in_order() {
        let keys = InputSnapshot { keys: vec![Key::A, Key::Space], ..idle() };
        assert_eq!(keys.into_events(), vec![Event::Other, Event::ReportRequested]);
    }
}
