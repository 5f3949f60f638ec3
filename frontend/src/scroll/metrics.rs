use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

/// Events after which the scroll fraction has to be recomputed.
const TRACKED_EVENTS: [&str; 2] = ["scroll", "resize"];

/// How far down the page the reader is, from 0 (top) to 1 (bottom).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress(0.0);

    /// Clamps into [0, 1]. NaN maps to the top of the page.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::TOP;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Viewport and document measurements, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Pages that fit in the viewport report 0 instead of dividing by zero.
    pub fn progress(&self) -> ScrollProgress {
        let max_scroll = self.max_scroll();
        if max_scroll > 0.0 {
            ScrollProgress::new(self.scroll_y / max_scroll)
        } else {
            ScrollProgress::TOP
        }
    }
}

/// Removes whatever listener a [`ScrollHost`] registered.
pub type Unlisten = Box<dyn FnOnce()>;

/// The environment a scroll tracker observes: something that can be measured
/// and that tells us when the measurements may have changed.
pub trait ScrollHost {
    /// `None` when the page can't be measured right now.
    fn metrics(&self) -> Option<ScrollMetrics>;

    /// Calls `handler` after every scroll or resize. `None` if nothing could be registered.
    fn listen(&self, handler: Box<dyn FnMut()>) -> Option<Unlisten>;
}

/// [`ScrollHost`] backed by the browser window.
pub struct BrowserScrollHost {
    window: Window,
}

impl BrowserScrollHost {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl ScrollHost for BrowserScrollHost {
    fn metrics(&self) -> Option<ScrollMetrics> {
        let scroll_y = self.window.scroll_y().ok()?;
        let viewport_height = self.window.inner_height().ok()?.as_f64()?;
        let document_height = self
            .window
            .document()?
            .document_element()?
            .scroll_height() as f64;
        Some(ScrollMetrics {
            scroll_y,
            viewport_height,
            document_height,
        })
    }

    fn listen(&self, handler: Box<dyn FnMut()>) -> Option<Unlisten> {
        let callback = Closure::wrap(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        let mut registered = Vec::new();
        for event in TRACKED_EVENTS {
            if self
                .window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .is_ok()
            {
                registered.push(event);
            }
        }
        if registered.is_empty() {
            return None;
        }

        let window = self.window.clone();
        Some(Box::new(move || {
            for event in registered {
                let _ = window
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            viewport_height,
            document_height,
        }
    }

    #[test]
    fn halfway_down() {
        assert_eq!(metrics(500.0, 1000.0, 2000.0).progress(), ScrollProgress::new(0.5));
    }

    #[test]
    fn short_pages_never_scroll() {
        assert_eq!(metrics(300.0, 1000.0, 1000.0).progress(), ScrollProgress::TOP);
        assert_eq!(metrics(300.0, 1000.0, 600.0).progress(), ScrollProgress::TOP);
    }

    #[test]
    fn overscroll_is_clamped() {
        // Elastic scrolling on touch devices reports offsets past either end.
        assert_eq!(metrics(1200.0, 1000.0, 2000.0).progress().value(), 1.0);
        assert_eq!(metrics(-40.0, 1000.0, 2000.0).progress().value(), 0.0);
    }

    #[test]
    fn progress_constructor_clamps() {
        assert_eq!(ScrollProgress::new(f64::NAN), ScrollProgress::TOP);
        assert_eq!(ScrollProgress::new(1.5).value(), 1.0);
        assert_eq!(ScrollProgress::new(0.25).value(), 0.25);
    }
}
