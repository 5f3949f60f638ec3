use std::rc::Rc;

use log::{info, warn};

use crate::scroll::metrics::{ScrollHost, ScrollProgress, Unlisten};

/// What subscribers receive: the raw offset and the normalized fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub position: f64,
    pub progress: ScrollProgress,
}

/// Watches a [`ScrollHost`] and reports a [`ScrollSample`] on every change.
pub struct ScrollTracker<H> {
    host: Rc<H>,
}

impl<H: ScrollHost + 'static> ScrollTracker<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Rc::new(host),
        }
    }

    /// Starts listening and emits the current sample straight away.
    ///
    /// The listener lives exactly as long as the returned [`Subscription`].
    pub fn observe<F>(&self, on_sample: F) -> Subscription
    where
        F: Fn(ScrollSample) + 'static,
    {
        let emit = {
            let host = Rc::clone(&self.host);
            Rc::new(move || on_sample(sample_of(host.as_ref())))
        };

        let handler = {
            let emit = Rc::clone(&emit);
            Box::new(move || emit())
        };
        let unlisten = self.host.listen(handler);
        if unlisten.is_some() {
            info!("Scroll tracking started");
        } else {
            warn!("Could not listen for scroll events, background will stay at the top");
        }

        emit();
        Subscription { unlisten }
    }
}

fn sample_of<H: ScrollHost + ?Sized>(host: &H) -> ScrollSample {
    match host.metrics() {
        Some(metrics) => ScrollSample {
            position: metrics.scroll_y,
            progress: metrics.progress(),
        },
        None => ScrollSample::default(),
    }
}

/// Keeps a scroll listener registered. Dropping it removes the listener.
#[must_use = "dropping the subscription stops scroll tracking"]
pub struct Subscription {
    unlisten: Option<Unlisten>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unlisten) = self.unlisten.take() {
            unlisten();
            info!("Scroll tracking stopped");
        }
    }
}
