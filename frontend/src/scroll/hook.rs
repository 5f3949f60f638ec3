use log::warn;
use yew::prelude::*;

use crate::scroll::metrics::BrowserScrollHost;
use crate::scroll::tracker::{ScrollSample, ScrollTracker};

/// Current scroll offset and progress of the window, updated on scroll and resize.
#[hook]
pub fn use_scroll_position() -> ScrollSample {
    let sample = use_state(ScrollSample::default);

    {
        let sample = sample.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = match BrowserScrollHost::new() {
                    Some(host) => Some(ScrollTracker::new(host).observe(move |next| sample.set(next))),
                    None => {
                        warn!("No window to track scrolling in");
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    *sample
}
