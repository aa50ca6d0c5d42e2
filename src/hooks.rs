use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::dom::{self, ViewportWatcher};
use crate::scroll::{self, ScrollProgressState};

fn watch(handler: Rc<dyn Fn()>) -> Option<ViewportWatcher> {
    match ViewportWatcher::new(handler) {
        Ok(watcher) => Some(watcher),
        Err(err) => {
            warn!("viewport tracking disabled: {}", err);
            None
        }
    }
}

/// Pin mode, progress and active step of a tall container, recomputed on
/// every scroll and resize tick.
#[hook]
pub fn use_scroll_progress(container: NodeRef, step_count: usize) -> ScrollProgressState {
    let state = use_state_eq(ScrollProgressState::initial);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(container, step_count)| {
                let container = container.clone();
                let step_count = *step_count;
                let last_mode = std::cell::Cell::new(state.mode);

                let update: Rc<dyn Fn()> = Rc::new(move || {
                    let (Some(rect), Some(viewport)) =
                        (dom::element_rect(&container), dom::viewport_height())
                    else {
                        return;
                    };
                    let next = scroll::recompute(rect, viewport, step_count);
                    if last_mode.replace(next.mode) != next.mode {
                        debug!("process scroller: {:?} at {:.1}%", next.mode, next.progress);
                    }
                    state.set(next);
                });

                // Initial check so a reload mid-page lands on the right step
                update();
                let watcher = watch(update);
                move || drop(watcher)
            },
            (container, step_count),
        );
    }

    *state
}

/// Flips to true the first time the element is `margin` pixels inside the
/// viewport and stays true.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64) -> bool {
    let in_view = use_state_eq(|| false);
    let seen = *in_view;

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, seen)| {
                let watcher = if *seen {
                    None
                } else {
                    let node = node.clone();
                    let check: Rc<dyn Fn()> = Rc::new(move || {
                        if let (Some(rect), Some(viewport)) =
                            (dom::element_rect(&node), dom::viewport_height())
                        {
                            if scroll::entered_viewport(rect, viewport, margin) {
                                in_view.set(true);
                            }
                        }
                    });
                    check();
                    watch(check)
                };
                move || drop(watcher)
            },
            (node, seen),
        );
    }

    seen
}

/// True while the window is scrolled further than `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let check: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(y) = dom::scroll_y() {
                        scrolled.set(scroll::scrolled_past(y, threshold));
                    }
                });
                check();
                let watcher = watch(check);
                move || drop(watcher)
            },
            (),
        );
    }

    *scrolled
}
