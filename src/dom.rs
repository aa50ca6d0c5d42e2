//! Thin wrappers over the browser APIs the sections touch.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Element, HtmlVideoElement, Window};
use yew::NodeRef;

use crate::scroll::ContainerRect;

#[derive(thiserror::Error, Debug)]
pub enum DomError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("could not listen for `{event}`: {message}")]
    Listener { event: &'static str, message: String },

    #[error("playback rejected: {0}")]
    Playback(String),
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

pub fn element_rect(node: &NodeRef) -> Option<ContainerRect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(ContainerRect::new(rect.top(), rect.bottom()))
}

/// Passive listener on `window`, removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn passive(event: &'static str, handler: impl Fn() + 'static) -> Result<Self, DomError> {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| DomError::Listener {
                event,
                message: js_message(&err),
            })?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Runs a handler on every scroll and resize tick for as long as it is held.
pub struct ViewportWatcher {
    _scroll: WindowListener,
    _resize: WindowListener,
}

impl ViewportWatcher {
    pub fn new(handler: Rc<dyn Fn()>) -> Result<Self, DomError> {
        let on_scroll = handler.clone();
        let scroll = WindowListener::passive("scroll", move || on_scroll())?;
        let resize = WindowListener::passive("resize", move || handler())?;
        Ok(Self {
            _scroll: scroll,
            _resize: resize,
        })
    }
}

pub async fn play(video: HtmlVideoElement) -> Result<(), DomError> {
    let promise = video
        .play()
        .map_err(|err| DomError::Playback(js_message(&err)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| DomError::Playback(js_message(&err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_their_cause() {
        let err = DomError::Listener {
            event: "scroll",
            message: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "could not listen for `scroll`: denied");
        assert!(DomError::Playback("NotAllowedError".into())
            .to_string()
            .starts_with("playback rejected"));
    }
}
