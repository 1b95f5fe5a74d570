//! Browser-side feedback: transient toast notifications and the blocking
//! confirmation prompt used before destructive actions.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "rgba(22, 101, 52, 0.95)",
            ToastKind::Error => "rgba(185, 28, 28, 0.95)",
        }
    }
}

pub fn toast_success(message: &str) {
    show_toast(message, ToastKind::Success);
}

pub fn toast_error(message: &str) {
    show_toast(message, ToastKind::Error);
}

/// Injects a styled `div` at the bottom of the page and removes it after
/// three seconds. Silently does nothing outside a browser document.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", kind.background()).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Blocking `window.confirm`. Anything but an explicit OK counts as "no".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
