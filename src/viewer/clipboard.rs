//! Clipboard writes and haptic feedback.

/// Put `text` on the clipboard and give short haptic feedback where the
/// device supports it. Failures are silent: the indicator already closed
/// and there is nothing sensible to do about a denied clipboard.
pub(crate) fn copy_with_feedback(text: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().clipboard().write_text(text);
    }
    vibrate(30);
}

/// Best-effort vibration; no-op where unsupported.
pub(crate) fn vibrate(ms: u32) {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().vibrate_with_duration(ms);
    }
}
