/// Blocking browser dialogs. Every failure path in the app surfaces
/// through one of these, so the wrappers keep the `window()` plumbing
/// out of the components.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(window) => window.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}
