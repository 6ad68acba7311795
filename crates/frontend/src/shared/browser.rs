/// Full page reload, used after a successful quota request so the
/// server-side tables are re-fetched from scratch.
pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Opens a URL in a new browsing context. Fire-and-forget: the deep
/// link may be refused by the browser and we never find out.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}
