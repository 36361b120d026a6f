use web_sys::window;

/// `window.alert`; sin ventana solo queda el log
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            let _ = win.alert_with_message(message);
        }
        None => log::warn!("⚠️ alert sin window: {}", message),
    }
}

/// `window.confirm`; cualquier fallo cuenta como "no"
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
