use neighborly_core::Session;

const SESSION_KEY: &str = "neighborly_session";

fn parse_session(raw: &str) -> Option<Session> {
    serde_json::from_str::<Session>(raw).ok()
}

pub(crate) fn load_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    parse_session(&raw)
}

pub(crate) fn save_session(session: &Session) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let storage = window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())?;

    let raw =
        serde_json::to_string(session).map_err(|_| "failed to serialize session".to_string())?;
    storage
        .set_item(SESSION_KEY, &raw)
        .map_err(|_| "failed to save session".to_string())
}
