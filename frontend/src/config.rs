/// Base URL of the relay backend.
///
/// `BACKEND_URL` set at build time wins. Otherwise debug builds talk to a
/// locally running backend and release builds use the page's own origin.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) => url,
        None if cfg!(debug_assertions) => "http://localhost:3001",
        None => "",
    }
}
