// src/constants.rs
//
// Application-wide constants.

/// Collection endpoint of the notes REST API, relative to the server URL.
pub const NOTES_PATH: &str = "/api/notes";

/// Logout endpoint; opened as a page, not called as an API.
pub const LOGOUT_PATH: &str = "/api/logout";

/// Server used when neither the config file nor the command line names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Characters of a note title shown on a card before it is cut with an ellipsis.
///
/// The full title is kept as the card's tooltip.
pub const DEFAULT_TITLE_WIDTH: usize = 40;

/// Milliseconds to wait after handing a temp page to the browser.
///
/// The page lives in a temp dir that is removed when the renderer drops;
/// some browsers read the file only after the launcher returns.
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
