// src/constants.rs
//
// Application-wide constants.

/// Notes service used when neither the config file nor the command line names one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "https://notes-api.dicoding.dev";

/// Version prefix of every notes service path.
///
/// Used in: `infrastructure/http.rs`
pub const API_PREFIX: &str = "/v2";

/// Delay in milliseconds after launching the browser before the process may exit.
///
/// The rendered page lives in a temporary directory that is removed when the
/// renderer is dropped. The browser needs a brief moment to read the file first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Characters of a note body shown per row by `list`.
///
/// Used in: `lib.rs`
pub const LIST_EXCERPT_CHARS: usize = 60;
