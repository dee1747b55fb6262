#![warn(clippy::pedantic)]

pub mod error_state;
pub mod log;

pub use error_state::ErrorStateConfig;

/// Path of the home route. Always reachable, independent of session or
/// permission state.
pub const HOME_PATH: &str = "/";

/// Capability for changing the current client-side route.
///
/// Route matching and history handling live in the hosting application's
/// router. Consumers issue fire-and-forget navigation requests; a failing
/// request is handled by the router's own error policy.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}
