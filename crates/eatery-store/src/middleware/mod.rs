//! Middleware module
//!
//! Middleware intercepts every action before it reaches the reducers. The
//! API middleware is where all network effects live; the reducers stay pure.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod api_middleware;
pub mod logging_middleware;
pub mod profile_sync_middleware;

pub use api_middleware::ApiMiddleware;
pub use logging_middleware::LoggingMiddleware;
pub use profile_sync_middleware::ProfileSyncMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// The state argument is the snapshot taken before this action is reduced.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: the action to process
    /// - `state`: current application state (read-only snapshot)
    /// - `dispatcher`: use to dispatch follow-up actions that should
    ///   re-enter the chain
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    /// before it reaches the reducer.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
