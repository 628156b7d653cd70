//! Progress notification port
//!
//! Defines the interface for reporting progress while a request to the
//! generation service is in flight.

use dslgen_domain::ExampleKind;

/// A request sent to the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Example suggestions for a step
    Examples(ExampleKind),
    /// The final metamodel generation
    Generation,
}

impl RequestKind {
    pub fn description(&self) -> &'static str {
        match self {
            RequestKind::Examples(ExampleKind::Entities) => "Fetching example entities...",
            RequestKind::Examples(ExampleKind::Relationships) => {
                "Fetching example relationships..."
            }
            RequestKind::Generation => "Generating Ecore file...",
        }
    }
}

/// Callback for progress updates during service requests
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, log line, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called before a request is sent
    fn on_request_start(&self, request: RequestKind);

    /// Called when the request finished, successfully or not
    fn on_request_complete(&self, request: RequestKind, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _request: RequestKind) {}
    fn on_request_complete(&self, _request: RequestKind, _success: bool) {}
}
