//! Font readiness collaborator contract.

use crate::decode::BoxFuture;

/// Trait for waiting on font-resource readiness before a font-dependent
/// style update is applied.
///
/// Best-effort by design: implementations resolve when the font is ready
/// *or* when loading failed, and the caller proceeds with a fallback either
/// way. Failure is never surfaced as an error.
pub trait FontWaiter {
    fn wait_ready(&self, family: &str) -> BoxFuture<'_, ()>;
}

/// A waiter that reports every font as immediately ready. Used where no
/// font-loading infrastructure exists (tests, headless export).
#[derive(Debug, Default)]
pub struct NoopFontWaiter;

impl FontWaiter for NoopFontWaiter {
    fn wait_ready(&self, _family: &str) -> BoxFuture<'_, ()> {
        Box::pin(async {})
    }
}
