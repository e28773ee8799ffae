use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Contract for looking up whether a phone number is provisioned on the
/// messaging service.
///
/// The batch pipeline depends only on this trait, never on a concrete
/// client. A production implementation would wrap the real lookup API and
/// surface its error taxonomy (rate limiting, auth failures, timeouts)
/// through `AppError`; the pipeline treats every error as "unreachable"
/// and keeps going.
#[async_trait]
pub trait ReachabilityChecker: Send + Sync {
    async fn check_reachable(&self, number: &str) -> AppResult<bool>;
}
