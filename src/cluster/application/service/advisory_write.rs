//! Best-effort writes to the cluster record store.

use crate::core::domain::error::CmaResult;
use std::future::Future;
use tracing::error;

/// A side effect whose failure is logged and never returned to the caller.
///
/// Cluster records trail the provisioning service: once provisioning has
/// accepted a request the RPC succeeds, even if the record cannot be written.
/// A failed write leaves the record out of sync until the next operation on
/// the same cluster rewrites it.
pub(crate) struct AdvisoryWrite<'a> {
    cluster: &'a str,
    operation: &'static str,
}

impl<'a> AdvisoryWrite<'a> {
    pub(crate) fn new(cluster: &'a str, operation: &'static str) -> Self {
        Self { cluster, operation }
    }

    /// Awaits `write` and reports whether it was applied.
    pub(crate) async fn run<F>(&self, step: &'static str, write: F) -> bool
    where
        F: Future<Output = CmaResult<()>>,
    {
        match write.await {
            Ok(()) => true,
            Err(err) => {
                error!(
                    cluster = %self.cluster,
                    operation = self.operation,
                    step,
                    error = %err,
                    "cluster record write failed; record is out of sync with the provider"
                );
                false
            }
        }
    }
}
