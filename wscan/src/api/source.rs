//! Where observations come from.

use async_trait::async_trait;

use crate::api::models::ScanObservation;
use crate::Result;

/// A radio scan provider.
///
/// Implementations decide how and when the radio is asked to scan; callers
/// only see the resulting observations. Implemented by
/// [`crate::NmScanner`] (live, over D-Bus) and [`crate::ReplaySource`]
/// (recorded, from a file).
#[async_trait]
pub trait ScanSource: Send + Sync {
    /// Performs one scan and returns every visible access point.
    async fn scan(&self) -> Result<Vec<ScanObservation>>;
}
