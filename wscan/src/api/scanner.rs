use async_trait::async_trait;
use zbus::Connection;

use crate::api::models::ScanObservation;
use crate::api::source::ScanSource;
use crate::core::scan::{connected_bssid, list_observations, scan_networks};
use crate::types::constants::timeouts;
use crate::Result;

/// Live scan source backed by NetworkManager over D-Bus.
///
/// # Example
///
/// ```no_run
/// use wscan::{Classifier, NmScanner, ScanSource};
///
/// # async fn example() -> wscan::Result<()> {
/// let scanner = NmScanner::new().await?;
/// let classifier = Classifier::default();
///
/// for ap in classifier.build_records(&scanner.scan().await?) {
///     println!("{:17} ch{:<3} {:4} {}", ap.bssid(), ap.channel(), ap.encryption(), ap.display_name());
/// }
/// # Ok(())
/// # }
/// ```
///
/// `NmScanner` is `Clone`; clones share the same D-Bus connection.
#[derive(Debug, Clone)]
pub struct NmScanner {
    conn: Connection,
}

impl NmScanner {
    /// Creates a scanner connected to the system D-Bus.
    pub async fn new() -> Result<Self> {
        let conn = Connection::system().await?;
        Ok(Self { conn })
    }

    /// Asks every Wi-Fi device to rescan. Results arrive asynchronously.
    pub async fn request_scan(&self) -> Result<()> {
        scan_networks(&self.conn).await
    }

    /// Reads the currently known access points without requesting a scan.
    pub async fn observations(&self) -> Result<Vec<ScanObservation>> {
        list_observations(&self.conn).await
    }

    /// BSSID of the access point this machine is connected to, if any.
    pub async fn connected_bssid(&self) -> Option<String> {
        connected_bssid(&self.conn).await
    }
}

#[async_trait]
impl ScanSource for NmScanner {
    /// Requests a scan, waits for it to settle, then reads the results.
    async fn scan(&self) -> Result<Vec<ScanObservation>> {
        self.request_scan().await?;
        tokio::time::sleep(timeouts::scan_wait()).await;
        self.observations().await
    }
}
