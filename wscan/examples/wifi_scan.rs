use wscan::{Classifier, NmScanner, OuiDatabase, Palette, ScanSource};

#[tokio::main]
async fn main() -> wscan::Result<()> {
    let classifier = Classifier::new(Palette::default(), OuiDatabase::load_system());
    let scanner = NmScanner::new().await?;

    println!("Scanning for WiFi networks...");
    let records = classifier.build_records(&scanner.scan().await?);

    for ap in records {
        println!(
            "{:>4} dBm  ch{:<3} {:<4} {:<9} {:17} {}",
            ap.level(),
            ap.channel(),
            ap.encryption(),
            ap.cipher(),
            ap.bssid(),
            ap.display_name()
        );
    }

    Ok(())
}
