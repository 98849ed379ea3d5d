use wscan::{Classifier, MatchOptions, ReplaySource, ScanSet, ScanSource, SortKey};

#[tokio::main]
async fn main() -> wscan::Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: replay <scan.toml>");
        return Ok(());
    };

    let source = ReplaySource::new(path);
    let classifier = Classifier::default();
    let mut set = ScanSet::new(MatchOptions {
        hidden: true,
        smart: true,
    });

    set.merge(&source.scan().await?, &classifier);
    set.sort_by(SortKey::Channel);

    for group in set.groups() {
        println!("{}", group[0].display_name());
        for ap in group {
            let c = ap.colors().power;
            println!(
                "  {:17} ch{:<3} {:>4} dBm  \x1b[38;2;{};{};{}m■\x1b[0m",
                ap.bssid(),
                ap.channel(),
                ap.level(),
                c.r,
                c.g,
                c.b
            );
        }
    }

    Ok(())
}
