pub mod render;
pub mod settings;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use log::{info, warn};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use wscan::{
    Classifier, NmScanner, OuiDatabase, ReplaySource, ScanSet, ScanSource, SortKey, to_replay,
};

use crate::render::Renderer;
use crate::settings::Settings;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Parser, Debug)]
#[command(name = "wscan")]
#[command(version, about = "Scan and classify nearby Wi-Fi access points")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings file (default: $XDG_CONFIG_HOME/wscan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Vendor database in IEEE oui.txt or Wireshark manuf format
    #[arg(long, global = true)]
    oui: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan once and print the access points
    Scan(ScanArgs),
    /// Scan repeatedly, updating records in place
    Watch {
        #[command(flatten)]
        scan: ScanArgs,

        /// Seconds between scans
        #[arg(short, long)]
        interval: Option<u64>,

        /// Drop access points that were not seen in the latest scan
        #[arg(long)]
        prune: bool,
    },
    /// Show or create the settings file
    Config {
        /// Print the settings file location only
        #[arg(long)]
        path: bool,

        /// Write the default settings if no file exists yet
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct ScanArgs {
    /// Read observations from a recorded scan instead of NetworkManager
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Save the raw observations of each scan to FILE
    #[arg(long, value_name = "FILE")]
    record: Option<PathBuf>,

    /// Order by level, channel, essid or bssid
    #[arg(short, long)]
    sort: Option<SortKey>,

    /// Group radios of one multi-radio access point
    #[arg(long, overrides_with = "no_smart")]
    smart: bool,

    /// Keep every radio as its own record
    #[arg(long, overrides_with = "smart")]
    no_smart: bool,

    /// Attach hidden-network sightings to named records of the same BSSID
    #[arg(long, overrides_with = "no_hidden")]
    hidden: bool,

    /// Keep hidden-network sightings as separate records
    #[arg(long, overrides_with = "hidden")]
    no_hidden: bool,
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl ScanArgs {
    fn apply(&self, settings: &mut Settings) {
        if let Some(smart) = switch(self.smart, self.no_smart) {
            settings.smart = smart;
        }
        if let Some(hidden) = switch(self.hidden, self.no_hidden) {
            settings.hidden = hidden;
        }
        if let Some(sort) = self.sort {
            settings.sort = sort;
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_vendors(path: Option<&Path>) -> anyhow::Result<OuiDatabase> {
    match path {
        Some(path) => OuiDatabase::load(path)
            .with_context(|| format!("failed to load vendor database {}", path.display())),
        None => Ok(OuiDatabase::load_system()),
    }
}

/// The scan source in use, plus the live scanner when there is one.
async fn open_source(
    replay: Option<&Path>,
) -> anyhow::Result<(Box<dyn ScanSource>, Option<NmScanner>)> {
    match replay {
        Some(path) => {
            info!("Replaying observations from {}", path.display());
            Ok((Box::new(ReplaySource::new(path)), None))
        }
        None => {
            let scanner = NmScanner::new()
                .await
                .context("failed to connect to NetworkManager on the system bus")?;
            Ok((Box::new(scanner.clone()), Some(scanner)))
        }
    }
}

struct Session {
    classifier: Classifier,
    settings: Settings,
    source: Box<dyn ScanSource>,
    live: Option<NmScanner>,
    record: Option<PathBuf>,
    color: bool,
    set: ScanSet,
}

impl Session {
    async fn open(args: &Args, scan: &ScanArgs, mut settings: Settings) -> anyhow::Result<Self> {
        scan.apply(&mut settings);
        let oui_path = args.oui.as_deref().or(settings.oui_path.as_deref());
        let vendors = load_vendors(oui_path)?;
        info!("Vendor database has {} entries", vendors.len());

        let (source, live) = open_source(scan.replay.as_deref()).await?;
        let set = ScanSet::new(settings.match_options());

        Ok(Self {
            classifier: Classifier::new(settings.palette.clone(), vendors),
            source,
            live,
            record: scan.record.clone(),
            color: !args.no_color,
            set,
            settings,
        })
    }

    /// Runs one scan and merges it. Returns the rendered table.
    async fn step(&mut self, prune: bool) -> anyhow::Result<String> {
        let observations = self.source.scan().await?;
        if let Some(path) = &self.record {
            tokio::fs::write(path, to_replay(&observations)?)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
        }

        let summary = self.set.merge(&observations, &self.classifier);
        if prune {
            self.set.prune();
        }
        self.set.sort_by(self.settings.sort);
        info!(
            "{} added, {} updated, {} lost",
            summary.added, summary.updated, summary.lost
        );

        let connected = match &self.live {
            Some(scanner) => scanner.connected_bssid().await,
            None => None,
        };
        let renderer = Renderer::new(self.color).with_connected(connected);

        Ok(if self.settings.smart {
            renderer.grouped(&self.set.groups())
        } else {
            renderer.table(self.set.iter())
        })
    }
}

async fn scan_once(args: &Args, scan: &ScanArgs, settings: Settings) -> anyhow::Result<()> {
    let mut session = Session::open(args, scan, settings).await?;
    println!("{}", session.step(false).await?);
    Ok(())
}

async fn watch(
    args: &Args,
    scan: &ScanArgs,
    interval: Option<u64>,
    prune: bool,
    settings: Settings,
) -> anyhow::Result<()> {
    let secs = interval.unwrap_or(settings.interval_secs).max(1);
    let mut session = Session::open(args, scan, settings).await?;

    watch_loop(&mut session, secs, prune, tokio::signal::ctrl_c(), |table, count| {
        print!("{CLEAR_SCREEN}");
        println!("{table}");
        println!("\n{count} access points, every {secs}s, Ctrl-C to quit");
    })
    .await;

    Ok(())
}

/// Scans every `secs` seconds until `shutdown` completes.
///
/// `shutdown` is polled both while waiting for the next tick and while a
/// scan is running. Returns the number of scans shown.
async fn watch_loop<F: Future>(
    session: &mut Session,
    secs: u64,
    prune: bool,
    shutdown: F,
    mut show: impl FnMut(String, usize),
) -> usize {
    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    let mut shown = 0;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => break,
        }

        let result = tokio::select! {
            result = session.step(prune) => result,
            _ = &mut shutdown => break,
        };

        match result {
            Ok(table) => {
                show(table, session.set.len());
                shown += 1;
            }
            Err(e) => warn!("Scan failed: {e:#}"),
        }
    }

    info!("Stopped after {shown} scans");
    shown
}

/// Handles the `config` command. Never requires the settings file to exist
/// unless the effective settings are printed.
fn config(explicit: Option<&Path>, path_only: bool, init: bool) -> anyhow::Result<String> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(Settings::default_path)
        .context("no configuration directory available")?;

    if path_only {
        return Ok(format!("{}\n", path.display()));
    }
    if init {
        if path.exists() {
            return Ok(format!("{} already exists\n", path.display()));
        }
        Settings::default().save(&path)?;
        return Ok(format!("Wrote {}\n", path.display()));
    }
    Settings::resolve(explicit)?.to_toml()
}

pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(Command::Config { path, init }) = &args.command {
        print!("{}", config(args.config.as_deref(), *path, *init)?);
        return Ok(());
    }

    let settings = Settings::resolve(args.config.as_deref())?;

    match &args.command {
        None => scan_once(&args, &ScanArgs::default(), settings).await,
        Some(Command::Scan(scan)) => scan_once(&args, scan, settings).await,
        Some(Command::Watch {
            scan,
            interval,
            prune,
        }) => watch(&args, scan, *interval, *prune, settings).await,
        Some(Command::Config { .. }) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_settings() {
        let args = Args::parse_from(["wscan", "scan", "--smart", "--no-hidden", "-s", "channel"]);
        let Some(Command::Scan(scan)) = args.command else {
            panic!("expected scan command");
        };

        let mut settings = Settings::default();
        scan.apply(&mut settings);
        assert!(settings.smart);
        assert!(!settings.hidden);
        assert_eq!(settings.sort, SortKey::Channel);
    }

    #[test]
    fn last_of_negated_pair_wins() {
        for (argv, smart, hidden) in [
            (["wscan", "scan", "--smart", "--no-smart", "--hidden", "--no-hidden"], false, false),
            (["wscan", "scan", "--no-smart", "--smart", "--no-hidden", "--hidden"], true, true),
        ] {
            let Some(Command::Scan(scan)) = Args::parse_from(argv).command else {
                panic!("expected scan command");
            };
            let mut settings = Settings {
                smart: !smart,
                hidden: !hidden,
                ..Settings::default()
            };
            scan.apply(&mut settings);
            assert_eq!((settings.smart, settings.hidden), (smart, hidden), "{argv:?}");
        }
    }

    #[test]
    fn absent_flags_keep_settings() {
        let mut settings = Settings {
            smart: true,
            hidden: false,
            ..Settings::default()
        };
        ScanArgs::default().apply(&mut settings);
        assert!(settings.smart);
        assert!(!settings.hidden);
    }

    #[test]
    fn watch_accepts_global_flags_after_subcommand() {
        let args = Args::parse_from(["wscan", "watch", "-i", "10", "--prune", "--no-color", "-vv"]);
        assert!(args.no_color);
        assert_eq!(args.verbose, 2);
        assert!(matches!(
            args.command,
            Some(Command::Watch {
                interval: Some(10),
                prune: true,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn replayed_scan_renders_table() {
        let dir = tempfile::tempdir().unwrap();
        let replay = dir.path().join("scan.toml");
        let record = dir.path().join("copy.toml");
        std::fs::write(
            &replay,
            "[[observation]]\nbssid = \"AA:BB:CC:11:22:33\"\nessid = \"home\"\nlevel = -60\nfrequency = 2437\ncapabilities = \"[WPA2-PSK-CCMP][ESS]\"\n",
        )
        .unwrap();

        let args = Args::parse_from(["wscan", "--no-color", "--oui", "/dev/null"]);
        let scan = ScanArgs {
            replay: Some(replay),
            record: Some(record.clone()),
            ..ScanArgs::default()
        };
        let mut session = Session::open(&args, &scan, Settings::default()).await.unwrap();
        let table = session.step(false).await.unwrap();

        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("AA:BB:CC:11:22:33"));
        assert!(wscan::parse_replay(&std::fs::read_to_string(record).unwrap()).unwrap().len() == 1);
    }

    fn replay_file(dir: &Path) -> PathBuf {
        let path = dir.join("scan.toml");
        std::fs::write(
            &path,
            "[[observation]]\nbssid = \"AA:BB:CC:11:22:33\"\nessid = \"home\"\nlevel = -60\nfrequency = 2437\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn config_init_creates_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.toml");
        let args = Args::parse_from([
            "wscan",
            "--config",
            path.to_str().unwrap(),
            "config",
            "--init",
        ]);
        let Some(Command::Config { path: path_only, init }) = args.command else {
            panic!("expected config command");
        };

        let out = config(args.config.as_deref(), path_only, init).unwrap();
        assert!(out.starts_with("Wrote "));
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());

        let again = config(args.config.as_deref(), path_only, init).unwrap();
        assert!(again.ends_with("already exists\n"));
    }

    #[test]
    fn config_path_does_not_need_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let out = config(Some(path.as_path()), true, false).unwrap();
        assert_eq!(out, format!("{}\n", path.display()));
        assert!(!path.exists());
        assert!(config(Some(path.as_path()), false, false).is_err());
    }

    #[tokio::test]
    async fn watch_stops_on_shutdown_raised_during_scan() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args::parse_from(["wscan", "--no-color", "--oui", "/dev/null"]);
        let scan = ScanArgs {
            replay: Some(replay_file(dir.path())),
            ..ScanArgs::default()
        };
        let mut session = Session::open(&args, &scan, Settings::default()).await.unwrap();

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut tx = Some(tx);
        let mut counts = Vec::new();
        let shown = watch_loop(&mut session, 3600, false, rx, |_, count| {
            counts.push(count);
            if let Some(tx) = tx.take() {
                tx.send(()).unwrap();
            }
        })
        .await;

        assert_eq!(shown, 1);
        assert_eq!(counts, [1]);
    }
}
