use argh::FromArgs;
use chrono::{DateTime, TimeZone};
use pvsgen::config::PvsConfig;
use pvsgen::float_types::Real;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Computes the potentially visible set of a world file and stores it back
/// into the same file.
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// path to the world file
    #[argh(positional)]
    pub world: PathBuf,
    /// leaves deeper than this below the root are merged into SuperLeaves
    #[argh(option)]
    pub max_rec_depth_sl: Option<u32>,
    /// subtrees whose faces have a smaller total area are merged into one SuperLeaf
    #[argh(option)]
    pub min_area_sl: Option<Real>,
    /// only report how many SuperLeaves would be built
    #[argh(switch)]
    pub only_sls: bool,
    /// verbose level: off, error, warn, info, debug, trace
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// file the run record is appended to (default: pvsgen.log)
    #[argh(option)]
    pub log_file: Option<PathBuf>,
}

impl CLIOptions {
    pub fn config(&self) -> PvsConfig {
        let mut config = PvsConfig::new().only_super_leaves(self.only_sls);
        if let Some(depth) = self.max_rec_depth_sl {
            config = config.max_recursion_depth(depth);
        }
        if let Some(area) = self.min_area_sl {
            config = config.min_subtree_faces_area(area);
        }
        config
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("pvsgen.log"))
    }
}

/// Drops empty arguments and rewrites the classic single-dash spellings
/// (`-maxRecDepthSL`, `-minAreaSL`, `-onlySLs`, any case) to their long flags.
pub fn translate_legacy_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    args.into_iter()
        .filter(|a| !a.is_empty())
        .map(|a| match a.to_ascii_lowercase().as_str() {
            "-maxrecdepthsl" => "--max-rec-depth-sl".to_string(),
            "-minareasl" => "--min-area-sl".to_string(),
            "-onlysls" => "--only-sls".to_string(),
            _ => a,
        })
        .collect()
}

/// Parses the full argument list, program name first.
pub fn parse_args(args: Vec<String>) -> Result<CLIOptions, argh::EarlyExit> {
    let args = translate_legacy_args(args);
    let command = args
        .first()
        .and_then(|c| Path::new(c).file_name())
        .and_then(|c| c.to_str())
        .unwrap_or("pvsgen");
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    CLIOptions::from_args(&[command], &rest)
}

/// The world name as written to the run record: file name without extension.
pub fn world_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("unknown"))
}

/// `h:mm:ss`
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// `dd.mm.yyyy hh:mm`
pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d.%m.%Y %H:%M").to_string()
}

/// One line of the run log.
pub fn run_record(date: &str, world: &str, elapsed: Duration, checksum: u64) -> String {
    format!(
        "{:<16} {:<16} {:>9} {:>10}",
        date,
        world,
        format_elapsed(elapsed),
        checksum
    )
}
