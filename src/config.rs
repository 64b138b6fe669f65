use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Stdin,
    File(PathBuf),
    Inline(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    pub pretty: bool,
    pub summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: Source::Stdin,
            pretty: false,
            summary: false,
        }
    }
}

/// Convert `{ ne, sw }` bounding boxes into GeoJSON polygon features.
#[derive(Debug, Parser)]
#[command(name = "bboxfeature", version, about)]
pub struct Cli {
    /// JSON file with one bounding box or an array of them (stdin when omitted)
    #[arg(conflicts_with = "bbox")]
    pub input: Option<PathBuf>,

    /// Inline bounding box JSON, e.g. '{"ne":[30,40],"sw":[10,20]}'
    #[arg(long)]
    pub bbox: Option<String>,

    /// Pretty-print the GeoJSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print a corner table to stderr
    #[arg(long)]
    pub summary: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.input, cli.bbox) {
            (_, Some(bbox)) => Source::Inline(bbox),
            (Some(path), None) => Source::File(path),
            (None, None) => Source::Stdin,
        };
        Config {
            source,
            pretty: cli.pretty,
            summary: cli.summary,
        }
    }
}
