//! TPS Viewer - colour-banded TPS curve and participant rankings
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use tpsview_chart::Point;

use tps_viewer::RunOptions;

/// TPS Viewer - analyse a server TPS log
#[derive(Parser, Debug)]
#[command(name = "tpsview")]
#[command(about = "Colour-banded TPS curve and participant rankings from a TPS log", long_about = None)]
struct Args {
    /// TPS log (CSV: timestamp,tps,player1;player2;...)
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Write the rendered chart as SVG
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Hit-test a pointer position on the chart (repeatable)
    #[arg(long = "at", value_name = "X,Y", value_parser = parse_point)]
    at: Vec<Point>,

    /// Number of participants in each ranking list
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Output NDJSON events instead of a text report
    #[arg(long)]
    json: bool,

    /// Settings file (default: .tpsview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{raw}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("invalid X '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("invalid Y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // The log file is diagnostics only; run without it rather than fail.
    if let Err(e) = tpsview_core::logging::init() {
        eprintln!("warning: file logging disabled: {e}");
    }

    let args = Args::parse();
    let options = RunOptions {
        path: args.path,
        svg: args.svg,
        pointers: args.at,
        top: args.top,
        config: args.config,
    };

    let outcome = if args.json {
        tps_viewer::run_headless(options).await?
    } else {
        tps_viewer::run(options).await?
    };

    if outcome.exit_code() != 0 {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("555,120").unwrap(), Point::new(555.0, 120.0));
        assert_eq!(parse_point(" 1.5 , 2 ").unwrap(), Point::new(1.5, 2.0));
        assert!(parse_point("555").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn test_args_repeatable_at() {
        let args = Args::try_parse_from([
            "tpsview", "log.csv", "--at", "1,2", "--at", "3,4", "--top", "3", "--json",
        ])
        .unwrap();
        assert_eq!(args.at, [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(args.top, Some(3));
        assert!(args.json);
    }
}
