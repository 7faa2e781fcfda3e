use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dewplot_core::{
    ChartConfig, Dataset, Dimensions, LoadOptions, ScatterScene, Viewport, export_svg,
};
use tracing::{debug, info, warn};

mod input;
use input::{InputFormat, detect_format};

const DEFAULT_DATASET: &str = "assets/data/my_weather_data.json";

#[derive(Parser, Debug)]
#[command(name = "dewplot", version)]
#[command(about = "Scatter plot of dew point vs. relative humidity, colored by cloud cover")]
struct Args {
    /// Weather observations (JSON, CSV or Parquet) with dewPoint, humidity and cloudCover.
    #[arg(default_value = DEFAULT_DATASET)]
    path: PathBuf,

    /// Explicitly set the file format. If omitted, inferred from extension.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// TOML file overriding chart styling (margins, colors, labels, tick counts).
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Write the chart to this SVG file instead of opening a window.
    #[arg(long, value_name = "SVG")]
    export: Option<PathBuf>,

    /// Viewport width used for --export.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Viewport height used for --export.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also write logs to tmp/dewplot_<ms>_pid<pid>.log
    #[arg(long)]
    log_file: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = dewplot_ui::init_logging(args.verbose, args.log_file)? {
        info!(path = %path.display(), "logging to file");
    }
    debug!("CLI arguments: {:?}", args);

    let config = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("failed to load chart config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    let load_result = load_dataset(&args.path, args.format);

    if let Some(out) = &args.export {
        let dataset = load_result.map_err(anyhow::Error::msg)?;
        return export(&dataset, &config, Viewport::new(args.width, args.height), out);
    }

    let meta = dewplot_ui::ChartMeta {
        source: args.path.display().to_string(),
        config,
    };
    dewplot_ui::launch_chart(load_result, meta);
    Ok(())
}

fn load_dataset(path: &Path, format: Option<InputFormat>) -> Result<Dataset, String> {
    let format = format
        .or_else(|| detect_format(path))
        .ok_or_else(|| "could not determine file format (use --format)".to_string())?;

    let dataset = format
        .load(path, LoadOptions::default())
        .map_err(|e| format!("failed to load {}: {e}", path.display()))?;

    if dataset.is_empty() {
        warn!(path = %path.display(), "dataset is empty, only axes will be drawn");
    } else {
        info!(path = %path.display(), points = dataset.len(), "loaded weather observations");
    }
    Ok(dataset)
}

fn export(dataset: &Dataset, config: &ChartConfig, viewport: Viewport, out: &Path) -> Result<()> {
    if !(viewport.width > 0.0 && viewport.height > 0.0) {
        anyhow::bail!(
            "export viewport must be positive, got {}x{}",
            viewport.width,
            viewport.height
        );
    }
    let dims = Dimensions::responsive(viewport, config.viewport_fraction, config.margin);
    let scene = ScatterScene::build(dataset, dims, config)?;
    export_svg(&scene, out).with_context(|| format!("failed to export {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_point_at_bundled_dataset() {
        let args = Args::try_parse_from(["dewplot"]).unwrap();
        assert_eq!(args.path, PathBuf::from(DEFAULT_DATASET));
        assert_eq!(args.width, 1200.0);
        assert!(args.export.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_export_flags() {
        let args = Args::try_parse_from([
            "dewplot", "obs.csv", "--format", "csv", "--export", "out.svg", "--width", "640",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.format, Some(InputFormat::Csv));
        assert_eq!(args.export, Some(PathBuf::from("out.svg")));
        assert_eq!(args.width, 640.0);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn unknown_extension_needs_format() {
        let err = load_dataset(Path::new("weather.txt"), None).unwrap_err();
        assert!(err.contains("--format"));
    }

    #[test]
    fn export_round_trip_through_files() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("dewplot-app-{}.csv", std::process::id()));
        let output = dir.join(format!("dewplot-app-{}.svg", std::process::id()));
        fs::write(
            &input,
            "date,dewPoint,humidity,cloudCover\n2018-01-01,10,0.5,0.1\n2018-01-02,30,0.8,0.9\n",
        )
        .unwrap();

        let dataset = load_dataset(&input, None).unwrap();
        export(&dataset, &ChartConfig::default(), Viewport::new(600.0, 600.0), &output).unwrap();
        let svg = fs::read_to_string(&output).unwrap();
        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();

        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"width="540""#));
    }

    #[test]
    fn example_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/chart.example.toml");
        let config = ChartConfig::load(path).unwrap();
        assert_eq!(config.dot_radius, 4.0);
        assert_eq!(config.margin.left, 60.0);
        assert_eq!(config.margin.top, 10.0);
    }

    #[test]
    fn bundled_dataset_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(DEFAULT_DATASET);
        let dataset = load_dataset(&path, None).unwrap();
        assert_eq!(dataset.len(), 365);
    }
}
