use std::path::Path;

use clap::ValueEnum;
use dewplot_core::{Dataset, LoadError, LoadOptions, load_csv, load_json, load_parquet};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
    Parquet,
}

impl InputFormat {
    pub fn load(self, path: &Path, options: LoadOptions) -> Result<Dataset, LoadError> {
        match self {
            InputFormat::Json => load_json(path, options),
            InputFormat::Csv => load_csv(path, options),
            InputFormat::Parquet => load_parquet(path, options),
        }
    }
}

pub fn detect_format(path: &Path) -> Option<InputFormat> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(InputFormat::Json),
        "csv" => Some(InputFormat::Csv),
        "parquet" | "parq" => Some(InputFormat::Parquet),
        _ => None,
    }
}
