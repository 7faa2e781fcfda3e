use crate::{ColumnMapping, Dataset, LoadError, LoadOptions, WeatherObservation};
use polars::prelude::PlPathRef;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;
use time::{Date, macros::format_description};

const UNIX_EPOCH_JULIAN_DAY: i32 = 2_440_588;

pub fn load_json(path: impl AsRef<Path>, options: LoadOptions) -> Result<Dataset, LoadError> {
    let file = File::open(path.as_ref())?;
    let df = JsonReader::new(file).finish()?;
    parse_frame(df, &options.columns)
}

pub fn load_csv(path: impl AsRef<Path>, options: LoadOptions) -> Result<Dataset, LoadError> {
    let pl_path = PlPathRef::from_local_path(path.as_ref()).into_owned();
    let lf = LazyCsvReader::new(pl_path).with_has_header(true);
    let df = lf.finish()?.collect()?;
    parse_frame(df, &options.columns)
}

pub fn load_parquet(path: impl AsRef<Path>, options: LoadOptions) -> Result<Dataset, LoadError> {
    let pl_path = PlPathRef::from_local_path(path.as_ref()).into_owned();
    let lf = LazyFrame::scan_parquet(pl_path, ScanArgsParquet::default())?;
    let df = lf.collect()?;
    parse_frame(df, &options.columns)
}

fn parse_frame(df: DataFrame, columns: &ColumnMapping) -> Result<Dataset, LoadError> {
    let dew_point = df
        .column(&columns.dew_point)
        .map_err(|_| LoadError::MissingColumn(columns.dew_point.clone()))?;
    let humidity = df
        .column(&columns.humidity)
        .map_err(|_| LoadError::MissingColumn(columns.humidity.clone()))?;
    let cloud_cover = df
        .column(&columns.cloud_cover)
        .map_err(|_| LoadError::MissingColumn(columns.cloud_cover.clone()))?;
    // the date only feeds the hover tooltip, so a frame without one still loads
    let date = df.column(&columns.date).ok();

    let len = dew_point.len();
    if humidity.len() != len
        || cloud_cover.len() != len
        || date.is_some_and(|d| d.len() != len)
    {
        return Err(LoadError::LengthMismatch);
    }

    let mut observations = Vec::with_capacity(len);
    for idx in 0..len {
        let date = match date {
            Some(col) => to_date(col.get(idx)?, idx)?,
            None => None,
        };
        let dew_point = to_f64(dew_point.get(idx)?, &columns.dew_point, idx)?;
        let humidity = to_f64(humidity.get(idx)?, &columns.humidity, idx)?;
        let cloud_cover = to_f64(cloud_cover.get(idx)?, &columns.cloud_cover, idx)?;

        observations.push(WeatherObservation {
            date,
            dew_point,
            humidity,
            cloud_cover,
        });
    }

    Ok(Dataset::new(observations))
}

fn to_date(value: AnyValue, row: usize) -> Result<Option<Date>, LoadError> {
    match value {
        AnyValue::Null => Ok(None),
        AnyValue::Date(days) => Date::from_julian_day(days + UNIX_EPOCH_JULIAN_DAY)
            .map(Some)
            .map_err(|_| LoadError::InvalidDate {
                row,
                value: format!("days since epoch: {days}"),
            }),
        AnyValue::String(s) => parse_date(s)
            .map(Some)
            .map_err(|err| LoadError::InvalidDate {
                row,
                value: format!("{s} ({err})"),
            }),
        AnyValue::StringOwned(s) => to_date(AnyValue::String(&s), row),
        other => Err(LoadError::InvalidDate {
            row,
            value: format!("{other:?}"),
        }),
    }
}

fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
}

fn to_f64(value: AnyValue, column: &str, row: usize) -> Result<f64, LoadError> {
    match value {
        AnyValue::Float64(v) => Ok(v),
        AnyValue::Float32(v) => Ok(v as f64),
        AnyValue::Int64(v) => Ok(v as f64),
        AnyValue::Int32(v) => Ok(v as f64),
        AnyValue::UInt64(v) => Ok(v as f64),
        AnyValue::UInt32(v) => Ok(v as f64),
        AnyValue::Null => Err(LoadError::MissingValue {
            column: column.to_string(),
            row,
        }),
        AnyValue::String(s) => s.trim().parse::<f64>().map_err(|_| LoadError::InvalidNumber {
            column: column.to_string(),
            row,
            value: s.to_string(),
        }),
        AnyValue::StringOwned(s) => to_f64(AnyValue::String(&s), column, row),
        other => Err(LoadError::InvalidNumber {
            column: column.to_string(),
            row,
            value: format!("{other:?}"),
        }),
    }
}
