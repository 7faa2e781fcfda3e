use time::Date;

/// One daily weather reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherObservation {
    pub date: Option<Date>,
    pub dew_point: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
}

/// Numeric attribute of an observation that a scale can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DewPoint,
    Humidity,
    CloudCover,
}

impl Field {
    pub fn value(self, obs: &WeatherObservation) -> f64 {
        match self {
            Field::DewPoint => obs.dew_point,
            Field::Humidity => obs.humidity,
            Field::CloudCover => obs.cloud_cover,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::DewPoint => "dew point",
            Field::Humidity => "humidity",
            Field::CloudCover => "cloud cover",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub date: String,
    pub dew_point: String,
    pub humidity: String,
    pub cloud_cover: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: "date".into(),
            dew_point: "dewPoint".into(),
            humidity: "humidity".into(),
            cloud_cover: "cloudCover".into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub columns: ColumnMapping,
}
