use std::sync::Arc;

use crate::{Field, WeatherObservation, scale::extent};

/// Fixed, ordered set of observations. Cloning shares the underlying slice.
#[derive(Debug, Clone)]
pub struct Dataset {
    observations: Arc<[WeatherObservation]>,
}

impl Dataset {
    pub fn new(observations: Vec<WeatherObservation>) -> Self {
        Self {
            observations: observations.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WeatherObservation> {
        self.observations.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeatherObservation> {
        self.observations.iter()
    }

    pub fn as_slice(&self) -> &[WeatherObservation] {
        &self.observations
    }

    pub fn extent(&self, field: Field) -> Option<(f64, f64)> {
        extent(self.observations.iter().map(|obs| field.value(obs)))
    }
}

impl From<Vec<WeatherObservation>> for Dataset {
    fn from(observations: Vec<WeatherObservation>) -> Self {
        Self::new(observations)
    }
}
