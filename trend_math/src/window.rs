//! Rolling trend over the most recent observations

use crate::prediction::Prediction;
use crate::trend::{compute_trend, Trend};
use crate::{MathError, Result};
use std::collections::VecDeque;

/// Normalized trend over a fixed-size window of recent observations
#[derive(Debug, Clone)]
pub struct TrendWindow {
    period: usize,
    values: VecDeque<f64>,
}

impl TrendWindow {
    /// Create a new window holding at most `period` observations
    pub fn new(period: usize) -> Result<Self> {
        if period < 2 {
            return Err(MathError::InvalidInput(
                "Period must be at least 2 for a trend window".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
        })
    }

    /// Push a new observation, evicting the oldest once the window is full
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);

        if self.values.len() > self.period {
            self.values.pop_front();
        }
    }

    /// Push every value of a series in order
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.update(value);
        }
    }

    /// Trend over the observations currently in the window
    pub fn trend(&mut self) -> Trend {
        compute_trend(self.values.make_contiguous())
    }

    /// Prediction over the observations currently in the window
    pub fn predict(&mut self) -> Prediction {
        Prediction::from_trend(self.trend())
    }

    /// Whether the window has reached its capacity
    pub fn is_full(&self) -> bool {
        self.values.len() == self.period
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the current period
    pub fn period(&self) -> usize {
        self.period
    }

    /// Reset the window, clearing all values
    pub fn reset(&mut self) {
        self.values.clear();
    }
}
