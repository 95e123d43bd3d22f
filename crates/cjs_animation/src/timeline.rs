//! Keyframe timeline and interval resolution

use crate::error::{AnimationError, Result};
use crate::keyframe::Keyframe;

/// Ordered, validated keyframes
///
/// Always holds at least one keyframe and a positive total weight, so
/// resolution never divides by zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    keyframes: Vec<Keyframe>,
    total_weight: f64,
}

impl Timeline {
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(AnimationError::EmptyTimeline);
        }

        for (index, kf) in keyframes.iter().enumerate() {
            if !kf.weight.is_finite() || kf.weight < 0.0 {
                return Err(AnimationError::InvalidWeight {
                    index,
                    weight: kf.weight,
                });
            }
            if let Some((channel, value)) = kf.channels().find(|(_, v)| !v.is_finite()) {
                return Err(AnimationError::InvalidChannelValue {
                    index,
                    channel,
                    value,
                });
            }
        }

        let total_weight: f64 = keyframes.iter().map(|kf| kf.weight).sum();
        if total_weight <= 0.0 || !total_weight.is_finite() {
            return Err(AnimationError::ZeroTotalWeight);
        }

        Ok(Self {
            keyframes,
            total_weight,
        })
    }

    /// Index of the keyframe active at `elapsed` for a timeline spanning `duration`
    pub fn resolve(&self, elapsed: f64, duration: f64) -> usize {
        resolve_weights(
            self.keyframes.iter().map(|kf| kf.weight),
            self.total_weight,
            duration,
            elapsed,
        )
    }

    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.keyframes.get(index)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.keyframes.iter().map(|kf| kf.weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

/// Find the keyframe interval containing `elapsed`
///
/// Weights are scaled so they sum to `duration`. The first index whose
/// cumulative end is strictly greater than `elapsed` wins, so a time exactly
/// on a boundary belongs to the following keyframe. Past the end, the last
/// index is returned.
pub fn resolve_keyframe_index(weights: &[f64], duration: f64, elapsed: f64) -> usize {
    let total: f64 = weights.iter().sum();
    resolve_weights(weights.iter().copied(), total, duration, elapsed)
}

fn resolve_weights<I>(weights: I, total_weight: f64, duration: f64, elapsed: f64) -> usize
where
    I: Iterator<Item = f64>,
{
    let unit = duration / total_weight;
    let mut acc = 0.0;
    let mut last = 0;

    for (index, weight) in weights.enumerate() {
        acc += weight * unit;
        if elapsed < acc {
            return index;
        }
        last = index;
    }

    last
}
