//! Weighted keyframes
//!
//! A keyframe does not carry an absolute time. Its weight is relative to the
//! other keyframes of the same timeline; the timeline scales all weights so
//! they span the animation's duration.

use smallvec::SmallVec;

use crate::channel::Channel;

/// One timeline segment with a sparse set of channel values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keyframe {
    /// Relative duration weight
    pub weight: f64,
    channels: SmallVec<[(Channel, f64); 4]>,
}

impl Keyframe {
    pub fn new(weight: f64) -> Self {
        Self {
            weight,
            channels: SmallVec::new(),
        }
    }

    /// Build from descriptor names
    ///
    /// Unrecognized channel names are ignored. This is the documented
    /// behavior for descriptors, not an error.
    pub fn from_named<'a, I>(weight: f64, channels: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        channels
            .into_iter()
            .fold(Self::new(weight), |kf, (name, value)| kf.with(name, value))
    }

    /// Set a channel value, replacing any previous one
    pub fn set(mut self, channel: Channel, value: f64) -> Self {
        self.insert(channel, value);
        self
    }

    /// Set a channel by descriptor name, ignoring unknown names
    pub fn with(mut self, name: &str, value: f64) -> Self {
        match Channel::from_name(name) {
            Some(channel) => self.insert(channel, value),
            None => tracing::debug!("ignoring unknown keyframe channel '{}'", name),
        }
        self
    }

    /// Builder: uniform scale on X and Y
    pub fn with_scale(self, value: f64) -> Self {
        self.set(Channel::ScaleX, value).set(Channel::ScaleY, value)
    }

    /// Builder: translation on X and Y, in pixels
    pub fn with_translate(self, x: f64, y: f64) -> Self {
        self.set(Channel::TranslateX, x).set(Channel::TranslateY, y)
    }

    /// Builder: rotation around Z, in degrees
    pub fn with_rotate(self, degrees: f64) -> Self {
        self.set(Channel::RotateZ, degrees)
    }

    pub fn insert(&mut self, channel: Channel, value: f64) {
        match self.channels.iter_mut().find(|(c, _)| *c == channel) {
            Some(slot) => slot.1 = value,
            None => self.channels.push((channel, value)),
        }
    }

    /// Value for a channel, if this keyframe sets it
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.channels
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.get(channel).is_some()
    }

    /// Channels in insertion order
    pub fn channels(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        self.channels.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
