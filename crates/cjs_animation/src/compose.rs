//! Style composition
//!
//! Turns one resolved keyframe into presentation state: the transform
//! channels collapse into a single transform value, box channels map to
//! their own style properties.

use cjs_core::{ElementHost, ElementId};
use smallvec::SmallVec;

use crate::channel::{Channel, ChannelGroup};
use crate::keyframe::Keyframe;

/// Compose the transform value for a keyframe
///
/// Groups are emitted rotation, scale, translation; axes X, Y, Z within each
/// group. Only channels present in the keyframe produce a term, and every
/// term is followed by a single space.
pub fn compose_transform(keyframe: &Keyframe) -> String {
    let mut transform = String::new();

    for channel in Channel::ROTATION
        .into_iter()
        .chain(Channel::SCALE)
        .chain(Channel::TRANSLATION)
    {
        let Some(value) = keyframe.get(channel) else {
            continue;
        };
        let unit = match channel.group() {
            ChannelGroup::Rotation => "deg",
            ChannelGroup::Translation => "px",
            _ => "",
        };
        transform.push_str(&format!("{}({}{}) ", channel.name(), value, unit));
    }

    transform
}

/// Style assignments for the keyframe's non-transform channels
pub fn compose_styles(keyframe: &Keyframe) -> SmallVec<[(&'static str, String); 4]> {
    Channel::ALL
        .into_iter()
        .filter_map(|channel| {
            let property = channel.css_property()?;
            let value = keyframe.get(channel)?;
            Some((property, format!("{}px", value)))
        })
        .collect()
}

/// Write a keyframe onto its target
///
/// The transform is replaced in one assignment. Box channels are only
/// written when `box_channels` is set.
pub fn apply_keyframe<H: ElementHost + ?Sized>(
    host: &mut H,
    target: ElementId,
    keyframe: &Keyframe,
    box_channels: bool,
) {
    host.set_transform(target, compose_transform(keyframe));

    if box_channels {
        for (property, value) in compose_styles(keyframe) {
            host.set_style(target, property, value);
        }
    }
}
