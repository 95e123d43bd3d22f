//! Animation presets for common interactive patterns
//!
//! Ready-made descriptors for the usual hover and press feedback. Each one
//! rests at its first keyframe and reaches its effect at the second, so the
//! reverse trigger settles back to rest.

use cjs_core::event_names;

use crate::descriptor::AnimationDescriptor;
use crate::easing::Easing;
use crate::keyframe::Keyframe;

// ============================================================================
// Hover
// ============================================================================

/// Grow uniformly to `factor` while the pointer is over the element
pub fn hover_scale(factor: f64, duration: f64) -> AnimationDescriptor {
    AnimationDescriptor::new(duration)
        .keyframe(Keyframe::new(1.0).with_scale(1.0))
        .keyframe(Keyframe::new(1.0).with_scale(factor))
}

/// Rise by `offset` pixels while the pointer is over the element
pub fn hover_lift(offset: f64, duration: f64) -> AnimationDescriptor {
    AnimationDescriptor::new(duration)
        .keyframe(Keyframe::new(1.0).with_translate(0.0, 0.0))
        .keyframe(Keyframe::new(1.0).with_translate(0.0, -offset))
}

// ============================================================================
// Press
// ============================================================================

/// Shrink to `factor` while pressed, bouncing into place
pub fn press_bounce(factor: f64, duration: f64) -> AnimationDescriptor {
    AnimationDescriptor::new(duration)
        .easing(Easing::OutBounce)
        .triggers(event_names::POINTER_DOWN, event_names::POINTER_UP)
        .keyframe(Keyframe::new(1.0).with_scale(1.0))
        .keyframe(Keyframe::new(1.0).with_scale(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use crate::compose::compose_transform;
    use cjs_core::ElementId;

    #[test]
    fn test_hover_scale() {
        let record = hover_scale(1.05, 0.2).build(ElementId(0), "hover").unwrap();

        assert_eq!(record.duration(), 0.2);
        assert_eq!(record.triggers().forward, event_names::POINTER_ENTER);
        assert_eq!(record.triggers().reverse, event_names::POINTER_LEAVE);

        let frames = record.timeline().keyframes();
        assert_eq!(compose_transform(&frames[0]), "scaleX(1) scaleY(1) ");
        assert_eq!(compose_transform(&frames[1]), "scaleX(1.05) scaleY(1.05) ");
    }

    #[test]
    fn test_hover_lift_moves_up() {
        let desc = hover_lift(4.0, 0.15);
        let last = desc.keyframes[1].to_keyframe();
        assert_eq!(last.get(Channel::TranslateY), Some(-4.0));
        assert_eq!(last.get(Channel::TranslateX), Some(0.0));
    }

    #[test]
    fn test_press_bounce_binds_pointer_buttons() {
        let desc = press_bounce(0.95, 0.3);
        assert_eq!(desc.easing, Easing::OutBounce);
        assert_eq!(desc.triggers.forward, event_names::POINTER_DOWN);
        assert_eq!(desc.triggers.reverse, event_names::POINTER_UP);
        assert!(desc.validate().is_ok());
    }
}
