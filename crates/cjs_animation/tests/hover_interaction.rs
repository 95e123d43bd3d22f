//! Integration tests for events + scheduler + element host
//!
//! These tests drive the engine the way a host page would:
//! - Named elements are created in a `Document`
//! - Pointer events are dispatched through the document's listeners
//! - Frames arrive from a `ManualFrames` clock that only ticks on request

use cjs_animation::{presets, AnimationDescriptor, AnimationScheduler, Easing, PlaybackState};
use cjs_core::{event_names, Document, ElementHost, ElementId, Event, ManualFrames};

const EQUALS_HOVER: &str = r#"
    category = "event_driven"
    duration = 0.2
    easing = "linear"

    [[keyframes]]
    weight = 1.0
    channels = { scaleX = 1.0, scaleY = 1.0 }

    [[keyframes]]
    weight = 1.0
    channels = { scaleX = 1.05, scaleY = 1.05 }
"#;

fn calculator() -> (Document, ElementId) {
    let mut doc = Document::new();
    doc.create("calculator", "div").unwrap();
    doc.create("calculator-screen", "div").unwrap();
    let equals = doc.create("calculator-button-equals", "button").unwrap();
    (doc, equals)
}

/// Run frames until nothing is active, returning how many ticks ran
fn run_to_rest(
    scheduler: &mut AnimationScheduler,
    doc: &mut Document,
    frames: &mut ManualFrames,
) -> usize {
    let mut ticks = 0;
    while let Some(now) = frames.next_frame() {
        scheduler.tick(doc, frames, now);
        ticks += 1;
        if !scheduler.has_active_animations() || ticks > 1_000 {
            break;
        }
    }
    ticks
}

/// Hovering the equals button grows it, leaving shrinks it back
#[test]
fn test_hover_enter_and_leave() {
    let (mut doc, equals) = calculator();
    let mut frames = ManualFrames::sixty_hz();
    let mut scheduler = AnimationScheduler::new();

    let descriptor = AnimationDescriptor::from_toml_str(EQUALS_HOVER).unwrap();
    let id = scheduler
        .register(&mut doc, equals, "hover", &descriptor)
        .unwrap();
    scheduler.start(&mut frames);

    // Pointer enters: forward playback to the grown keyframe
    let enter = Event::new(event_names::POINTER_ENTER, equals);
    assert!(doc.dispatch(&enter, &mut scheduler));
    let ticks = run_to_rest(&mut scheduler, &mut doc, &mut frames);
    assert!(ticks >= 12);

    let record = scheduler.record(id).unwrap();
    assert_eq!(record.state(), PlaybackState::Ended);
    assert!(!record.is_reversed());
    assert_eq!(doc.transform(equals), Some("scaleX(1.05) scaleY(1.05) "));

    // Pointer leaves: reverse playback back to rest
    let leave = Event::new(event_names::POINTER_LEAVE, equals);
    assert!(doc.dispatch(&leave, &mut scheduler));
    assert!(scheduler.is_active(id));
    run_to_rest(&mut scheduler, &mut doc, &mut frames);

    let record = scheduler.record(id).unwrap();
    assert!(record.is_ended());
    assert!(record.is_reversed());
    assert!(record.elapsed() < 0.0);
    assert_eq!(doc.transform(equals), Some("scaleX(1) scaleY(1) "));
    assert!(scheduler.is_inactive(id));
}

/// Leaving halfway through rewinds from the current position
#[test]
fn test_leave_midway_rewinds_from_current_time() {
    let (mut doc, equals) = calculator();
    let mut frames = ManualFrames::new(0.0625);
    let mut scheduler = AnimationScheduler::new();

    let id = scheduler
        .register(&mut doc, equals, "hover", &presets::hover_scale(1.1, 1.0))
        .unwrap();
    scheduler.start(&mut frames);

    doc.dispatch(&Event::new(event_names::POINTER_ENTER, equals), &mut scheduler);
    for _ in 0..4 {
        let now = frames.next_frame().unwrap();
        scheduler.tick(&mut doc, &mut frames, now);
    }
    assert_eq!(scheduler.record(id).unwrap().elapsed(), 0.25);

    doc.dispatch(&Event::new(event_names::POINTER_LEAVE, equals), &mut scheduler);
    let ticks = run_to_rest(&mut scheduler, &mut doc, &mut frames);

    // Four steps back land exactly on zero, the fifth crosses it
    assert_eq!(ticks, 5);
    assert_eq!(doc.transform(equals), Some("scaleX(1) scaleY(1) "));
}

/// Elements without an animation never receive a transform
#[test]
fn test_unanimated_elements_untouched() {
    let (mut doc, equals) = calculator();
    let screen = doc.id("calculator-screen").unwrap();
    let mut frames = ManualFrames::sixty_hz();
    let mut scheduler = AnimationScheduler::new();

    scheduler
        .register(&mut doc, equals, "hover", &presets::hover_scale(1.05, 0.1))
        .unwrap();
    scheduler.start(&mut frames);

    assert!(!doc.dispatch(&Event::new(event_names::POINTER_ENTER, screen), &mut scheduler));
    doc.dispatch(&Event::new(event_names::POINTER_ENTER, equals), &mut scheduler);
    run_to_rest(&mut scheduler, &mut doc, &mut frames);

    assert_eq!(doc.transform(screen), Some(""));
    assert_ne!(doc.transform(equals), Some(""));
}

/// Bounce easing still settles on the final keyframe
#[test]
fn test_bounce_settles_on_last_keyframe() {
    let (mut doc, equals) = calculator();
    let mut frames = ManualFrames::sixty_hz();
    let mut scheduler = AnimationScheduler::new();

    let descriptor = presets::hover_scale(1.2, 0.5).easing(Easing::OutBounce);
    let id = scheduler
        .register(&mut doc, equals, "bounce", &descriptor)
        .unwrap();
    scheduler.start(&mut frames);

    doc.dispatch(&Event::new(event_names::POINTER_ENTER, equals), &mut scheduler);
    run_to_rest(&mut scheduler, &mut doc, &mut frames);

    assert!(scheduler.record(id).unwrap().is_ended());
    assert_eq!(doc.transform(equals), Some("scaleX(1.2) scaleY(1.2) "));
}
