//! Hover Button Demo
//!
//! Drives a headless calculator page:
//! - The equals button grows on pointer enter and settles back on leave
//! - A press animation is triggered from a worker thread through a `TriggerSender`
//! - Frames come from a deterministic 60Hz `ManualFrames` clock
//!
//! Run with: RUST_LOG=debug cargo run -p cjs_animation --example hover_button

use cjs_animation::{presets, AnimationScheduler, Result};
use cjs_core::{event_names, Document, ElementHost, ElementId, Event, ManualFrames};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut doc = Document::new();
    doc.create("calculator", "div")?;
    doc.create("calculator-screen", "div")?;
    let equals = doc.create("calculator-button-equals", "button")?;

    let mut scheduler = AnimationScheduler::new();
    let mut frames = ManualFrames::sixty_hz();

    scheduler.register(&mut doc, equals, "hover", &presets::hover_scale(1.05, 0.2))?;
    scheduler.register(&mut doc, equals, "press", &presets::press_bounce(0.95, 0.3))?;
    scheduler.start(&mut frames);

    // Hover for a quarter second
    doc.dispatch(&Event::new(event_names::POINTER_ENTER, equals), &mut scheduler);
    run_frames(&mut scheduler, &mut doc, &mut frames, equals, 15);

    // Press from another thread; applied on the next frame
    let sender = scheduler.trigger_sender();
    let worker = std::thread::spawn(move || sender.send_event(equals, event_names::POINTER_DOWN));
    if worker.join().unwrap_or(false) {
        tracing::info!("queued press from worker thread");
    }
    run_frames(&mut scheduler, &mut doc, &mut frames, equals, 20);

    // Release and leave, then let everything settle
    doc.dispatch(&Event::new(event_names::POINTER_UP, equals), &mut scheduler);
    doc.dispatch(&Event::new(event_names::POINTER_LEAVE, equals), &mut scheduler);
    run_frames(&mut scheduler, &mut doc, &mut frames, equals, 60);

    tracing::info!(
        "settled: transform = {:?}, active = {}, inactive = {}",
        doc.transform(equals).unwrap_or_default(),
        scheduler.active_count(),
        scheduler.inactive_count()
    );
    Ok(())
}

fn run_frames(
    scheduler: &mut AnimationScheduler,
    doc: &mut Document,
    frames: &mut ManualFrames,
    target: ElementId,
    count: usize,
) {
    for _ in 0..count {
        let Some(now) = frames.next_frame() else {
            break;
        };
        let report = scheduler.tick(doc, frames, now);
        if report.advanced > 0 {
            tracing::info!(
                "t={:.3} transform={:?}",
                now,
                doc.transform(target).unwrap_or_default()
            );
        }
        if !scheduler.has_active_animations() {
            break;
        }
    }
}
