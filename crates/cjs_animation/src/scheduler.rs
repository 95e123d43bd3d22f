//! Animation scheduler
//!
//! Owns every registered animation and advances the active ones each frame.
//!
//! Records live in one of two pools. Registration puts a record in the
//! inactive pool; a trigger moves it to the active pool; reaching the end in
//! its current direction moves it back. Pausing keeps a record where it is.
//!
//! Each tick runs in two passes: first every active record resolves its time
//! and keyframe, then the resolved keyframes are written to the host. No
//! element is touched until every record has been advanced.

use std::sync::mpsc;

use cjs_core::{ElementHost, ElementId, Event, EventSink, FrameSource};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::compose::apply_keyframe;
use crate::descriptor::AnimationDescriptor;
use crate::error::{AnimationError, Result};
use crate::record::{AnimationRecord, Direction};

new_key_type! {
    pub struct AnimationId;
}

/// What a single tick did
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Sanitized time since the previous tick
    pub delta: f64,
    /// Records advanced and written this frame
    pub advanced: usize,
    /// Records that ended and moved to the inactive pool
    pub retired: usize,
}

#[derive(Debug)]
enum RemoteTrigger {
    Event { target: ElementId, name: String },
    Direct { id: AnimationId, direction: Direction },
}

/// Queues triggers from other threads
///
/// Queued triggers are applied at the start of the next tick. Sending never
/// blocks; it fails only once the scheduler has been dropped.
#[derive(Clone, Debug)]
pub struct TriggerSender {
    tx: mpsc::Sender<RemoteTrigger>,
}

impl TriggerSender {
    /// Queue a named event on `target`, as if the host had dispatched it
    pub fn send_event(&self, target: ElementId, name: impl Into<String>) -> bool {
        self.tx
            .send(RemoteTrigger::Event {
                target,
                name: name.into(),
            })
            .is_ok()
    }

    /// Queue a direct trigger
    pub fn trigger(&self, id: AnimationId, direction: Direction) -> bool {
        self.tx.send(RemoteTrigger::Direct { id, direction }).is_ok()
    }
}

/// Engine context: records, pools, trigger bindings and the frame clock
pub struct AnimationScheduler {
    records: SlotMap<AnimationId, AnimationRecord>,
    /// (element, behavior) -> record
    registry: FxHashMap<(ElementId, String), AnimationId>,
    /// element -> event name -> records listening for it
    bindings: FxHashMap<ElementId, FxHashMap<String, SmallVec<[AnimationId; 2]>>>,
    active: IndexSet<AnimationId>,
    inactive: IndexSet<AnimationId>,
    time_last: f64,
    remote_tx: mpsc::Sender<RemoteTrigger>,
    remote_rx: mpsc::Receiver<RemoteTrigger>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        let (remote_tx, remote_rx) = mpsc::channel();
        Self {
            records: SlotMap::with_key(),
            registry: FxHashMap::default(),
            bindings: FxHashMap::default(),
            active: IndexSet::new(),
            inactive: IndexSet::new(),
            time_last: 0.0,
            remote_tx,
            remote_rx,
        }
    }

    /// Register `behavior` on `element` and bind its trigger listeners
    ///
    /// The new record is idle and sits in the inactive pool. Registering the
    /// same behavior twice on one element is an error, and a failed
    /// registration leaves the scheduler and host untouched.
    pub fn register<H: ElementHost + ?Sized>(
        &mut self,
        host: &mut H,
        element: ElementId,
        behavior: &str,
        descriptor: &AnimationDescriptor,
    ) -> Result<AnimationId> {
        if !host.contains(element) {
            return Err(AnimationError::UnknownElement(element));
        }
        if self.find(element, behavior).is_some() {
            return Err(AnimationError::DuplicateAnimation {
                element,
                behavior: behavior.to_string(),
            });
        }

        let record = descriptor.build(element, behavior)?;
        let forward = record.triggers().forward.clone();
        let reverse = record.triggers().reverse.clone();

        host.add_listener(element, &forward)?;
        if let Err(err) = host.add_listener(element, &reverse) {
            if !self.is_bound(element, &forward) {
                host.remove_listener(element, &forward);
            }
            return Err(err.into());
        }

        let id = self.records.insert(record);
        self.registry.insert((element, behavior.to_string()), id);
        let events = self.bindings.entry(element).or_default();
        for name in [forward, reverse] {
            let ids = events.entry(name).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.inactive.insert(id);

        tracing::debug!("registered animation '{}' on {:?}", behavior, element);
        Ok(id)
    }

    /// Unregister an animation and release its trigger listeners
    ///
    /// A host listener is only removed once no other animation on the same
    /// element listens for that event.
    pub fn unbind<H: ElementHost + ?Sized>(
        &mut self,
        host: &mut H,
        id: AnimationId,
    ) -> Result<AnimationRecord> {
        let record = self
            .records
            .remove(id)
            .ok_or(AnimationError::UnknownAnimation)?;
        let element = record.target();

        self.registry
            .remove(&(element, record.behavior().to_string()));
        self.active.shift_remove(&id);
        self.inactive.shift_remove(&id);

        if let Some(events) = self.bindings.get_mut(&element) {
            events.retain(|name, ids| {
                ids.retain(|bound| *bound != id);
                if ids.is_empty() {
                    host.remove_listener(element, name);
                    false
                } else {
                    true
                }
            });
            if events.is_empty() {
                self.bindings.remove(&element);
            }
        }

        tracing::debug!("unbound animation '{}' from {:?}", record.behavior(), element);
        Ok(record)
    }

    /// Start or redirect playback
    ///
    /// Clears ended and paused, sets the direction and makes the record
    /// active. Elapsed time is kept.
    pub fn trigger(&mut self, id: AnimationId, direction: Direction) -> Result<()> {
        if self.activate(id, direction) {
            Ok(())
        } else {
            Err(AnimationError::UnknownAnimation)
        }
    }

    /// Trigger every animation bound to `name` on `target`
    ///
    /// Returns the number of animations triggered.
    pub fn dispatch_event(&mut self, target: ElementId, name: &str) -> usize {
        let mut matched: SmallVec<[(AnimationId, Direction); 2]> = SmallVec::new();
        if let Some(ids) = self.bindings.get(&target).and_then(|events| events.get(name)) {
            for id in ids {
                let direction = self
                    .records
                    .get(*id)
                    .and_then(|record| record.triggers().direction_for(name));
                if let Some(direction) = direction {
                    matched.push((*id, direction));
                }
            }
        }

        matched
            .into_iter()
            .filter(|(id, direction)| self.activate(*id, *direction))
            .count()
    }

    /// Freeze a playing animation in place
    ///
    /// Returns whether the state changed. Idle and ended records are left
    /// alone.
    pub fn pause(&mut self, id: AnimationId) -> Result<bool> {
        let record = self
            .records
            .get_mut(id)
            .ok_or(AnimationError::UnknownAnimation)?;
        let changed = record.pause();
        if changed {
            tracing::debug!("paused '{}'", record.behavior());
        }
        Ok(changed)
    }

    /// Continue a paused animation
    pub fn resume(&mut self, id: AnimationId) -> Result<bool> {
        let record = self
            .records
            .get_mut(id)
            .ok_or(AnimationError::UnknownAnimation)?;
        let changed = record.resume();
        if changed {
            tracing::debug!("resumed '{}'", record.behavior());
        }
        Ok(changed)
    }

    /// Request the first frame
    pub fn start<F: FrameSource + ?Sized>(&self, frames: &mut F) {
        tracing::debug!("starting frame loop");
        frames.request_frame();
    }

    /// Advance every active animation to `time_current` and request the next frame
    pub fn tick<H, F>(&mut self, host: &mut H, frames: &mut F, time_current: f64) -> FrameReport
    where
        H: ElementHost + ?Sized,
        F: FrameSource + ?Sized,
    {
        self.drain_remote();

        let delta = self.advance_clock(time_current);

        // Pass A: resolve time and keyframe for every running record
        let mut advanced: SmallVec<[AnimationId; 8]> = SmallVec::new();
        for id in &self.active {
            if let Some(record) = self.records.get_mut(*id) {
                if record.is_running() {
                    record.advance(delta);
                    advanced.push(*id);
                }
            }
        }

        // Pass B: write keyframes, then retire what reached its end
        let mut retired: SmallVec<[AnimationId; 4]> = SmallVec::new();
        for id in &advanced {
            let Some(record) = self.records.get_mut(*id) else {
                continue;
            };
            if let Some(keyframe) = record.current_keyframe() {
                apply_keyframe(host, record.target(), keyframe, record.applies_box_channels());
            }
            if record.has_finished() {
                record.finish();
                tracing::debug!(
                    "'{}' on {:?} ended ({:?})",
                    record.behavior(),
                    record.target(),
                    record.direction()
                );
                retired.push(*id);
            }
        }

        for id in &retired {
            self.active.shift_remove(id);
            self.inactive.insert(*id);
        }

        tracing::trace!(
            "tick t={} delta={} advanced={} retired={}",
            time_current,
            delta,
            advanced.len(),
            retired.len()
        );

        frames.request_frame();

        FrameReport {
            delta,
            advanced: advanced.len(),
            retired: retired.len(),
        }
    }

    /// Handle for queueing triggers from other threads
    pub fn trigger_sender(&self) -> TriggerSender {
        TriggerSender {
            tx: self.remote_tx.clone(),
        }
    }

    pub fn record(&self, id: AnimationId) -> Option<&AnimationRecord> {
        self.records.get(id)
    }

    /// Look up the animation registered for (element, behavior)
    pub fn find(&self, element: ElementId, behavior: &str) -> Option<AnimationId> {
        self.registry
            .get(&(element, behavior.to_string()))
            .copied()
    }

    pub fn is_active(&self, id: AnimationId) -> bool {
        self.active.contains(&id)
    }

    pub fn is_inactive(&self, id: AnimationId) -> bool {
        self.inactive.contains(&id)
    }

    /// Active pool in activation order
    pub fn active(&self) -> impl Iterator<Item = AnimationId> + '_ {
        self.active.iter().copied()
    }

    /// Inactive pool in retirement order
    pub fn inactive(&self) -> impl Iterator<Item = AnimationId> + '_ {
        self.inactive.iter().copied()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }

    /// Whether any animation still needs frames
    pub fn has_active_animations(&self) -> bool {
        !self.active.is_empty()
    }

    /// Timestamp of the last tick
    pub fn time_last(&self) -> f64 {
        self.time_last
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn activate(&mut self, id: AnimationId, direction: Direction) -> bool {
        let Some(record) = self.records.get_mut(id) else {
            return false;
        };
        record.trigger(direction);

        self.inactive.shift_remove(&id);
        self.active.insert(id);

        tracing::debug!(
            "triggered '{}' on {:?} ({:?})",
            record.behavior(),
            record.target(),
            direction
        );
        true
    }

    fn is_bound(&self, element: ElementId, name: &str) -> bool {
        self.bindings
            .get(&element)
            .and_then(|events| events.get(name))
            .is_some_and(|ids| !ids.is_empty())
    }

    fn advance_clock(&mut self, time_current: f64) -> f64 {
        if !time_current.is_finite() {
            tracing::warn!("ignoring non-finite frame time {}", time_current);
            return 0.0;
        }

        let delta = time_current - self.time_last;
        self.time_last = time_current;

        if delta < 0.0 {
            tracing::warn!("frame clock went backwards by {}, clamping to 0", -delta);
            return 0.0;
        }
        delta
    }

    fn drain_remote(&mut self) {
        while let Ok(remote) = self.remote_rx.try_recv() {
            match remote {
                RemoteTrigger::Event { target, name } => {
                    self.dispatch_event(target, &name);
                }
                RemoteTrigger::Direct { id, direction } => {
                    if self.trigger(id, direction).is_err() {
                        tracing::debug!("dropping queued trigger for unknown animation");
                    }
                }
            }
        }
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for AnimationScheduler {
    fn handle_event(&mut self, event: &Event) {
        self.dispatch_event(event.target, &event.name);
    }
}
