//! Gesture state machine.
//!
//! A [`Recognizer`] owns one contact registry and at most one session. Every
//! notification is processed to completion and returns the snapshots it
//! produced, in order; the caller hands them to [`GestureHandlers::dispatch`].
//!
//! | Notification | Registry size after | Emits |
//! |---|---|---|
//! | begin | 1 or 2 | re-anchor, `start` |
//! | begin | > 2 | nothing |
//! | move | 1 or 2 | `move` |
//! | move | > 2 | nothing |
//! | end / cancel | 1 or 2 | `end`/`cancel`, then re-anchor and `start` |
//! | end / cancel | 0 | `end`/`cancel` at the last center, session dropped |
//! | end / cancel | > 2 | `end`/`cancel` |
//!
//! Move, end and cancel for an id that is not tracked emit nothing, and
//! contacts from untracked modalities are dropped before any of the above.
//!
//! Handlers run synchronously on the notification thread. A handler must not
//! synchronously cause another pointer notification on the same element.

use yew::Callback;

use crate::model::{ContactEvent, ContactKind, Phase, Snapshot};
use crate::state::{measure, ContactRegistry, Geometry, Session};

#[derive(Default, Debug)]
pub struct Recognizer {
    contacts: ContactRegistry,
    session: Option<Session>,
}

impl Recognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: &ContactEvent) -> Vec<Snapshot> {
        if !event.modality.is_tracked() {
            return Vec::new();
        }
        match event.kind {
            ContactKind::Begin => self.begin(event),
            ContactKind::Move => self.moved(event),
            ContactKind::End => self.release(event, Phase::End),
            ContactKind::Cancel => self.release(event, Phase::Cancel),
        }
    }

    /// Drops every contact and the session.
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.session = None;
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.size()
    }

    pub fn is_idle(&self) -> bool {
        self.session.is_none()
    }

    #[cfg(test)]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn begin(&mut self, event: &ContactEvent) -> Vec<Snapshot> {
        self.contacts.upsert(event.id, event.position);
        let live = self.contacts.size();
        if live > 2 {
            return Vec::new();
        }
        vec![self.anchor(live, event.timestamp)]
    }

    fn moved(&mut self, event: &ContactEvent) -> Vec<Snapshot> {
        if !self.contacts.update(event.id, event.position) {
            return Vec::new();
        }
        let live = self.contacts.size();
        if live > 2 {
            return Vec::new();
        }
        let geom = measure(&self.contacts.active_points());
        match self.session.as_mut() {
            Some(session) => vec![session.snapshot(Phase::Move, live, &geom, event.timestamp)],
            None => Vec::new(),
        }
    }

    fn release(&mut self, event: &ContactEvent, phase: Phase) -> Vec<Snapshot> {
        if !self.contacts.remove(event.id) {
            return Vec::new();
        }
        let live = self.contacts.size();
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let geom = if live == 0 {
            Geometry::at(session.last_center)
        } else {
            measure(&self.contacts.active_points())
        };
        let mut out = vec![session.snapshot(phase, live, &geom, event.timestamp)];
        match live {
            0 => self.session = None,
            1 | 2 => out.push(self.anchor(live, event.timestamp)),
            _ => {}
        }
        out
    }

    /// Starts a new epoch at the current geometry and returns its `start` snapshot.
    fn anchor(&mut self, live: usize, timestamp: f64) -> Snapshot {
        let geom = measure(&self.contacts.active_points());
        let session = self.session.insert(Session::anchored(&geom));
        session.snapshot(Phase::Start, live, &geom, timestamp)
    }
}

/// Caller-supplied callbacks, one per phase. Missing ones are skipped.
#[derive(Clone, Default, PartialEq)]
pub struct GestureHandlers {
    pub on_start: Option<Callback<Snapshot>>,
    pub on_move: Option<Callback<Snapshot>>,
    pub on_end: Option<Callback<Snapshot>>,
    pub on_cancel: Option<Callback<Snapshot>>,
}

impl GestureHandlers {
    /// Invokes the handler for the snapshot's phase. Returns false when that
    /// phase has no handler.
    pub fn dispatch(&self, snapshot: &Snapshot) -> bool {
        let handler = match snapshot.phase {
            Phase::Start => &self.on_start,
            Phase::Move => &self.on_move,
            Phase::End => &self.on_end,
            Phase::Cancel => &self.on_cancel,
        };
        match handler {
            Some(cb) => {
                cb.emit(*snapshot);
                true
            }
            None => false,
        }
    }
}
