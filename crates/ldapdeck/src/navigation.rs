//! Slide navigation: the cyclic position, key bindings, and the key-press
//! stream the controller subscribes to while mounted.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use eframe::egui::Key;

use crate::catalog::Catalog;

/// Current slide index within a deck of `len` slides.
///
/// `index < len` holds for every value of this type; transitions wrap
/// around in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    index: usize,
    len: usize,
}

impl Position {
    /// First slide of a deck with `len` slides.
    ///
    /// Panics when `len` is zero. A deck without slides is a startup
    /// configuration error, `Catalog::new` rejects it before this point.
    pub fn start(len: usize) -> Self {
        assert!(len > 0, "deck must contain at least one slide");
        Self { index: 0, len }
    }

    /// Position at `index`, or `None` when out of range.
    pub fn at(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides in the deck.
    pub fn total(&self) -> usize {
        self.len
    }

    /// 1-based slide number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn advanced(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn retreated(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Advance => self.advanced(),
            NavAction::Retreat => self.retreated(),
        }
    }

    /// Zero-padded `NN / TT` indicator, e.g. `01 / 06`.
    pub fn indicator(&self) -> String {
        format!("{:02} / {:02}", self.number(), self.len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Advance,
    Retreat,
}

/// Whether a listener handled a key. Consumed keys skip default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// Keys mapped to navigation actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: Vec<Key>,
    pub backward: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![Key::ArrowRight, Key::PageDown],
            backward: vec![Key::ArrowLeft, Key::PageUp],
        }
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: Key) -> Option<NavAction> {
        if self.forward.contains(&key) {
            Some(NavAction::Advance)
        } else if self.backward.contains(&key) {
            Some(NavAction::Retreat)
        } else {
            None
        }
    }
}

type Handler = Box<dyn FnMut(Key) -> KeyOutcome>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Handler)>,
}

/// Global key-press stream. Every dispatched key reaches each listener
/// in subscription order.
#[derive(Default)]
pub struct KeyStream {
    listeners: Rc<RefCell<Listeners>>,
}

impl std::fmt::Debug for KeyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStream")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl KeyStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`. It stays registered until the returned
    /// subscription is unsubscribed or dropped.
    pub fn subscribe(&self, handler: impl FnMut(Key) -> KeyOutcome + 'static) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(handler)));
        tracing::debug!(id, total = listeners.entries.len(), "key listener subscribed");
        Subscription {
            id,
            listeners: Some(Rc::downgrade(&self.listeners)),
        }
    }

    /// Deliver `key` to every listener. Handlers must not subscribe or
    /// unsubscribe from inside the callback.
    pub fn dispatch(&self, key: Key) -> KeyOutcome {
        let mut listeners = self.listeners.borrow_mut();
        let mut outcome = KeyOutcome::Ignored;
        for (_, handler) in listeners.entries.iter_mut() {
            if handler(key).is_consumed() {
                outcome = KeyOutcome::Consumed;
            }
        }
        outcome
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

/// Handle to a registered key listener. Releases the listener on
/// `unsubscribe` or on drop, whichever comes first.
pub struct Subscription {
    id: u64,
    listeners: Option<Weak<RefCell<Listeners>>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.listeners.is_some())
            .finish()
    }
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(listeners) = self.listeners.take().and_then(|weak| weak.upgrade()) else {
            return;
        };
        let mut listeners = listeners.borrow_mut();
        listeners.entries.retain(|(id, _)| *id != self.id);
        tracing::debug!(
            id = self.id,
            total = listeners.entries.len(),
            "key listener unsubscribed"
        );
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Owns the navigation state for one mounted view.
///
/// Buttons call `advance`/`retreat` directly; bound keys reach the same
/// transition through the key stream subscription held while mounted.
#[derive(Debug)]
pub struct Controller {
    position: Rc<Cell<Position>>,
    bindings: KeyBindings,
    subscription: Option<Subscription>,
}

impl Controller {
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_bindings(catalog.len(), KeyBindings::default())
    }

    pub fn with_bindings(len: usize, bindings: KeyBindings) -> Self {
        Self {
            position: Rc::new(Cell::new(Position::start(len))),
            bindings,
            subscription: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position.get()
    }

    pub fn index(&self) -> usize {
        self.position.get().index()
    }

    pub fn advance(&self) -> Position {
        transition(&self.position, NavAction::Advance)
    }

    pub fn retreat(&self) -> Position {
        transition(&self.position, NavAction::Retreat)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Subscribe to `stream`. Any subscription from an earlier mount is
    /// released first, so a controller never holds two listeners.
    pub fn mount(&mut self, stream: &KeyStream) {
        self.unmount();
        let position = Rc::clone(&self.position);
        let bindings = self.bindings.clone();
        self.subscription = Some(stream.subscribe(move |key| {
            match bindings.action_for(key) {
                Some(action) => {
                    transition(&position, action);
                    KeyOutcome::Consumed
                }
                None => KeyOutcome::Ignored,
            }
        }));
    }

    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    /// Replace the key bindings. A mounted controller re-subscribes with
    /// the new bindings.
    pub fn rebind(&mut self, stream: &KeyStream, bindings: KeyBindings) {
        self.bindings = bindings;
        if self.is_mounted() {
            self.mount(stream);
        }
    }
}

fn transition(cell: &Cell<Position>, action: NavAction) -> Position {
    let from = cell.get();
    let to = from.apply(action);
    cell.set(to);
    tracing::debug!(?action, from = from.index(), to = to.index(), "slide transition");
    to
}
