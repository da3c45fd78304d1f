//! Full-screen image viewer state.
//!
//! Two layers:
//!
//! - [`Viewer`] is the pure state: `Closed` or `Open(index)` over a collection
//!   of known length, with wrap-around `next`/`previous`.
//! - [`Lightbox`] owns a `Viewer`, the collection length, and a
//!   [`ViewerHost`], the page environment the viewer borrows while it is
//!   open. Opening suspends page scroll and registers key bindings; leaving
//!   `Open` by any path (close, collection swap, drop) gives both back,
//!   exactly once.
//!
//! ```text
//!            select(i)                 next / previous
//!   Closed ───────────▶ Open(i) ◀──────────────────────┐
//!     ▲                   │  └─────────────────────────┘
//!     └── close / backdrop / double-click / Escape / collection swap
//! ```
//!
//! The site generator drives a `Lightbox` over a recording host to produce
//! each viewer page: the recorded bindings become the page's key map, and the
//! scroll suspension becomes the body class that locks scrolling.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LightboxError {
    #[error("image index {index} out of range for collection of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Viewer state over a collection of `len` images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewer {
    #[default]
    Closed,
    Open(usize),
}

impl Viewer {
    /// Open on `index`. Fails when `index >= len`.
    pub fn select(index: usize, len: usize) -> Result<Viewer, LightboxError> {
        if index < len {
            Ok(Viewer::Open(index))
        } else {
            Err(LightboxError::OutOfRange { index, len })
        }
    }

    /// Following image, wrapping from last to first. Closed stays closed.
    pub fn next(self, len: usize) -> Viewer {
        match self {
            Viewer::Open(_) if len == 0 => Viewer::Closed,
            Viewer::Open(i) => Viewer::Open((i + 1) % len),
            Viewer::Closed => Viewer::Closed,
        }
    }

    /// Preceding image, wrapping from first to last. Closed stays closed.
    pub fn previous(self, len: usize) -> Viewer {
        match self {
            Viewer::Open(_) if len == 0 => Viewer::Closed,
            Viewer::Open(i) => Viewer::Open((i + len - 1) % len),
            Viewer::Closed => Viewer::Closed,
        }
    }

    pub fn close(self) -> Viewer {
        Viewer::Closed
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Viewer::Open(i) => Some(i),
            Viewer::Closed => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Viewer::Open(_))
    }
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// DOM `KeyboardEvent.key` name.
    pub fn dom_name(self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Escape => "Escape",
            Key::Other => "",
        }
    }
}

/// Pointer targets inside the open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    CloseButton,
    PreviousButton,
    NextButton,
    /// Area outside the image and caption.
    Backdrop,
    /// The image or its caption. Clicks here do nothing.
    Content,
    /// Double click / double tap anywhere in the viewer.
    DoubleClick,
    /// Left screen-edge tap zone (touch).
    EdgeLeft,
    /// Right screen-edge tap zone (touch).
    EdgeRight,
}

/// What an input does to an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Close,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Previous => "previous",
            Action::Next => "next",
            Action::Close => "close",
        }
    }
}

/// Key bindings registered while the viewer is open.
pub const KEY_BINDINGS: [(Key, Action); 3] = [
    (Key::ArrowLeft, Action::Previous),
    (Key::ArrowRight, Action::Next),
    (Key::Escape, Action::Close),
];

fn action_for_key(key: Key) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, action)| *action)
}

fn action_for_pointer(pointer: Pointer) -> Option<Action> {
    match pointer {
        Pointer::CloseButton | Pointer::Backdrop | Pointer::DoubleClick => Some(Action::Close),
        Pointer::PreviousButton | Pointer::EdgeLeft => Some(Action::Previous),
        Pointer::NextButton | Pointer::EdgeRight => Some(Action::Next),
        Pointer::Content => None,
    }
}

/// Page environment borrowed by an open viewer.
///
/// Calls always come in pairs: `suspend_scroll` + `bind_keys` when the viewer
/// opens, `unbind_keys` + `restore_scroll` when it leaves `Open`.
pub trait ViewerHost {
    fn suspend_scroll(&mut self);
    fn restore_scroll(&mut self);
    fn bind_keys(&mut self, bindings: &[(Key, Action)]);
    fn unbind_keys(&mut self);
}

/// A viewer bound to a host and a collection.
pub struct Lightbox<H: ViewerHost> {
    host: H,
    len: usize,
    state: Viewer,
    /// Whether the host is currently suspended/bound on our behalf.
    acquired: bool,
}

impl<H: ViewerHost> Lightbox<H> {
    /// A closed viewer over a collection of `len` images.
    pub fn new(host: H, len: usize) -> Self {
        Self {
            host,
            len,
            state: Viewer::Closed,
            acquired: false,
        }
    }

    pub fn state(&self) -> Viewer {
        self.state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Open (or move, if already open) to `index`.
    pub fn select(&mut self, index: usize) -> Result<(), LightboxError> {
        self.state = Viewer::select(index, self.len)?;
        self.acquire();
        Ok(())
    }

    pub fn next(&mut self) {
        self.transition(self.state.next(self.len));
    }

    pub fn previous(&mut self) {
        self.transition(self.state.previous(self.len));
    }

    pub fn close(&mut self) {
        self.transition(Viewer::Closed);
    }

    /// The collection behind the viewer was replaced. Always closes.
    pub fn replace_collection(&mut self, len: usize) {
        self.close();
        self.len = len;
    }

    /// Route a key press. Ignored while closed and for unbound keys.
    /// Returns the action applied, if any.
    pub fn handle_key(&mut self, key: Key) -> Option<Action> {
        if !self.state.is_open() {
            return None;
        }
        let action = action_for_key(key)?;
        self.apply(action);
        Some(action)
    }

    /// Route a pointer event. Ignored while closed.
    pub fn handle_pointer(&mut self, pointer: Pointer) -> Option<Action> {
        if !self.state.is_open() {
            return None;
        }
        let action = action_for_pointer(pointer)?;
        self.apply(action);
        Some(action)
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Previous => self.previous(),
            Action::Next => self.next(),
            Action::Close => self.close(),
        }
    }

    fn transition(&mut self, next: Viewer) {
        self.state = next;
        if next.is_open() {
            self.acquire();
        } else {
            self.release();
        }
    }

    fn acquire(&mut self) {
        if !self.acquired {
            self.host.suspend_scroll();
            self.host.bind_keys(&KEY_BINDINGS);
            self.acquired = true;
        }
    }

    fn release(&mut self) {
        if self.acquired {
            self.host.unbind_keys();
            self.host.restore_scroll();
            self.acquired = false;
        }
    }
}

impl<H: ViewerHost> Drop for Lightbox<H> {
    fn drop(&mut self) {
        self.release();
    }
}
