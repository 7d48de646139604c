use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;

use crate::element::ElementId;

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press event, targeted at focused element
    Key {
        target: Option<ElementId>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Pointer click, targeted at the deepest element under the pointer
    Click {
        target: Option<ElementId>,
        button: MouseButton,
    },
    /// Element gained focus
    Focus { target: ElementId },
    /// Element lost focus
    Blur {
        target: ElementId,
        new_target: Option<ElementId>,
    },
}

impl Event {
    pub fn key(target: Option<ElementId>, key: Key) -> Self {
        Event::Key {
            target,
            key,
            modifiers: Modifiers::new(),
        }
    }

    pub fn click(target: ElementId) -> Self {
        Event::Click {
            target: Some(target),
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> Option<ElementId> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => *target,
            Event::Focus { target } | Event::Blur { target, .. } => Some(*target),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Result of handing an event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Not handled; the default action runs.
    Ignored,
    /// Handled; the default action still runs.
    Handled,
    /// Handled and the default action is suppressed.
    Consumed,
}

impl EventResult {
    pub fn default_prevented(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// A named, document-level event with an arbitrary payload.
///
/// Dispatched through [`Document::dispatch`](crate::Document::dispatch), which
/// walks from the target up through its ancestors when `bubbles` is set.
pub struct CustomEvent {
    name: String,
    target: ElementId,
    bubbles: bool,
    detail: Option<Arc<dyn Any + Send + Sync>>,
    stopped: Cell<bool>,
}

impl CustomEvent {
    pub fn new(name: impl Into<String>, target: ElementId) -> Self {
        Self {
            name: name.into(),
            target,
            bubbles: false,
            detail: None,
            stopped: Cell::new(false),
        }
    }

    pub fn bubbles(mut self, bubbles: bool) -> Self {
        self.bubbles = bubbles;
        self
    }

    pub fn with_detail<T: Any + Send + Sync>(mut self, detail: T) -> Self {
        self.detail = Some(Arc::new(detail));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> ElementId {
        self.target
    }

    pub fn is_bubbling(&self) -> bool {
        self.bubbles
    }

    /// Payload downcast to `T`, if one of that type was attached.
    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.detail.as_deref()?.downcast_ref::<T>()
    }

    /// Stop the event from reaching further ancestors. Listeners on the
    /// current element still run.
    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl std::fmt::Debug for CustomEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomEvent")
            .field("name", &self.name)
            .field("target", &self.target)
            .field("bubbles", &self.bubbles)
            .field("has_detail", &self.detail.is_some())
            .finish()
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
