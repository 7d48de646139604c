//! Keyboard and pointer handling for the tree controller.

use ariadom::{ElementId, Event, EventResult, Key, Modifiers, MouseButton};

use crate::controller::TreeController;
use crate::notify::TreeBehavior;
use crate::schedule::Task;

impl<B: TreeBehavior> TreeController<B> {
    /// Handle a platform event, then run the document's native default
    /// action unless the handler suppressed it.
    ///
    /// A default action that toggles one of this tree's groups queues a
    /// rescan, so the visible set catches up on the next tick.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        let result = match event {
            Event::Key {
                target,
                key,
                modifiers,
            } => self.on_key(*target, *key, *modifiers),
            Event::Click { target, button } => self.on_click(*target, *button),
            Event::Focus { .. } | Event::Blur { .. } => EventResult::Ignored,
        };

        if !result.default_prevented()
            && let Some(group) = self.doc.default_action(event)
            && self.scanner.contains(&self.doc, group)
        {
            self.scheduler.schedule(Task::Rescan);
        }

        result
    }

    /// Keyboard handling. Only keys aimed at one of this tree's items count;
    /// Ctrl/Alt chords are left alone.
    pub fn on_key(
        &mut self,
        target: Option<ElementId>,
        key: Key,
        modifiers: Modifiers,
    ) -> EventResult {
        let Some(target) = target else {
            return EventResult::Ignored;
        };
        if !self.scanner.is_item(&self.doc, target) || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Right => {
                if let Some(item) = self.selected()
                    && let Err(e) = self.expand(item)
                {
                    log::warn!("[tree] expand failed: {}", e);
                }
                EventResult::Handled
            }
            Key::Left => {
                if let Some(item) = self.selected()
                    && let Err(e) = self.collapse(item)
                {
                    log::warn!("[tree] collapse failed: {}", e);
                }
                EventResult::Handled
            }
            Key::Up => {
                if let Some(index) = self.selected_index()
                    && index > 0
                {
                    self.set_selected(index - 1);
                }
                EventResult::Consumed
            }
            Key::Down => {
                if let Some(index) = self.selected_index()
                    && index + 1 < self.visible.len()
                {
                    self.set_selected(index + 1);
                }
                EventResult::Consumed
            }
            Key::Home => {
                self.set_selected(0);
                EventResult::Consumed
            }
            Key::End => {
                if let Some(last) = self.visible.last_index() {
                    self.set_selected(last);
                }
                EventResult::Consumed
            }
            // Native activation would toggle the group behind the
            // selection's back.
            Key::Enter | Key::Char(' ') => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    /// Pointer handling.
    ///
    /// A click on an item selects it and queues the close-subfolders check.
    /// Disabled items ignore the click. A click on other chrome in the
    /// container re-applies the current selection, which pulls focus back
    /// onto it; focusable controls keep the focus they take.
    pub fn on_click(
        &mut self,
        target: Option<ElementId>,
        button: MouseButton,
    ) -> EventResult {
        let Some(target) = target else {
            return EventResult::Ignored;
        };
        if button != MouseButton::Left || !self.doc.contains(self.container(), target) {
            return EventResult::Ignored;
        }

        let Some(node) = self.doc.get(target) else {
            return EventResult::Ignored;
        };
        let (disabled, focusable) = (node.disabled, node.focusable);

        if self.scanner.is_item(&self.doc, target) {
            if disabled {
                log::trace!("[tree] click on disabled {} ignored", target);
                return EventResult::Ignored;
            }
            match self.visible.position(target) {
                Some(index) => self.set_selected(index),
                None => log::trace!("[tree] click on {} not in visible set yet", target),
            }
            if self.config.close_subfolders {
                self.scheduler.schedule(Task::CloseSubfolders(target));
            }
        } else if focusable {
            return EventResult::Ignored;
        } else if let Some(index) = self.selected_index() {
            self.set_selected(index);
        }

        EventResult::Handled
    }
}
