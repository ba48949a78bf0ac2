//! Notification panel
//!
//! A small read/unread model over the fetched notification list. Opening
//! the panel while anything is unread hides the indicator optimistically
//! and clears per-item styling before the mark-read call goes out; if that
//! call fails only the indicator is restored.

use shared::Notification;

/// One rendered notification item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    pub message: String,
    /// Drives the per-item "unread" styling.
    pub unread: bool,
}

/// What the panel body currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PanelContent {
    #[default]
    Empty,
    Items(Vec<NotificationItem>),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationPanel {
    content: PanelContent,
    open: bool,
    dot_visible: bool,
}

impl NotificationPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the panel contents from a fetch. The unread indicator shows
    /// iff at least one item is unread.
    pub fn render(&mut self, notifications: Vec<Notification>) {
        let items: Vec<NotificationItem> = notifications
            .into_iter()
            .map(|n| NotificationItem {
                message: n.message,
                unread: !n.is_read,
            })
            .collect();
        self.dot_visible = items.iter().any(|i| i.unread);
        self.content = if items.is_empty() {
            PanelContent::Empty
        } else {
            PanelContent::Items(items)
        };
    }

    /// The fetch itself failed; show the error placeholder and no dot.
    pub fn render_failed(&mut self) {
        self.content = PanelContent::Failed;
        self.dot_visible = false;
    }

    /// Toggle panel visibility. Returns true when this open requires a
    /// mark-read call: the dot has already been hidden and item styling
    /// cleared (optimistically) by the time this returns.
    #[must_use]
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        if self.open && self.dot_visible {
            self.dot_visible = false;
            if let PanelContent::Items(items) = &mut self.content {
                for item in items.iter_mut() {
                    item.unread = false;
                }
            }
            return true;
        }
        false
    }

    /// Compensating action after a failed mark-read call: the indicator
    /// comes back, item styling stays cleared.
    pub fn restore_dot(&mut self) {
        self.dot_visible = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dot_visible(&self) -> bool {
        self.dot_visible
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifications(unread: usize, read: usize) -> Vec<Notification> {
        let mut all = Vec::new();
        for i in 0..unread {
            all.push(Notification {
                message: format!("unread {i}"),
                is_read: false,
            });
        }
        for i in 0..read {
            all.push(Notification {
                message: format!("read {i}"),
                is_read: true,
            });
        }
        all
    }

    #[test]
    fn dot_visible_iff_any_unread() {
        let mut panel = NotificationPanel::new();
        panel.render(notifications(0, 3));
        assert!(!panel.dot_visible());
        panel.render(notifications(2, 1));
        assert!(panel.dot_visible());
    }

    #[test]
    fn opening_with_unread_is_optimistic() {
        let mut panel = NotificationPanel::new();
        panel.render(notifications(2, 1));
        assert!(panel.toggle());
        assert!(!panel.dot_visible());
        let PanelContent::Items(items) = panel.content() else {
            panic!("expected items");
        };
        assert!(items.iter().all(|i| !i.unread));
    }

    #[test]
    fn opening_with_nothing_unread_skips_mark_read() {
        let mut panel = NotificationPanel::new();
        panel.render(notifications(0, 2));
        assert!(!panel.toggle());
        // Closing never triggers a call either.
        assert!(!panel.toggle());
    }

    #[test]
    fn restore_dot_keeps_item_styling_cleared() {
        let mut panel = NotificationPanel::new();
        panel.render(notifications(1, 0));
        assert!(panel.toggle());
        panel.restore_dot();
        assert!(panel.dot_visible());
        let PanelContent::Items(items) = panel.content() else {
            panic!("expected items");
        };
        assert!(!items[0].unread);
    }
}
