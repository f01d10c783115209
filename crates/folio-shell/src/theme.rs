/// Color scheme applied to the whole shell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Handle returned by `subscribe`, used to remove the listener again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListenerId(pub(crate) u64);

/// Observable theme state.
///
/// Owned by the top-level application shell and passed explicitly to
/// whoever needs it; there is no global. Listeners run on every change,
/// in subscription order.
pub struct ThemeState {
    current: Theme,
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut(Theme)>)>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Applies `theme`; listeners are only notified on an actual change.
    pub fn set(&mut self, theme: Theme) {
        if theme == self.current {
            return;
        }
        self.current = theme;
        for (_, listener) in &mut self.listeners {
            listener(theme);
        }
    }

    /// Flips light/dark and returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled());
        self.current
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(entry, _)| *entry != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        let mut state = ThemeState::new(Theme::Light);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.toggle(), Theme::Light);
    }

    #[test]
    fn listeners_observe_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut state = ThemeState::new(Theme::Light);
        state.subscribe(move |theme| sink.borrow_mut().push(theme));

        state.toggle();
        state.set(Theme::Light);
        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn setting_the_same_theme_does_not_notify() {
        let seen = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&seen);
        let mut state = ThemeState::new(Theme::Dark);
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set(Theme::Dark);
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn unsubscribed_listeners_stop_observing() {
        let seen = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&seen);
        let mut state = ThemeState::new(Theme::Light);
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.toggle();
        assert!(state.unsubscribe(id));
        state.toggle();
        assert_eq!(*seen.borrow(), 1);
        assert!(!state.unsubscribe(id));
    }

    #[test]
    fn parse_accepts_only_known_names() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }
}
