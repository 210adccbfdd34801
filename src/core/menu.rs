/// Inputs that can change the mobile drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Open,
    Close,
    NavLinkClicked,
    /// Escape only closes the drawer while the application modal is up.
    Escape { modal_open: bool },
}

#[inline]
pub fn drawer_open_after(current: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Open => true,
        MenuEvent::Close | MenuEvent::NavLinkClicked => false,
        MenuEvent::Escape { modal_open: true } => false,
        MenuEvent::Escape { modal_open: false } => current,
    }
}

/// Rendering side of the drawer: the open class plus the body scroll lock.
pub trait DrawerView {
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
    fn set_scroll_locked(&self, locked: bool);
}

pub struct Menu<V: DrawerView> {
    view: V,
}

impl<V: DrawerView> Menu<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Apply `event`; returns the resulting open state.
    ///
    /// Closing a closed drawer rewrites the same state, which is harmless.
    /// An Escape that does not apply leaves the view untouched.
    pub fn handle(&self, event: MenuEvent) -> bool {
        let current = self.view.is_open();
        if event == (MenuEvent::Escape { modal_open: false }) {
            return current;
        }
        let next = drawer_open_after(current, event);
        self.view.set_open(next);
        self.view.set_scroll_locked(next);
        next
    }
}
