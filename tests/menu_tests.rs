// Host-side tests for the mobile drawer controller.

#![allow(dead_code)]
mod menu {
    include!("../src/core/menu.rs");
}

use menu::*;
use std::cell::Cell;

#[derive(Default)]
struct FakeDrawer {
    open: Cell<bool>,
    scroll_locked: Cell<bool>,
    writes: Cell<usize>,
}

impl DrawerView for FakeDrawer {
    fn is_open(&self) -> bool {
        self.open.get()
    }
    fn set_open(&self, open: bool) {
        self.open.set(open);
        self.writes.set(self.writes.get() + 1);
    }
    fn set_scroll_locked(&self, locked: bool) {
        self.scroll_locked.set(locked);
    }
}

#[test]
fn open_shows_drawer_and_locks_scroll() {
    let menu = Menu::new(FakeDrawer::default());
    assert!(menu.handle(MenuEvent::Open));
    assert!(menu.view().open.get());
    assert!(menu.view().scroll_locked.get());
}

#[test]
fn close_and_nav_link_reverse_both_effects() {
    for ev in [MenuEvent::Close, MenuEvent::NavLinkClicked] {
        let menu = Menu::new(FakeDrawer::default());
        menu.handle(MenuEvent::Open);
        assert!(!menu.handle(ev));
        assert!(!menu.view().open.get());
        assert!(!menu.view().scroll_locked.get());
    }
}

#[test]
fn closing_a_closed_drawer_is_harmless() {
    let menu = Menu::new(FakeDrawer::default());
    assert!(!menu.handle(MenuEvent::Close));
    assert!(!menu.handle(MenuEvent::Close));
    assert!(!menu.view().open.get());
    assert!(!menu.view().scroll_locked.get());
}

#[test]
fn escape_closes_only_while_modal_is_open() {
    let menu = Menu::new(FakeDrawer::default());
    menu.handle(MenuEvent::Open);
    let writes = menu.view().writes.get();
    assert!(menu.handle(MenuEvent::Escape { modal_open: false }));
    assert_eq!(menu.view().writes.get(), writes);
    assert!(!menu.handle(MenuEvent::Escape { modal_open: true }));
    assert!(!menu.view().scroll_locked.get());
}

#[test]
fn final_state_follows_last_state_changing_event() {
    use MenuEvent::*;
    let sequences: Vec<Vec<MenuEvent>> = vec![
        vec![Open, Close, Open],
        vec![Open, NavLinkClicked],
        vec![Open, Escape { modal_open: false }],
        vec![Open, Escape { modal_open: true }, Escape { modal_open: false }],
        vec![Close, Close, Open, Escape { modal_open: false }, NavLinkClicked],
        vec![Escape { modal_open: true }],
    ];
    for seq in sequences {
        let menu = Menu::new(FakeDrawer::default());
        for ev in &seq {
            menu.handle(*ev);
        }
        let last_changing = seq
            .iter()
            .rev()
            .find(|e| **e != Escape { modal_open: false });
        let expected = matches!(last_changing, Some(Open));
        assert_eq!(menu.view().open.get(), expected, "sequence {:?}", seq);
        assert_eq!(menu.view().scroll_locked.get(), expected);
    }
}

#[test]
fn reducer_matches_controller() {
    assert!(drawer_open_after(false, MenuEvent::Open));
    assert!(!drawer_open_after(true, MenuEvent::Close));
    assert!(!drawer_open_after(true, MenuEvent::NavLinkClicked));
    assert!(drawer_open_after(true, MenuEvent::Escape { modal_open: false }));
    assert!(!drawer_open_after(true, MenuEvent::Escape { modal_open: true }));
}
