use super::schedule::Timer;
use std::rc::Rc;

pub const NO_FILE_LABEL: &str = "No file chosen";
pub const SUBMIT_LABEL: &str = "Submit Application";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your application! We will be in touch shortly.";
// Placeholder round-trip; the real upload is handled by the page's own backend call.
pub const SUBMIT_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    CloseButton,
    /// A click on the modal element; only closes when the target is the backdrop itself.
    BackdropClick { on_backdrop: bool },
    Escape,
}

#[inline]
pub fn modal_shown_after(current: bool, event: ModalEvent) -> bool {
    match event {
        ModalEvent::Open => true,
        ModalEvent::CloseButton => false,
        ModalEvent::BackdropClick { on_backdrop } => current && !on_backdrop,
        ModalEvent::Escape => false,
    }
}

/// Label and wrapper state for the resume picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDisplay {
    pub label: String,
    pub has_file: bool,
}

impl FileDisplay {
    pub fn empty() -> Self {
        Self {
            label: NO_FILE_LABEL.to_string(),
            has_file: false,
        }
    }

    pub fn for_selection(file_name: Option<&str>) -> Self {
        match file_name {
            Some(name) => Self {
                label: name.to_string(),
                has_file: true,
            },
            None => Self::empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitState {
    pub disabled: bool,
    pub label: &'static str,
}

impl SubmitState {
    pub fn idle() -> Self {
        Self {
            disabled: false,
            label: SUBMIT_LABEL,
        }
    }

    pub fn submitting() -> Self {
        Self {
            disabled: true,
            label: SUBMITTING_LABEL,
        }
    }
}

/// DOM side of the application modal.
pub trait ModalView {
    fn is_shown(&self) -> bool;
    fn set_shown(&self, shown: bool);
    fn show_file(&self, display: &FileDisplay);
    fn clear_file_input(&self);
    fn set_submit(&self, state: &SubmitState);
    fn reset_form(&self);
    fn notify(&self, message: &str);
}

pub struct Modal<V: ModalView> {
    view: V,
}

impl<V: ModalView + 'static> Modal<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the resulting shown state.
    pub fn handle(&self, event: ModalEvent) -> bool {
        let current = self.view.is_shown();
        match event {
            ModalEvent::Escape if !current => return false,
            ModalEvent::BackdropClick { on_backdrop: false } => return current,
            _ => {}
        }
        let next = modal_shown_after(current, event);
        self.view.set_shown(next);
        next
    }

    pub fn select_file(&self, file_name: Option<&str>) {
        self.view.show_file(&FileDisplay::for_selection(file_name));
    }

    pub fn remove_file(&self) {
        self.view.clear_file_input();
        self.view.show_file(&FileDisplay::empty());
    }

    /// Mocked submission: lock the button, then after `SUBMIT_DELAY_MS`
    /// thank the user, reset everything and close.
    pub fn submit<T: Timer + ?Sized>(self: &Rc<Self>, timer: &T) {
        self.view.set_submit(&SubmitState::submitting());
        let modal = self.clone();
        timer.after(
            SUBMIT_DELAY_MS,
            Box::new(move || {
                modal.view.notify(THANK_YOU_MESSAGE);
                modal.view.reset_form();
                modal.view.show_file(&FileDisplay::empty());
                modal.view.set_shown(false);
                modal.view.set_submit(&SubmitState::idle());
            }),
        );
    }
}
