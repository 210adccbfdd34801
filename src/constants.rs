// DOM contract shared with the page markup and stylesheet: element ids,
// selectors and the state classes the CSS keys its transitions on.

// Hero
pub const HERO_TITLE_ID: &str = "hero-title";

// Mobile drawer
pub const MENU_OPEN_BUTTON_ID: &str = "mobile-menu-button";
pub const MENU_CLOSE_BUTTON_ID: &str = "close-menu-button";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_NAV_LINK_SELECTOR: &str = ".mobile-nav-link";

// Desktop navigation
pub const DESKTOP_NAV_LINK_SELECTOR: &str = "#desktop-nav .nav-link";

// Scroll reveal
pub const FADE_IN_SELECTOR: &str = ".fade-in-section";
pub const FADE_THRESHOLD: f64 = 0.1; // fraction of the element in view

// Background canvas
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Application modal
pub const OPEN_MODAL_BUTTON_ID: &str = "open-apply-modal-btn";
pub const MODAL_ID: &str = "application-modal";
pub const CLOSE_MODAL_BUTTON_ID: &str = "close-modal-btn";
pub const APPLICATION_FORM_ID: &str = "application-form";
pub const FILE_UPLOAD_WRAPPER_ID: &str = "file-upload-wrapper";
pub const FILE_INPUT_ID: &str = "resumeFile";
pub const FILE_NAME_DISPLAY_ID: &str = "file-name-display";
pub const REMOVE_FILE_BUTTON_ID: &str = "remove-file-btn";
pub const SUBMIT_BUTTON_ID: &str = "submit-application-btn";

// State classes
pub const CLASS_DRAWER_OPEN: &str = "is-open";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_MODAL_SHOWN: &str = "show";
pub const CLASS_BODY_MODAL_OPEN: &str = "modal-open";
pub const CLASS_HAS_FILE: &str = "has-file";

// Inline style used for the drawer's scroll lock
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

pub const ESCAPE_KEY: &str = "Escape";
