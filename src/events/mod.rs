pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_menu_escape, wire_modal_escape};
pub use pointer::wire_particle_input;
