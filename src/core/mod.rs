// Browser-independent behavior; everything here builds and is tested on the host.
pub mod fade;
pub mod menu;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod schedule;
pub mod typing;
