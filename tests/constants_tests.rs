// Host-side checks on the DOM contract and tuning defaults.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::ParticleParams;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_threshold_is_a_fraction() {
    assert!(FADE_THRESHOLD > 0.0 && FADE_THRESHOLD <= 1.0);
}

#[test]
fn dom_ids_are_plain_ids() {
    let ids = [
        HERO_TITLE_ID,
        MENU_OPEN_BUTTON_ID,
        MENU_CLOSE_BUTTON_ID,
        MOBILE_MENU_ID,
        PARTICLE_CANVAS_ID,
        OPEN_MODAL_BUTTON_ID,
        MODAL_ID,
        CLOSE_MODAL_BUTTON_ID,
        APPLICATION_FORM_ID,
        FILE_UPLOAD_WRAPPER_ID,
        FILE_INPUT_ID,
        FILE_NAME_DISPLAY_ID,
        REMOVE_FILE_BUTTON_ID,
        SUBMIT_BUTTON_ID,
    ];
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#') && !id.contains(' '), "bad id {id}");
    }
}

#[test]
fn particle_defaults_have_sane_relationships() {
    let p = ParticleParams::default();
    assert!(p.area_per_particle > 0.0);
    assert!(p.max_speed > 0.0 && p.max_speed < p.repel_step);
    assert!(p.radius_min > 0.0 && p.radius_span > 0.0);
    assert!(p.repel_margin > p.spawn_margin);
    assert!(p.opacity_falloff > 0.0);
}
