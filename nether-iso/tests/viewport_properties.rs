//! Conversion and stack properties checked across many viewport states.

use std::rc::Rc;

use glam::{DVec2, IVec2};
use nether_iso::{Align, FixedCamera, Rectangle, Viewport};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: DVec2, b: DVec2) -> bool {
    (a - b).abs().max_element() <= EPSILON * (1.0 + b.abs().max_element())
}

/// Points covering signs, fractions and large magnitudes.
fn sample_points() -> Vec<DVec2> {
    let coords = [-12345.678, -80.0, -1.5, -0.25, 0.0, 0.1, 1.0, 39.999, 640.5, 98765.4321];
    coords
        .iter()
        .flat_map(|&x| coords.iter().map(move |&y| DVec2::new(x, y)))
        .collect()
}

/// Viewports with and without offsets, odd sizes and every alignment.
fn sample_viewports() -> Vec<Viewport> {
    let rects = [(0, 0, 800, 600), (37, -12, 641, 479), (-100, 250, 1920, 1080)];
    let mut viewports = Vec::new();
    for &(x, y, w, h) in &rects {
        for align in [Align::Center, Align::Left, Align::Right] {
            let mut vp = Viewport::new(x, y, w, h);
            vp.with_alignment(align, |aligned| viewports.push(aligned.clone()));
        }
    }
    viewports
}

#[test]
fn world_ortho_roundtrip() {
    let vp = Viewport::new(0, 0, 800, 600);
    for p in sample_points() {
        let back = vp.ortho_to_world(vp.world_to_ortho(p));
        assert!(approx_eq(back, p), "{p} came back as {back}");
    }
}

#[test]
fn screen_ortho_roundtrip_for_any_state() {
    let cameras = [DVec2::ZERO, DVec2::new(100.0, 50.0), DVec2::new(-3333.3, 12.75)];
    for camera_pos in cameras {
        let camera = Rc::new(FixedCamera::new(camera_pos));
        for mut vp in sample_viewports() {
            vp.set_camera(&camera);
            for p in sample_points() {
                let back = vp.screen_to_ortho_f(vp.ortho_to_screen_f(p));
                assert!(approx_eq(back, p), "{p} came back as {back}");
            }
        }
    }
}

#[test]
fn world_to_screen_matches_ortho_composition() {
    let camera = Rc::new(FixedCamera::new(DVec2::new(77.7, -13.0)));
    for mut vp in sample_viewports() {
        vp.set_camera(&camera);
        for p in sample_points() {
            let ortho = vp.world_to_ortho(p);
            assert_eq!(vp.world_to_screen(p), vp.ortho_to_screen(ortho));
            assert_eq!(vp.world_to_screen_f(p), vp.ortho_to_screen_f(ortho));
        }
    }
}

#[test]
fn integer_screen_is_floor_of_float_screen() {
    let camera = Rc::new(FixedCamera::new(DVec2::new(0.5, -0.5)));
    for mut vp in sample_viewports() {
        vp.set_camera(&camera);
        for p in sample_points() {
            let f = vp.ortho_to_screen_f(p);
            let i = vp.ortho_to_screen(p);
            assert_eq!(i, IVec2::new(f.x.floor() as i32, f.y.floor() as i32));
        }
    }
}

#[test]
fn camera_shifts_screen_by_its_position() {
    let camera = Rc::new(FixedCamera::new(DVec2::new(100.0, 50.0)));
    for plain in sample_viewports() {
        let mut bound = plain.clone();
        bound.set_camera(&camera);
        for p in sample_points() {
            let delta = bound.ortho_to_screen_f(p) - plain.ortho_to_screen_f(p);
            assert!(approx_eq(delta, DVec2::new(-100.0, -50.0)), "delta {delta}");
        }
    }
}

#[test]
fn matched_push_pop_restores_translation() {
    let mut vp = Viewport::new(0, 0, 800, 600);
    vp.push_translation_ortho(DVec2::new(-7.0, 3.0));
    let before = vp.translation_ortho();

    for (i, p) in sample_points().into_iter().enumerate() {
        match i % 3 {
            0 => vp.push_translation_ortho(p),
            1 => vp.push_translation_world(p),
            _ => vp.push_translation_screen(p.as_ivec2()),
        };
    }
    for _ in sample_points() {
        vp.pop_translation();
    }

    assert_eq!(vp.translation_ortho(), before);
    assert_eq!(vp.translation_depth(), 1);
}

#[test]
#[should_panic(expected = "unbalanced push/pop")]
fn extra_pop_after_balanced_pairs_panics() {
    let mut vp = Viewport::new(0, 0, 800, 600);
    for _ in 0..5 {
        vp.push_translation_ortho(DVec2::ONE);
    }
    for _ in 0..6 {
        vp.pop_translation();
    }
}

#[test]
fn split_screen_rects() {
    let mut vp = Viewport::new(0, 0, 800, 600);
    let left = vp.with_alignment(Align::Left, |vp| vp.screen_rect());
    let right = vp.with_alignment(Align::Right, |vp| vp.screen_rect());
    assert_eq!(left, Rectangle::new(400, 0, 400, 600));
    assert_eq!(right, Rectangle::new(0, 0, 400, 600));
    assert_eq!(vp.screen_rect(), Rectangle::new(0, 0, 800, 600));
    assert_eq!(vp.align(), Align::Center);
}

#[test]
fn nested_alignment_is_idempotent() {
    let mut vp = Viewport::new(0, 0, 800, 600);
    vp.with_alignment(Align::Left, |vp| {
        let outer = vp.screen_rect();
        let inner = vp.with_alignment(Align::Left, |vp| vp.screen_rect());
        assert_eq!(inner, outer);
        assert_eq!(vp.screen_rect(), outer);
    });
}

#[test]
fn visibility_boundary_is_half_open() {
    let vp = Viewport::new(0, 0, 800, 600);
    let at_screen = |x: i32, y: i32| vp.screen_to_ortho(IVec2::new(x, y));

    assert!(!vp.is_ortho_rect_visible(at_screen(800, 0), at_screen(800, 0)));
    assert!(vp.is_ortho_rect_visible(at_screen(799, 0), at_screen(799, 0)));
    assert!(!vp.is_ortho_rect_visible(at_screen(0, 600), at_screen(0, 600)));
    assert!(vp.is_ortho_rect_visible(at_screen(0, 599), at_screen(0, 599)));
    assert!(!vp.is_ortho_rect_visible(at_screen(-1, 0), at_screen(-1, 0)));
}

#[test]
fn tile_rect_covering_visible_tile_is_visible() {
    let camera = Rc::new(FixedCamera::new(DVec2::new(-1234.0, 987.0)));
    let mut vp = Viewport::new(0, 0, 800, 600);
    vp.set_camera(&camera);

    for x in -30..30 {
        for y in -30..30 {
            let tile = Rectangle::new(x, y, 1, 1);
            let neighbourhood = Rectangle::new(x - 2, y - 2, 5, 5);
            if vp.is_tile_rect_visible(tile) {
                assert!(vp.is_tile_rect_visible(neighbourhood), "{tile:?}");
            }
        }
    }
}
