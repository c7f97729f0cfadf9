use swift_doodle::draw::{Raster, RoughOptions, StrokeStyle};
use swift_doodle::input::{DrawingSurface, MouseButton, PointerEvent, ShapeMode};

fn mounted_surface(mode: ShapeMode) -> DrawingSurface {
    let raster = Raster::new(800, 600).unwrap();
    let mut surface = DrawingSurface::mount(
        raster,
        StrokeStyle::default(),
        RoughOptions::default(),
        Some(7),
    );
    surface.set_mode(mode);
    surface
}

fn press(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Press {
        button: MouseButton::Left,
        x,
        y,
    }
}

fn release(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Release {
        button: MouseButton::Left,
        x,
        y,
    }
}

fn drag(surface: &mut DrawingSurface, from: (f64, f64), path: &[(f64, f64)]) {
    surface.handle_event(press(from.0, from.1));
    for &(x, y) in path {
        surface.handle_event(PointerEvent::Motion { x, y });
    }
    let last = path.last().copied().unwrap_or(from);
    surface.handle_event(release(last.0, last.1));
}

fn inked_near(raster: &Raster, x: u32, y: u32, radius: u32) -> bool {
    let x0 = x.saturating_sub(radius);
    let y0 = y.saturating_sub(radius);
    (y0..=y + radius).any(|py| {
        (x0..=x + radius).any(|px| raster.pixel_alpha(px, py).is_some_and(|a| a > 0))
    })
}

#[test]
fn freehand_stroke_passes_through_every_point() {
    let mut surface = mounted_surface(ShapeMode::Freehand);
    drag(&mut surface, (100.0, 100.0), &[(200.0, 100.0), (200.0, 200.0)]);

    let raster = surface.raster();
    assert!(raster.pixel_alpha(100, 100).unwrap() > 0);
    assert!(raster.pixel_alpha(150, 100).unwrap() > 0);
    assert!(raster.pixel_alpha(200, 150).unwrap() > 0);
    assert!(raster.pixel_alpha(200, 200).unwrap() > 0);
    assert_eq!(raster.pixel_alpha(150, 150), Some(0));
}

#[test]
fn freehand_strokes_accumulate_across_gestures() {
    let mut surface = mounted_surface(ShapeMode::Freehand);
    drag(&mut surface, (50.0, 50.0), &[(150.0, 50.0)]);
    // The release above cycled the mode
    surface.set_mode(ShapeMode::Freehand);
    drag(&mut surface, (50.0, 300.0), &[(150.0, 300.0)]);

    let raster = surface.raster();
    assert!(raster.pixel_alpha(100, 50).unwrap() > 0);
    assert!(raster.pixel_alpha(100, 300).unwrap() > 0);
}

#[test]
fn rectangle_outline_is_retained_after_release() {
    let mut surface = mounted_surface(ShapeMode::Rectangle);
    drag(&mut surface, (100.0, 100.0), &[(300.0, 250.0)]);

    assert!(!surface.is_drawing());
    assert_eq!(surface.mode(), ShapeMode::Circle);

    let raster = surface.raster();
    assert!(inked_near(raster, 200, 100, 6), "top edge");
    assert!(inked_near(raster, 200, 250, 6), "bottom edge");
    assert!(inked_near(raster, 100, 175, 6), "left edge");
    assert!(inked_near(raster, 300, 175, 6), "right edge");
    assert_eq!(raster.pixel_alpha(200, 175), Some(0), "interior stays empty");
}

#[test]
fn shape_preview_keeps_only_latest_outline() {
    let mut surface = mounted_surface(ShapeMode::Rectangle);
    surface.handle_event(press(10.0, 10.0));
    surface.handle_event(PointerEvent::Motion { x: 500.0, y: 400.0 });
    assert!(inked_near(surface.raster(), 500, 200, 6));

    surface.handle_event(PointerEvent::Motion { x: 60.0, y: 60.0 });
    let raster = surface.raster();
    assert!(!inked_near(raster, 500, 200, 10), "earlier outline was cleared");
    assert!(inked_near(raster, 60, 35, 6));
}

#[test]
fn shape_mode_wipes_earlier_freehand_ink() {
    let mut surface = mounted_surface(ShapeMode::Freehand);
    drag(&mut surface, (400.0, 500.0), &[(700.0, 500.0)]);
    assert_eq!(surface.mode(), ShapeMode::Rectangle);
    assert!(surface.raster().pixel_alpha(550, 500).unwrap() > 0);

    drag(&mut surface, (10.0, 10.0), &[(100.0, 100.0)]);
    assert_eq!(surface.raster().pixel_alpha(550, 500), Some(0));
}

#[test]
fn circle_ellipse_and_triangle_leave_ink() {
    for mode in [ShapeMode::Circle, ShapeMode::Ellipse, ShapeMode::Triangle] {
        let mut surface = mounted_surface(mode);
        drag(&mut surface, (200.0, 200.0), &[(400.0, 300.0)]);
        assert!(surface.raster().has_ink(), "{mode} drew nothing");
        assert_eq!(surface.mode(), mode.next());
    }
}

#[test]
fn click_cycles_through_all_modes() {
    let mut surface = mounted_surface(ShapeMode::Freehand);
    let mut seen = Vec::new();
    for _ in 0..5 {
        surface.handle_event(press(20.0, 20.0));
        surface.handle_event(release(20.0, 20.0));
        seen.push(surface.mode());
    }
    assert_eq!(
        seen,
        vec![
            ShapeMode::Rectangle,
            ShapeMode::Circle,
            ShapeMode::Ellipse,
            ShapeMode::Triangle,
            ShapeMode::Freehand,
        ]
    );
}

#[test]
fn leaving_mid_drag_keeps_shape_and_mode() {
    let mut surface = mounted_surface(ShapeMode::Rectangle);
    surface.handle_event(press(100.0, 100.0));
    surface.handle_event(PointerEvent::Motion { x: 300.0, y: 200.0 });
    surface.handle_event(PointerEvent::Leave);

    assert!(!surface.is_drawing());
    assert_eq!(surface.mode(), ShapeMode::Rectangle);
    assert!(inked_near(surface.raster(), 200, 100, 6));

    // Motion after leaving draws nothing new
    surface.handle_event(PointerEvent::Motion { x: 700.0, y: 550.0 });
    assert!(!inked_near(surface.raster(), 700, 325, 10));
}

#[test]
fn seeded_surfaces_draw_identical_pixels() {
    let mut a = mounted_surface(ShapeMode::Ellipse);
    let mut b = mounted_surface(ShapeMode::Ellipse);
    drag(&mut a, (150.0, 150.0), &[(450.0, 350.0)]);
    drag(&mut b, (150.0, 150.0), &[(450.0, 350.0)]);

    assert_eq!(
        a.raster().count_inked_pixels(),
        b.raster().count_inked_pixels()
    );
}

#[test]
fn plain_click_in_shape_mode_wipes_the_raster() {
    let mut surface = mounted_surface(ShapeMode::Rectangle);
    drag(&mut surface, (100.0, 100.0), &[(300.0, 250.0)]);
    assert_eq!(surface.mode(), ShapeMode::Circle);
    assert!(surface.raster().has_ink());

    surface.handle_event(press(400.0, 300.0));
    assert!(surface.handle_event(release(400.0, 300.0)));

    assert!(!surface.raster().has_ink());
    assert_eq!(surface.mode(), ShapeMode::Ellipse);
}
