use egui::{Color32, pos2};
use simple_paint::palette;
use simple_paint::{DrawingSurface, EventLog, StrokeState, SurfaceEvent};

fn red() -> Color32 {
    palette::by_name("Red").unwrap().color
}

fn blue() -> Color32 {
    palette::by_name("Blue").unwrap().color
}

#[test]
fn test_red_horizontal_segment() {
    let mut surface = DrawingSurface::default();
    surface.select_palette_color(red());
    surface.set_size(4.0);

    surface.on_pointer_down(pos2(10.0, 10.0));
    surface.on_pointer_move(pos2(50.0, 10.0));
    surface.on_pointer_up();

    assert_eq!(surface.segments_rendered(), 2);

    let canvas = surface.canvas();
    // Solid band of width 4 along the segment
    for x in 11..=49 {
        for y in 8..=11 {
            assert_eq!(canvas.pixel(x, y), Some(red()), "({x}, {y})");
        }
    }
    // Nothing red outside the segment's footprint
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.pixel(x, y) == Some(red()) {
                assert!((8..=51).contains(&x) && (8..=11).contains(&y), "stray pixel at ({x}, {y})");
            }
        }
    }
    assert_eq!(canvas.count_pixels(red()) + canvas.count_pixels(Color32::WHITE), 900 * 600);
}

#[test]
fn test_wide_diagonal_is_clipped() {
    let mut surface = DrawingSurface::default();
    surface.set_size(30.0);

    surface.on_pointer_down(pos2(0.0, 0.0));
    surface.on_pointer_move(pos2(900.0, 600.0));
    surface.on_pointer_up();

    let canvas = surface.canvas();
    assert_eq!((canvas.width(), canvas.height()), (900, 600));
    assert_eq!(canvas.pixel(0, 0), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(450, 300), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(899, 599), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(899, 0), Some(Color32::WHITE));
    assert_eq!(canvas.pixel(0, 599), Some(Color32::WHITE));
    // 10px off the centre line is still inside the 30px stroke
    assert_eq!(canvas.pixel(450, 310), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(450, 340), Some(Color32::WHITE));
}

#[test]
fn test_segment_count_matches_events() {
    let mut surface = DrawingSurface::default();
    let log = EventLog::new();
    surface.subscribe(Box::new(log.clone()));

    let mut expected = 0;
    for stroke in 0..5u32 {
        let y = 20.0 + stroke as f32 * 30.0;
        surface.on_pointer_down(pos2(10.0, y));
        expected += 1;
        for step in 0..stroke * 3 {
            surface.on_pointer_move(pos2(10.0 + step as f32 * 7.0, y + 2.0));
            expected += 1;
        }
        surface.on_pointer_up();
        // Moves after release draw nothing
        surface.on_pointer_move(pos2(500.0, 500.0));
    }

    assert_eq!(surface.segments_rendered(), expected);
    assert_eq!(
        log.count(|event| matches!(event, SurfaceEvent::SegmentRendered(_))) as u64,
        expected
    );
    assert_eq!(log.count(|event| matches!(event, SurfaceEvent::StrokeStarted { .. })), 5);
    assert_eq!(log.count(|event| matches!(event, SurfaceEvent::StrokeEnded)), 5);
}

#[test]
fn test_tap_leaves_a_dot() {
    let mut surface = DrawingSurface::default();
    surface.set_size(6.0);
    surface.on_pointer_down(pos2(200.0, 200.0));
    surface.on_pointer_up();

    let canvas = surface.canvas();
    assert_eq!(canvas.pixel(200, 200), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(197, 200), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(204, 200), Some(Color32::WHITE));
}

#[test]
fn test_clear_is_white_and_idempotent() {
    let mut surface = DrawingSurface::default();
    surface.set_size(25.0);
    surface.on_pointer_down(pos2(100.0, 100.0));
    surface.on_pointer_move(pos2(700.0, 400.0));
    surface.on_pointer_up();
    assert!(!surface.canvas().is_filled_with(Color32::WHITE));

    surface.clear();
    let once = surface.canvas().to_color_image();
    assert!(surface.canvas().is_filled_with(Color32::WHITE));

    surface.clear();
    assert_eq!(surface.canvas().to_color_image().pixels, once.pixels);
}

#[test]
fn test_eraser_whitens_covered_pixels_only() {
    let mut surface = DrawingSurface::default();
    surface.set_size(20.0);
    surface.on_pointer_down(pos2(100.0, 100.0));
    surface.on_pointer_up();

    surface.set_eraser(true);
    surface.set_size(4.0);
    surface.on_pointer_down(pos2(80.0, 100.0));
    surface.on_pointer_move(pos2(120.0, 100.0));
    surface.on_pointer_up();

    let canvas = surface.canvas();
    assert_eq!(canvas.pixel(100, 100), Some(Color32::WHITE));
    assert_eq!(canvas.pixel(100, 101), Some(Color32::WHITE));
    assert_eq!(canvas.pixel(100, 106), Some(Color32::BLACK));
    assert_eq!(canvas.pixel(100, 93), Some(Color32::BLACK));
}

#[test]
fn test_eraser_on_blank_canvas_stays_white() {
    let mut surface = DrawingSurface::default();
    surface.set_eraser(true);
    surface.set_size(30.0);

    surface.on_pointer_down(pos2(0.0, 300.0));
    for x in (0..=900).step_by(50) {
        surface.on_pointer_move(pos2(x as f32, 300.0));
    }
    surface.on_pointer_up();

    assert!(surface.segments_rendered() > 0);
    assert!(surface.canvas().is_filled_with(Color32::WHITE));
}

#[test]
fn test_brush_changes_apply_to_next_segment() {
    let mut surface = DrawingSurface::default();
    surface.select_palette_color(red());
    surface.set_size(4.0);

    surface.on_pointer_down(pos2(10.0, 100.0));
    surface.on_pointer_move(pos2(50.0, 100.0));
    surface.set_size(20.0);
    surface.set_color(blue());
    surface.on_pointer_move(pos2(90.0, 100.0));
    surface.on_pointer_up();

    let canvas = surface.canvas();
    // The first segment keeps its colour and width
    assert_eq!(canvas.pixel(30, 100), Some(red()));
    assert_eq!(canvas.pixel(30, 108), Some(Color32::WHITE));
    // The second one picks up the new settings
    assert_eq!(canvas.pixel(70, 100), Some(blue()));
    assert_eq!(canvas.pixel(70, 108), Some(blue()));
}

#[test]
fn test_clear_mid_stroke_keeps_pen_position() {
    let mut surface = DrawingSurface::default();
    surface.on_pointer_down(pos2(100.0, 100.0));
    surface.on_pointer_move(pos2(200.0, 100.0));

    surface.clear();
    assert!(surface.canvas().is_filled_with(Color32::WHITE));
    assert_eq!(surface.stroke_state(), StrokeState::Stroking { last: pos2(200.0, 100.0) });

    surface.on_pointer_move(pos2(300.0, 100.0));
    let canvas = surface.canvas();
    assert_eq!(canvas.pixel(250, 100), Some(Color32::BLACK));
    // Pixels wiped by the clear are not restored
    assert_eq!(canvas.pixel(150, 100), Some(Color32::WHITE));
}

#[test]
fn test_pointer_down_while_stroking_starts_fresh_stroke() {
    let mut surface = DrawingSurface::default();
    surface.on_pointer_down(pos2(100.0, 100.0));
    // No release in between, e.g. a lost button-up
    surface.on_pointer_down(pos2(300.0, 100.0));
    surface.on_pointer_move(pos2(310.0, 100.0));

    assert_eq!(surface.segments_rendered(), 3);
    assert_eq!(surface.stroke_state(), StrokeState::Stroking { last: pos2(310.0, 100.0) });
    assert_eq!(surface.canvas().pixel(200, 100), Some(Color32::WHITE));
    assert_eq!(surface.canvas().pixel(305, 100), Some(Color32::BLACK));
}

#[test]
fn test_new_stroke_is_not_connected_to_previous() {
    let mut surface = DrawingSurface::default();
    surface.on_pointer_down(pos2(100.0, 100.0));
    surface.on_pointer_up();
    surface.on_pointer_down(pos2(300.0, 100.0));
    surface.on_pointer_up();

    assert_eq!(surface.canvas().pixel(200, 100), Some(Color32::WHITE));
}
