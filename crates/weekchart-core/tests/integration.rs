//! Integration tests for the drawing backend.

use weekchart_core::{
    Brush, Canvas, Color, DrawCommand, LinearGradient, Point, RecordingCanvas, Rect, StrokeStyle,
    TextAlign, TextStyle, Transform2D,
};

fn paint_scene(canvas: &mut dyn Canvas) {
    canvas.fill_rect(
        Rect::new(0.0, 0.0, 180.0, 600.0),
        Brush::Solid(Color::from_rgb8(0x22, 0x22, 0x22)),
    );
    canvas.stroke_line(
        Point::new(180.0, 80.0),
        Point::new(800.0, 80.0),
        &StrokeStyle::new(Color::from_rgb8(0x3D, 0x3D, 0x3D), 2.0).dashed(&[8.0, 6.0]),
    );
    canvas.draw_text(
        "Extreme",
        Point::new(160.0, 88.0),
        &TextStyle {
            size: 25.0,
            align: TextAlign::Right,
            ..TextStyle::default()
        },
    );
    let gradient = LinearGradient::new(
        Point::new(224.0, 288.0),
        Point::new(313.0, 288.0),
        Color::from_rgb8(0xFE, 0x76, 0x50),
        Color::from_rgb8(0x43, 0xE3, 0x4F),
    );
    canvas.fill_circle(
        Point::new(313.0, 288.0),
        20.0,
        Brush::Linear(gradient.with_alpha_scaled(0.5)),
    );
}

#[test]
fn test_scene_through_trait_object() {
    let mut canvas = RecordingCanvas::new();
    paint_scene(&mut canvas);

    let kinds: Vec<&str> = canvas.commands().iter().map(DrawCommand::kind).collect();
    assert_eq!(kinds, ["rect", "line", "text", "circle"]);
}

#[test]
fn test_scene_json_dump() {
    let mut canvas = RecordingCanvas::new();
    paint_scene(&mut canvas);

    let json = serde_json::to_value(canvas.commands()).unwrap();
    assert_eq!(json[0]["brush"]["Solid"], "#222222");
    assert_eq!(json[1]["style"]["dash"][0], 8.0);
    assert_eq!(json[2]["style"]["align"], "right");
    assert_eq!(json[3]["brush"]["Linear"]["start_color"]["a"], 0.5);

    let back: Vec<DrawCommand> = serde_json::from_value(json).unwrap();
    assert_eq!(back, canvas.commands());
}

#[test]
fn test_translated_scene_matches_manual_offset() {
    let mut shifted = RecordingCanvas::new();
    shifted.push_transform(Transform2D::translate(50.0, 0.0));
    paint_scene(&mut shifted);
    shifted.pop_transform();

    match &shifted.commands()[3] {
        DrawCommand::Circle { center, brush, .. } => {
            assert_eq!(*center, Point::new(363.0, 288.0));
            assert_eq!(
                brush.color_at_point(Point::new(0.0, 0.0)).to_hex(),
                "#fe7650"
            );
        }
        _ => panic!("Expected Circle command"),
    }
}
