//! Draw-list formatting.

use weekchart_core::{Brush, Color, DrawCommand, LinearGradient, Point};

fn point(p: Point) -> String {
    format!("({:.1}, {:.1})", p.x, p.y)
}

fn color(c: Color) -> String {
    if c.a < 1.0 {
        c.to_hex_with_alpha()
    } else {
        c.to_hex()
    }
}

fn brush(b: &Brush) -> String {
    match b {
        Brush::Solid(c) => color(*c),
        Brush::Linear(LinearGradient {
            start,
            end,
            start_color,
            end_color,
        }) => format!(
            "{}@{} -> {}@{}",
            color(*start_color),
            point(*start),
            color(*end_color),
            point(*end)
        ),
    }
}

/// One human-readable line per draw command.
pub(crate) fn describe(command: &DrawCommand) -> String {
    match command {
        DrawCommand::Rect { bounds, brush: b } => format!(
            "rect   {} {:.1}x{:.1} {}",
            point(bounds.origin()),
            bounds.width,
            bounds.height,
            brush(b)
        ),
        DrawCommand::Line { from, to, style } => {
            let dash = if style.is_dashed() {
                format!(" dash {:?}", style.dash)
            } else {
                String::new()
            };
            format!(
                "line   {} -> {} w{:.1}{dash} {}",
                point(*from),
                point(*to),
                style.width,
                brush(&style.brush)
            )
        }
        DrawCommand::Circle {
            center,
            radius,
            brush: b,
        } => format!("circle {} r{:.1} {}", point(*center), radius, brush(b)),
        DrawCommand::Text {
            content,
            position,
            style,
        } => format!(
            "text   {} {:?} {:?} {:.0}px {}",
            point(*position),
            content,
            style.align,
            style.size,
            color(style.color)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekchart_core::{Rect, StrokeStyle, TextStyle};

    #[test]
    fn test_describe_rect() {
        let cmd = DrawCommand::filled_rect(
            Rect::new(0.0, 0.0, 180.0, 600.0),
            Color::from_rgb8(0x22, 0x22, 0x22),
        );
        assert_eq!(describe(&cmd), "rect   (0.0, 0.0) 180.0x600.0 #222222");
    }

    #[test]
    fn test_describe_dashed_line() {
        let cmd = DrawCommand::line(
            Point::new(180.0, 80.0),
            Point::new(800.0, 80.0),
            StrokeStyle::new(Color::WHITE, 2.0).dashed(&[8.0, 6.0]),
        );
        assert_eq!(
            describe(&cmd),
            "line   (180.0, 80.0) -> (800.0, 80.0) w2.0 dash [8.0, 6.0] #ffffff"
        );
    }

    #[test]
    fn test_describe_gradient_circle() {
        let g = LinearGradient::new(
            Point::ORIGIN,
            Point::new(10.0, 10.0),
            Color::WHITE.with_alpha_scaled(0.5),
            Color::BLACK.with_alpha_scaled(0.5),
        );
        let cmd = DrawCommand::filled_circle(Point::new(10.0, 10.0), 20.0, g);
        assert_eq!(
            describe(&cmd),
            "circle (10.0, 10.0) r20.0 #ffffff80@(0.0, 0.0) -> #00000080@(10.0, 10.0)"
        );
    }

    #[test]
    fn test_describe_text() {
        let cmd = DrawCommand::Text {
            content: "Sun".to_string(),
            position: Point::new(205.0, 52.5),
            style: TextStyle {
                size: 25.0,
                color: Color::WHITE,
                ..TextStyle::default()
            },
        };
        assert_eq!(
            describe(&cmd),
            "text   (205.0, 52.5) \"Sun\" Left 25px #ffffff"
        );
    }
}
