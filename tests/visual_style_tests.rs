use approx::assert_abs_diff_eq;
use window_graph::core::{Point, Size};
use window_graph::render::{ChartElement, Color, ElementKind};
use window_graph::visual::{
    BarStyle, BarStyleConfig, LineStyle, LineStyleConfig, VisualStyle, VisualStyleConfig,
    VisualStyleKind,
};

fn kinds(marks: &[ChartElement]) -> Vec<ElementKind> {
    marks.iter().map(ChartElement::kind).collect()
}

#[test]
fn line_style_connects_consecutive_marks() {
    let mut style = LineStyle::default();
    style.begin_pass();

    let first = style.emit_marks(Point::new(10.0, 10.0), 50.0);
    assert_eq!(kinds(&first), vec![ElementKind::PointMark]);

    let second = style.emit_marks(Point::new(13.0, 14.0), 50.0);
    assert_eq!(
        kinds(&second),
        vec![ElementKind::PointMark, ElementKind::Connector]
    );

    let ChartElement::Connector(connector) = &second[1] else {
        panic!("expected connector");
    };
    assert_eq!(connector.from, Point::new(10.0, 10.0));
    assert_eq!(connector.to, Point::new(13.0, 14.0));
    assert_abs_diff_eq!(connector.length, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(connector.center.x, 11.5, epsilon = 1e-12);
    assert_abs_diff_eq!(connector.center.y, 12.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        connector.angle_degrees,
        (4.0f64).atan2(3.0).to_degrees(),
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(connector.thickness, 3.0, epsilon = 1e-12);
}

#[test]
fn descending_connector_angle_is_normalized_positive() {
    let mut style = LineStyle::default();
    style.begin_pass();
    let _ = style.emit_marks(Point::new(0.0, 10.0), 1.0);
    let marks = style.emit_marks(Point::new(10.0, 0.0), 1.0);

    let ChartElement::Connector(connector) = &marks[1] else {
        panic!("expected connector");
    };
    assert_abs_diff_eq!(connector.angle_degrees, 315.0, epsilon = 1e-9);
}

#[test]
fn line_style_begin_pass_drops_last_position() {
    let mut style = LineStyle::default();
    style.begin_pass();
    let _ = style.emit_marks(Point::new(1.0, 1.0), 1.0);
    assert!(style.last_position().is_some());

    style.begin_pass();
    assert!(style.last_position().is_none());
    let marks = style.emit_marks(Point::new(2.0, 2.0), 1.0);
    assert_eq!(kinds(&marks), vec![ElementKind::PointMark]);
}

#[test]
fn line_style_uses_configured_mark_size() {
    let config = LineStyleConfig {
        mark_size: Size::new(7.0, 9.0),
        mark_color: Color::rgb(1.0, 0.0, 0.0),
        ..LineStyleConfig::default()
    };
    let mut style = LineStyle::new(config).expect("line style");
    style.begin_pass();
    let marks = style.emit_marks(Point::new(5.0, 6.0), 1.0);

    let ChartElement::PointMark(mark) = &marks[0] else {
        panic!("expected point mark");
    };
    assert_eq!(mark.center, Point::new(5.0, 6.0));
    assert_eq!(mark.size, Size::new(7.0, 9.0));
    assert_eq!(mark.color, Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn default_line_mark_is_eleven_units_square() {
    assert_eq!(LineStyleConfig::default().mark_size, Size::new(11.0, 11.0));
}

#[test]
fn bar_style_emits_base_anchored_inset_bar() {
    let mut style = BarStyle::default();
    style.begin_pass();
    let marks = style.emit_marks(Point::new(40.0, 120.0), 50.0);

    assert_eq!(kinds(&marks), vec![ElementKind::Bar]);
    let ChartElement::Bar(bar) = &marks[0] else {
        panic!("expected bar");
    };
    assert_abs_diff_eq!(bar.base_x, 40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bar.height, 120.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bar.width, 45.0, epsilon = 1e-12);
}

#[test]
fn bar_style_never_emits_connectors() {
    let mut style = BarStyle::new(BarStyleConfig {
        bar_width_multiplier: 1.0,
        ..BarStyleConfig::default()
    })
    .expect("bar style");
    style.begin_pass();
    for i in 0..5 {
        let marks = style.emit_marks(Point::new(f64::from(i) * 10.0, 5.0), 10.0);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].kind(), ElementKind::Bar);
    }
}

#[test]
fn invalid_style_configs_are_rejected() {
    for multiplier in [0.0, -0.5, 1.01, f64::NAN] {
        let config = BarStyleConfig {
            bar_width_multiplier: multiplier,
            ..BarStyleConfig::default()
        };
        assert!(BarStyle::new(config).is_err(), "multiplier {multiplier}");
    }

    let config = LineStyleConfig {
        mark_size: Size::new(0.0, 11.0),
        ..LineStyleConfig::default()
    };
    assert!(LineStyle::new(config).is_err());

    let config = LineStyleConfig {
        connector_color: Color::rgba(1.0, 1.0, 1.0, 2.0),
        ..LineStyleConfig::default()
    };
    assert!(LineStyle::new(config).is_err());
}

#[test]
fn style_config_builds_matching_style() {
    let line = VisualStyleConfig::Line(LineStyleConfig::default())
        .build()
        .expect("line");
    let bar = VisualStyleConfig::Bar(BarStyleConfig::default())
        .build()
        .expect("bar");

    assert_eq!(line.kind(), VisualStyleKind::Line);
    assert_eq!(bar.kind(), VisualStyleKind::Bar);
}

#[test]
fn style_config_json_is_tagged() {
    let config = VisualStyleConfig::Bar(BarStyleConfig::default());
    let json = serde_json::to_string(&config).expect("serialize");
    assert!(json.contains("\"kind\":\"bar\""));

    let restored: VisualStyleConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}
