use super::*;

fn l_shape() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((30.0, 0.0));
    p.line_to((30.0, 40.0));
    p
}

#[test]
fn polyline_length_is_exact() {
    let m = PathMetrics::new(&l_shape());
    assert!((m.total_length() - 70.0).abs() < 1e-9);
}

#[test]
fn point_at_length_walks_segments() {
    let m = PathMetrics::new(&l_shape());
    let p = m.point_at_length(15.0).unwrap();
    assert!((p.x - 15.0).abs() < 1e-6 && p.y.abs() < 1e-6);
    let p = m.point_at_length(50.0).unwrap();
    assert!((p.x - 30.0).abs() < 1e-6 && (p.y - 20.0).abs() < 1e-6);
    let end = m.point_at_length(1_000.0).unwrap();
    assert!((end.y - 40.0).abs() < 1e-6);
    let start = m.point_at_length(-5.0).unwrap();
    assert_eq!(start, Point::new(0.0, 0.0));
}

#[test]
fn empty_path_measures_zero() {
    let m = PathMetrics::new(&BezPath::new());
    assert_eq!(m.total_length(), 0.0);
    assert!(m.point_at_length(1.0).is_none());
}

#[test]
fn svg_data_parses() {
    let m = PathMetrics::from_svg("M0,0 L10,0 L10,10 Z").unwrap();
    assert!((m.total_length() - (20.0 + 200f64.sqrt())).abs() < 1e-9);
    assert!(PathMetrics::from_svg("M0,0 Q").is_err());
}
