use super::*;

#[test]
fn time_window_contains_is_half_open() {
    let w = TimeWindow::new(49.5, 7.5).unwrap();
    assert!(!w.contains(49.4));
    assert!(w.contains(49.5));
    assert!(w.contains(56.9));
    assert!(!w.contains(57.0));
    assert_eq!(w.end(), 57.0);
}

#[test]
fn time_window_rejects_empty_and_negative() {
    assert!(TimeWindow::new(0.0, 0.0).is_err());
    assert!(TimeWindow::new(-1.0, 2.0).is_err());
    assert!(TimeWindow::new(f64::NAN, 2.0).is_err());
    assert!(TimeWindow::new(1.0, f64::INFINITY).is_err());
}

#[test]
fn raw_progress_is_unclamped() {
    let w = TimeWindow::new(10.0, 4.0).unwrap();
    assert_eq!(w.raw_progress(8.0), -0.5);
    assert_eq!(w.raw_progress(12.0), 0.5);
    assert_eq!(w.raw_progress(18.0), 2.0);
}

#[test]
fn local_span_excludes_both_ends() {
    let s = LocalSpan {
        after: 2.0,
        before: 6.0,
    };
    assert!(!s.contains_open(2.0));
    assert!(s.contains_open(2.1));
    assert!(!s.contains_open(6.0));
}
