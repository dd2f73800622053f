use super::*;
use crate::config::revision::Revision;

fn canonical() -> Clock {
    Clock::from_revision(&Revision::Canonical.config().unwrap()).unwrap()
}

#[test]
fn starts_paused_at_initial_t() {
    let c = canonical();
    assert_eq!(c.t(), 0.0);
    assert!(!c.is_playing());
    assert_eq!(c.state(), TransportState::Idle);

    let ext = Clock::from_revision(&Revision::Extended.config().unwrap()).unwrap();
    assert_eq!(ext.t(), 19.0);
    assert_eq!(ext.state(), TransportState::Paused);
}

#[test]
fn rejects_invalid_config() {
    let base = ClockConfig {
        t_max: 10.0,
        speed: 1.0,
        initial_t: 0.0,
        stops: vec![0.0, 5.0],
    };
    assert!(Clock::new(base.clone()).is_ok());
    assert!(
        Clock::new(ClockConfig {
            t_max: 0.0,
            ..base.clone()
        })
        .is_err()
    );
    assert!(
        Clock::new(ClockConfig {
            speed: -1.0,
            ..base.clone()
        })
        .is_err()
    );
    assert!(
        Clock::new(ClockConfig {
            initial_t: 11.0,
            ..base.clone()
        })
        .is_err()
    );
    assert!(
        Clock::new(ClockConfig {
            stops: vec![5.0, 5.0],
            ..base.clone()
        })
        .is_err()
    );
    assert!(
        Clock::new(ClockConfig {
            stops: vec![0.0, 10.0],
            ..base
        })
        .is_err()
    );
}

#[test]
fn advance_scales_by_speed() {
    let mut c = canonical();
    c.play();
    assert_eq!(c.advance(4.0), Advance::Running);
    assert_eq!(c.t(), 8.0);
    assert_eq!(c.state(), TransportState::Playing);
}

#[test]
fn advance_is_noop_while_paused() {
    let mut c = canonical();
    assert_eq!(c.advance(1.0), Advance::Idle);
    assert_eq!(c.t(), 0.0);
}

#[test]
fn advance_ignores_zero_negative_and_nan() {
    let mut c = canonical();
    c.seek(10.0);
    c.play();
    for d in [0.0, -3.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(c.advance(d), Advance::Idle);
        assert_eq!(c.t(), 10.0);
        assert!(c.is_playing());
    }
}

#[test]
fn advance_stops_at_t_max_without_wrapping() {
    let mut c = canonical();
    c.seek(76.0);
    c.play();
    assert_eq!(c.advance(5.0), Advance::Finished);
    assert_eq!(c.t(), 77.0);
    assert!(!c.is_playing());
    assert_eq!(c.state(), TransportState::Paused);
    assert_eq!(c.advance(1.0), Advance::Idle);
    assert_eq!(c.t(), 77.0);
}

#[test]
fn play_from_end_restarts() {
    let mut c = canonical();
    c.seek(77.0);
    c.play();
    assert_eq!(c.t(), 0.0);
    assert!(c.is_playing());
}

#[test]
fn toggle_flips_and_restarts_at_end() {
    let mut c = canonical();
    c.seek(30.0);
    c.toggle();
    assert!(c.is_playing());
    c.toggle();
    assert!(!c.is_playing());
    assert_eq!(c.t(), 30.0);

    c.seek(77.0);
    c.toggle();
    assert!(c.is_playing());
    assert_eq!(c.t(), 0.0);
}

#[test]
fn reset_is_a_hard_stop() {
    let mut c = canonical();
    c.seek(40.0);
    c.play();
    c.reset();
    assert_eq!(c.t(), 0.0);
    assert!(!c.is_playing());
    assert_eq!(c.state(), TransportState::Idle);
}

#[test]
fn seek_clamps_and_keeps_playing_state() {
    let mut c = canonical();
    c.seek(1_000.0);
    assert_eq!(c.t(), 77.0);
    c.seek(-5.0);
    assert_eq!(c.t(), 0.0);
    c.seek(f64::NAN);
    assert_eq!(c.t(), 0.0);

    c.play();
    c.seek(30.0);
    assert!(c.is_playing());
    assert_eq!(c.t(), 30.0);
}

#[test]
fn seek_to_end_while_playing_stops() {
    let mut c = canonical();
    c.play();
    c.seek(500.0);
    assert_eq!(c.t(), 77.0);
    assert!(!c.is_playing());
}

#[test]
fn step_back_uses_epsilon() {
    let mut c = canonical();
    c.seek(50.0);
    c.step_back();
    assert_eq!(c.t(), 49.5);
    c.step_back();
    assert_eq!(c.t(), 41.0);
}

#[test]
fn step_back_near_start_clamps_to_zero() {
    let mut c = canonical();
    c.seek(8.2);
    c.step_back();
    assert_eq!(c.t(), 0.0);
    c.step_back();
    assert_eq!(c.t(), 0.0);
}

#[test]
fn step_forward_moves_to_next_start_then_end() {
    let mut c = canonical();
    c.step_forward();
    assert_eq!(c.t(), 8.0);
    c.step_forward();
    assert_eq!(c.t(), 16.0);

    c.seek(74.0);
    c.step_forward();
    assert_eq!(c.t(), 77.0);
    c.step_forward();
    assert_eq!(c.t(), 77.0);
}

#[test]
fn step_forward_then_back_returns_to_scene_start() {
    let mut c = canonical();
    c.seek(30.0);
    c.step_forward();
    assert_eq!(c.t(), 41.0);
    c.step_back();
    assert_eq!(c.t(), 26.0);
    assert!(c.t() <= 30.0);
}
