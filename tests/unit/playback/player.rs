use super::*;
use crate::config::revision::Revision;
use crate::playback::frame_source::ManualFrameSource;
use crate::scene::id::SceneId;

fn player() -> Player<ManualFrameSource> {
    let resolver = SceneResolver::for_revision(Revision::Canonical).unwrap();
    Player::new(resolver, ManualFrameSource::new()).unwrap()
}

fn deliver(p: &mut Player<ManualFrameSource>, dt: f64) -> Advance {
    let now = p.source_mut().advance_by(dt);
    let req = p.pending().expect("a frame should be pending while playing");
    assert_eq!(p.source_mut().take_next(), Some(req));
    p.on_frame(req, now)
}

#[test]
fn play_schedules_exactly_one_frame() {
    let mut p = player();
    assert_eq!(p.pending(), None);
    p.play();
    assert!(p.pending().is_some());
    assert_eq!(p.source().pending().len(), 1);
    p.play();
    assert_eq!(p.source().pending().len(), 1);
}

#[test]
fn frames_advance_by_actual_elapsed_time() {
    let mut p = player();
    p.play();
    assert_eq!(deliver(&mut p, 0.016), Advance::Running);
    assert_eq!(deliver(&mut p, 0.5), Advance::Running);
    assert_eq!(deliver(&mut p, 0.034), Advance::Running);
    assert!((p.clock().t() - 1.1).abs() < 1e-9);
    assert_eq!(p.source().pending().len(), 1);
}

#[test]
fn pause_cancels_pending_frame() {
    let mut p = player();
    p.play();
    let req = p.pending().unwrap();
    p.pause();
    assert_eq!(p.pending(), None);
    assert!(p.source().pending().is_empty());
    assert_eq!(p.source().cancelled(), &[req]);
}

#[test]
fn stale_requests_are_ignored() {
    let mut p = player();
    p.play();
    let old = p.pending().unwrap();
    p.pause();
    p.play();
    p.source_mut().set_now(1.0);
    assert_eq!(p.on_frame(old, 1.0), Advance::Idle);
    assert_eq!(p.clock().t(), 0.0);
    assert!(p.pending().is_some());
}

#[test]
fn play_while_playing_keeps_the_frame_origin() {
    let mut p = player();
    p.play();
    deliver(&mut p, 1.0);
    assert_eq!(p.clock().t(), 2.0);

    p.source_mut().advance_by(1.0);
    p.play();
    deliver(&mut p, 0.5);
    assert_eq!(p.clock().t(), 5.0);
    assert_eq!(p.source().pending().len(), 1);
}

#[test]
fn paused_time_does_not_count() {
    let mut p = player();
    p.play();
    deliver(&mut p, 1.0);
    p.pause();
    p.source_mut().advance_by(100.0);
    p.play();
    deliver(&mut p, 1.0);
    assert_eq!(p.clock().t(), 4.0);
}

#[test]
fn backwards_timestamp_does_not_rewind() {
    let mut p = player();
    p.play();
    deliver(&mut p, 2.0);
    assert_eq!(p.clock().t(), 4.0);
    deliver(&mut p, -1.0);
    assert_eq!(p.clock().t(), 4.0);
    // The next forward frame is measured from the latest timestamp seen, not the rewound one.
    deliver(&mut p, 1.5);
    assert_eq!(p.clock().t(), 5.0);
}

#[test]
fn reaching_the_end_stops_scheduling() {
    let mut p = player();
    p.seek(75.0);
    p.play();
    assert_eq!(deliver(&mut p, 2.0), Advance::Finished);
    assert_eq!(p.clock().t(), 77.0);
    assert!(!p.clock().is_playing());
    assert_eq!(p.pending(), None);
    assert!(p.source().pending().is_empty());
    assert_eq!(p.frame().scene, SceneId::Summary);
}

#[test]
fn transport_commands_resolve_fresh_frames() {
    let mut p = player();
    p.seek(50.0);
    assert_eq!(p.frame().scene, SceneId::Step1);
    p.step_back();
    assert_eq!(p.frame().t, 49.5);
    p.step_back();
    assert_eq!(p.frame().scene, SceneId::GanArchitecture);
    p.step_forward();
    assert_eq!(p.frame().scene, SceneId::Step1);
    p.toggle();
    assert!(p.clock().is_playing());
    p.reset();
    assert_eq!(p.frame().scene, SceneId::Architecture);
    assert_eq!(p.pending(), None);
}

#[test]
fn dropping_the_player_cancels_its_frame() {
    let mut source = ManualFrameSource::new();
    let req = {
        let resolver = SceneResolver::for_revision(Revision::Canonical).unwrap();
        let mut p = Player::new(resolver, &mut source).unwrap();
        p.play();
        p.pending().unwrap()
    };
    assert!(source.pending().is_empty());
    assert_eq!(source.cancelled(), &[req]);
}
