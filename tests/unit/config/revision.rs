use super::*;

#[test]
fn builtin_revisions_validate() {
    for rev in Revision::ALL {
        let cfg = rev.config().unwrap();
        assert_eq!(cfg.name, rev.name());
    }
}

#[test]
fn builtin_shapes_match_published_cuts() {
    let initial = Revision::Initial.config().unwrap();
    assert_eq!(initial.boundaries.len(), 6);
    assert_eq!(initial.t_max(), 60.0);
    assert_eq!(initial.speed, 1.0);

    let extended = Revision::Extended.config().unwrap();
    assert_eq!(extended.boundaries.len(), 8);
    assert_eq!(extended.t_max(), 53.0);
    assert_eq!(extended.initial_t, 19.0);

    let canonical = Revision::Canonical.config().unwrap();
    assert_eq!(canonical.boundaries.len(), 11);
    assert_eq!(canonical.t_max(), 77.0);
    assert_eq!(canonical.speed, 2.0);
    assert_eq!(canonical.evaluation, EvaluationScore::Fixed { score: 0.88 });
    let scenes: Vec<SceneId> = canonical
        .boundaries
        .entries()
        .iter()
        .map(|b| b.scene)
        .collect();
    assert_eq!(scenes, SceneId::ALL.to_vec());
}

#[test]
fn default_revision_is_canonical() {
    assert_eq!(Revision::default(), Revision::Canonical);
}

#[test]
fn missing_training_config_is_rejected() {
    let mut cfg = Revision::Canonical.config().unwrap();
    cfg.step2 = None;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("no training config"));
}

#[test]
fn empty_epoch_table_is_rejected() {
    let mut cfg = Revision::Canonical.config().unwrap();
    if let Some(step) = cfg.step1.as_mut() {
        step.epochs.clear();
    }
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("epoch table is empty"));
}

#[test]
fn training_window_past_t_max_is_rejected() {
    let mut cfg = Revision::Canonical.config().unwrap();
    if let Some(step) = cfg.step2.as_mut() {
        step.window.duration = 100.0;
    }
    assert!(cfg.validate().is_err());
}

#[test]
fn bad_speed_and_initial_t_are_rejected() {
    let mut cfg = Revision::Canonical.config().unwrap();
    cfg.speed = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = Revision::Canonical.config().unwrap();
    cfg.initial_t = 78.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn evaluation_modes_are_range_checked() {
    let mut cfg = Revision::Canonical.config().unwrap();
    cfg.evaluation = EvaluationScore::Fixed { score: 1.5 };
    assert!(cfg.validate().is_err());

    cfg.evaluation = EvaluationScore::Ramped {
        ramp_secs: 0.0,
        cap: 0.9,
    };
    assert!(cfg.validate().is_err());

    cfg.evaluation = EvaluationScore::Ramped {
        ramp_secs: 8.0,
        cap: 0.92,
    };
    cfg.validate().unwrap();
}

#[test]
fn framing_thresholds_must_increase() {
    let mut cfg = Revision::Canonical.config().unwrap();
    cfg.framing.reveal_at = vec![6.0, 3.0];
    assert!(cfg.validate().is_err());
}

#[test]
fn json_round_trip_reloads_through_validation() {
    let cfg = Revision::Extended.config().unwrap();
    let json = cfg.to_json_pretty().unwrap();
    let back = RevisionConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn json_defaults_fill_optional_sections() {
    let json = r#"{
        "name": "mini",
        "boundaries": {
            "entries": [
                {"at": 0.0, "scene": "framing"},
                {"at": 9.0, "scene": "evaluation"}
            ],
            "t_max": 12.0
        },
        "speed": 1.5
    }"#;
    let cfg = RevisionConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.initial_t, 0.0);
    assert_eq!(cfg.framing.reveal_at, vec![3.0, 6.0]);
    assert_eq!(cfg.framing.time_base, TimeBase::Absolute);
    assert_eq!(cfg.evaluation, EvaluationScore::Fixed { score: 0.88 });
    assert!(cfg.step1.is_none());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = RevisionConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, ExplainerError::Config(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = RevisionConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open revision JSON"));
}
