use super::*;

fn frame(scene: SceneId, params: SceneParams) -> SceneFrame {
    SceneFrame {
        t: 50.0,
        scene,
        scene_index: 6,
        scene_count: 11,
        scene_start: 49.5,
        local_t: 0.5,
        params,
    }
}

#[test]
fn counter_label_formats_index_and_total() {
    let f = frame(SceneId::Summary, SceneParams::Static);
    assert_eq!(f.counter_label(), "Scene 6 / 11");
}

#[test]
fn static_scene_has_no_params() {
    let f = frame(SceneId::Architecture, SceneParams::Static);
    assert!(f.params_map().is_empty());
    assert_eq!(f.param("progress"), None);
    assert_eq!(f.training(), None);
}

#[test]
fn training_params_are_reachable_by_name() {
    let p = TrainingParams {
        raw_progress: 0.5,
        progress: 0.5,
        epoch_index: 2,
        epoch: 70,
        generator_loss: 0.5,
        discriminator_loss: 0.25,
    };
    let f = frame(SceneId::Step1, SceneParams::Training(p));
    assert_eq!(f.param("epoch"), Some(ParamValue::Count(70)));
    assert_eq!(
        f.param("discriminator_loss").and_then(ParamValue::as_f64),
        Some(0.25)
    );
    assert_eq!(f.training(), Some(p));
}

#[test]
fn dataset_gates_are_booleans() {
    let f = frame(
        SceneId::Dataset,
        SceneParams::Dataset {
            show_raster: false,
            show_augment_extras: true,
        },
    );
    assert_eq!(
        f.param("show_augment_extras").and_then(ParamValue::as_bool),
        Some(true)
    );
    assert_eq!(f.param("show_raster").and_then(ParamValue::as_f64), None);
}

#[test]
fn serialized_params_carry_kind_tag() {
    let f = frame(SceneId::Evaluation, SceneParams::Evaluation { ssim: 0.88 });
    let v = serde_json::to_value(f).unwrap();
    assert_eq!(v["scene"], "evaluation");
    assert_eq!(v["params"]["kind"], "evaluation");
    assert_eq!(v["params"]["ssim"], 0.88);
}
