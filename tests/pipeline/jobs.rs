use plotkit::{
    run_pipeline, MotionPhase, PathTags, PipelineConfig, PipelineOutput, PlanEvent, Point,
    Shape,
};

const DEMO_SHAPES: &str = include_str!("../../demos/shapes.json");

fn demo_shapes() -> Vec<Shape> {
    serde_json::from_str(DEMO_SHAPES).unwrap()
}

#[test]
fn test_demo_job() {
    let shapes = demo_shapes();
    assert_eq!(shapes.len(), 3);
    assert_eq!(shapes[1].tags.layer_id.as_deref(), Some("detail"));

    let output = run_pipeline(&shapes, &PipelineConfig::default()).unwrap();
    assert_eq!(output.paths.len(), 3);
    assert_eq!(output.stats.path_count, 3);

    // The square starts nearest the origin and is drawn first.
    assert_eq!(output.paths[0].start(), Point::new(10.0, 10.0));

    let pen_downs = output
        .plan
        .events
        .iter()
        .filter(|e| matches!(e, PlanEvent::PenDown { .. }))
        .count();
    assert_eq!(pen_downs, 3);
    assert!((output.plan.draw_distance() - output.stats.pen_down_distance).abs() < 1e-9);
    assert!((output.plan.travel_distance() - output.stats.pen_up_distance).abs() < 1e-9);
}

#[test]
fn test_layer_selection() {
    let mut config = PipelineConfig::default();
    config.selection.layer_id = Some("outline".to_string());

    let output = run_pipeline(&demo_shapes(), &config).unwrap();
    assert_eq!(output.paths.len(), 2);
    assert!(output
        .paths
        .iter()
        .all(|p| p.tags.layer_id.as_deref() == Some("outline")));
}

#[test]
fn test_plan_ends_idle_at_origin() {
    let output = run_pipeline(&demo_shapes(), &PipelineConfig::default()).unwrap();
    let end = output.plan.instant(output.plan.duration() + 1.0);
    assert_eq!(end.position, Point::ORIGIN);
    assert_eq!(end.phase, MotionPhase::Idle);
    assert!(!end.pen_down);
}

#[test]
fn test_output_json() {
    let shapes = vec![Shape::path("M 1 1 L 4 5").with_tags(PathTags::default().with_stroke("blue"))];
    let output = run_pipeline(&shapes, &PipelineConfig::default()).unwrap();

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["paths"][0]["points"], serde_json::json!([1.0, 1.0, 4.0, 5.0]));
    assert_eq!(json["paths"][0]["stroke"], "blue");
    assert_eq!(json["stats"]["pen_down_distance"], 5.0);
    assert_eq!(json["plan"]["events"][0]["type"], "travel");

    let back: PipelineOutput = serde_json::from_value(json).unwrap();
    assert_eq!(back.paths, output.paths);
    assert_eq!(back.plan.events.len(), output.plan.events.len());

    let summary = serde_json::to_value(output.summary()).unwrap();
    assert_eq!(summary["event_count"], output.plan.events.len());
}
