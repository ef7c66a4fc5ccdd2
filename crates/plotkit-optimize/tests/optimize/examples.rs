use plotkit_core::{PathTags, PlotStats, Polyline};
use plotkit_optimize::{
    round_paths, simplify_paths, sort_paths, IndexKind, OptimizerConfig, OptimizerPipeline,
    SelectionConfig, SimplifyConfig, SortConfig,
};

fn line(coords: &[f64]) -> Polyline {
    Polyline::from_flat(coords, PathTags::default()).unwrap()
}

#[test]
fn test_simplify_example() {
    let mut paths = vec![line(&[0.0, 0.0, 0.2, 0.0, 10.0, 0.0])];
    simplify_paths(
        &mut paths,
        &SimplifyConfig {
            enabled: true,
            merge_distance: 1.0,
            min_path_size: 5.0,
        },
    );
    assert_eq!(paths[0].to_flat(), vec![0.0, 0.0, 10.0, 0.0]);
}

#[test]
fn test_sort_example() {
    let a = line(&[0.0, 0.0, 1.0, 0.0]);
    let b = line(&[5.0, 5.0, 5.0, 6.0]);
    let paths = vec![b.clone(), a.clone()];
    for index in [IndexKind::RTree, IndexKind::KdTree] {
        let config = SortConfig {
            index,
            ..Default::default()
        };
        let sorted = sort_paths(&paths, &config).unwrap();
        assert_eq!(*sorted[0], a);
        assert_eq!(*sorted[1], b);
    }
}

#[test]
fn test_round_twice_is_round_once() {
    let mut once = vec![line(&[0.123_456_7, 9.876_543_2, -3.141_592_6, 2.718_281_8])];
    round_paths(&mut once, 3);
    let mut twice = once.clone();
    round_paths(&mut twice, 3);
    assert_eq!(once, twice);
    assert_eq!(once[0].to_flat(), vec![0.123, 9.877, -3.142, 2.718]);
}

#[test]
fn test_sort_reduces_pen_up_distance() {
    // A row of short strokes presented in a scrambled order.
    let order = [7, 2, 9, 0, 5, 3, 8, 1, 6, 4];
    let paths: Vec<Polyline> = order
        .iter()
        .map(|&i| {
            let x = i as f64 * 10.0;
            line(&[x, 0.0, x + 5.0, 0.0])
        })
        .collect();
    let before = PlotStats::from_paths(&paths);

    let pipeline =
        OptimizerPipeline::from_config(&SelectionConfig::default(), &OptimizerConfig::default())
            .unwrap();
    let sorted = pipeline.run(paths).unwrap();
    let after = PlotStats::from_paths(&sorted);

    assert_eq!(after.path_count, 10);
    assert_eq!(after.pen_down_distance, before.pen_down_distance);
    assert!(after.pen_up_distance < before.pen_up_distance);
    // Left to right, each stroke starts 5 units after the previous ends.
    for pair in sorted.windows(2) {
        assert_eq!(pair[1].start().x - pair[0].end().x, 5.0);
    }
}

#[test]
fn test_selection_runs_before_sort() {
    let paths = vec![
        Polyline::from_flat(&[0.0, 0.0, 4.0, 0.0], PathTags::default().with_layer("keep")).unwrap(),
        Polyline::from_flat(&[1.0, 0.0, 4.0, 4.0], PathTags::default().with_layer("skip")).unwrap(),
    ];
    let selection = SelectionConfig {
        layer_id: Some("keep".to_string()),
        ..Default::default()
    };
    let pipeline = OptimizerPipeline::from_config(&selection, &OptimizerConfig::default()).unwrap();
    let out = pipeline.run(paths).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tags.layer_id.as_deref(), Some("keep"));
}
