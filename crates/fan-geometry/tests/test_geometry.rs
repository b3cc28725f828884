mod common;

use common::{band_table, trends};
use fan_geometry::{
    sample_trajectories, BoundSide, DepthScale, DrawPrimitive, FanStyle, GeometryAdapter, Layers,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_polygon_closes_over_every_x() -> anyhow::Result<()> {
    let obs = trends(12, 30, 1, "a");
    let table = band_table(&obs, &[0.5, 0.8, 0.95]);
    let adapter = GeometryAdapter::new(FanStyle::default());

    for band in adapter.bands(&table) {
        let points = band.points();
        assert_eq!(points.len(), 2 * 12);
        // forward along lower, backward along upper
        for i in 0..12 {
            assert_eq!(points[i].x, i as f64);
            assert_eq!(points[2 * 12 - 1 - i].x, i as f64);
            assert!(points[i].y <= points[2 * 12 - 1 - i].y);
        }
    }
    Ok(())
}

#[test]
fn test_every_primitive_keeps_its_cohort() -> anyhow::Result<()> {
    let mut obs = trends(5, 8, 2, "control");
    obs.extend(trends(5, 8, 3, "treated"));
    let table = band_table(&obs, &[0.0, 0.5, 0.9]);
    let style = FanStyle::default().with_layers(Layers {
        bands: true,
        lines: true,
        paths: true,
    });
    let adapter = GeometryAdapter::new(style);

    let mut geometry = adapter.adapt(&table);
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    geometry.push_paths(sample_trajectories(&obs, 3, &mut rng)?);

    // 3 bands + 5 lines + 3 paths per cohort
    assert_eq!(geometry.primitives.len(), 2 * (3 + 5 + 3));
    let control = geometry
        .primitives
        .iter()
        .filter(|p| p.cohort() == Some("control"))
        .count();
    assert_eq!(control, 11);
    assert!(geometry.primitives.iter().all(|p| p.cohort().is_some()));
    Ok(())
}

#[test]
fn test_median_line_tracks_median_band() -> anyhow::Result<()> {
    let obs = trends(6, 9, 4, "a");
    let table = band_table(&obs, &[0.0, 0.5]);
    let adapter = GeometryAdapter::default();
    let lines = adapter.boundary_lines(&table);

    let median = lines
        .iter()
        .filter_map(DrawPrimitive::as_line)
        .find(|l| l.side == BoundSide::Median)
        .ok_or_else(|| anyhow::anyhow!("no median line"))?;
    for p in &median.points {
        let row = table
            .get(Some("a"), p.x, 0.0)
            .ok_or_else(|| anyhow::anyhow!("missing median row at {}", p.x))?;
        assert_eq!(row.lower, p.y);
        assert_eq!(row.upper, p.y);
    }
    Ok(())
}

#[test]
fn test_geometry_serializes_to_json() -> anyhow::Result<()> {
    let obs = trends(3, 5, 5, "a");
    let table = band_table(&obs, &[0.5]);
    let style = FanStyle::default().with_scale_param("y", serde_json::json!({"type": "log"}));
    let geometry = GeometryAdapter::new(style).adapt(&table);

    let value = serde_json::to_value(&geometry)?;
    assert_eq!(value["primitives"][0]["kind"], "filled_band");
    assert_eq!(value["primitives"][0]["cohort"], "a");
    assert_eq!(value["primitives"][0]["width"], 0.5);
    assert_eq!(value["scale"]["y"]["type"], "log");
    Ok(())
}

proptest! {
    #[test]
    fn prop_depth_strictly_decreases_with_width(
        widths in prop::collection::vec(0.0f64..=1.0, 1..6),
        rank in any::<bool>(),
        seed in 0u64..1000,
    ) {
        let obs = trends(4, 6, seed, "a");
        let table = band_table(&obs, &widths);
        let scale = if rank { DepthScale::Rank } else { DepthScale::Width };
        let adapter = GeometryAdapter::new(FanStyle::default().with_depth_scale(scale));

        let bands: Vec<_> = adapter
            .bands(&table)
            .into_iter()
            .filter_map(|p| p.as_band().cloned())
            .collect();
        prop_assert_eq!(bands.len(), table.widths().len());
        for pair in bands.windows(2) {
            prop_assert!(pair[0].width.value() > pair[1].width.value());
            prop_assert!(pair[0].fill_depth < pair[1].fill_depth);
        }
        for band in &bands {
            prop_assert!((0.0..=1.0).contains(&band.fill_depth));
        }
    }
}
