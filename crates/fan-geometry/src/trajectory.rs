//! Random subsets of raw sample paths
//!
//! Distinct sample ids are drawn uniformly without replacement within each
//! cohort. Ids are enumerated in sorted order before drawing, so a given
//! random source state always picks the same paths regardless of row order.

use crate::primitive::{DrawPrimitive, PathSegment, Point};
use fan_core::{DataQualityWarning, Error, Observation, Result, WarningKind};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Sampled paths plus the points dropped from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectorySample {
    pub paths: Vec<DrawPrimitive>,
    pub warnings: Vec<DataQualityWarning>,
}

type CohortPaths<'a> = BTreeMap<Option<&'a str>, BTreeMap<&'a str, Vec<&'a Observation>>>;

fn collect_paths(observations: &[Observation]) -> CohortPaths<'_> {
    let mut out: CohortPaths<'_> = BTreeMap::new();
    for obs in observations {
        out.entry(obs.cohort())
            .or_default()
            .entry(obs.sample.as_str())
            .or_default()
            .push(obs);
    }
    out
}

/// Number of distinct sample ids per cohort
pub fn available_samples(observations: &[Observation]) -> BTreeMap<Option<&str>, usize> {
    collect_paths(observations)
        .into_iter()
        .map(|(cohort, ids)| (cohort, ids.len()))
        .collect()
}

/// Fail if any cohort has fewer than `n_samples` distinct ids
pub fn check_sample_count(observations: &[Observation], n_samples: usize) -> Result<()> {
    if n_samples == 0 {
        return Ok(());
    }
    let available = available_samples(observations);
    if available.is_empty() {
        return Err(Error::empty_input("observations"));
    }
    for (cohort, count) in available {
        if n_samples > count {
            return Err(Error::too_many_samples(n_samples, count, cohort));
        }
    }
    Ok(())
}

/// Draw `n_samples` paths per cohort
///
/// Every cohort is checked before anything is drawn. Paths come back by
/// cohort, then by sample id; each path is ordered by `x` and keeps only
/// finite points.
#[instrument(skip_all, fields(rows = observations.len(), n_samples = n_samples))]
pub fn sample_trajectories<R: Rng + ?Sized>(
    observations: &[Observation],
    n_samples: usize,
    rng: &mut R,
) -> Result<TrajectorySample> {
    check_sample_count(observations, n_samples)?;
    if n_samples == 0 {
        return Ok(TrajectorySample::default());
    }

    let mut out = TrajectorySample::default();
    for (cohort, by_id) in collect_paths(observations) {
        let ids: Vec<(&str, Vec<&Observation>)> = by_id.into_iter().collect();
        let mut picked = rand::seq::index::sample(&mut *rng, ids.len(), n_samples).into_vec();
        picked.sort_unstable();
        debug!(cohort = ?cohort, available = ids.len(), "sampled {} trajectories", picked.len());

        for i in picked {
            let (sample, rows) = &ids[i];
            let mut points: Vec<Point> = rows
                .iter()
                .filter(|o| o.x.is_finite() && o.y.is_finite())
                .map(|o| Point::new(o.x, o.y))
                .collect();
            let dropped = rows.len() - points.len();
            if dropped > 0 {
                out.warnings.push(
                    DataQualityWarning::new(cohort, None, WarningKind::NonFinitePathPoint, dropped)
                        .emit(),
                );
            }
            points.sort_by(|a, b| a.x.total_cmp(&b.x));
            out.paths.push(DrawPrimitive::PathSegment(PathSegment {
                cohort: cohort.map(str::to_owned),
                sample: (*sample).to_owned(),
                points,
            }));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn runs(ids: &[&str], cohort: Option<&str>) -> Vec<Observation> {
        let mut obs = Vec::new();
        for (k, id) in ids.iter().enumerate() {
            for x in [2.0, 0.0, 1.0] {
                let o = Observation::new(x, *id, x + k as f64);
                obs.push(match cohort {
                    Some(c) => o.with_cohort(c),
                    None => o,
                });
            }
        }
        obs
    }

    #[test]
    fn test_paths_are_ordered_by_x() {
        let obs = runs(&["a", "b", "c"], None);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let sample = sample_trajectories(&obs, 2, &mut rng).unwrap();
        assert_eq!(sample.paths.len(), 2);
        for p in &sample.paths {
            let xs: Vec<f64> = p.points().iter().map(|pt| pt.x).collect();
            assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        }
        assert!(sample.warnings.is_empty());
    }

    #[test]
    fn test_same_seed_same_paths() {
        let obs = runs(&["a", "b", "c", "d", "e", "f"], None);
        let draw = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sample_trajectories(&obs, 3, &mut rng).unwrap()
        };
        assert_eq!(draw(11), draw(11));

        let mut reversed = obs.clone();
        reversed.reverse();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(sample_trajectories(&reversed, 3, &mut rng).unwrap(), draw(11));
    }

    #[test]
    fn test_too_many_samples_in_one_cohort() {
        let mut obs = runs(&["a", "b", "c"], Some("big"));
        obs.extend(runs(&["a"], Some("small")));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let err = sample_trajectories(&obs, 2, &mut rng).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("small"));
    }

    #[test]
    fn test_zero_samples() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let sample = sample_trajectories(&[], 0, &mut rng).unwrap();
        assert!(sample.paths.is_empty());
        assert!(matches!(
            sample_trajectories(&[], 1, &mut rng),
            Err(Error::EmptyInput(_))
        ));
    }

    #[test]
    fn test_non_finite_points_dropped() {
        let obs = vec![
            Observation::new(0.0, "a", 1.0),
            Observation::new(1.0, "a", f64::NAN),
            Observation::new(f64::INFINITY, "a", 2.0),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sample = sample_trajectories(&obs, 1, &mut rng).unwrap();
        assert_eq!(sample.paths[0].points(), &[Point::new(0.0, 1.0)]);
        assert_eq!(sample.warnings.len(), 1);
        assert_eq!(sample.warnings[0].kind, WarningKind::NonFinitePathPoint);
        assert_eq!(sample.warnings[0].count, 2);
    }

    #[test]
    fn test_available_samples_per_cohort() {
        let mut obs = runs(&["a", "b"], None);
        obs.extend(runs(&["a", "b", "c"], Some("t")));
        let available = available_samples(&obs);
        assert_eq!(available[&None], 2);
        assert_eq!(available[&Some("t")], 3);
    }
}
