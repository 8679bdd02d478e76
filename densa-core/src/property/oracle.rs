//! Sentinel-array oracle for clustering property verification.
//!
//! A deliberately plain implementation: one signed label per point, `-1`
//! for unvisited and `-2` for noise, neighbourhoods recomputed on every
//! lookup. It shares nothing with the engine except the distance function.

use std::collections::VecDeque;

use crate::{Label, Point, squared_distance};

/// Label of a point nobody has looked at yet.
pub(super) const UNVISITED: i64 = -1;
/// Label of a point found not to be density-reachable (so far).
pub(super) const NOISE: i64 = -2;

/// Labels `points` with signed identifiers, `NOISE` for noise.
pub(super) fn sentinel_labels(points: &[Point], eps: f64, min_pts: usize) -> Vec<i64> {
    let eps_squared = eps * eps;
    let neighbours = |centre: usize| -> Vec<usize> {
        (0..points.len())
            .filter(|&other| {
                other != centre && squared_distance(points[centre], points[other]) <= eps_squared
            })
            .collect()
    };

    let mut labels = vec![UNVISITED; points.len()];
    let mut cluster = 0_i64;
    for point in 0..points.len() {
        if labels[point] != UNVISITED {
            continue;
        }
        let seeds = neighbours(point);
        if seeds.len() + 1 < min_pts {
            labels[point] = NOISE;
            continue;
        }
        labels[point] = cluster;
        let mut queue: VecDeque<usize> = seeds.into();
        while let Some(member) = queue.pop_front() {
            if labels[member] >= 0 {
                continue;
            }
            labels[member] = cluster;
            let reach = neighbours(member);
            if reach.len() + 1 >= min_pts {
                queue.extend(reach.into_iter().filter(|&next| labels[next] == UNVISITED));
            }
        }
        cluster += 1;
    }
    labels
}

/// Converts engine labels into the oracle's signed form.
pub(super) fn as_sentinels(labels: &[Label]) -> Vec<i64> {
    labels
        .iter()
        .map(|label| match label {
            Label::Noise => NOISE,
            Label::Cluster(id) => i64::try_from(id.get()).expect("cluster id fits in i64"),
        })
        .collect()
}
