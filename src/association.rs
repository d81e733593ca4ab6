//! Greedy nearest-neighbour association with per-track gating.
//!
//! Every (track, detection) pair whose distance is within the track's
//! search radius is a candidate. Candidates are committed cheapest first;
//! committing a pair consumes both sides. Equal costs are broken by the
//! lower track id, then by the lower detection index, so the outcome is a
//! pure function of the inputs.

use std::cmp::Ordering;

use nalgebra as na;
use ndarray::Array2;

use crate::Detection;

/// What the association engine needs to know about a live track.
#[derive(Debug, Clone, Copy)]
pub struct Gate {
    pub id: u64,
    pub predicted: na::Point2<f32>,
    pub radius: f32,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignment {
    /// (gate index, detection index, distance), in commit order.
    pub matched: Vec<(usize, usize, f32)>,
    /// Gate indexes left without a detection.
    pub missed: Vec<usize>,
    /// Detection indexes left without a track.
    pub unmatched: Vec<usize>,
}

pub fn cost_matrix(gates: &[Gate], detections: &[Detection]) -> Array2<f32> {
    Array2::from_shape_fn((gates.len(), detections.len()), |(r, c)| {
        na::distance(&gates[r].predicted, &detections[c].centroid)
    })
}

#[inline]
fn candidate_order(a: &(usize, usize, f32), b: &(usize, usize, f32), gates: &[Gate]) -> Ordering {
    a.2.total_cmp(&b.2)
        .then_with(|| gates[a.0].id.cmp(&gates[b.0].id))
        .then_with(|| a.1.cmp(&b.1))
}

pub fn associate(gates: &[Gate], detections: &[Detection]) -> Assignment {
    if gates.is_empty() || detections.is_empty() {
        return Assignment {
            matched: Vec::new(),
            missed: (0..gates.len()).collect(),
            unmatched: (0..detections.len()).collect(),
        };
    }

    let costs = cost_matrix(gates, detections);

    let mut candidates: Vec<(usize, usize, f32)> = costs
        .indexed_iter()
        .filter(|&((r, _), &cost)| cost <= gates[r].radius)
        .map(|((r, c), &cost)| (r, c, cost))
        .collect();

    candidates.sort_by(|a, b| candidate_order(a, b, gates));

    let mut gate_used = vec![false; gates.len()];
    let mut det_used = vec![false; detections.len()];
    let mut matched = Vec::with_capacity(gates.len().min(detections.len()));

    for (r, c, cost) in candidates {
        if gate_used[r] || det_used[c] {
            continue;
        }

        gate_used[r] = true;
        det_used[c] = true;
        matched.push((r, c, cost));
    }

    Assignment {
        matched,
        missed: (0..gates.len()).filter(|&r| !gate_used[r]).collect(),
        unmatched: (0..detections.len()).filter(|&c| !det_used[c]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(id: u64, x: f32, y: f32, radius: f32) -> Gate {
        Gate {
            id,
            predicted: na::Point2::new(x, y),
            radius,
        }
    }

    fn det(x: f32, y: f32) -> Detection {
        Detection::new(na::Point2::new(x, y), crate::bbox::BBox::ltwh(x - 1.0, y - 1.0, 2.0, 2.0))
    }

    #[test]
    fn empty_inputs() {
        let a = associate(&[], &[det(0.0, 0.0)]);
        assert!(a.matched.is_empty());
        assert_eq!(a.unmatched, vec![0]);

        let a = associate(&[gate(1, 0.0, 0.0, 10.0)], &[]);
        assert_eq!(a.missed, vec![0]);
        assert!(a.unmatched.is_empty());
    }

    #[test]
    fn cost_matrix_shape() {
        let m = cost_matrix(
            &[gate(1, 0.0, 0.0, 1.0), gate(2, 3.0, 4.0, 1.0)],
            &[det(0.0, 0.0), det(3.0, 0.0), det(0.0, 4.0)],
        );

        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m[[1, 0]], 5.0);
        assert_eq!(m[[0, 1]], 3.0);
    }

    #[test]
    fn gate_excludes_far_pairs() {
        let a = associate(&[gate(1, 0.0, 0.0, 5.0)], &[det(6.0, 0.0)]);

        assert!(a.matched.is_empty());
        assert_eq!(a.missed, vec![0]);
        assert_eq!(a.unmatched, vec![0]);
    }

    #[test]
    fn radius_is_inclusive() {
        let a = associate(&[gate(1, 0.0, 0.0, 5.0)], &[det(3.0, 4.0)]);
        assert_eq!(a.matched, vec![(0, 0, 5.0)]);
    }

    #[test]
    fn cheapest_pair_committed_first() {
        // Track 1 is close to both detections; track 2 only reaches det 0.
        // Greedy gives det 1 (cost 1) to track 1, then det 0 to track 2.
        let gates = [gate(1, 10.0, 0.0, 20.0), gate(2, 0.0, 0.0, 20.0)];
        let dets = [det(2.0, 0.0), det(11.0, 0.0)];

        let a = associate(&gates, &dets);

        assert_eq!(a.matched, vec![(0, 1, 1.0), (1, 0, 2.0)]);
        assert!(a.missed.is_empty());
        assert!(a.unmatched.is_empty());
    }

    #[test]
    fn greedy_does_not_reassign_to_gated_out_track() {
        // Track 1 takes the only detection track 2 could reach.
        let gates = [gate(1, 0.0, 0.0, 50.0), gate(2, 4.0, 0.0, 3.0)];
        let dets = [det(1.0, 0.0), det(30.0, 0.0)];

        let a = associate(&gates, &dets);

        assert_eq!(a.matched, vec![(0, 0, 1.0)]);
        assert_eq!(a.missed, vec![1]);
        assert_eq!(a.unmatched, vec![1]);
    }

    #[test]
    fn tie_prefers_lower_track_id() {
        // Gate order in the slice is deliberately reversed.
        let gates = [gate(7, 2.0, 0.0, 10.0), gate(3, -2.0, 0.0, 10.0)];
        let dets = [det(0.0, 0.0)];

        let a = associate(&gates, &dets);

        assert_eq!(a.matched, vec![(1, 0, 2.0)]);
        assert_eq!(a.missed, vec![0]);
    }

    #[test]
    fn tie_on_same_track_prefers_lower_detection_index() {
        let gates = [gate(1, 0.0, 0.0, 10.0)];
        let dets = [det(0.0, 3.0), det(3.0, 0.0)];

        let a = associate(&gates, &dets);

        assert_eq!(a.matched, vec![(0, 0, 3.0)]);
        assert_eq!(a.unmatched, vec![1]);
    }
}
