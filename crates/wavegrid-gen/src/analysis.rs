//! Measurements over a solved [`Pathfinder`].

use wavegrid_core::Pos;
use wavegrid_paths::Pathfinder;

/// Ratio of the obstacle-free lower bound to the found distance.
///
/// `1.0` means the path is as short as it could be on an open grid; lower
/// values mean obstacles forced a detour. `None` without a stored path.
pub fn path_efficiency(pf: &Pathfinder) -> Option<f64> {
    let (source, target) = endpoints(pf)?;
    let distance = pf.distance()?;
    if distance == 0 {
        return Some(1.0);
    }
    let bound = pf.last_movement()?.open_distance(source, target);
    Some(bound as f64 / distance as f64)
}

/// Interior cells of the stored path whose blocking disconnects the
/// target from the source under the same movement.
///
/// Each candidate is probed on a clone, so `pf` is left untouched.
pub fn bottlenecks(pf: &Pathfinder) -> Vec<Pos> {
    let (Some((source, target)), Some(movement)) = (endpoints(pf), pf.last_movement()) else {
        return Vec::new();
    };
    let path = pf.path();
    if path.len() < 3 {
        return Vec::new();
    }
    path[1..path.len() - 1]
        .iter()
        .copied()
        .filter(|&p| {
            let mut probe = pf.clone();
            probe.set_obstacle(p);
            !probe.find_path_with(source, target, movement)
        })
        .collect()
}

fn endpoints(pf: &Pathfinder) -> Option<(Pos, Pos)> {
    if !pf.has_path() || pf.path().is_empty() {
        return None;
    }
    pf.last_endpoints()
}
