use crate::data::{ClassName, Placement, RoomAssignment};
use itertools::Itertools;
use std::collections::HashMap;

fn class_positions(class_order: &[ClassName]) -> HashMap<&str, usize> {
    let mut positions = HashMap::with_capacity(class_order.len());
    for (idx, name) in class_order.iter().enumerate() {
        positions.entry(name.as_str()).or_insert(idx);
    }
    positions
}

/// Reorders a room so students from the same origin class sit together, classes in
/// class order. Students of one class keep the order they were seated in.
/// Origin classes that are not in `class_order` go last.
pub fn regroup(placements: Vec<Placement>, class_order: &[ClassName]) -> Vec<Placement> {
    let positions = class_positions(class_order);
    placements
        .into_iter()
        .sorted_by_key(|p| {
            positions
                .get(p.origin_class.as_str())
                .copied()
                .unwrap_or(usize::MAX)
        })
        .collect()
}

pub fn regroup_all(rooms: &mut [RoomAssignment], class_order: &[ClassName]) {
    for room in rooms {
        let placements = std::mem::take(&mut room.placements);
        room.placements = regroup(placements, class_order);
    }
}
