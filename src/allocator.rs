use crate::data::{Placement, RoomAssignment, RoomCapacities, Roster};
use log::{info, trace};
use rand::Rng;
use rand::seq::SliceRandom;

/// Every room gets as many seats as its namesake class had students.
/// Must be computed before the roster is shuffled or allocated.
pub fn room_capacities(roster: &Roster) -> RoomCapacities {
    roster
        .classes
        .iter()
        .map(|c| (c.name.clone(), c.students.len()))
        .collect()
}

/// Shuffles the students inside each class, visiting classes in class order so a
/// given generator state always yields the same permutation.
pub fn shuffle_roster<R>(roster: &mut Roster, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for class in &mut roster.classes {
        class.students.shuffle(rng);
    }
}

/// Fills rooms one at a time, in class order, by sweeping the classes round-robin and
/// drawing the next unassigned student from each non-empty class.
///
/// A room is finished when it reaches its capacity, possibly in the middle of a sweep.
/// Once a sweep draws nobody the pool is empty and every remaining room stays as it is,
/// so rooms may end up shorter than their capacity. Rooms missing from `capacities`
/// have no seats.
///
/// The roster is not modified; each class keeps a cursor to its next unassigned student.
pub fn allocate(roster: &Roster, capacities: &RoomCapacities) -> Vec<RoomAssignment> {
    let mut cursors = vec![0usize; roster.classes.len()];
    let mut exhausted = false;
    let mut rooms = Vec::with_capacity(roster.classes.len());

    for room in &roster.classes {
        let capacity = capacities.get(&room.name).copied().unwrap_or(0);
        let mut placements = Vec::with_capacity(capacity);

        while !exhausted && placements.len() < capacity {
            let mut drew_any = false;

            for (class, cursor) in roster.classes.iter().zip(cursors.iter_mut()) {
                let Some(student) = class.students.get(*cursor) else {
                    continue;
                };
                *cursor += 1;
                placements.push(Placement::new(student.clone(), class.name.clone()));
                drew_any = true;

                if placements.len() == capacity {
                    break;
                }
            }

            if !drew_any {
                exhausted = true;
                info!("Student pool exhausted while filling room {}.", room.name);
            }
        }

        trace!(
            "Room {} filled with {} of {} seats.",
            room.name,
            placements.len(),
            capacity
        );
        rooms.push(RoomAssignment {
            name: room.name.clone(),
            capacity,
            placements,
        });
    }

    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ClassRoster;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(classes: &[(&str, &[&str])]) -> Roster {
        Roster {
            classes: classes
                .iter()
                .map(|(name, students)| ClassRoster {
                    name: name.to_string(),
                    students: students.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }

    fn labels(room: &RoomAssignment) -> Vec<String> {
        room.placements.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn capacities_match_class_sizes() {
        let r = roster(&[("A", &["a1", "a2"]), ("B", &[]), ("C", &["c1"])]);
        let caps = room_capacities(&r);
        assert_eq!(caps["A"], 2);
        assert_eq!(caps["B"], 0);
        assert_eq!(caps["C"], 1);
        assert_eq!(caps.values().sum::<usize>(), r.total_students());
    }

    #[test]
    fn round_robin_fills_rooms_in_class_order() {
        let r = roster(&[("A", &["a1", "a2", "a3"]), ("B", &["b1"]), ("C", &[])]);
        let rooms = allocate(&r, &room_capacities(&r));

        assert_eq!(labels(&rooms[0]), vec!["a1 (A)", "b1 (B)", "a2 (A)"]);
        assert_eq!(labels(&rooms[1]), vec!["a3 (A)"]);
        assert!(rooms[2].placements.is_empty());
    }

    #[test]
    fn room_stops_mid_sweep_and_next_room_restarts_at_first_class() {
        let r = roster(&[("A", &["a1", "a2"]), ("B", &["b1", "b2"]), ("C", &["c1"])]);
        let rooms = allocate(&r, &room_capacities(&r));

        assert_eq!(labels(&rooms[0]), vec!["a1 (A)", "b1 (B)"]);
        assert_eq!(labels(&rooms[1]), vec!["a2 (A)", "b2 (B)"]);
        assert_eq!(labels(&rooms[2]), vec!["c1 (C)"]);
    }

    #[test]
    fn roster_is_left_untouched() {
        let r = roster(&[("A", &["a1", "a2"]), ("B", &["b1"])]);
        let before = r.clone();
        let caps = room_capacities(&r);
        assert_eq!(allocate(&r, &caps), allocate(&r, &caps));
        assert_eq!(r, before);
    }

    #[test]
    fn oversized_capacities_leave_later_rooms_short() {
        let r = roster(&[("A", &["a1"]), ("B", &["b1"])]);
        let mut caps = room_capacities(&r);
        caps.insert("A".into(), 5);

        let rooms = allocate(&r, &caps);
        assert_eq!(labels(&rooms[0]), vec!["a1 (A)", "b1 (B)"]);
        assert!(rooms[1].placements.is_empty());
        assert_eq!(rooms[1].capacity, 1);
    }

    #[test]
    fn missing_capacity_means_an_empty_room() {
        let r = roster(&[("A", &["a1"]), ("B", &["b1"])]);
        let mut caps = room_capacities(&r);
        caps.remove("A");

        let rooms = allocate(&r, &caps);
        assert!(rooms[0].placements.is_empty());
        assert_eq!(labels(&rooms[1]), vec!["a1 (A)"]);
    }

    #[test]
    fn every_student_is_placed_exactly_once() {
        let r = roster(&[
            ("A", &["a1", "a2", "a3", "a4"]),
            ("B", &["b1", "b2"]),
            ("C", &["c1", "c2", "c3"]),
            ("D", &[]),
        ]);
        let rooms = allocate(&r, &room_capacities(&r));

        for room in &rooms {
            assert_eq!(room.placements.len(), room.capacity);
        }
        let placed = rooms
            .iter()
            .flat_map(|room| room.placements.iter().cloned())
            .sorted_by(|a, b| a.student.cmp(&b.student))
            .collect_vec();
        let expected = r
            .classes
            .iter()
            .flat_map(|c| c.students.iter().map(|s| Placement::new(s.clone(), c.name.clone())))
            .sorted_by(|a, b| a.student.cmp(&b.student))
            .collect_vec();
        assert_eq!(placed, expected);
    }

    #[test]
    fn seeded_shuffle_is_reproducible_and_keeps_members() {
        let base = roster(&[("A", &["a1", "a2", "a3", "a4", "a5"]), ("B", &["b1", "b2", "b3"])]);

        let mut first = base.clone();
        shuffle_roster(&mut first, &mut ChaCha8Rng::seed_from_u64(42));
        let mut second = base.clone();
        shuffle_roster(&mut second, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(first, second);

        for (shuffled, original) in first.classes.iter().zip(&base.classes) {
            assert_eq!(shuffled.name, original.name);
            assert_eq!(
                shuffled.students.iter().sorted().collect_vec(),
                original.students.iter().sorted().collect_vec()
            );
        }
    }
}
