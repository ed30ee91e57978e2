use crate::allocator::{allocate, room_capacities, shuffle_roster};
use crate::data::{RedistributeInput, RedistributeOutput, RoomAssignment, Roster, Shortfall};
use crate::error::Result;
use crate::regroup::regroup_all;
use crate::table::{parse_roster, render_table};
use log::{info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Redistributes a roster into exam rooms.
///
/// Capacities are taken from the roster as given. When `rng` is supplied the students of
/// each class are shuffled with it before allocation; otherwise input order is kept.
pub fn solve<R>(mut roster: Roster, rng: Option<&mut R>) -> RedistributeOutput
where
    R: Rng + ?Sized,
{
    let start_time = Instant::now();
    let class_order = roster.class_order();

    info!(
        "Redistributing {} students from {} classes into {} rooms...",
        roster.total_students(),
        class_order.len(),
        class_order.len()
    );

    // seats are fixed from the original class sizes
    let capacities = room_capacities(&roster);

    if let Some(rng) = rng {
        trace!("Shuffling students within each class.");
        shuffle_roster(&mut roster, rng);
    }

    let mut rooms = allocate(&roster, &capacities);
    regroup_all(&mut rooms, &class_order);

    let shortfalls = find_shortfalls(&rooms);
    for shortfall in &shortfalls {
        warn!("{}", shortfall);
    }

    let table = render_table(&class_order, &rooms);
    info!("Redistribution finished in {:.2?}", start_time.elapsed());

    RedistributeOutput {
        rooms,
        shortfalls,
        table,
    }
}

/// Parses the raw table and redistributes it, seeding the shuffle from the input.
pub fn solve_table(input: &RedistributeInput) -> Result<RedistributeOutput> {
    let roster = parse_roster(&input.table)?;
    let output = if input.shuffle {
        trace!("Using shuffle seed {}.", input.seed);
        let mut rng = ChaCha8Rng::seed_from_u64(input.seed);
        solve(roster, Some(&mut rng))
    } else {
        solve::<ChaCha8Rng>(roster, None)
    };
    Ok(output)
}

fn find_shortfalls(rooms: &[RoomAssignment]) -> Vec<Shortfall> {
    rooms
        .iter()
        .filter(|room| room.placements.len() < room.capacity)
        .map(|room| Shortfall {
            room: room.name.clone(),
            capacity: room.capacity,
            assigned: room.placements.len(),
        })
        .collect()
}
