use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// Type aliases for clarity
pub type ClassName = String;
pub type StudentName = String;
pub type RoomName = String;

pub const DEFAULT_SEED: u64 = 42;

/// One original class: its name and its students in input order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassRoster {
    pub name: ClassName,
    pub students: Vec<StudentName>,
}

/// All classes in their original header order.
///
/// The position of a class in `classes` is its place in the class order, which drives
/// both the round-robin sweep and the regrouping inside each room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Roster {
    pub classes: Vec<ClassRoster>,
}

impl Roster {
    pub fn class_order(&self) -> Vec<ClassName> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    pub fn total_students(&self) -> usize {
        self.classes.iter().map(|c| c.students.len()).sum()
    }
}

/// Room name -> number of seats, fixed from the roster before allocation.
pub type RoomCapacities = HashMap<RoomName, usize>;

/// A student seated in a room, remembering the class they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub student: StudentName,
    pub origin_class: ClassName,
}

impl Placement {
    pub fn new(student: impl Into<StudentName>, origin_class: impl Into<ClassName>) -> Self {
        Self {
            student: student.into(),
            origin_class: origin_class.into(),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.student, self.origin_class)
    }
}

/// The students seated in one exam room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssignment {
    pub name: RoomName,
    pub capacity: usize,
    pub placements: Vec<Placement>,
}

/// A room that ended up with fewer students than seats because the pool ran out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortfall {
    pub room: RoomName,
    pub capacity: usize,
    pub assigned: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} received {} of {} students",
            self.room, self.assigned, self.capacity
        )
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_shuffle() -> bool {
    true
}

/// The complete input for a redistribution: the raw table plus shuffle settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedistributeInput {
    pub table: Vec<Vec<String>>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

/// The final output of a redistribution.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedistributeOutput {
    pub rooms: Vec<RoomAssignment>,
    pub shortfalls: Vec<Shortfall>,
    pub table: Vec<Vec<String>>,
}
