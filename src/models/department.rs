use serde::Serialize;

/// The four departments an overtime entry can be filed under.
/// Each department owns exactly one hour column in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Department {
    Scheduling, // Scheduling_OT
    Occ,        // OCC_OT
    Training,   // Training_OT
    Operations, // OPS_OT
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Scheduling,
        Department::Occ,
        Department::Training,
        Department::Operations,
    ];

    /// Human-readable label, as shown in tables and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Scheduling => "Scheduling",
            Department::Occ => "OCC",
            Department::Training => "Training",
            Department::Operations => "Operations",
        }
    }

    /// Column name owned by this department in the data file.
    pub fn column(&self) -> &'static str {
        match self {
            Department::Scheduling => "Scheduling_OT",
            Department::Occ => "OCC_OT",
            Department::Training => "Training_OT",
            Department::Operations => "OPS_OT",
        }
    }

    /// Helper: parse a CLI code (case-insensitive, short forms allowed).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "scheduling" | "sched" | "s" => Some(Department::Scheduling),
            "occ" | "c" => Some(Department::Occ),
            "training" | "t" => Some(Department::Training),
            "operations" | "ops" | "o" => Some(Department::Operations),
            _ => None,
        }
    }
}
