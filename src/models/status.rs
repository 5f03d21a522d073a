use serde::{Deserialize, Serialize};

/// Employee status at the time the entry was filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Training,
}

impl Status {
    /// Convert enum → persisted string
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::OnLeave => "On Leave",
            Status::Training => "Training",
        }
    }

    /// Helper: parse CLI input ("on-leave", "On Leave", "ACTIVE", ...)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").as_str() {
            "active" => Some(Status::Active),
            "on leave" | "onleave" | "leave" => Some(Status::OnLeave),
            "training" => Some(Status::Training),
            _ => None,
        }
    }
}
