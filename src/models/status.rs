use serde::{Deserialize, Serialize};

/// Raw attendance code as collected in the field, one per (worker, day).
/// These are observations, not ground truth: the reconciler may override
/// them where they contradict the canonical spell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawStatus {
    Present,
    Absent,
    SickLeave,
    CasualLeave,
    EarnedLeave,
    Weekend,
    Holiday,
    /// The register marks the worker as having left the organization.
    Left,
    Missing,
}

impl RawStatus {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P" => Some(Self::Present),
            "A" => Some(Self::Absent),
            "SL" => Some(Self::SickLeave),
            "CL" => Some(Self::CasualLeave),
            "EL" => Some(Self::EarnedLeave),
            "W" => Some(Self::Weekend),
            "H" => Some(Self::Holiday),
            "L" => Some(Self::Left),
            "" | "NA" => Some(Self::Missing),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Present => "P",
            Self::Absent => "A",
            Self::SickLeave => "SL",
            Self::CasualLeave => "CL",
            Self::EarnedLeave => "EL",
            Self::Weekend => "W",
            Self::Holiday => "H",
            Self::Left => "L",
            Self::Missing => "",
        }
    }
}

/// Authoritative per-day status after reconciliation against the spell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    Present,
    Absent,
    SickLeave,
    CasualLeave,
    EarnedLeave,
    Weekend,
    Holiday,
    NotEmployed,
    Unknown,
}

impl DayStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Present => "P",
            Self::Absent => "A",
            Self::SickLeave => "SL",
            Self::CasualLeave => "CL",
            Self::EarnedLeave => "EL",
            Self::Weekend => "W",
            Self::Holiday => "H",
            Self::NotEmployed => "NE",
            Self::Unknown => "U",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P" => Some(Self::Present),
            "A" => Some(Self::Absent),
            "SL" => Some(Self::SickLeave),
            "CL" => Some(Self::CasualLeave),
            "EL" => Some(Self::EarnedLeave),
            "W" => Some(Self::Weekend),
            "H" => Some(Self::Holiday),
            "NE" => Some(Self::NotEmployed),
            "U" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Fine-grained status for a day the sweep has confirmed employed.
    /// A Left code inside an active spell is a contradiction and is
    /// corrected to Present; a missing code stays Unknown so an unobserved
    /// attendance is never fabricated (the employment flag alone says the
    /// worker was on the rolls).
    pub fn from_raw_employed(raw: RawStatus) -> Self {
        match raw {
            RawStatus::Present | RawStatus::Left => Self::Present,
            RawStatus::Missing => Self::Unknown,
            RawStatus::Absent => Self::Absent,
            RawStatus::SickLeave => Self::SickLeave,
            RawStatus::CasualLeave => Self::CasualLeave,
            RawStatus::EarnedLeave => Self::EarnedLeave,
            RawStatus::Weekend => Self::Weekend,
            RawStatus::Holiday => Self::Holiday,
        }
    }
}
