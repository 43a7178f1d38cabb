// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed, enumerated recurring services attendance is recorded against.
///
/// Service names form a closed set; any value outside it is a validation
/// failure at the boundary and never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    /// Sunday Morning Service.
    SundayMorning,
    /// Sunday Mid Service.
    SundayMid,
    /// Mid-Week Service.
    MidWeek,
    /// Lunch-Hour Service.
    LunchHour,
    /// Special Service.
    Special,
}

impl Service {
    /// All services, in display order.
    pub const ALL: [Self; 5] = [
        Self::SundayMorning,
        Self::SundayMid,
        Self::MidWeek,
        Self::LunchHour,
        Self::Special,
    ];

    /// Converts this service to its canonical display name.
    ///
    /// The display name is also the stored representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SundayMorning => "Sunday Morning Service",
            Self::SundayMid => "Sunday Mid Service",
            Self::MidWeek => "Mid-Week Service",
            Self::LunchHour => "Lunch-Hour Service",
            Self::Special => "Special Service",
        }
    }
}

impl FromStr for Service {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunday Morning Service" => Ok(Self::SundayMorning),
            "Sunday Mid Service" => Ok(Self::SundayMid),
            "Mid-Week Service" => Ok(Self::MidWeek),
            "Lunch-Hour Service" => Ok(Self::LunchHour),
            "Special Service" => Ok(Self::Special),
            _ => Err(DomainError::InvalidService(s.to_string())),
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender values recognised by the system.
///
/// Members may carry any of the three values; visitor registration accepts
/// only `Male` and `Female` (see `validate_visitor_gender`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Converts this gender to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
