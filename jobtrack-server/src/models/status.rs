//! Application status - closed set of lifecycle labels
//!
//! The stored column is open text; the closed set is enforced here,
//! at the validation boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    /// Every accepted status, in lifecycle order.
    pub const ALL: [ApplicationStatus; 4] = [
        Self::Applied,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
    ];

    /// Parse a wire/stored value. Matching is exact (case-sensitive).
    ///
    /// # Example
    /// ```
    /// use jobtrack_server::models::ApplicationStatus;
    ///
    /// assert_eq!(ApplicationStatus::parse("Offer").unwrap(), ApplicationStatus::Offer);
    /// assert!(ApplicationStatus::parse("offer").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidVariant {
                field: "status",
                value: s.to_owned(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
