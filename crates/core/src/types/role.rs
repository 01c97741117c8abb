//! Access tiers for authenticated users.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known [`Role`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

/// The access tier assigned to an authenticated user.
///
/// The unauthenticated state is not a variant: it is modelled as
/// `Option<Role>::None` wherever a role may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// College placement office.
    College,
    /// Job seeker / exam taker.
    Candidate,
    /// Hiring company.
    Employer,
    /// Internal sales team.
    Sales,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::College,
        Self::Candidate,
        Self::Employer,
        Self::Sales,
    ];

    /// Returns the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::College => "college",
            Self::Candidate => "candidate",
            Self::Employer => "employer",
            Self::Sales => "sales",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "college" => Ok(Self::College),
            "candidate" => Ok(Self::Candidate),
            "employer" => Ok(Self::Employer),
            "sales" => Ok(Self::Sales),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Employer".parse::<Role>().unwrap(), Role::Employer);
        assert_eq!(" SALES ".parse::<Role>().unwrap(), Role::Sales);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "recruiter".parse::<Role>().unwrap_err();
        assert_eq!(err, RoleParseError("recruiter".to_string()));
        assert_eq!(err.to_string(), "unknown role: recruiter");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Role::College).unwrap(), "\"college\"");
        let role: Role = serde_json::from_str("\"candidate\"").unwrap();
        assert_eq!(role, Role::Candidate);
    }
}
