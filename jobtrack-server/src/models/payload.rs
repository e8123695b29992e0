//! Wire payloads for create/update requests
//!
//! Serde handles shape and types (missing keys, wrong JSON types, bad
//! dates). Domain rules are applied by the `TryFrom` conversions.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::{
    ApplicationPatch, ApplicationStatus, CompanyName, NewApplication, Position, ValidationError,
};

/// Three-state field for partial updates.
///
/// Use with `#[serde(default)]`: a missing key stays `Absent`, an explicit
/// JSON `null` becomes `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

impl<T> Patch<T> {
    /// Resolve a field that may not be cleared.
    fn required(self, field: &'static str) -> Result<Option<T>, ValidationError> {
        match self {
            Self::Absent => Ok(None),
            Self::Null => Err(ValidationError::Null { field }),
            Self::Value(value) => Ok(Some(value)),
        }
    }

    /// Resolve a nullable field: `Null` means "clear".
    fn nullable(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }
}

/// POST body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplicationRequest {
    pub company_name: String,
    pub position: String,
    pub status: String,
    pub applied_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<CreateApplicationRequest> for NewApplication {
    type Error = ValidationError;

    fn try_from(req: CreateApplicationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            company_name: CompanyName::new(&req.company_name)?,
            position: Position::new(&req.position)?,
            status: ApplicationStatus::parse(&req.status)?,
            applied_date: req.applied_date,
            notes: req.notes,
        })
    }
}

/// PUT body - any subset of the create fields
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateApplicationRequest {
    pub company_name: Patch<String>,
    pub position: Patch<String>,
    pub status: Patch<String>,
    pub applied_date: Patch<NaiveDate>,
    pub notes: Patch<String>,
}

impl TryFrom<UpdateApplicationRequest> for ApplicationPatch {
    type Error = ValidationError;

    fn try_from(req: UpdateApplicationRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            company_name: req
                .company_name
                .required("company_name")?
                .map(|s| CompanyName::new(&s))
                .transpose()?,
            position: req
                .position
                .required("position")?
                .map(|s| Position::new(&s))
                .transpose()?,
            status: req
                .status
                .required("status")?
                .map(|s| ApplicationStatus::parse(&s))
                .transpose()?,
            applied_date: req.applied_date.required("applied_date")?,
            notes: req.notes.nullable(),
        })
    }
}
