//! Application record and its validated field types

use chrono::NaiveDate;
use sqlx::FromRow;

use super::{ApplicationStatus, ValidationError};

/// Maximum length for company names and position titles
const MAX_TEXT_LEN: usize = 256;

fn required_text(field: &'static str, s: &str) -> Result<String, ValidationError> {
    if s.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if s.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(s.to_owned())
}

/// Validated company name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyName(String);

impl CompanyName {
    /// Create a company name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 256 characters
    ///
    /// The text is kept exactly as supplied.
    ///
    /// # Example
    /// ```
    /// use jobtrack_server::models::CompanyName;
    ///
    /// assert!(CompanyName::new("Acme").is_ok());
    /// assert!(CompanyName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("company_name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated position title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(String);

impl Position {
    /// Create a position title. Same rules as [`CompanyName::new`].
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        required_text("position", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Application record as persisted
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Application {
    pub id: i32,
    pub company_name: String,
    pub position: String,
    /// Open text in storage; new values are always one of [`ApplicationStatus`].
    pub status: String,
    pub applied_date: NaiveDate,
    pub notes: Option<String>,
}

/// Fully validated create payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company_name: CompanyName,
    pub position: Position,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    pub notes: Option<String>,
}

impl NewApplication {
    /// Materialize the record the store would hold under `id`.
    pub fn into_record(self, id: i32) -> Application {
        Application {
            id,
            company_name: self.company_name.into_string(),
            position: self.position.into_string(),
            status: self.status.as_str().to_owned(),
            applied_date: self.applied_date,
            notes: self.notes,
        }
    }
}

/// Validated partial update.
///
/// `None` leaves a field untouched. `notes` carries a second level:
/// `Some(None)` clears the stored notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationPatch {
    pub company_name: Option<CompanyName>,
    pub position: Option<Position>,
    pub status: Option<ApplicationStatus>,
    pub applied_date: Option<NaiveDate>,
    pub notes: Option<Option<String>>,
}

impl ApplicationPatch {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.position.is_none()
            && self.status.is_none()
            && self.applied_date.is_none()
            && self.notes.is_none()
    }

    /// Merge the supplied fields onto `record`. `id` is never touched.
    pub fn apply(self, record: &mut Application) {
        if let Some(company_name) = self.company_name {
            record.company_name = company_name.into_string();
        }
        if let Some(position) = self.position {
            record.position = position.into_string();
        }
        if let Some(status) = self.status {
            record.status = status.as_str().to_owned();
        }
        if let Some(applied_date) = self.applied_date {
            record.applied_date = applied_date;
        }
        if let Some(notes) = self.notes {
            record.notes = notes;
        }
    }
}
