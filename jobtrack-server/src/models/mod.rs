//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod status;
pub mod application;
pub mod payload;

pub use validation::ValidationError;
pub use status::ApplicationStatus;
pub use application::{Application, ApplicationPatch, CompanyName, NewApplication, Position};
pub use payload::{CreateApplicationRequest, Patch, UpdateApplicationRequest};
