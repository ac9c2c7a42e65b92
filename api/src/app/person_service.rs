//! Person service
//!
//! Validates incoming person data, computes the age against the clock and
//! produces the greeting or the spreadsheet export. Both endpoints go through
//! [`PersonService::evaluate`], so they accept and reject exactly the same
//! inputs.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{compute_age, Age, BirthDate, PersonRecord};
use crate::domain::ports::Clock;
use crate::error::{AppError, DomainError};
use crate::render::{render_greeting, render_spreadsheet};

/// Unvalidated person data as received from a client
#[derive(Debug, Clone, Default)]
pub struct PersonInput {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<String>,
}

/// A validated person together with the computed age
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgedPerson {
    pub person: PersonRecord,
    pub age: Age,
    /// Reference date the age was computed against
    pub today: NaiveDate,
}

/// Greeting produced for the age endpoint
#[derive(Debug, Clone)]
pub struct Greeting {
    pub aged: AgedPerson,
    pub message: String,
}

/// Workbook produced for the export endpoint
#[derive(Debug, Clone)]
pub struct SpreadsheetExport {
    pub aged: AgedPerson,
    pub bytes: Vec<u8>,
}

pub struct PersonService {
    clock: Arc<dyn Clock>,
    reject_future_birth_dates: bool,
}

impl PersonService {
    pub fn new(clock: Arc<dyn Clock>, reject_future_birth_dates: bool) -> Self {
        Self {
            clock,
            reject_future_birth_dates,
        }
    }

    /// Validate the input and compute the age against today's date.
    ///
    /// Fields are checked in order `nombre`, `apellido`, `fechaNacimiento`;
    /// the first problem found is reported.
    pub fn evaluate(&self, input: PersonInput) -> Result<AgedPerson, DomainError> {
        let name = input.name.ok_or(DomainError::MissingField("nombre"))?;
        let surname = input.surname.ok_or(DomainError::MissingField("apellido"))?;
        let birth_date: BirthDate = input
            .birth_date
            .ok_or(DomainError::MissingField("fechaNacimiento"))?
            .parse()?;

        let today = self.clock.today();
        if self.reject_future_birth_dates && birth_date.date() > today {
            return Err(DomainError::FutureBirthDate {
                birth: birth_date.date(),
                today,
            });
        }

        let age = compute_age(birth_date.date(), today);

        Ok(AgedPerson {
            person: PersonRecord {
                name,
                surname,
                birth_date,
            },
            age,
            today,
        })
    }

    /// Build the greeting message for the age endpoint
    pub fn greet(&self, input: PersonInput) -> Result<Greeting, DomainError> {
        let aged = self.evaluate(input)?;
        let message = render_greeting(&aged.person.name, &aged.person.surname, aged.age);

        tracing::debug!(
            birth_date = %aged.person.birth_date,
            today = %aged.today,
            age = %aged.age,
            "Computed age"
        );

        Ok(Greeting { aged, message })
    }

    /// Build the spreadsheet workbook for the export endpoint
    pub fn export(&self, input: PersonInput) -> Result<SpreadsheetExport, AppError> {
        let aged = self.evaluate(input)?;
        let bytes = render_spreadsheet(&aged.person.name, &aged.person.surname, aged.age)?;

        tracing::debug!(
            birth_date = %aged.person.birth_date,
            today = %aged.today,
            age = %aged.age,
            size = bytes.len(),
            "Rendered spreadsheet"
        );

        Ok(SpreadsheetExport { aged, bytes })
    }
}
