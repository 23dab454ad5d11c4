use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::model::{NewPatient, Patient};

/// REST representation of a patient record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Body of `POST /api/v1/patients/new`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePatientReq {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[validate(length(min = 1, message = "sex is required"))]
    pub sex: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

/// Body of `PUT /api/v1/patients/update`; carries the identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePatientReq {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[validate(length(min = 1, message = "sex is required"))]
    pub sex: String,
    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

impl From<Patient> for PatientDto {
    fn from(p: Patient) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            birth_date: p.birth_date,
            sex: p.sex,
            address: p.address,
            phone: p.phone,
            email: p.email,
        }
    }
}

impl From<CreatePatientReq> for NewPatient {
    fn from(req: CreatePatientReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            birth_date: req.birth_date,
            sex: req.sex,
            address: req.address,
            phone: req.phone,
            email: req.email,
        }
    }
}

impl From<UpdatePatientReq> for Patient {
    fn from(req: UpdatePatientReq) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            birth_date: req.birth_date,
            sex: req.sex,
            address: req.address,
            phone: req.phone,
            email: req.email,
        }
    }
}
