use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::model::{Medecin, NewMedecin};

/// REST representation of a practitioner record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MedecinDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub office_address: String,
}

/// Body of `POST /api/v1/medecins/new`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateMedecinReq {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "specialty is required"))]
    pub specialty: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "office address is required"))]
    pub office_address: String,
}

/// Body of `PUT /api/v1/medecins/update`; carries the identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateMedecinReq {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "specialty is required"))]
    pub specialty: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "office address is required"))]
    pub office_address: String,
}

impl From<Medecin> for MedecinDto {
    fn from(m: Medecin) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            specialty: m.specialty,
            phone: m.phone,
            email: m.email,
            office_address: m.office_address,
        }
    }
}

impl From<CreateMedecinReq> for NewMedecin {
    fn from(req: CreateMedecinReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            specialty: req.specialty,
            phone: req.phone,
            email: req.email,
            office_address: req.office_address,
        }
    }
}

impl From<UpdateMedecinReq> for Medecin {
    fn from(req: UpdateMedecinReq) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            specialty: req.specialty,
            phone: req.phone,
            email: req.email,
            office_address: req.office_address,
        }
    }
}
