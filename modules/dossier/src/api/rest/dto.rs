use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::model::{Dossier, NewDossier};

/// REST representation of a dossier entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DossierDto {
    pub id: i64,
    pub consultation_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    pub patient_id: i64,
}

/// Body of `POST /api/v1/dossiers/new`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateDossierReq {
    pub consultation_date: NaiveDate,
    #[serde(default)]
    pub report: Option<String>,
    #[validate(range(min = 1, message = "patient id must be positive"))]
    pub patient_id: i64,
}

/// Body of `PUT /api/v1/dossiers/update`; carries the identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateDossierReq {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
    pub consultation_date: NaiveDate,
    #[serde(default)]
    pub report: Option<String>,
    #[validate(range(min = 1, message = "patient id must be positive"))]
    pub patient_id: i64,
}

impl From<Dossier> for DossierDto {
    fn from(d: Dossier) -> Self {
        Self {
            id: d.id,
            consultation_date: d.consultation_date,
            report: d.report,
            patient_id: d.patient_id,
        }
    }
}

impl From<CreateDossierReq> for NewDossier {
    fn from(req: CreateDossierReq) -> Self {
        Self {
            consultation_date: req.consultation_date,
            report: req.report,
            patient_id: req.patient_id,
        }
    }
}

impl From<UpdateDossierReq> for Dossier {
    fn from(req: UpdateDossierReq) -> Self {
        Self {
            id: req.id,
            consultation_date: req.consultation_date,
            report: req.report,
            patient_id: req.patient_id,
        }
    }
}
