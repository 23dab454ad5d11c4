use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::model::{NewRdv, Rdv};

/// REST representation of an appointment record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RdvDto {
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub patient_id: i64,
    pub medecin_id: i64,
}

/// Body of `POST /api/v1/rdvs/new`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRdvReq {
    pub scheduled_at: NaiveDateTime,
    #[serde(default)]
    pub reason: Option<String>,
    #[validate(range(min = 1, message = "patient id must be positive"))]
    pub patient_id: i64,
    #[validate(range(min = 1, message = "medecin id must be positive"))]
    pub medecin_id: i64,
}

/// Body of `PUT /api/v1/rdvs/update`; carries the identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRdvReq {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
    #[serde(default)]
    pub reason: Option<String>,
    #[validate(range(min = 1, message = "patient id must be positive"))]
    pub patient_id: i64,
    #[validate(range(min = 1, message = "medecin id must be positive"))]
    pub medecin_id: i64,
}

impl From<Rdv> for RdvDto {
    fn from(r: Rdv) -> Self {
        Self {
            id: r.id,
            scheduled_at: r.scheduled_at,
            reason: r.reason,
            patient_id: r.patient_id,
            medecin_id: r.medecin_id,
        }
    }
}

impl From<CreateRdvReq> for NewRdv {
    fn from(req: CreateRdvReq) -> Self {
        Self {
            scheduled_at: req.scheduled_at,
            reason: req.reason,
            patient_id: req.patient_id,
            medecin_id: req.medecin_id,
        }
    }
}

impl From<UpdateRdvReq> for Rdv {
    fn from(req: UpdateRdvReq) -> Self {
        Self {
            id: req.id,
            scheduled_at: req.scheduled_at,
            reason: req.reason,
            patient_id: req.patient_id,
            medecin_id: req.medecin_id,
        }
    }
}
