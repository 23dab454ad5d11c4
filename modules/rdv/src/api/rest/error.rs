use axum::http::StatusCode;
use clininet_errors::{ErrDef, MessageCatalog, Problem, ValidationViolation};

use crate::domain::error::DomainError;

const RDV_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "rdv.notfound",
};
const PATIENT_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "patient.notfound",
};
const MEDECIN_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "medecin.notfound",
};
const PATIENT_UPSTREAM: ErrDef = ErrDef {
    status: 502,
    title: "Bad Gateway",
    code: "patient.upstream",
};
const MEDECIN_UPSTREAM: ErrDef = ErrDef {
    status: 502,
    title: "Bad Gateway",
    code: "medecin.upstream",
};
const STORAGE_FAILURE: ErrDef = ErrDef {
    status: 500,
    title: "Internal Server Error",
    code: "storage.failure",
};

/// Map a domain error to its Problem response.
pub fn domain_error_to_problem(
    e: &DomainError,
    catalog: &MessageCatalog,
    instance: &str,
) -> Problem {
    let problem = match e {
        DomainError::NotFound { id } => {
            RDV_NOT_FOUND.as_problem(catalog.render("rdv.notfound", &[&id.to_string()]))
        }
        DomainError::PatientNotFound { id } => {
            PATIENT_NOT_FOUND.as_problem(catalog.render("patient.notfound", &[&id.to_string()]))
        }
        DomainError::MedecinNotFound { id } => {
            MEDECIN_NOT_FOUND.as_problem(catalog.render("medecin.notfound", &[&id.to_string()]))
        }
        DomainError::UpstreamUnavailable { service, reason } => {
            tracing::warn!(service = %service, reason = %reason, "remote lookup failed");
            let def = if service == "medecin" {
                MEDECIN_UPSTREAM
            } else {
                PATIENT_UPSTREAM
            };
            def.as_problem(catalog.render(def.code, &[reason]))
        }
        DomainError::Storage { .. } => {
            tracing::error!(error = %e, "rdv storage failure");
            STORAGE_FAILURE.as_problem(catalog.render("storage.failure", &[]))
        }
    };
    problem.with_instance(instance)
}

/// Map `validator` violations to a 400 Problem with per-field messages.
pub fn validation_problem(
    errors: &validator::ValidationErrors,
    catalog: &MessageCatalog,
    instance: &str,
) -> Problem {
    let violations = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(|e| ValidationViolation {
                field: (*field).to_string(),
                message: e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string),
            })
        })
        .collect();

    Problem::new(
        StatusCode::BAD_REQUEST,
        "Bad Request",
        catalog.render("request.invalid", &[]),
    )
    .with_code("request.invalid")
    .with_instance(instance)
    .with_errors(violations)
}
