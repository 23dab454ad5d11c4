use axum::http::StatusCode;
use clininet_errors::{ErrDef, MessageCatalog, Problem, ValidationViolation};

use crate::domain::error::DomainError;

const DOSSIER_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "dossier.notfound",
};
const PATIENT_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "patient.notfound",
};
const PATIENT_UPSTREAM: ErrDef = ErrDef {
    status: 502,
    title: "Bad Gateway",
    code: "patient.upstream",
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
            DOSSIER_NOT_FOUND.as_problem(catalog.render("dossier.notfound", &[&id.to_string()]))
        }
        DomainError::PatientNotFound { id } => {
            PATIENT_NOT_FOUND.as_problem(catalog.render("patient.notfound", &[&id.to_string()]))
        }
        DomainError::PatientUnavailable { reason } => {
            tracing::warn!(reason = %reason, "patient lookup failed");
            PATIENT_UPSTREAM.as_problem(catalog.render("patient.upstream", &[reason]))
        }
        DomainError::Storage { .. } => {
            tracing::error!(error = %e, "dossier storage failure");
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
