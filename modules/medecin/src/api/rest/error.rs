use axum::http::StatusCode;
use clininet_errors::{ErrDef, MessageCatalog, Problem, ValidationViolation};

use crate::domain::error::DomainError;

const MEDECIN_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Not Found",
    code: "medecin.notfound",
};
const EMAIL_EXISTS: ErrDef = ErrDef {
    status: 409,
    title: "Conflict",
    code: "email.exists",
};
const PHONE_EXISTS: ErrDef = ErrDef {
    status: 409,
    title: "Conflict",
    code: "telephone.exists",
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
            MEDECIN_NOT_FOUND.as_problem(catalog.render("medecin.notfound", &[&id.to_string()]))
        }
        DomainError::EmailExists { email } => {
            EMAIL_EXISTS.as_problem(catalog.render("email.exists", &[email]))
        }
        DomainError::PhoneExists { phone } => {
            PHONE_EXISTS.as_problem(catalog.render("telephone.exists", &[phone]))
        }
        DomainError::Storage { .. } => {
            tracing::error!(error = %e, "medecin storage failure");
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
