//! Static error definitions and the localized message catalog.

use crate::problem::Problem;
use http::StatusCode;

/// Static error definition from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
}

impl ErrDef {
    /// Convert this error definition into a Problem with the given detail.
    #[inline]
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Problem::new(status, self.title, detail.into()).with_code(self.code)
    }
}

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

/// Message catalog keyed by error code, with positional `{0}`/`{1}`
/// interpolation. Unknown codes fall back to the code itself so a missing
/// entry never panics a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render the message for `code`, interpolating `args` positionally.
    #[must_use]
    pub fn render(&self, code: &str, args: &[&str]) -> String {
        let template = template(self.locale, code)
            .or_else(|| template(Locale::En, code))
            .unwrap_or(code);
        interpolate(template, args)
    }
}

fn template(locale: Locale, code: &str) -> Option<&'static str> {
    match locale {
        Locale::Fr => match code {
            "patient.notfound" => Some("Patient avec l'id {0} introuvable"),
            "medecin.notfound" => Some("Medecin avec l'id {0} introuvable"),
            "dossier.notfound" => Some("Dossier avec l'id {0} introuvable"),
            "rdv.notfound" => Some("Rendez-vous avec l'id {0} introuvable"),
            "email.exists" => Some("Un enregistrement avec l'email {0} existe deja"),
            "telephone.exists" => Some("Un enregistrement avec le telephone {0} existe deja"),
            "patient.upstream" => Some("Le service patient est indisponible: {0}"),
            "medecin.upstream" => Some("Le service medecin est indisponible: {0}"),
            "request.invalid" => Some("La requete est invalide"),
            "storage.failure" => Some("Erreur interne de stockage"),
            _ => None,
        },
        Locale::En => match code {
            "patient.notfound" => Some("Patient with id {0} not found"),
            "medecin.notfound" => Some("Medecin with id {0} not found"),
            "dossier.notfound" => Some("Dossier with id {0} not found"),
            "rdv.notfound" => Some("Rdv with id {0} not found"),
            "email.exists" => Some("A record with email {0} already exists"),
            "telephone.exists" => Some("A record with phone {0} already exists"),
            "patient.upstream" => Some("Patient service is unavailable: {0}"),
            "medecin.upstream" => Some("Medecin service is unavailable: {0}"),
            "request.invalid" => Some("The request is invalid"),
            "storage.failure" => Some("Internal storage error"),
            _ => None,
        },
    }
}

fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = template.to_owned();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_def_to_problem_works() {
        let def = ErrDef {
            status: 404,
            title: "Not Found",
            code: "patient.notfound",
        };

        let problem = def.as_problem("Patient with id 7 not found");
        assert_eq!(problem.status, StatusCode::NOT_FOUND);
        assert_eq!(problem.title, "Not Found");
        assert_eq!(problem.code, "patient.notfound");
    }

    #[test]
    fn renders_localized_template() {
        let fr = MessageCatalog::new(Locale::Fr);
        assert_eq!(
            fr.render("patient.notfound", &["42"]),
            "Patient avec l'id 42 introuvable"
        );

        let en = MessageCatalog::new(Locale::En);
        assert_eq!(
            en.render("email.exists", &["a@b.sn"]),
            "A record with email a@b.sn already exists"
        );
    }

    #[test]
    fn unknown_code_falls_back_to_code() {
        let catalog = MessageCatalog::new(Locale::En);
        assert_eq!(catalog.render("nope.nope", &[]), "nope.nope");
    }
}
