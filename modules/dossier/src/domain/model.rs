use chrono::NaiveDate;

/// A stored medical dossier entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dossier {
    pub id: i64,
    pub consultation_date: NaiveDate,
    /// Free-text consultation report.
    pub report: Option<String>,
    /// Cross-service reference to a patient; valid at the moment of write
    /// only.
    pub patient_id: i64,
}

/// Dossier fields minus identity, as supplied on creation.
#[derive(Debug, Clone)]
pub struct NewDossier {
    pub consultation_date: NaiveDate,
    pub report: Option<String>,
    pub patient_id: i64,
}

impl NewDossier {
    /// Attach a store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: i64) -> Dossier {
        Dossier {
            id,
            consultation_date: self.consultation_date,
            report: self.report,
            patient_id: self.patient_id,
        }
    }
}
