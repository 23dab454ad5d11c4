use chrono::NaiveDateTime;

/// A stored appointment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rdv {
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
    /// Free-text appointment motive.
    pub reason: Option<String>,
    pub patient_id: i64,
    pub medecin_id: i64,
}

/// Rdv fields minus identity, as supplied on creation.
#[derive(Debug, Clone)]
pub struct NewRdv {
    pub scheduled_at: NaiveDateTime,
    pub reason: Option<String>,
    pub patient_id: i64,
    pub medecin_id: i64,
}

impl NewRdv {
    /// Attach a store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: i64) -> Rdv {
        Rdv {
            id,
            scheduled_at: self.scheduled_at,
            reason: self.reason,
            patient_id: self.patient_id,
            medecin_id: self.medecin_id,
        }
    }
}
