/// A stored practitioner record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medecin {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub office_address: String,
}

/// Medecin fields minus identity, as supplied on creation.
#[derive(Debug, Clone)]
pub struct NewMedecin {
    pub first_name: String,
    pub last_name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub office_address: String,
}

impl NewMedecin {
    /// Attach a store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: i64) -> Medecin {
        Medecin {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            specialty: self.specialty,
            phone: self.phone,
            email: self.email,
            office_address: self.office_address,
        }
    }
}
