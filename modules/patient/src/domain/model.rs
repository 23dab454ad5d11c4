use chrono::NaiveDate;

/// A stored patient record. Identity is assigned by the store on creation
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Patient fields minus identity, as supplied on creation.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl NewPatient {
    /// Attach a store-assigned identity.
    #[must_use]
    pub fn with_id(self, id: i64) -> Patient {
        Patient {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            sex: self.sex,
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}
