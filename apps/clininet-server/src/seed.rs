use chrono::NaiveDate;
use tracing::warn;

use clininet_medecin::domain::model::NewMedecin;
use clininet_medecin::domain::service::MedecinService;
use clininet_patient::domain::model::NewPatient;
use clininet_patient::domain::service::PatientService;

/// Load a small demo dataset into the patient store.
pub async fn seed_patients(service: &PatientService) {
    let rows = [
        (
            "Moussa",
            "Ka",
            (1985, 5, 15),
            "M",
            "123 Rue des Jardins, Dakar",
            "771234567",
            "moussa.ka@example.com",
        ),
        (
            "Amina",
            "Diop",
            (1990, 8, 22),
            "F",
            "456 Avenue Liberte, Thies",
            "776543219",
            "amina.diop@example.com",
        ),
        (
            "Ibrahima",
            "Ndiaye",
            (1978, 3, 10),
            "M",
            "789 Boulevard du Soleil, Saint-Louis",
            "781234567",
            "ibrahima.ndiaye@example.com",
        ),
        (
            "Fatou",
            "Fall",
            (1995, 11, 30),
            "F",
            "321 Rue de la Plage, Mbour",
            "775678912",
            "fatou.fall@example.com",
        ),
    ];

    for (first_name, last_name, (y, m, d), sex, address, phone, email) in rows {
        let Some(birth_date) = NaiveDate::from_ymd_opt(y, m, d) else {
            continue;
        };
        let new = NewPatient {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            birth_date,
            sex: sex.to_owned(),
            address: address.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
        };
        if let Err(e) = service.create(new).await {
            warn!(email, error = %e, "skipping patient seed row");
        }
    }
}

/// Load a small demo dataset into the medecin store.
pub async fn seed_medecins(service: &MedecinService) {
    let rows = [
        (
            "Fatima",
            "Sow",
            "Cardiologie",
            "781112233",
            "fatima.sow@hopital.sn",
            "Hopital Principal, Dakar",
        ),
        (
            "Modou",
            "Gueye",
            "Pediatrie",
            "772345678",
            "modou.gueye@hopital.sn",
            "Clinique du Cap, Dakar",
        ),
        (
            "Mariama",
            "Ba",
            "Dermatologie",
            "762345678",
            "mariama.ba@hopital.sn",
            "Centre Medical, Saint-Louis",
        ),
    ];

    for (first_name, last_name, specialty, phone, email, office_address) in rows {
        let new = NewMedecin {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            specialty: specialty.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            office_address: office_address.to_owned(),
        };
        if let Err(e) = service.create(new).await {
            warn!(email, error = %e, "skipping medecin seed row");
        }
    }
}
