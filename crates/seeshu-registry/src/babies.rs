use std::sync::LazyLock;

use jiff::civil::date;

use seeshu_core::models::assessment::RiskLevel;
use seeshu_core::models::baby::{
    AssessmentHistoryEntry, BabyProfile, ConsultationRecord, GuardianContact, VaccinationRecord,
    VaccinationStatus,
};

use crate::error::RegistryError;

static PROFILES: LazyLock<Vec<BabyProfile>> = LazyLock::new(|| {
    vec![BabyProfile {
        id: "BABY001".to_string(),
        name: "Aarav Kumar".to_string(),
        age_days: 45,
        weight_kg: 3.2,
        height_cm: 52.0,
        blood_group: "O+".to_string(),
        birth_date: date(2024, 1, 1),
        address: "Village: Ramgarh, Block: Alwar, District: Alwar, Rajasthan".to_string(),
        guardian: GuardianContact {
            name: "Priya Kumar".to_string(),
            relationship: "Mother".to_string(),
            phone: "+91 9876543210".to_string(),
        },
        assessments: vec![
            AssessmentHistoryEntry {
                id: "ASS001".to_string(),
                date: date(2024, 1, 15),
                symptoms: vec![
                    "Cough".to_string(),
                    "Fever".to_string(),
                    "Difficulty breathing".to_string(),
                    "Chest indrawing".to_string(),
                ],
                risk_level: RiskLevel::High,
                notes: "Severe pneumonia symptoms detected. Immediate hospitalization required."
                    .to_string(),
                assessed_by: "Dr. Rajesh Kumar".to_string(),
                facility: "District Hospital, Alwar".to_string(),
                treatment: Some("IV antibiotics, oxygen therapy".to_string()),
                follow_up_date: Some(date(2024, 1, 18)),
            },
            AssessmentHistoryEntry {
                id: "ASS002".to_string(),
                date: date(2024, 1, 10),
                symptoms: vec!["Mild cough".to_string(), "Slight fever".to_string()],
                risk_level: RiskLevel::Low,
                notes: "Mild respiratory symptoms. Monitor for worsening.".to_string(),
                assessed_by: "ASHA Worker - Sunita Devi".to_string(),
                facility: "Primary Health Centre, Ramgarh".to_string(),
                treatment: None,
                follow_up_date: None,
            },
            AssessmentHistoryEntry {
                id: "ASS003".to_string(),
                date: date(2024, 1, 5),
                symptoms: vec![
                    "Normal breathing".to_string(),
                    "Good feeding".to_string(),
                ],
                risk_level: RiskLevel::Low,
                notes: "Healthy newborn assessment. All parameters normal.".to_string(),
                assessed_by: "Dr. Meena Sharma".to_string(),
                facility: "Community Health Centre, Alwar".to_string(),
                treatment: None,
                follow_up_date: None,
            },
        ],
        vaccinations: vec![
            VaccinationRecord {
                id: "VAC001".to_string(),
                name: "BCG".to_string(),
                date: date(2024, 1, 5),
                status: VaccinationStatus::Completed,
                batch_number: Some("BCG-2024-001".to_string()),
                administered_by: Some("Dr. Meena Sharma".to_string()),
            },
            VaccinationRecord {
                id: "VAC002".to_string(),
                name: "OPV-0".to_string(),
                date: date(2024, 1, 5),
                status: VaccinationStatus::Completed,
                batch_number: Some("OPV-2024-001".to_string()),
                administered_by: Some("Dr. Meena Sharma".to_string()),
            },
            VaccinationRecord {
                id: "VAC003".to_string(),
                name: "Hepatitis B".to_string(),
                date: date(2024, 1, 5),
                status: VaccinationStatus::Completed,
                batch_number: Some("HepB-2024-001".to_string()),
                administered_by: Some("Dr. Meena Sharma".to_string()),
            },
            VaccinationRecord {
                id: "VAC004".to_string(),
                name: "DPT-1".to_string(),
                date: date(2024, 2, 15),
                status: VaccinationStatus::Upcoming,
                batch_number: None,
                administered_by: None,
            },
            VaccinationRecord {
                id: "VAC005".to_string(),
                name: "OPV-1".to_string(),
                date: date(2024, 2, 15),
                status: VaccinationStatus::Upcoming,
                batch_number: None,
                administered_by: None,
            },
        ],
        consultations: vec![ConsultationRecord {
            id: "CON001".to_string(),
            date: date(2024, 1, 15),
            doctor_name: "Dr. Rajesh Kumar".to_string(),
            specialization: "Pediatrician".to_string(),
            hospital: "District Hospital, Alwar".to_string(),
            diagnosis: "Severe Pneumonia".to_string(),
            prescription: "Amoxicillin 125mg twice daily for 5 days, Paracetamol 60mg as needed"
                .to_string(),
            notes: "Patient admitted with severe respiratory distress. Chest X-ray shows \
                    bilateral infiltrates. Started on IV antibiotics and oxygen therapy. \
                    Monitor oxygen saturation closely."
                .to_string(),
            follow_up_date: Some(date(2024, 1, 18)),
        }],
    }]
});

/// Look up a baby record by its tag id.
pub fn get_baby(id: &str) -> Result<BabyProfile, RegistryError> {
    PROFILES
        .iter()
        .find(|b| b.id == id)
        .cloned()
        .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
}

/// The simulated QR/NFC scan. The scanner stub always resolves to the demo
/// tag.
pub fn scan_baby() -> BabyProfile {
    PROFILES[0].clone()
}
