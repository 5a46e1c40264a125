use std::sync::LazyLock;

use seeshu_core::models::doctor::{Doctor, DoctorStatus};

static DOCTORS: LazyLock<Vec<Doctor>> = LazyLock::new(|| {
    vec![
        Doctor {
            id: "1".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            specialization: "Pediatrician".to_string(),
            hospital: "AIIMS Delhi".to_string(),
            photo_url: "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg?auto=compress&cs=tinysrgb&w=150".to_string(),
            status: DoctorStatus::Available,
            rating: 4.8,
        },
        Doctor {
            id: "2".to_string(),
            name: "Dr. Rajesh Kumar".to_string(),
            specialization: "Neonatologist".to_string(),
            hospital: "Safdarjung Hospital".to_string(),
            photo_url: "https://images.pexels.com/photos/6749773/pexels-photo-6749773.jpeg?auto=compress&cs=tinysrgb&w=150".to_string(),
            status: DoctorStatus::Available,
            rating: 4.9,
        },
        Doctor {
            id: "3".to_string(),
            name: "Dr. Anita Verma".to_string(),
            specialization: "Pediatric Pulmonologist".to_string(),
            hospital: "Apollo Hospital".to_string(),
            photo_url: "https://images.pexels.com/photos/5327656/pexels-photo-5327656.jpeg?auto=compress&cs=tinysrgb&w=150".to_string(),
            status: DoctorStatus::Busy,
            rating: 4.7,
        },
    ]
});

pub fn all_doctors() -> Vec<Doctor> {
    DOCTORS.clone()
}
