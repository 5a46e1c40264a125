use seeshu_core::models::assessment::RiskLevel;
use seeshu_core::models::doctor::DoctorStatus;
use seeshu_core::models::facility::FacilityKind;
use seeshu_registry::error::RegistryError;
use seeshu_registry::{babies, doctors, facilities, training};

#[test]
fn demo_baby_is_resolvable_by_tag() {
    let baby = babies::get_baby("BABY001").unwrap();

    assert_eq!(baby.name, "Aarav Kumar");
    assert_eq!(baby.assessments.len(), 3);
    assert_eq!(baby.assessments[0].risk_level, RiskLevel::High);
    assert_eq!(baby.vaccinations.len(), 5);
    assert_eq!(baby.consultations.len(), 1);
}

#[test]
fn unknown_tag_is_not_found() {
    let result = babies::get_baby("BABY999");
    assert!(matches!(result, Err(RegistryError::NotFound { .. })));
}

#[test]
fn scan_resolves_to_the_demo_tag() {
    let scanned = babies::scan_baby();
    assert_eq!(scanned.id, "BABY001");
}

#[test]
fn doctor_panel_has_the_three_consultants() {
    let doctors = doctors::all_doctors();

    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[0].name, "Dr. Priya Sharma");
    assert_eq!(doctors[2].status, DoctorStatus::Busy);
}

#[test]
fn facilities_are_listed_nearest_first() {
    let facilities = facilities::all_facilities();

    assert_eq!(facilities.len(), 3);
    assert_eq!(facilities[0].kind, FacilityKind::Phc);
    assert!(
        facilities
            .windows(2)
            .all(|pair| pair[0].distance_km <= pair[1].distance_km),
    );
}

#[test]
fn training_modules_resolve_by_id() {
    let modules = training::all_modules();
    assert_eq!(modules.len(), 7);

    let quiz = training::get_module("7").unwrap();
    assert!(quiz.locked);
    assert_eq!(quiz.badge.as_deref(), Some("Certified ASHA"));

    assert!(matches!(
        training::get_module("99"),
        Err(RegistryError::NotFound { .. }),
    ));
}
