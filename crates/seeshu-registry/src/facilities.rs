use std::sync::LazyLock;

use seeshu_core::models::facility::{Facility, FacilityAvailability, FacilityKind};

static FACILITIES: LazyLock<Vec<Facility>> = LazyLock::new(|| {
    vec![
        Facility {
            id: "1".to_string(),
            name: "District Hospital".to_string(),
            kind: FacilityKind::Hospital,
            distance_km: 5.2,
            phone: "+91-9876543210".to_string(),
            address: "Main Road, District Center".to_string(),
            services: vec![
                "NICU".to_string(),
                "Pediatric ICU".to_string(),
                "Emergency".to_string(),
                "Oxygen Support".to_string(),
            ],
            availability: FacilityAvailability::Available,
        },
        Facility {
            id: "2".to_string(),
            name: "Primary Health Centre".to_string(),
            kind: FacilityKind::Phc,
            distance_km: 2.1,
            phone: "+91 92XXXXXX12".to_string(),
            address: "Village Center, Block Headquarters".to_string(),
            services: vec![
                "Basic Care".to_string(),
                "Referral".to_string(),
                "First Aid".to_string(),
            ],
            availability: FacilityAvailability::Available,
        },
        Facility {
            id: "3".to_string(),
            name: "Community Health Centre".to_string(),
            kind: FacilityKind::Chc,
            distance_km: 8.7,
            phone: "+91-9876543212".to_string(),
            address: "Sub-District Hospital Complex".to_string(),
            services: vec![
                "Specialist Care".to_string(),
                "Laboratory".to_string(),
                "Radiology".to_string(),
            ],
            availability: FacilityAvailability::Limited,
        },
    ]
});

/// Facilities listed on the emergency page, nearest first.
pub fn all_facilities() -> Vec<Facility> {
    let mut facilities = FACILITIES.clone();
    facilities.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    facilities
}
