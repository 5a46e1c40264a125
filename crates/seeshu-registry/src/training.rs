use std::sync::LazyLock;

use seeshu_core::models::training::{Difficulty, ModuleKind, TrainingModule};

use crate::error::RegistryError;

static MODULES: LazyLock<Vec<TrainingModule>> = LazyLock::new(|| {
    vec![
        TrainingModule {
            id: "1".to_string(),
            title: "Pneumonia: Causes, Symptoms, Diagnosis & Treatments".to_string(),
            description: "Comprehensive overview of pneumonia including causes, symptoms, \
                          diagnosis, and treatment options"
                .to_string(),
            duration_minutes: 12,
            difficulty: Difficulty::Beginner,
            kind: ModuleKind::Video,
            completed: true,
            locked: false,
            badge: Some("Foundation".to_string()),
            video_url: Some("https://www.youtube.com/embed/vp8FXgcunfE".to_string()),
            resources: vec![
                "Pneumonia Basics Guide.pdf".to_string(),
                "Symptom Checklist.pdf".to_string(),
                "Emergency Protocols.pdf".to_string(),
            ],
        },
        TrainingModule {
            id: "2".to_string(),
            title: "Pneumonia – Causes, Symptoms, Diagnosis, Treatment, Pathology".to_string(),
            description: "In-depth medical explanation of pneumonia pathology and clinical \
                          presentation"
                .to_string(),
            duration_minutes: 15,
            difficulty: Difficulty::Beginner,
            kind: ModuleKind::Video,
            completed: true,
            locked: false,
            badge: Some("Observer".to_string()),
            video_url: Some("https://www.youtube.com/embed/IAQp2Zuqevc".to_string()),
            resources: vec![
                "Symptom Recognition Guide.pdf".to_string(),
                "Visual Assessment Tools.pdf".to_string(),
                "Case Studies.pdf".to_string(),
            ],
        },
        TrainingModule {
            id: "3".to_string(),
            title: "Pneumonia: Everything You Need To Know".to_string(),
            description: "Complete guide covering all aspects of pneumonia for healthcare workers"
                .to_string(),
            duration_minutes: 18,
            difficulty: Difficulty::Intermediate,
            kind: ModuleKind::Video,
            completed: false,
            locked: false,
            badge: None,
            video_url: Some("https://www.youtube.com/embed/rVL-0KpoqP4".to_string()),
            resources: vec![
                "Assessment Protocol.pdf".to_string(),
                "AI Platform Guide.pdf".to_string(),
                "Practice Scenarios.pdf".to_string(),
            ],
        },
        TrainingModule {
            id: "4".to_string(),
            title: "Pneumonia Early Warning Signs to NEVER Ignore".to_string(),
            description: "Critical early warning signs and symptoms that require immediate \
                          attention"
                .to_string(),
            duration_minutes: 10,
            difficulty: Difficulty::Intermediate,
            kind: ModuleKind::Video,
            completed: false,
            locked: false,
            badge: None,
            video_url: Some("https://www.youtube.com/embed/SjsbYp1V3LI".to_string()),
            resources: vec![
                "Emergency Response Guide.pdf".to_string(),
                "Contact Directory.pdf".to_string(),
                "Transportation Protocols.pdf".to_string(),
            ],
        },
        TrainingModule {
            id: "5".to_string(),
            title: "Pneumonia | Overview".to_string(),
            description: "Medical overview of pneumonia for healthcare professionals".to_string(),
            duration_minutes: 8,
            difficulty: Difficulty::Advanced,
            kind: ModuleKind::Video,
            completed: false,
            locked: false,
            badge: Some("Life Saver".to_string()),
            video_url: Some("https://www.youtube.com/embed/lzyUVVOqyS0".to_string()),
            resources: vec![
                "CPR Manual.pdf".to_string(),
                "Practice Guidelines.pdf".to_string(),
                "Certification Requirements.pdf".to_string(),
            ],
        },
        TrainingModule {
            id: "6".to_string(),
            title: "Community Engagement".to_string(),
            description: "Building trust and educating families about pneumonia prevention"
                .to_string(),
            duration_minutes: 22,
            difficulty: Difficulty::Intermediate,
            kind: ModuleKind::Video,
            completed: false,
            locked: true,
            badge: None,
            video_url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string()),
            resources: vec![
                "Community Outreach Guide.pdf".to_string(),
                "Communication Strategies.pdf".to_string(),
                "Cultural Sensitivity.pdf".to_string(),
            ],
        },
        TrainingModule {
            id: "7".to_string(),
            title: "Knowledge Assessment".to_string(),
            description: "Test your understanding and earn your certification".to_string(),
            duration_minutes: 45,
            difficulty: Difficulty::Advanced,
            kind: ModuleKind::Quiz,
            completed: false,
            locked: true,
            badge: Some("Certified ASHA".to_string()),
            video_url: None,
            resources: vec![
                "Study Guide.pdf".to_string(),
                "Practice Tests.pdf".to_string(),
                "Certification Process.pdf".to_string(),
            ],
        },
    ]
});

pub fn all_modules() -> Vec<TrainingModule> {
    MODULES.clone()
}

pub fn get_module(id: &str) -> Result<TrainingModule, RegistryError> {
    MODULES
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
}
