//! Demo CV behind the "fill with demo data" action.
//!
//! Every call produces fresh ids so a demo loaded twice never shares entries.

use chrono::Utc;
use uuid::Uuid;

use crate::models::cv::{
    CvData, Education, Experience, ExportData, Language, PersonalData, Skill, Skills, TemplateId,
};

pub const EXPORT_VERSION: &str = "1.0";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_cv() -> CvData {
    CvData {
        personal: PersonalData {
            name: "Anna Kowalska".to_string(),
            email: "anna.kowalska@email.pl".to_string(),
            phone: "+48 123 456 789".to_string(),
            location: "Warszawa".to_string(),
            photo: None,
        },
        education: vec![
            Education {
                id: new_id(),
                school: "Uniwersytet Warszawski".to_string(),
                degree: "Informatyka, magister".to_string(),
                start_date: "2018".to_string(),
                end_date: "2023".to_string(),
                description: Some("Specjalizacja: Inżynieria oprogramowania".to_string()),
            },
            Education {
                id: new_id(),
                school: "XIV LO im. S. Staszica".to_string(),
                degree: "Profil matematyczno-fizyczny".to_string(),
                start_date: "2015".to_string(),
                end_date: "2018".to_string(),
                description: None,
            },
        ],
        experience: vec![
            Experience {
                id: new_id(),
                company: "Tech Solutions Sp. z o.o.".to_string(),
                position: "Frontend Developer".to_string(),
                start_date: "03.2023".to_string(),
                end_date: "obecnie".to_string(),
                duties: strings(&[
                    "Tworzenie aplikacji webowych w React i TypeScript",
                    "Współpraca z zespołem UX/UI",
                    "Code review i mentoring juniorów",
                ]),
            },
            Experience {
                id: new_id(),
                company: "StartUp ABC".to_string(),
                position: "Junior Developer".to_string(),
                start_date: "06.2021".to_string(),
                end_date: "02.2023".to_string(),
                duties: strings(&[
                    "Rozwój funkcjonalności e-commerce",
                    "Integracja z systemami płatności",
                    "Pisanie testów jednostkowych",
                ]),
            },
        ],
        skills: Skills {
            hard: [
                "React",
                "TypeScript",
                "JavaScript",
                "HTML/CSS",
                "Git",
                "REST API",
                "Node.js",
            ]
            .into_iter()
            .map(Skill::named)
            .collect(),
            soft: strings(&[
                "Komunikatywność",
                "Praca w zespole",
                "Rozwiązywanie problemów",
                "Kreatywność",
            ]),
        },
        courses: strings(&[
            "AWS Cloud Practitioner",
            "Scrum Master Certification",
            "Advanced React Patterns",
        ]),
        languages: [("Polski", "Native"), ("Angielski", "C1"), ("Niemiecki", "B1")]
            .into_iter()
            .map(|(name, level)| Language {
                id: new_id(),
                name: name.to_string(),
                level: level.to_string(),
            })
            .collect(),
    }
}

pub fn demo_export() -> ExportData {
    ExportData {
        version: EXPORT_VERSION.to_string(),
        exported_at: Utc::now().to_rfc3339(),
        cv: demo_cv(),
        cover_letter: None,
        selected_template: TemplateId::Modern,
        language: "pl".to_string(),
    }
}
