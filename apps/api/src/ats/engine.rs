#![allow(dead_code)]

//! ATS scoring engine: evaluates a CV snapshot into tips and a 0–100 score.
//!
//! Pure and total: the CV is only read, absent data is an expected state, and
//! the same input always yields the same report. The score is computed from
//! its own penalty table rather than from the emitted tips.

use serde::{Deserialize, Serialize};

use crate::ats::rules::{
    CvSection, TipCategory, TipId, EXPERIENCE_COUNT_TARGET, HARD_SKILL_TARGET,
};
use crate::models::cv::{is_filled, CvData};

/// A single piece of feedback about the CV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub id: TipId,
    pub category: TipCategory,
    pub message_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_section: Option<CvSection>,
}

impl From<TipId> for Tip {
    fn from(id: TipId) -> Self {
        Tip {
            id,
            category: id.category(),
            message_key: id.message_key().to_string(),
            target_section: id.target_section(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsReport {
    pub tips: Vec<Tip>,
    pub score: u8,
}

// Penalties applied by `compute_score`.
const PENALTY_NO_NAME: i32 = 20;
const PENALTY_NO_EMAIL: i32 = 20;
const PENALTY_NO_PHONE: i32 = 10;
const PENALTY_NO_PHOTO: i32 = 5;
const PENALTY_NO_LOCATION: i32 = 5;
const PENALTY_NO_EXPERIENCE: i32 = 15;
const PENALTY_EMPTY_DUTIES: i32 = 10;
const PENALTY_NO_EDUCATION: i32 = 10;
const PENALTY_FEW_SKILLS: i32 = 10;
const PENALTY_NO_SOFT_SKILLS: i32 = 5;
const PENALTY_NO_LANGUAGES: i32 = 5;
const PENALTY_NO_COURSES: i32 = 5;

/// Facts about the CV every rule is phrased in terms of.
struct Facts {
    has_name: bool,
    has_email: bool,
    has_phone: bool,
    has_photo: bool,
    has_location: bool,
    experience_count: usize,
    any_entry_without_duties: bool,
    any_entry_without_dates: bool,
    education_count: usize,
    hard_skill_count: usize,
    soft_skill_count: usize,
    language_count: usize,
    course_count: usize,
}

impl Facts {
    fn of(cv: &CvData) -> Self {
        let personal = &cv.personal;
        Facts {
            has_name: is_filled(&personal.name),
            has_email: is_filled(&personal.email),
            has_phone: is_filled(&personal.phone),
            has_photo: personal.photo.as_deref().is_some_and(is_filled),
            has_location: is_filled(&personal.location),
            experience_count: cv.experience.len(),
            any_entry_without_duties: cv.experience.iter().any(|e| e.filled_duties() == 0),
            any_entry_without_dates: cv.experience.iter().any(|e| !e.has_both_dates()),
            education_count: cv.education.len(),
            hard_skill_count: cv.skills.hard.len(),
            soft_skill_count: cv.skills.soft.len(),
            language_count: cv.languages.len(),
            course_count: cv.courses.len(),
        }
    }
}

/// Evaluates every rule against `cv`. Tips come out in rule-table order.
pub fn evaluate(cv: &CvData) -> AtsReport {
    let facts = Facts::of(cv);
    let tips = collect_tips(&facts).into_iter().map(Tip::from).collect();
    AtsReport {
        tips,
        score: score_from_facts(&facts),
    }
}

/// Completeness score in `0..=100`.
pub fn compute_score(cv: &CvData) -> u8 {
    score_from_facts(&Facts::of(cv))
}

fn collect_tips(f: &Facts) -> Vec<TipId> {
    let mut tips = Vec::new();
    let mut push_if = |cond: bool, id: TipId| {
        if cond {
            tips.push(id);
        }
    };

    // Personal
    push_if(!f.has_name, TipId::PersonalName);
    push_if(!f.has_email, TipId::PersonalEmail);
    push_if(!f.has_phone, TipId::PersonalPhone);
    push_if(!f.has_photo, TipId::PersonalPhoto);
    push_if(!f.has_location, TipId::PersonalLocation);
    push_if(
        f.has_name && f.has_email && f.has_phone,
        TipId::PersonalContactGood,
    );
    push_if(f.has_photo, TipId::PersonalPhotoGood);

    // Experience
    let has_experience = f.experience_count > 0;
    push_if(!has_experience, TipId::ExperienceMissing);
    push_if(
        has_experience && f.any_entry_without_duties,
        TipId::ExperienceDuties,
    );
    push_if(
        has_experience && !f.any_entry_without_duties,
        TipId::ExperienceDutiesGood,
    );
    push_if(f.any_entry_without_dates, TipId::ExperienceDates);
    push_if(
        f.experience_count >= EXPERIENCE_COUNT_TARGET,
        TipId::ExperienceCountGood,
    );

    // Remaining sections are all present/absent pairs.
    let pairs = [
        (f.education_count > 0, TipId::EducationMissing, TipId::EducationGood),
        (f.hard_skill_count >= HARD_SKILL_TARGET, TipId::SkillsFew, TipId::SkillsGood),
        (f.soft_skill_count > 0, TipId::SoftSkillsMissing, TipId::SoftSkillsGood),
        (f.language_count > 0, TipId::LanguagesMissing, TipId::LanguagesGood),
        (f.course_count > 0, TipId::CoursesMissing, TipId::CoursesGood),
    ];
    for (satisfied, missing, good) in pairs {
        push_if(!satisfied, missing);
        push_if(satisfied, good);
    }

    tips
}

fn score_from_facts(f: &Facts) -> u8 {
    let penalties = [
        (!f.has_name, PENALTY_NO_NAME),
        (!f.has_email, PENALTY_NO_EMAIL),
        (!f.has_phone, PENALTY_NO_PHONE),
        (!f.has_photo, PENALTY_NO_PHOTO),
        (!f.has_location, PENALTY_NO_LOCATION),
        (f.experience_count == 0, PENALTY_NO_EXPERIENCE),
        (
            f.experience_count > 0 && f.any_entry_without_duties,
            PENALTY_EMPTY_DUTIES,
        ),
        (f.education_count == 0, PENALTY_NO_EDUCATION),
        (f.hard_skill_count < HARD_SKILL_TARGET, PENALTY_FEW_SKILLS),
        (f.soft_skill_count == 0, PENALTY_NO_SOFT_SKILLS),
        (f.language_count == 0, PENALTY_NO_LANGUAGES),
        (f.course_count == 0, PENALTY_NO_COURSES),
    ];

    let deduction: i32 = penalties
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, penalty)| penalty)
        .sum();

    (100 - deduction).clamp(0, 100) as u8
}
