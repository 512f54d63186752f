#![allow(dead_code)]

//! ATS rule table.
//!
//! One `TipId` per rule outcome. Category, message key and navigation target
//! are fixed per id, so a tip is fully described by which rule fired.

use serde::{Deserialize, Serialize};

/// Below this many hard skills the CV gets a warning instead of a success.
pub const HARD_SKILL_TARGET: usize = 5;

/// Experience entries needed for the "solid history" success tip.
pub const EXPERIENCE_COUNT_TARGET: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    Error,
    Warning,
    Success,
}

/// Wizard-facing CV sections a tip can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvSection {
    Personal,
    Education,
    Experience,
    Skills,
    Languages,
    Courses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipId {
    PersonalName,
    PersonalEmail,
    PersonalPhone,
    PersonalPhoto,
    PersonalLocation,
    PersonalContactGood,
    PersonalPhotoGood,
    ExperienceMissing,
    ExperienceDuties,
    ExperienceDutiesGood,
    ExperienceDates,
    ExperienceCountGood,
    EducationMissing,
    EducationGood,
    SkillsFew,
    SkillsGood,
    SoftSkillsMissing,
    SoftSkillsGood,
    LanguagesMissing,
    LanguagesGood,
    CoursesMissing,
    CoursesGood,
}

impl TipId {
    /// Every rule outcome, in evaluation order.
    pub const ALL: [TipId; 22] = [
        TipId::PersonalName,
        TipId::PersonalEmail,
        TipId::PersonalPhone,
        TipId::PersonalPhoto,
        TipId::PersonalLocation,
        TipId::PersonalContactGood,
        TipId::PersonalPhotoGood,
        TipId::ExperienceMissing,
        TipId::ExperienceDuties,
        TipId::ExperienceDutiesGood,
        TipId::ExperienceDates,
        TipId::ExperienceCountGood,
        TipId::EducationMissing,
        TipId::EducationGood,
        TipId::SkillsFew,
        TipId::SkillsGood,
        TipId::SoftSkillsMissing,
        TipId::SoftSkillsGood,
        TipId::LanguagesMissing,
        TipId::LanguagesGood,
        TipId::CoursesMissing,
        TipId::CoursesGood,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TipId::PersonalName => "personal-name",
            TipId::PersonalEmail => "personal-email",
            TipId::PersonalPhone => "personal-phone",
            TipId::PersonalPhoto => "personal-photo",
            TipId::PersonalLocation => "personal-location",
            TipId::PersonalContactGood => "personal-contact-good",
            TipId::PersonalPhotoGood => "personal-photo-good",
            TipId::ExperienceMissing => "experience-missing",
            TipId::ExperienceDuties => "experience-duties",
            TipId::ExperienceDutiesGood => "experience-duties-good",
            TipId::ExperienceDates => "experience-dates",
            TipId::ExperienceCountGood => "experience-count-good",
            TipId::EducationMissing => "education-missing",
            TipId::EducationGood => "education-good",
            TipId::SkillsFew => "skills-few",
            TipId::SkillsGood => "skills-good",
            TipId::SoftSkillsMissing => "soft-skills-missing",
            TipId::SoftSkillsGood => "soft-skills-good",
            TipId::LanguagesMissing => "languages-missing",
            TipId::LanguagesGood => "languages-good",
            TipId::CoursesMissing => "courses-missing",
            TipId::CoursesGood => "courses-good",
        }
    }

    pub fn category(self) -> TipCategory {
        match self {
            TipId::PersonalName | TipId::PersonalEmail => TipCategory::Error,
            TipId::PersonalContactGood
            | TipId::PersonalPhotoGood
            | TipId::ExperienceDutiesGood
            | TipId::ExperienceCountGood
            | TipId::EducationGood
            | TipId::SkillsGood
            | TipId::SoftSkillsGood
            | TipId::LanguagesGood
            | TipId::CoursesGood => TipCategory::Success,
            _ => TipCategory::Warning,
        }
    }

    /// Translation key the UI resolves into localized text.
    pub fn message_key(self) -> &'static str {
        match self {
            TipId::PersonalName => "ats.noName",
            TipId::PersonalEmail => "ats.noEmail",
            TipId::PersonalPhone => "ats.noPhone",
            TipId::PersonalPhoto => "ats.noPhoto",
            TipId::PersonalLocation => "ats.noLocation",
            TipId::PersonalContactGood => "ats.goodContact",
            TipId::PersonalPhotoGood => "ats.goodPhoto",
            TipId::ExperienceMissing => "ats.noExperience",
            TipId::ExperienceDuties => "ats.noDuties",
            TipId::ExperienceDutiesGood => "ats.goodDuties",
            TipId::ExperienceDates => "ats.missingDates",
            TipId::ExperienceCountGood => "ats.goodExperience",
            TipId::EducationMissing => "ats.noEducation",
            TipId::EducationGood => "ats.goodEducation",
            TipId::SkillsFew => "ats.fewSkills",
            TipId::SkillsGood => "ats.goodSkills",
            TipId::SoftSkillsMissing => "ats.noSoftSkills",
            TipId::SoftSkillsGood => "ats.goodSoftSkills",
            TipId::LanguagesMissing => "ats.noLanguages",
            TipId::LanguagesGood => "ats.goodLanguages",
            TipId::CoursesMissing => "ats.noCourses",
            TipId::CoursesGood => "ats.goodCourses",
        }
    }

    /// Section a "jump to" action should open. Success tips have nowhere to go.
    pub fn target_section(self) -> Option<CvSection> {
        if self.category() == TipCategory::Success {
            return None;
        }
        let section = match self {
            TipId::PersonalName
            | TipId::PersonalEmail
            | TipId::PersonalPhone
            | TipId::PersonalPhoto
            | TipId::PersonalLocation => CvSection::Personal,
            TipId::ExperienceMissing | TipId::ExperienceDuties | TipId::ExperienceDates => {
                CvSection::Experience
            }
            TipId::EducationMissing => CvSection::Education,
            TipId::SkillsFew | TipId::SoftSkillsMissing => CvSection::Skills,
            TipId::LanguagesMissing => CvSection::Languages,
            TipId::CoursesMissing => CvSection::Courses,
            _ => return None,
        };
        Some(section)
    }
}

impl std::fmt::Display for TipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
