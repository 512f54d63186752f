use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Default proficiency for a hard skill persisted without a level.
pub const DEFAULT_SKILL_LEVEL: u8 = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>, // data URL of the cropped photo
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub duties: Vec<String>,
}

impl Experience {
    /// Duties with actual text; blank bullets left behind by the form don't count.
    pub fn filled_duties(&self) -> usize {
        self.duties.iter().filter(|d| is_filled(d)).count()
    }

    pub fn has_both_dates(&self) -> bool {
        is_filled(&self.start_date) && is_filled(&self.end_date)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub name: String,
    pub level: String,
}

/// A hard skill rated 1–5.
///
/// Older saves persisted hard skills as bare strings; those still load, with a
/// fresh id and the default level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillRepr")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: u8,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillRepr {
    Full(SkillFields),
    Name(String),
}

#[derive(Deserialize)]
#[serde(default)]
struct SkillFields {
    id: String,
    name: String,
    level: u8,
}

impl Default for SkillFields {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

impl From<SkillRepr> for Skill {
    fn from(repr: SkillRepr) -> Self {
        match repr {
            SkillRepr::Full(f) => Skill {
                id: f.id,
                name: f.name,
                level: f.level.clamp(1, 5),
            },
            SkillRepr::Name(name) => Skill::named(name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub hard: Vec<Skill>,
    pub soft: Vec<String>,
}

/// The full CV as the wizard persists it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CvData {
    pub personal: PersonalData,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub courses: Vec<String>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverLetterData {
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Professional,
}

/// Envelope written by "export to file".
///
/// `exportedAt` is kept as the text the client wrote; nothing downstream reads
/// it, and older exports carry non-RFC 3339 timestamps or none at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub exported_at: String,
    pub cv: CvData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<CoverLetterData>,
    #[serde(default)]
    pub selected_template: TemplateId,
    #[serde(default)]
    pub language: String,
}

/// Evaluation input: either a bare CV or a full export envelope.
///
/// An object with a `cv` key is an envelope and must parse as one; it is never
/// reread as a bare CV.
#[derive(Debug, Clone)]
pub enum CvPayload {
    Export(Box<ExportData>),
    Cv(CvData),
}

impl<'de> Deserialize<'de> for CvPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_envelope = value
            .as_object()
            .is_some_and(|obj| obj.contains_key("cv"));

        if is_envelope {
            serde_json::from_value(value)
                .map(|export| CvPayload::Export(Box::new(export)))
                .map_err(|e| D::Error::custom(format!("invalid export envelope: {e}")))
        } else {
            serde_json::from_value(value)
                .map(CvPayload::Cv)
                .map_err(D::Error::custom)
        }
    }
}

impl CvPayload {
    pub fn into_cv(self) -> CvData {
        match self {
            CvPayload::Export(export) => export.cv,
            CvPayload::Cv(cv) => cv,
        }
    }
}

/// A text field counts as filled when it has something besides whitespace.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
