//! Wizard step machine.
//!
//! The form wizard walks a fixed list of steps; after the last one the caller
//! moves on to the preview. ATS tips point at CV sections, and
//! `step_for_section` decides which step shows that section.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::ats::rules::CvSection;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Education,
    Experience,
    Skills,
    /// Courses and languages share one step.
    Courses,
    Template,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::Personal,
        WizardStep::Education,
        WizardStep::Experience,
        WizardStep::Skills,
        WizardStep::Courses,
        WizardStep::Template,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// URL path segment, e.g. `/wizard/education`.
    pub fn key(self) -> &'static str {
        match self {
            WizardStep::Personal => "personal",
            WizardStep::Education => "education",
            WizardStep::Experience => "experience",
            WizardStep::Skills => "skills",
            WizardStep::Courses => "courses",
            WizardStep::Template => "template",
        }
    }
}

pub fn step_for_section(section: CvSection) -> WizardStep {
    match section {
        CvSection::Personal => WizardStep::Personal,
        CvSection::Education => WizardStep::Education,
        CvSection::Experience => WizardStep::Experience,
        CvSection::Skills => WizardStep::Skills,
        CvSection::Languages | CvSection::Courses => WizardStep::Courses,
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved(WizardStep),
    Stayed(WizardStep),
    /// Past the last step; the caller shows the preview.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardState {
    current: usize,
}

impl WizardState {
    pub fn at(step: WizardStep) -> Self {
        Self {
            current: step.index(),
        }
    }

    pub fn from_index(index: usize) -> Result<Self, AppError> {
        WizardStep::from_index(index)
            .map(Self::at)
            .ok_or_else(|| out_of_range(index))
    }

    pub fn current(&self) -> WizardStep {
        WizardStep::ALL[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == WizardStep::ALL.len() - 1
    }

    pub fn next(&mut self) -> Navigation {
        if self.is_last() {
            return Navigation::Finished;
        }
        self.current += 1;
        Navigation::Moved(self.current())
    }

    pub fn prev(&mut self) -> Navigation {
        if self.is_first() {
            return Navigation::Stayed(self.current());
        }
        self.current -= 1;
        Navigation::Moved(self.current())
    }

    pub fn go_to(&mut self, index: usize) -> Result<Navigation, AppError> {
        let step = WizardStep::from_index(index).ok_or_else(|| out_of_range(index))?;
        Ok(self.jump(step))
    }

    pub fn go_to_section(&mut self, section: CvSection) -> Navigation {
        self.jump(step_for_section(section))
    }

    fn jump(&mut self, step: WizardStep) -> Navigation {
        if step.index() == self.current {
            return Navigation::Stayed(step);
        }
        self.current = step.index();
        Navigation::Moved(step)
    }
}

fn out_of_range(index: usize) -> AppError {
    AppError::Validation(format!(
        "Step index {index} is out of range (0..{})",
        WizardStep::ALL.len()
    ))
}
