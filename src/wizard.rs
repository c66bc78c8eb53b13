//! Wizard navigation.
//!
//! The wizard owns the one mutable [`Selection`] and the current step. Core
//! calls receive the selection by reference; edits are routed through the
//! transition reducer. Moving forward is gated on the project details being
//! complete, moving back never is.

use crate::error::{WizardError, WizardResult};
use crate::selection::{ProjectField, Selection};
use crate::transition::{self, SelectionChange};
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WizardStep {
    Details,
    Sensor,
    Accessories,
    Monitoring,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Details,
        WizardStep::Sensor,
        WizardStep::Accessories,
        WizardStep::Monitoring,
        WizardStep::Summary,
    ];

    /// 1-based step number.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Details => "Details & Machine",
            WizardStep::Sensor => "Sensor Selection",
            WizardStep::Accessories => "Accessories & JB",
            WizardStep::Monitoring => "Monitoring System",
            WizardStep::Summary => "Final Summary",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Required project fields that are still empty, in `required` order.
///
/// Any non-empty value counts as filled in, whitespace included.
pub fn missing_project_fields(
    selection: &Selection,
    required: &[ProjectField],
) -> Vec<ProjectField> {
    required
        .iter()
        .copied()
        .filter(|field| selection.project.get(*field).is_empty())
        .collect()
}

/// Ok when every required project field is filled in.
pub fn validate_project_details(
    selection: &Selection,
    required: &[ProjectField],
) -> WizardResult<()> {
    let missing = missing_project_fields(selection, required);
    if missing.is_empty() {
        return Ok(());
    }
    Err(WizardError::IncompleteProjectDetails {
        missing: missing.iter().map(|f| f.name().to_string()).collect(),
    })
}

/// The furthest step a selection can be navigated to.
pub fn reachable_step(selection: &Selection, required: &[ProjectField]) -> WizardStep {
    match validate_project_details(selection, required) {
        Ok(()) => WizardStep::Summary,
        Err(_) => WizardStep::Details,
    }
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    selection: Selection,
    required_fields: Vec<ProjectField>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(ProjectField::ALL.to_vec())
    }
}

impl Wizard {
    pub fn new(required_fields: Vec<ProjectField>) -> Self {
        Self {
            step: WizardStep::Details,
            selection: Selection::default(),
            required_fields,
        }
    }

    /// Start from an existing selection, on step 1.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn required_fields(&self) -> &[ProjectField] {
        &self.required_fields
    }

    /// Apply one edit through the reducer.
    pub fn apply(&mut self, change: SelectionChange) {
        let current = std::mem::take(&mut self.selection);
        self.selection = transition::apply_change(current, change);
    }

    /// Navigate to `target`. Forward moves require complete project details.
    pub fn go_to(&mut self, target: WizardStep) -> WizardResult<WizardStep> {
        if target > self.step {
            validate_project_details(&self.selection, &self.required_fields)?;
        }
        debug!(from = %self.step, to = %target, "wizard navigation");
        self.step = target;
        Ok(target)
    }

    /// Navigate by 1-based step number.
    pub fn go_to_number(&mut self, number: usize) -> WizardResult<WizardStep> {
        let target = WizardStep::from_number(number).ok_or(WizardError::StepOutOfRange {
            step: number,
            last: WizardStep::ALL.len(),
        })?;
        self.go_to(target)
    }

    /// Next step. Stays put on the last step.
    pub fn next(&mut self) -> WizardResult<WizardStep> {
        match WizardStep::from_number(self.step.number() + 1) {
            Some(target) => self.go_to(target),
            None => Ok(self.step),
        }
    }

    /// Previous step. Stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(target) = WizardStep::from_number(self.step.number() - 1) {
            self.step = target;
        }
        self.step
    }

    /// Return to step 1 with a fresh selection.
    pub fn reset(&mut self) {
        debug!("wizard reset");
        self.step = WizardStep::Details;
        self.selection = Selection::default();
    }
}
