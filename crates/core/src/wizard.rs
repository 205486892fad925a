// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The resolution wizard state machine.
//!
//! A linear five-step machine: select → template → compose → review →
//! confirm, with a single reverse edge. Each forward transition is gated
//! on a per-step guard; invalid states are unrepresentable because the
//! step is a closed enum and `advance` refuses to move past a failing
//! guard.

use crate::error::CoreError;
use std::collections::{BTreeMap, BTreeSet};

/// The ordered steps of the resolution wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Choose target cases.
    Select,
    /// Optionally choose a message template.
    Template,
    /// Compose the resolution justification.
    Compose,
    /// Review the composed batch.
    Review,
    /// Terminal step: the batch is ready to commit.
    Confirm,
}

impl WizardStep {
    /// Returns the string representation of this step.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Template => "template",
            Self::Compose => "compose",
            Self::Review => "review",
            Self::Confirm => "confirm",
        }
    }

    /// Returns the step after this one, or `None` at the terminal step.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Select => Some(Self::Template),
            Self::Template => Some(Self::Compose),
            Self::Compose => Some(Self::Review),
            Self::Review => Some(Self::Confirm),
            Self::Confirm => None,
        }
    }

    /// Returns the step before this one, or `None` at the first step.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Select => None,
            Self::Template => Some(Self::Select),
            Self::Compose => Some(Self::Template),
            Self::Review => Some(Self::Compose),
            Self::Confirm => Some(Self::Review),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reusable resolution message template.
///
/// Variables are `{{name}}` placeholders in the body; the compose guard
/// requires every variable to be supplied before the wizard may advance
/// without free-text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// The template identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Body text with `{{variable}}` placeholders.
    pub body: String,
    /// Names of the variables the body references.
    pub variables: Vec<String>,
}

/// One pass through the resolution wizard.
///
/// Created when the wizard opens, destroyed on close or after a
/// successful confirm. The target set is a snapshot of the workspace
/// selection at open time; later selection changes do not retarget an
/// in-progress wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    /// The current step.
    step: WizardStep,
    /// The case ids this wizard will resolve.
    pub targets: BTreeSet<String>,
    /// Free-text justification content.
    pub content: String,
    /// The chosen template, if any.
    pub template: Option<MessageTemplate>,
    /// Supplied values for the chosen template's variables.
    pub variables: BTreeMap<String, String>,
}

impl WizardSession {
    /// Opens a wizard targeting a snapshot of the current selection.
    #[must_use]
    pub fn new(targets: BTreeSet<String>) -> Self {
        Self {
            step: WizardStep::Select,
            targets,
            content: String::new(),
            template: None,
            variables: BTreeMap::new(),
        }
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns true once the wizard has reached its terminal step.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.step, WizardStep::Confirm)
    }

    /// Chooses (or clears) the message template.
    ///
    /// Previously supplied variable values are dropped, since they belong
    /// to the old template.
    pub fn choose_template(&mut self, template: Option<MessageTemplate>) {
        self.template = template;
        self.variables.clear();
    }

    /// Supplies a value for one template variable.
    pub fn supply_variable(&mut self, name: String, value: String) {
        self.variables.insert(name, value);
    }

    /// Returns the chosen template's variables that are still unfilled.
    #[must_use]
    pub fn missing_variables(&self) -> Vec<String> {
        self.template.as_ref().map_or_else(Vec::new, |template| {
            template
                .variables
                .iter()
                .filter(|name| {
                    !self
                        .variables
                        .get(*name)
                        .is_some_and(|value| !value.trim().is_empty())
                })
                .cloned()
                .collect()
        })
    }

    /// Advances to the next step if the current step's guard passes.
    ///
    /// Guards:
    /// - select: at least one target case chosen;
    /// - template: always passes (a template is optional);
    /// - compose: non-blank free text, or a chosen template with every
    ///   variable supplied;
    /// - review: always passes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EmptyTargetSet`, `CoreError::IncompleteComposition`,
    /// or `CoreError::WizardComplete` when the guard fails or the wizard is
    /// already terminal.
    pub fn advance(&mut self) -> Result<WizardStep, CoreError> {
        match self.step {
            WizardStep::Select => {
                if self.targets.is_empty() {
                    return Err(CoreError::EmptyTargetSet);
                }
            }
            WizardStep::Compose => {
                if self.content.trim().is_empty() {
                    let missing: Vec<String> = self.missing_variables();
                    if self.template.is_none() || !missing.is_empty() {
                        return Err(CoreError::IncompleteComposition { missing });
                    }
                }
            }
            WizardStep::Template | WizardStep::Review => {}
            WizardStep::Confirm => return Err(CoreError::WizardComplete),
        }

        // Guard passed and the step is not terminal, so a next step exists.
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Steps back one step.
    ///
    /// Returns `None` at the select step: backing out of the first step
    /// exits the wizard entirely, which is the caller's job.
    pub fn back(&mut self) -> Option<WizardStep> {
        let previous: WizardStep = self.step.previous()?;
        self.step = previous;
        Some(previous)
    }

    /// Returns the effective justification content.
    ///
    /// With a chosen template, substitutes the supplied variable values
    /// into the `{{name}}` placeholders; otherwise returns the free text.
    /// Free text wins when both are present.
    #[must_use]
    pub fn rendered_content(&self) -> String {
        if !self.content.trim().is_empty() {
            return self.content.clone();
        }
        self.template.as_ref().map_or_else(String::new, |template| {
            let mut rendered: String = template.body.clone();
            for (name, value) in &self.variables {
                rendered = rendered.replace(&format!("{{{{{name}}}}}"), value);
            }
            rendered
        })
    }
}
