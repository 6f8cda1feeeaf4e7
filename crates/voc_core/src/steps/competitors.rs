use voc_logging::{voc_info, voc_warn};

use super::{set_optional, StepOutcome};
use crate::{ApiFailure, Company, CompanyField, Effect, WizardError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompetitorsStep {
    items: Vec<Company>,
    loading: bool,
    error: Option<WizardError>,
}

impl CompetitorsStep {
    pub fn new(initial: Vec<Company>) -> Self {
        Self {
            items: initial,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Company] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&WizardError> {
        self.error.as_ref()
    }

    pub(crate) fn add(&mut self) -> StepOutcome<Vec<Company>> {
        self.items.push(Company::placeholder());
        StepOutcome::Updated(Vec::new())
    }

    pub(crate) fn remove(&mut self, index: usize) -> StepOutcome<Vec<Company>> {
        if index >= self.items.len() {
            return StepOutcome::Ignored;
        }
        self.items.remove(index);
        StepOutcome::Updated(Vec::new())
    }

    pub(crate) fn edit(
        &mut self,
        index: usize,
        field: CompanyField,
        value: String,
    ) -> StepOutcome<Vec<Company>> {
        let Some(item) = self.items.get_mut(index) else {
            return StepOutcome::Ignored;
        };
        match field {
            CompanyField::Name => set_optional(&mut item.company_name, value),
            CompanyField::Website => set_optional(&mut item.website, value),
        }
        StepOutcome::Updated(Vec::new())
    }

    pub(crate) fn submit(&mut self) -> StepOutcome<Vec<Company>> {
        if self.loading {
            return StepOutcome::Ignored;
        }
        if self.items.is_empty() {
            self.error = Some(WizardError::EmptyCompetitorList);
            return StepOutcome::Updated(Vec::new());
        }

        self.loading = true;
        self.error = None;
        StepOutcome::Updated(vec![Effect::ResolveAppIds {
            companies: self.items.clone(),
        }])
    }

    /// The server's list replaces local edits: it is authoritative for id resolution.
    pub(crate) fn resolved(
        &mut self,
        result: Result<Vec<Company>, ApiFailure>,
    ) -> StepOutcome<Vec<Company>> {
        if !self.loading {
            return StepOutcome::Ignored;
        }
        self.loading = false;
        match result {
            Ok(companies) => {
                voc_info!(
                    "Resolved app ids for {} of {} submitted companies",
                    companies.iter().filter(|c| c.has_store_id()).count(),
                    self.items.len()
                );
                StepOutcome::Complete(companies)
            }
            Err(failure) => {
                voc_warn!("App id resolution failed: {}", failure);
                self.error = Some(WizardError::ResolveFailed);
                StepOutcome::Updated(Vec::new())
            }
        }
    }
}
