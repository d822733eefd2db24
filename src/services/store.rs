use std::sync::RwLock;

use crate::domain::lead::{Lead, LeadStats, SearchFilters};
use crate::services::{apply_filters, LeadSelection};

struct Inner {
    leads: Vec<Lead>,
    selection: LeadSelection,
}

/// Holds the full lead set and the selection. Every mutation swaps a whole
/// value under the lock, so readers see either the old or the new set.
pub struct DashboardState {
    inner: RwLock<Inner>,
}

impl DashboardState {
    pub fn new(leads: Vec<Lead>) -> Self {
        DashboardState {
            inner: RwLock::new(Inner {
                leads,
                selection: LeadSelection::default(),
            }),
        }
    }

    /// Replaces the entire lead set. The old ids are gone with it, so the
    /// selection is emptied as well.
    pub fn replace_leads(&self, leads: Vec<Lead>) {
        let mut inner = self.inner.write().unwrap();
        inner.leads = leads;
        inner.selection.clear();
    }

    pub fn total(&self) -> usize {
        self.inner.read().unwrap().leads.len()
    }

    pub fn filtered(&self, filters: &SearchFilters) -> Vec<Lead> {
        let inner = self.inner.read().unwrap();
        apply_filters(&inner.leads, filters)
    }

    pub fn stats(&self, filters: &SearchFilters) -> LeadStats {
        LeadStats::compute(&self.filtered(filters))
    }

    /// Returns whether the id is now selected, plus the selection size.
    pub fn toggle_selected(&self, id: &str) -> (bool, usize) {
        let mut inner = self.inner.write().unwrap();
        let selected = inner.selection.toggle(id);
        (selected, inner.selection.len())
    }

    /// Selects every lead visible under the given filters.
    pub fn select_visible(&self, filters: &SearchFilters) -> usize {
        let mut inner = self.inner.write().unwrap();
        let visible_ids: Vec<String> = apply_filters(&inner.leads, filters)
            .into_iter()
            .map(|lead| lead.id)
            .collect();
        inner.selection.select_all(visible_ids);
        inner.selection.len()
    }

    pub fn clear_selection(&self) {
        self.inner.write().unwrap().selection.clear();
    }

    pub fn selected_count(&self) -> usize {
        self.inner.read().unwrap().selection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::CompanySize;
    use crate::services::LeadGenerator;

    #[test]
    fn replace_leads_swaps_set_and_clears_selection() {
        let mut generator = LeadGenerator::with_seed(5);
        let state = DashboardState::new(generator.generate(10));

        let first_id = state.filtered(&SearchFilters::default())[0].id.clone();
        state.toggle_selected(&first_id);
        assert_eq!(state.selected_count(), 1);

        state.replace_leads(generator.generate(20));
        assert_eq!(state.total(), 20);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn select_visible_respects_filters() {
        let mut generator = LeadGenerator::with_seed(5);
        let state = DashboardState::new(generator.generate(100));

        let filters = SearchFilters {
            min_score: 50,
            ..Default::default()
        };
        let visible = state.filtered(&filters).len();
        assert!(visible < state.total());

        let selected = state.select_visible(&filters);
        assert_eq!(selected, visible);
    }

    #[test]
    fn selection_keeps_stale_ids_across_filter_changes() {
        let mut generator = LeadGenerator::with_seed(8);
        let state = DashboardState::new(generator.generate(50));

        let all = state.filtered(&SearchFilters::default());
        let low = all.iter().find(|l| l.score < 40).unwrap();
        state.toggle_selected(&low.id);

        // Narrowing the view does not prune the selection.
        let narrow = SearchFilters {
            min_score: 90,
            company_size: CompanySize::Large,
            ..Default::default()
        };
        let _ = state.filtered(&narrow);
        assert_eq!(state.selected_count(), 1);
    }
}
