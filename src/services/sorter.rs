use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::lead::Lead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CompanyName,
    Industry,
    Location,
    #[default]
    Score,
    EmployeeCount,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Stable sort, so leads that compare equal keep their input order.
pub fn sort_leads(leads: &[Lead], field: SortField, direction: SortDirection) -> Vec<Lead> {
    let mut sorted = leads.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &Lead, b: &Lead, field: SortField) -> Ordering {
    match field {
        SortField::CompanyName => compare_ci(&a.company_name, &b.company_name),
        SortField::Industry => compare_ci(&a.industry, &b.industry),
        SortField::Location => compare_ci(&a.location, &b.location),
        SortField::Score => a.score.cmp(&b.score),
        SortField::EmployeeCount => a
            .employee_count
            .unwrap_or(0)
            .cmp(&b.employee_count.unwrap_or(0)),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Checked-off lead ids, tracked independently of filtering and sorting.
/// Ids that later fall out of the filtered view are left in place.
#[derive(Debug, Clone, Default)]
pub struct LeadSelection {
    selected: HashSet<String>,
}

impl LeadSelection {
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn select_all<I>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selected = visible_ids.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
