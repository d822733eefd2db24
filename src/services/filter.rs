use crate::domain::lead::{Lead, SearchFilters};

/// Keeps a lead only when every active criterion matches. Empty strings,
/// false flags and a zero min_score are inactive criteria.
pub fn apply_filters(leads: &[Lead], filters: &SearchFilters) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| matches(lead, filters))
        .cloned()
        .collect()
}

fn matches(lead: &Lead, filters: &SearchFilters) -> bool {
    if !filters.industry.is_empty() && !contains_ci(&lead.industry, &filters.industry) {
        return false;
    }
    if !filters.location.is_empty() && !contains_ci(&lead.location, &filters.location) {
        return false;
    }
    if !filters.company_name.is_empty() && !contains_ci(&lead.company_name, &filters.company_name) {
        return false;
    }
    if !filters.keywords.is_empty() {
        let in_description = lead
            .description
            .as_deref()
            .map(|d| contains_ci(d, &filters.keywords))
            .unwrap_or(false);
        if !in_description && !contains_ci(&lead.company_name, &filters.keywords) {
            return false;
        }
    }
    if filters.min_score > 0 && lead.score < filters.min_score {
        return false;
    }
    if filters.has_email && lead.email.is_none() {
        return false;
    }
    if filters.has_phone && lead.phone.is_none() {
        return false;
    }
    if filters.has_website && lead.website.is_none() {
        return false;
    }

    filters.company_size.contains(lead.employee_count)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::lead::CompanySize;

    fn lead(company_name: &str, industry: &str, location: &str, score: u8) -> Lead {
        let now = Utc::now();
        Lead {
            id: format!("lead-{}", company_name.to_lowercase().replace(' ', "-")),
            company_name: company_name.to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
            address: None,
            email: None,
            phone: None,
            website: None,
            linkedin_url: None,
            bbb_rating: None,
            score,
            employee_count: None,
            revenue: None,
            description: None,
            last_activity: None,
            contact_person: None,
            contact_title: None,
            is_valid_email: None,
            is_valid_phone: None,
            tags: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Lead> {
        let mut acme = lead("Acme Inc", "Technology", "Austin, TX, USA", 82);
        acme.email = Some("a@acme.com".to_string());
        acme.website = Some("https://acme.com".to_string());
        acme.description = Some("Acme builds industrial cloud tooling.".to_string());
        acme.employee_count = Some(120);

        let mut bolt = lead("Bolt Retailers", "Retail", "Berlin, Germany", 55);
        bolt.phone = Some("+49-123-4567890".to_string());
        bolt.employee_count = Some(30);

        let mut cirrus = lead("Cirrus Health", "Healthcare", "Toronto, ON, Canada", 82);
        cirrus.email = Some("hello@cirrus.co".to_string());
        cirrus.employee_count = Some(800);

        vec![acme, bolt, cirrus]
    }

    #[test]
    fn default_filters_keep_everything() {
        let leads = sample();
        let filtered = apply_filters(&leads, &SearchFilters::default());

        assert_eq!(filtered, leads);
    }

    #[test]
    fn industry_substring_is_case_insensitive() {
        let leads = sample();
        let filters = SearchFilters {
            industry: "tech".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&leads, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].company_name, "Acme Inc");
    }

    #[test]
    fn keywords_match_description_or_company_name() {
        let leads = sample();

        let by_description = apply_filters(
            &leads,
            &SearchFilters {
                keywords: "industrial".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].company_name, "Acme Inc");

        let by_name = apply_filters(
            &leads,
            &SearchFilters {
                keywords: "retailers".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].company_name, "Bolt Retailers");
    }

    #[test]
    fn criteria_combine_as_conjunction() {
        let leads = sample();
        let filters = SearchFilters {
            min_score: 80,
            has_email: true,
            location: "canada".to_string(),
            ..Default::default()
        };

        let filtered = apply_filters(&leads, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].company_name, "Cirrus Health");
    }

    #[test]
    fn min_score_boundary_is_inclusive() {
        let leads = vec![
            lead("At Threshold", "Technology", "Austin, TX", 70),
            lead("One Below", "Technology", "Austin, TX", 69),
        ];
        let filters = SearchFilters {
            min_score: 70,
            ..Default::default()
        };

        let filtered = apply_filters(&leads, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].company_name, "At Threshold");
    }

    #[test]
    fn contact_channel_flags_require_presence() {
        let leads = sample();
        let filters = SearchFilters {
            has_phone: true,
            ..Default::default()
        };

        let filtered = apply_filters(&leads, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].company_name, "Bolt Retailers");
    }

    #[test]
    fn company_size_bracket_selects_medium() {
        let mut leads = vec![
            lead("Tiny", "Technology", "Austin, TX", 50),
            lead("Small", "Technology", "Austin, TX", 50),
            lead("Mid", "Technology", "Austin, TX", 50),
            lead("Big", "Technology", "Austin, TX", 50),
        ];
        leads[0].employee_count = Some(5);
        leads[1].employee_count = Some(30);
        leads[2].employee_count = Some(100);
        leads[3].employee_count = Some(1000);

        let filters = SearchFilters {
            company_size: CompanySize::Medium,
            ..Default::default()
        };

        let filtered = apply_filters(&leads, &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].employee_count, Some(100));
    }

    #[test]
    fn filtering_is_idempotent() {
        let leads = sample();
        let filters = SearchFilters {
            min_score: 60,
            has_email: true,
            ..Default::default()
        };

        let once = apply_filters(&leads, &filters);
        let twice = apply_filters(&once, &filters);
        assert_eq!(once, twice);
    }
}
