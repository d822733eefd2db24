use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub bbb_rating: Option<u8>,
    pub score: u8,
    pub employee_count: Option<u32>,
    pub revenue: Option<String>,
    pub description: Option<String>,
    pub last_activity: Option<String>,
    pub contact_person: Option<String>,
    pub contact_title: Option<String>,
    pub is_valid_email: Option<bool>,
    pub is_valid_phone: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub min_score: u8,
    #[serde(default)]
    pub has_email: bool,
    #[serde(default)]
    pub has_phone: bool,
    #[serde(default)]
    pub has_website: bool,
    #[serde(default)]
    pub company_size: CompanySize,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            industry: String::new(),
            location: String::new(),
            company_name: String::new(),
            keywords: String::new(),
            min_score: 0,
            has_email: false,
            has_phone: false,
            has_website: false,
            company_size: CompanySize::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    #[default]
    All,
    Startup,
    Small,
    Medium,
    Large,
}

impl CompanySize {
    /// Employee-count brackets; a missing count is treated as 0.
    pub fn contains(&self, employee_count: Option<u32>) -> bool {
        let size = employee_count.unwrap_or(0);
        match self {
            CompanySize::All => true,
            CompanySize::Startup => size <= 10,
            CompanySize::Small => size > 10 && size <= 50,
            CompanySize::Medium => size > 50 && size <= 250,
            CompanySize::Large => size > 250,
        }
    }
}

pub const HIGH_SCORE_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total_leads: usize,
    pub high_score_leads: usize,
    pub validated_emails: usize,
    pub average_score: u32,
}

impl LeadStats {
    pub fn compute(leads: &[Lead]) -> Self {
        let total_leads = leads.len();
        let high_score_leads = leads
            .iter()
            .filter(|l| l.score >= HIGH_SCORE_THRESHOLD)
            .count();
        let validated_emails = leads
            .iter()
            .filter(|l| l.is_valid_email.unwrap_or(false))
            .count();
        let average_score = match total_leads {
            0 => 0,
            n => {
                let sum: u32 = leads.iter().map(|l| l.score as u32).sum();
                (sum as f64 / n as f64).round() as u32
            }
        };

        LeadStats {
            total_leads,
            high_score_leads,
            validated_emails,
            average_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bare_lead(company_name: &str, score: u8) -> Lead {
        let now = Utc::now();
        Lead {
            id: format!("lead-{}", company_name.to_lowercase().replace(' ', "-")),
            company_name: company_name.to_string(),
            industry: "Technology".to_string(),
            location: "Austin, TX".to_string(),
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

    #[test]
    fn company_size_brackets() {
        assert!(CompanySize::Startup.contains(Some(10)));
        assert!(!CompanySize::Startup.contains(Some(11)));
        assert!(CompanySize::Small.contains(Some(11)));
        assert!(CompanySize::Small.contains(Some(50)));
        assert!(!CompanySize::Small.contains(Some(51)));
        assert!(CompanySize::Medium.contains(Some(51)));
        assert!(CompanySize::Medium.contains(Some(250)));
        assert!(!CompanySize::Medium.contains(Some(251)));
        assert!(CompanySize::Large.contains(Some(251)));
        assert!(!CompanySize::Large.contains(Some(250)));
    }

    #[test]
    fn missing_employee_count_is_zero() {
        assert!(CompanySize::All.contains(None));
        assert!(CompanySize::Startup.contains(None));
        assert!(!CompanySize::Small.contains(None));
        assert!(!CompanySize::Large.contains(None));
    }

    #[test]
    fn stats_over_empty_slice() {
        let stats = LeadStats::compute(&[]);
        assert_eq!(
            stats,
            LeadStats {
                total_leads: 0,
                high_score_leads: 0,
                validated_emails: 0,
                average_score: 0,
            }
        );
    }

    #[test]
    fn stats_counts_and_average() {
        let mut high = bare_lead("Alpha Corp", 90);
        high.is_valid_email = Some(true);
        let mid = bare_lead("Beta Ltd", 80);
        let low = bare_lead("Gamma Inc", 40);

        let stats = LeadStats::compute(&[high, mid, low]);
        assert_eq!(stats.total_leads, 3);
        assert_eq!(stats.high_score_leads, 2);
        assert_eq!(stats.validated_emails, 1);
        assert_eq!(stats.average_score, 70);
    }

    #[test]
    fn default_filters_are_inactive() {
        let filters = SearchFilters::default();
        assert!(filters.industry.is_empty());
        assert_eq!(filters.min_score, 0);
        assert!(!filters.has_email);
        assert_eq!(filters.company_size, CompanySize::All);
    }
}
