use itertools::Itertools;

use crate::domain::lead::Lead;

pub const EXPORT_FILE_NAME: &str = "leads-export.csv";

const HEADER: [&str; 7] = [
    "Company Name",
    "Industry",
    "Location",
    "Email",
    "Phone",
    "Website",
    "Score",
];

/// Serializes leads to CSV text, one row per lead in input order. Every
/// field is double-quoted; embedded quotes are escaped by doubling them.
pub fn export_csv(leads: &[Lead]) -> String {
    let header = HEADER.iter().map(|field| quote(field)).join(",");

    std::iter::once(header)
        .chain(leads.iter().map(row))
        .join("\n")
}

fn row(lead: &Lead) -> String {
    let score = lead.score.to_string();
    [
        lead.company_name.as_str(),
        lead.industry.as_str(),
        lead.location.as_str(),
        lead.email.as_deref().unwrap_or(""),
        lead.phone.as_deref().unwrap_or(""),
        lead.website.as_deref().unwrap_or(""),
        score.as_str(),
    ]
    .iter()
    .map(|field| quote(field))
    .join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
