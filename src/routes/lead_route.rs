use actix_web::{get, http::header, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{
    domain::lead::{CompanySize, SearchFilters},
    services::{
        export_csv, sort_leads, DashboardState, LeadGenerator, SortDirection, SortField,
        EXPORT_FILE_NAME,
    },
};

/// Filter and sort criteria as sent by the dashboard. Every field has a
/// default, so each request carries a complete criteria set.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQuery {
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
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub order: SortDirection,
}

impl LeadQuery {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            industry: self.industry.clone(),
            location: self.location.clone(),
            company_name: self.company_name.clone(),
            keywords: self.keywords.clone(),
            min_score: self.min_score,
            has_email: self.has_email,
            has_phone: self.has_phone,
            has_website: self.has_website,
            company_size: self.company_size,
        }
    }
}

#[get("")]
async fn get_leads(
    state: web::Data<DashboardState>,
    query: web::Query<LeadQuery>,
) -> HttpResponse {
    let filters = query.filters();
    let filtered = state.filtered(&filters);
    let leads = sort_leads(&filtered, query.sort_by, query.order);

    log::info!("Returning {} of {} leads", leads.len(), state.total());

    HttpResponse::Ok().json(json!({
        "total": state.total(),
        "count": leads.len(),
        "leads": leads,
    }))
}

fn default_generate_count() -> usize {
    500
}

#[derive(Deserialize)]
struct GenerateQuery {
    #[serde(default = "default_generate_count")]
    count: usize,
}

#[post("/generate")]
async fn generate_leads(
    state: web::Data<DashboardState>,
    query: web::Query<GenerateQuery>,
) -> HttpResponse {
    if query.count == 0 {
        return HttpResponse::BadRequest().body("count must be at least 1");
    }

    let mut generator = LeadGenerator::new();
    state.replace_leads(generator.generate(query.count));

    log::info!("Generated {} fresh sample leads", query.count);

    HttpResponse::Ok().json(json!({ "generated": query.count }))
}

#[get("/export")]
async fn export_leads(
    state: web::Data<DashboardState>,
    query: web::Query<LeadQuery>,
) -> HttpResponse {
    let filtered = state.filtered(&query.filters());
    let csv = export_csv(&filtered);

    log::info!("Exporting {} leads to {}", filtered.len(), EXPORT_FILE_NAME);

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ))
        .body(csv)
}

#[get("/stats")]
async fn lead_stats(
    state: web::Data<DashboardState>,
    query: web::Query<LeadQuery>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.stats(&query.filters()))
}

#[derive(Deserialize)]
struct SelectBody {
    id: String,
}

#[post("/select")]
async fn toggle_select(
    state: web::Data<DashboardState>,
    body: web::Form<SelectBody>,
) -> HttpResponse {
    let (selected, count) = state.toggle_selected(&body.id);

    HttpResponse::Ok().json(json!({
        "selected": selected,
        "selectedCount": count,
    }))
}

#[post("/select-all")]
async fn select_all(
    state: web::Data<DashboardState>,
    query: web::Query<LeadQuery>,
) -> HttpResponse {
    let count = state.select_visible(&query.filters());

    HttpResponse::Ok().json(json!({ "selectedCount": count }))
}

#[post("/clear-selection")]
async fn clear_selection(state: web::Data<DashboardState>) -> HttpResponse {
    state.clear_selection();

    HttpResponse::Ok().json(json!({ "selectedCount": 0 }))
}
