use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::{
    domain::lead::{Lead, LeadStats},
    routes::lead_route::LeadQuery,
    services::{sort_leads, DashboardState, SortDirection, SortField},
};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    stats: LeadStats,
    leads: Vec<Lead>,
    total: usize,
    selected: usize,
}

#[get("/dashboard")]
async fn dashboard(
    state: web::Data<DashboardState>,
    query: web::Query<LeadQuery>,
) -> HttpResponse {
    let filtered = state.filtered(&query.filters());
    let stats = LeadStats::compute(&filtered);
    let leads = sort_leads(&filtered, SortField::Score, SortDirection::Desc);

    HttpResponse::Ok().body(
        DashboardTemplate {
            stats,
            leads,
            total: state.total(),
            selected: state.selected_count(),
        }
        .render()
        .unwrap(),
    )
}
