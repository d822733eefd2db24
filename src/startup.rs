use std::net::TcpListener;

use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    routes::{dashboard_route, default_route, lead_route},
    services::DashboardState,
};

pub fn run(listener: TcpListener, state: Data<DashboardState>) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(
                web::scope("/lead")
                    .service(lead_route::get_leads)
                    .service(lead_route::generate_leads)
                    .service(lead_route::export_leads)
                    .service(lead_route::lead_stats)
                    .service(lead_route::toggle_select)
                    .service(lead_route::select_all)
                    .service(lead_route::clear_selection),
            )
            .service(web::scope("/app").service(dashboard_route::dashboard))
            .app_data(state.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
