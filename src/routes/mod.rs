// Route exports
pub mod reverse_logistics;

use actix_web::web;

pub use reverse_logistics::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(reverse_logistics::configure),
    );
}
