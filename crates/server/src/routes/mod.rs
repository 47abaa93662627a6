pub mod calendar;
pub mod devis;
pub mod entretien;
pub mod literals;
pub mod pneumatiques;
pub mod prestation;
pub mod rendezvous;
pub mod service;
pub mod user;

use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(calendar::router())
        .merge(devis::router())
        .merge(entretien::router())
        .merge(literals::router())
        .merge(pneumatiques::router())
        .merge(prestation::router())
        .merge(rendezvous::router())
        .merge(service::router())
        .merge(user::router())
}
