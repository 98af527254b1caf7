use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use medibook::{models::catalog::Catalog, settings::Settings, store, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let catalog = Catalog::load(settings.catalog_path.as_deref())?;
    let state = AppState::new(catalog, settings.patient_name.clone());
    if settings.seed_demo {
        store::seed_demo(state.appointments.as_ref(), &state.catalog)?;
    }
    let state = web::Data::new(state);

    info!("Listening on {}", settings.bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(medibook::config)
    })
    .bind(&settings.bind)
    .with_context(|| format!("Binding {}", settings.bind))?
    .run()
    .await
    .context("Server error")
}
