use actix_web::web;
use medibook::{models::catalog::Catalog, store, AppState};

#[allow(dead_code)]
pub fn state() -> web::Data<AppState> {
    web::Data::new(AppState::new(Catalog::default(), "John Doe".to_string()))
}

#[allow(dead_code)]
pub fn seeded_state() -> web::Data<AppState> {
    let state = AppState::new(Catalog::default(), "John Doe".to_string());
    store::seed_demo(state.appointments.as_ref(), &state.catalog).unwrap();
    web::Data::new(state)
}

macro_rules! post_json {
    ($app:expr, $uri:expr, $body:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri($uri)
            .set_json(&$body)
            .to_request();
        let resp = actix_web::test::call_service(&$app, req).await;
        assert!(
            resp.status().is_success(),
            "{} failed (status: {:?})",
            $uri,
            resp.status()
        );
        let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
        body
    }};
}
