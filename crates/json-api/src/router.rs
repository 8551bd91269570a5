//! App Router

use std::sync::Arc;

use salvo::{
    Router,
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{auth, counters, healthcheck, observability, state::State, variants};

/// Routes that require a bearer token.
pub(crate) fn api_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("variants")
                .get(variants::index::handler)
                .push(
                    Router::with_path("{variant_id}")
                        .get(variants::get::handler)
                        .put(variants::update::handler),
                ),
        )
        .push(
            Router::with_path("counters")
                .get(counters::index::handler)
                .push(Router::with_path("{day}").get(counters::get::handler)),
        )
        .push(Router::with_path("test-payments").post(counters::increment::handler))
}

/// Full service tree with middleware, public endpoints, and API docs.
pub(crate) fn service(state: Arc<State>) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(api_router());

    let doc = OpenApi::new("Storefront API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    Service::new(router)
}
