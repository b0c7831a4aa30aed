use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};

use iq_core::{evaluate, CoreError, Mode, ModeRequest};

use crate::schema::{Catalogue, ErrorBody, ErrorResponse};

pub struct HttpServerConfig {
    pub bind_addr: String,
}

pub async fn run(config: HttpServerConfig) -> Result<(), String> {
    let app = build_router();
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|err| format!("bind {} failed: {}", config.bind_addr, err))?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {}", err))
}

pub fn build_router() -> Router {
    Router::new()
        .route("/v1/modes", get(list_modes))
        .route("/v1/modes/{slug}", get(get_mode))
        .route("/v1/modes/{slug}/default", get(evaluate_default))
        .route("/v1/evaluate", post(evaluate_request))
}

async fn list_modes() -> Json<Catalogue> {
    Json(Catalogue::new())
}

async fn get_mode(Path(slug): Path<String>) -> Response {
    match slug.parse::<Mode>() {
        Ok(mode) => Json(mode.info()).into_response(),
        Err(err) => core_error(err),
    }
}

async fn evaluate_default(Path(slug): Path<String>) -> Response {
    let mode = match slug.parse::<Mode>() {
        Ok(mode) => mode,
        Err(err) => return core_error(err),
    };
    respond(&ModeRequest::defaults(mode))
}

async fn evaluate_request(payload: Result<Json<ModeRequest>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(request)) => respond(&request),
        Err(rejection) => {
            warn!(%rejection, "request body rejected");
            api_error(
                StatusCode::BAD_REQUEST,
                "INVALID_REQUEST",
                &rejection.body_text(),
                Some(mode_slugs()),
            )
        }
    }
}

fn respond(request: &ModeRequest) -> Response {
    match evaluate(request) {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            warn!(mode = request.mode().slug(), %err, "evaluation rejected");
            core_error(err)
        }
    }
}

fn core_error(err: CoreError) -> Response {
    let (status, code) = match &err {
        CoreError::OutOfRange { .. } => (StatusCode::BAD_REQUEST, "OUT_OF_RANGE"),
        CoreError::NotFinite { .. } => (StatusCode::BAD_REQUEST, "NOT_FINITE"),
        CoreError::UnknownMode(_) => (StatusCode::NOT_FOUND, "MODE_NOT_FOUND"),
        CoreError::Device(_) => (StatusCode::UNPROCESSABLE_ENTITY, "DOMAIN_ERROR"),
    };
    let details = match &err {
        CoreError::UnknownMode(_) => Some(mode_slugs()),
        _ => None,
    };
    api_error(status, code, &err.to_string(), details)
}

fn mode_slugs() -> Vec<String> {
    Mode::ALL.iter().map(|m| m.slug().to_string()).collect()
}

fn api_error(
    status: StatusCode,
    code: &str,
    message: &str,
    details: Option<Vec<String>>,
) -> Response {
    let body = ErrorResponse {
        error: ErrorBody {
            code: code.to_string(),
            message: message.to_string(),
            details,
        },
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use iq_core::params::RadiationParams;
    use iq_core::Report;

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn catalogue_lists_every_mode() {
        let Json(catalogue) = list_modes().await;
        assert_eq!(catalogue.modes.len(), 5);
        assert_eq!(catalogue.modes[0].slug, "mosfet-iv");
    }

    #[tokio::test]
    async fn unknown_mode_is_not_found() {
        let response = get_mode(Path("bjt".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error.code, "MODE_NOT_FOUND");
        assert_eq!(body.error.details.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn default_report_by_display_name() {
        let response = evaluate_default(Path("CNT Bandgap Explorer".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let report: Report = body_json(response).await;
        assert_eq!(report.mode, Mode::CntBandgap);
        assert_eq!(report.readouts.len(), 2);
    }

    #[tokio::test]
    async fn evaluate_returns_report() {
        let request = ModeRequest::Radiation(RadiationParams { dose_krad: 100.0 });
        let response = evaluate_request(Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let report: Report = body_json(response).await;
        assert_eq!(report.readouts[0].formatted(), "0.100");
    }

    #[tokio::test]
    async fn out_of_range_is_bad_request() {
        let request = ModeRequest::Radiation(RadiationParams { dose_krad: -1.0 });
        let response = evaluate_request(Ok(Json(request))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = body_json(response).await;
        assert_eq!(body.error.code, "OUT_OF_RANGE");
    }

    async fn post_evaluate(body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/v1/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let payload = Json::<ModeRequest>::from_request(request, &()).await;
        evaluate_request(payload).await
    }

    #[tokio::test]
    async fn undecodable_bodies_use_error_envelope() {
        for body in [
            r#"{"mode":"bjt"}"#,
            r#"{"mode":"cnt-bandgap","n":-1}"#,
            r#"{"mode":"cnt-bandgap","n":10.5}"#,
            r#"{"mode":"#,
        ] {
            let response = post_evaluate(body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
            let error: ErrorResponse = body_json(response).await;
            assert_eq!(error.error.code, "INVALID_REQUEST", "{}", body);
            assert!(!error.error.message.is_empty());
            assert_eq!(error.error.details.unwrap(), mode_slugs());
        }
    }

    #[tokio::test]
    async fn decodable_body_is_evaluated() {
        let response = post_evaluate(r#"{"mode":"cnt-bandgap","n":10,"m":0}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = body_json(response).await;
        assert_eq!(error.error.code, "OUT_OF_RANGE");

        let response = post_evaluate(r#"{"mode":"mobility"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn domain_error_maps_to_unprocessable() {
        let err = CoreError::Device(iq_core::DeviceError::NonPositiveOxide { tox: 0.0 });
        assert_eq!(core_error(err).status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
