use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, FromRequestParts, State},
    http::{request::Parts, StatusCode},
    Json,
};
use futures::Future;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::handlers::contact_dtos::{ContactRequest, ContactResponse};
use crate::utils::validation::validate_contact;
use crate::AppState;

/// Who is submitting, for rate limiting. Keyed on the connecting peer;
/// `X-Forwarded-For` is only read when that peer is a trusted proxy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientKey(pub String);

/// Resolves the address to rate limit. Walks `X-Forwarded-For` from the
/// right, skipping trusted proxies, so a client cannot choose its own key by
/// prepending hops.
pub fn client_address(
    peer: Option<IpAddr>,
    forwarded_for: Option<&str>,
    trusted_proxies: &[IpAddr],
) -> Option<IpAddr> {
    let peer = peer?;
    if !trusted_proxies.contains(&peer) {
        return Some(peer);
    }

    let forwarded = forwarded_for.and_then(|header| {
        header
            .rsplit(',')
            .map(|hop| hop.trim().parse::<IpAddr>())
            .take_while(Result::is_ok)
            .filter_map(Result::ok)
            .find(|hop| !trusted_proxies.contains(hop))
    });

    Some(forwarded.unwrap_or(peer))
}

impl FromRequestParts<Arc<AppState>> for ClientKey {
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        let forwarded_for = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|header| header.to_str().ok());

        let key = client_address(peer, forwarded_for, &state.trusted_proxies)
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        async move { Ok(ClientKey(key)) }
    }
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ClientKey(client): ClientKey,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if !state.limiter.allow(&client) {
        warn!("Contact rate limit hit for {}", client);
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many messages, try again in a minute"})),
        ));
    }

    let Json(request) = payload.map_err(|rejection| {
        warn!("Malformed contact request: {}", rejection.body_text());
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid request body"})),
        )
    })?;

    let issues = validate_contact(&request);
    if !issues.is_empty() {
        info!("Rejected contact request with {} invalid field(s)", issues.len());
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "Validation failed",
                "fields": issues,
            })),
        ));
    }

    let message = request.into_message(chrono::Utc::now());
    let from = message.email.clone();

    match tokio::time::timeout(state.send_timeout, state.mailer.send(message)).await {
        Ok(Ok(())) => {
            info!("Forwarded contact message from {}", from);
            let response = ContactResponse {
                message: "Message received".to_string(),
            };
            Ok(Json(json!(response)))
        }
        Ok(Err(e)) => {
            error!("Failed to forward contact message from {}: {}", from, e);
            sentry::capture_error(&e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "Could not deliver message"})),
            ))
        }
        Err(_) => {
            error!(
                "Forwarding contact message from {} timed out after {:?}",
                from, state.send_timeout
            );
            Err((
                StatusCode::GATEWAY_TIMEOUT,
                Json(json!({"error": "Message delivery timed out"})),
            ))
        }
    }
}
