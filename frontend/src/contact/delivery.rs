use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;

use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use web_sys::AbortController;

use super::validation::{field_errors_from_body, ContactFields, FieldErrors};

/// Longest the backend spends forwarding one message before answering 504.
pub const SERVER_SEND_BOUND_MS: u32 = 15_000;

/// Must outlast the server bound, otherwise the browser gives up on a
/// message the server still delivers and the user sends it again.
pub const DELIVERY_TIMEOUT_MS: u32 = SERVER_SEND_BOUND_MS + 5_000;

/// What gets sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

impl ContactPayload {
    pub fn from_fields(fields: &ContactFields) -> Self {
        let company = fields.company.trim();
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            message: fields.message.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeliveryError {
    Timeout,
    Network(String),
    Rejected { status: u16, message: String },
    /// The backend refused specific fields.
    Invalid(FieldErrors),
    Aborted,
}

impl DeliveryError {
    /// Text shown above the submit button after a failed attempt.
    pub fn user_message(&self) -> &'static str {
        match self {
            DeliveryError::Timeout | DeliveryError::Rejected { status: 504, .. } => {
                "Det tog för lång tid att skicka meddelandet. Försök igen."
            }
            DeliveryError::Rejected { status: 429, .. } => {
                "Du har skickat många meddelanden på kort tid. Vänta en minut och försök igen."
            }
            DeliveryError::Invalid(_) | DeliveryError::Rejected { status: 422, .. } => {
                "Kontrollera uppgifterna i formuläret och försök igen."
            }
            _ => "Något gick fel när meddelandet skulle skickas. Försök igen eller maila oss direkt.",
        }
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::Timeout => write!(f, "delivery timed out"),
            DeliveryError::Network(e) => write!(f, "network error: {}", e),
            DeliveryError::Rejected { status, message } => {
                write!(f, "rejected with status {}: {}", status, message)
            }
            DeliveryError::Invalid(errors) => write!(f, "{} field(s) rejected", errors.len()),
            DeliveryError::Aborted => write!(f, "delivery aborted"),
        }
    }
}

/// Hands a contact message to whoever delivers it.
pub trait MessageDelivery {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<Ack, DeliveryError>>;
}

/// Races a request against a timeout. `on_timeout` runs only when the
/// timeout wins, so the losing request can be cancelled.
pub async fn race_timeout<R, T>(
    request: R,
    timeout: T,
    on_timeout: impl FnOnce(),
) -> Result<Ack, DeliveryError>
where
    R: Future<Output = Result<Ack, DeliveryError>>,
    T: Future<Output = ()>,
{
    match future::select(Box::pin(request), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            on_timeout();
            Err(DeliveryError::Timeout)
        }
    }
}

/// Posts the payload as JSON to the backend contact endpoint.
pub struct HttpDelivery {
    endpoint: String,
    timeout_ms: u32,
    abort: Option<AbortController>,
}

impl HttpDelivery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_ms: DELIVERY_TIMEOUT_MS,
            abort: None,
        }
    }

    /// Ties the request to `controller`; it is also aborted on timeout.
    pub fn with_abort(mut self, controller: Option<AbortController>) -> Self {
        self.abort = controller;
        self
    }
}

impl MessageDelivery for HttpDelivery {
    fn deliver(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<Ack, DeliveryError>> {
        let endpoint = self.endpoint.clone();
        let signal = self.abort.as_ref().map(|c| c.signal());
        let abort = self.abort.clone();
        let timeout = TimeoutFuture::new(self.timeout_ms);

        let request = async move {
            let aborted = |signal: &Option<web_sys::AbortSignal>| signal.as_ref().map_or(false, |s| s.aborted());

            let response = Request::post(&endpoint)
                .abort_signal(signal.as_ref())
                .json(&payload)
                .map_err(|e| DeliveryError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    if aborted(&signal) {
                        DeliveryError::Aborted
                    } else {
                        DeliveryError::Network(e.to_string())
                    }
                })?;

            if response.ok() {
                response
                    .json::<Ack>()
                    .await
                    .map_err(|e| DeliveryError::Network(e.to_string()))
            } else {
                let status = response.status();
                match response.json::<ErrorBody>().await {
                    Ok(body) if status == 422 && !body.fields.is_empty() => {
                        Err(DeliveryError::Invalid(field_errors_from_body(&body.fields)))
                    }
                    Ok(body) => Err(DeliveryError::Rejected { status, message: body.error }),
                    Err(_) => Err(DeliveryError::Rejected { status, message: String::new() }),
                }
            }
        };

        race_timeout(request, timeout, move || {
            if let Some(controller) = abort {
                controller.abort();
            }
        })
        .boxed_local()
    }
}


#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn payload_trims_and_drops_blank_company() {
        let fields = ContactFields {
            name: "  Lisa Bergström ".to_string(),
            email: " lisa@yoga.se".to_string(),
            company: "   ".to_string(),
            message: "Hej! Vi behöver en ny hemsida.\n".to_string(),
        };
        let payload = ContactPayload::from_fields(&fields);
        assert_eq!(payload.name, "Lisa Bergström");
        assert_eq!(payload.email, "lisa@yoga.se");
        assert_eq!(payload.company, None);
        assert_eq!(payload.message, "Hej! Vi behöver en ny hemsida.");

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("company").is_none());
    }

    #[test]
    fn payload_keeps_company_when_given() {
        let fields = ContactFields {
            company: " North Creative ".to_string(),
            ..ContactFields::default()
        };
        let json = serde_json::to_value(ContactPayload::from_fields(&fields)).unwrap();
        assert_eq!(json["company"], "North Creative");
    }

    #[test]
    fn rate_limited_rejection_has_its_own_message() {
        let limited = DeliveryError::Rejected { status: 429, message: String::new() };
        let broken = DeliveryError::Rejected { status: 502, message: String::new() };
        assert_ne!(limited.user_message(), broken.user_message());
        assert_eq!(broken.user_message(), DeliveryError::Network("x".into()).user_message());
    }

    #[test]
    fn client_waits_longer_than_the_server_forwards() {
        assert!(DELIVERY_TIMEOUT_MS > SERVER_SEND_BOUND_MS);
    }

    #[test]
    fn timeout_cancels_the_pending_request() {
        use std::cell::Cell;

        let cancelled = Cell::new(false);
        let result = block_on(race_timeout(
            future::pending(),
            future::ready(()),
            || cancelled.set(true),
        ));
        assert_eq!(result, Err(DeliveryError::Timeout));
        assert!(cancelled.get());
    }

    #[test]
    fn answer_before_timeout_is_kept() {
        use std::cell::Cell;

        let cancelled = Cell::new(false);
        let result = block_on(race_timeout(
            future::ready(Ok(Ack { message: "ok".to_string() })),
            future::pending(),
            || cancelled.set(true),
        ));
        assert!(result.is_ok());
        assert!(!cancelled.get());
    }

    #[test]
    fn server_timeout_reads_like_a_client_timeout() {
        let gateway = DeliveryError::Rejected { status: 504, message: String::new() };
        assert_eq!(gateway.user_message(), DeliveryError::Timeout.user_message());
        let invalid = DeliveryError::Invalid(FieldErrors::new());
        assert_eq!(
            invalid.user_message(),
            DeliveryError::Rejected { status: 422, message: String::new() }.user_message()
        );
    }
}
