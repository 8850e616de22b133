use futures::FutureExt;
use log::{debug, info, warn};
use web_sys::{AbortController, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::visibility::Reveal;
use crate::config;
use crate::contact::delivery::{Ack, DeliveryError, HttpDelivery, MessageDelivery};
use crate::contact::form::{ContactForm, SubmissionPhase, SubmitBlocked};
use crate::contact::validation::Field;

const COMPANY_STATS: [(&str, &str, &str); 4] = [
    ("🕑", "< 2 timmar", "Svarstid"),
    ("🌐", "150+", "Nöjda Kunder"),
    ("🛡", "72h", "Leveranstid"),
    ("⚡", "98%", "Nöjdhetsgrad"),
];

pub enum ContactMsg {
    SetField(Field, String),
    Submit,
    Delivered(Result<Ack, DeliveryError>),
    Reset,
}

/// The contact form itself. Owns the controller and the in-flight request.
pub struct ContactSection {
    form: ContactForm,
    in_flight: Option<AbortController>,
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::new(),
            in_flight: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::SetField(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => match self.form.submit() {
                Ok(payload) => {
                    info!("Sending contact message from {}", payload.email);
                    let controller = AbortController::new().ok();
                    let delivery = HttpDelivery::new(config::contact_endpoint())
                        .with_abort(controller.clone());
                    self.in_flight = controller;
                    ctx.link()
                        .send_future(delivery.deliver(payload).map(ContactMsg::Delivered));
                    true
                }
                Err(SubmitBlocked::Invalid(errors)) => {
                    debug!("Contact form has {} invalid field(s)", errors.len());
                    true
                }
                Err(blocked) => {
                    warn!("Ignoring submit: {:?}", blocked);
                    false
                }
            },
            ContactMsg::Delivered(result) => {
                self.in_flight = None;
                self.form.complete(result);
                true
            }
            ContactMsg::Reset => {
                self.form.reset();
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(controller) = self.in_flight.take() {
            controller.abort();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="contact-form-card">
                <h3>{"Skicka ett meddelande"}</h3>
                <p class="form-intro">{"Berätta om ditt projekt så återkommer vi inom 24 timmar."}</p>
                {
                    if self.form.phase() == SubmissionPhase::Submitted {
                        self.render_success(ctx)
                    } else {
                        self.render_form(ctx)
                    }
                }
            </div>
        }
    }
}

impl ContactSection {
    fn input_callback(ctx: &Context<Self>, field: Field) -> Callback<InputEvent> {
        ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::SetField(field, input.value())
        })
    }

    fn error_line(&self, field: Field) -> Html {
        match self.form.error_message(field) {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        }
    }

    fn input_class(&self, field: Field) -> Classes {
        classes!("form-input", self.form.error(field).is_some().then(|| "has-error"))
    }

    fn render_form(&self, ctx: &Context<Self>) -> Html {
        let submitting = self.form.phase() == SubmissionPhase::Submitting;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::SetField(Field::Message, area.value())
        });

        html! {
            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="form-row">
                    <div class="form-field">
                        <input
                            type="text"
                            placeholder="Ditt Namn"
                            class={self.input_class(Field::Name)}
                            value={self.form.field(Field::Name).to_string()}
                            oninput={Self::input_callback(ctx, Field::Name)}
                        />
                        { self.error_line(Field::Name) }
                    </div>
                    <div class="form-field">
                        <input
                            type="email"
                            placeholder="E-postadress"
                            class={self.input_class(Field::Email)}
                            value={self.form.field(Field::Email).to_string()}
                            oninput={Self::input_callback(ctx, Field::Email)}
                        />
                        { self.error_line(Field::Email) }
                    </div>
                </div>
                <div class="form-field">
                    <input
                        type="text"
                        placeholder="Företag (Valfritt)"
                        class="form-input"
                        value={self.form.field(Field::Company).to_string()}
                        oninput={Self::input_callback(ctx, Field::Company)}
                    />
                </div>
                <div class="form-field">
                    <textarea
                        placeholder="Berätta om ditt projekt..."
                        rows="6"
                        class={self.input_class(Field::Message)}
                        value={self.form.field(Field::Message).to_string()}
                        oninput={on_message}
                    />
                    { self.error_line(Field::Message) }
                </div>
                if let Some(error) = self.form.delivery_error() {
                    <p class="delivery-error">{error.user_message()}</p>
                }
                <button type="submit" class="submit-button" disabled={submitting}>
                    if submitting {
                        <span class="spinner"></span>
                    } else {
                        {"Skicka Meddelande ➤"}
                    }
                </button>
            </form>
        }
    }

    fn render_success(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="form-success">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Meddelande skickat!"}</h3>
                <p>{"Tack för att du hörde av dig. Vi återkommer inom 24 timmar."}</p>
                <button class="reset-button" onclick={ctx.link().callback(|_| ContactMsg::Reset)}>
                    {"Skicka Nytt Meddelande"}
                </button>
            </div>
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-section">
                <Reveal class="contact-header">
                    <div class="talk-badge">
                        <span>{"✨ Låt oss prata"}</span>
                        <span class="pulse-dot"></span>
                    </div>
                    <h1>
                        {"Kom i"}
                        <br />
                        <span class="gradient-text">{"Kontakt"}</span>
                    </h1>
                    <p>
                        {"Redo att förvandla ditt företag med en professionell webbsida? Låt oss starta en konversation om dina mål och hur vi kan hjälpa dig att uppnå dem."}
                    </p>
                </Reveal>

                <Reveal class="contact-stats" delay_ms={200}>
                    { for COMPANY_STATS.iter().map(|(icon, value, label)| html! {
                        <div class="contact-stat">
                            <div class="contact-stat-icon">{*icon}</div>
                            <div class="contact-stat-value">{*value}</div>
                            <div class="contact-stat-label">{*label}</div>
                        </div>
                    }) }
                </Reveal>

                <div class="contact-columns">
                    <Reveal delay_ms={300}>
                        <ContactSection />
                    </Reveal>
                    <Reveal class="contact-methods" delay_ms={400}>
                        <h3>{"Andra sätt att nå oss"}</h3>
                        <p class="form-intro">{"Välj den metod som fungerar bäst för dig."}</p>
                        <a class="contact-method" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            <span class="method-icon">{"✉"}</span>
                            <div>
                                <h4>{"Maila Oss"}</h4>
                                <p>{"Kontakta oss via e-post"}</p>
                                <p class="method-value">{config::CONTACT_EMAIL}</p>
                            </div>
                        </a>
                        <a class="contact-method" href={config::CONTACT_PHONE_LINK}>
                            <span class="method-icon">{"📞"}</span>
                            <div>
                                <h4>{"Ring Oss"}</h4>
                                <p>{"Prata direkt med vårt team"}</p>
                                <p class="method-value">{config::CONTACT_PHONE}</p>
                            </div>
                        </a>
                        <div class="response-note">
                            <p>
                                {"Vi svarar snabbt, oftast inom 1–2 timmar under kontorstid. Du får alltid svar inom 24h, och vi bokar in ett kostnadsfritt samtal för att gå igenom ditt projekt."}
                            </p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #000, rgba(30, 27, 75, 0.2), #000);
                    color: #fff;
                }
                .contact-section {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem;
                }
                .contact-header {
                    text-align: center;
                    margin-bottom: 5rem;
                }
                .talk-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #4ade80;
                    animation: pulse 2s ease-in-out infinite;
                }
                @keyframes pulse {
                    50% { opacity: 0.4; }
                }
                .contact-header h1 {
                    font-size: clamp(2.5rem, 7vw, 4.5rem);
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                .contact-header p {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .contact-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 5rem;
                }
                .contact-stat {
                    text-align: center;
                    padding: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 1rem;
                }
                .contact-stat-icon { font-size: 1.5rem; margin-bottom: 0.75rem; }
                .contact-stat-value { font-size: 1.5rem; font-weight: 700; }
                .contact-stat-label { font-size: 0.875rem; color: rgba(255, 255, 255, 0.6); }
                .contact-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-form-card,
                .contact-methods {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 1.5rem;
                    padding: 2rem;
                }
                .contact-form-card h3,
                .contact-methods h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .form-intro { color: rgba(255, 255, 255, 0.6); margin-bottom: 2rem; }
                .contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    color: #fff;
                    font: inherit;
                    resize: none;
                }
                .form-input:focus { outline: none; border-color: rgba(129, 140, 248, 0.6); }
                .form-input.has-error { border-color: #f87171; }
                .field-error { color: #f87171; font-size: 0.875rem; margin-top: 0.5rem; }
                .delivery-error {
                    color: #fca5a5;
                    background: rgba(248, 113, 113, 0.1);
                    border: 1px solid rgba(248, 113, 113, 0.3);
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    margin: 0;
                }
                .submit-button,
                .reset-button {
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #6366f1, #a855f7, #f43f5e);
                    color: #fff;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .submit-button:disabled { opacity: 0.6; cursor: not-allowed; }
                .spinner {
                    display: inline-block;
                    width: 1.25rem;
                    height: 1.25rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                .form-success { text-align: center; padding: 3rem 0; }
                .success-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(74, 222, 128, 0.2);
                    color: #4ade80;
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .form-success p { color: rgba(255, 255, 255, 0.7); margin-bottom: 2rem; }
                .contact-method {
                    display: flex;
                    gap: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: inherit;
                    text-decoration: none;
                    transition: background 0.2s;
                }
                .contact-method:hover { background: rgba(255, 255, 255, 0.08); }
                .contact-method h4 { margin: 0 0 0.25rem; }
                .contact-method p { margin: 0; color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; }
                .contact-method .method-value { color: #a5b4fc; margin-top: 0.25rem; }
                .method-icon { font-size: 1.5rem; }
                .response-note p { color: rgba(255, 255, 255, 0.6); font-size: 0.875rem; line-height: 1.6; }
                @media (max-width: 900px) {
                    .contact-columns, .form-row { grid-template-columns: 1fr; }
                    .contact-stats { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
