use yew::prelude::*;

use crate::availability::{Availability, SystemClock, MONTHLY_CAPACITY};
use crate::components::animated_counter::AnimatedCounter;
use crate::components::footer::Footer;
use crate::components::visibility::Reveal;
use crate::config;

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    points: [&'static str; 3],
}

const SERVICES: [Service; 3] = [
    Service {
        icon: "⚡",
        title: "Snabbleverans",
        text: "Få din professionella webbsida levererad inom 72 timmar. Perfekt för företag som behöver komma igång snabbt.",
        points: ["Responsiv design", "SEO-optimerad", "Snabb laddningstid"],
    },
    Service {
        icon: "🎯",
        title: "Optimering",
        text: "Vi bygger inte bara vackra webbsidor - vi bygger webbsidor som förvandlar besökare till betalande kunder.",
        points: ["A/B-testad design", "Psykologiska triggers", "Tydliga call-to-actions"],
    },
    Service {
        icon: "🏆",
        title: "Premium Support",
        text: "Få personlig support från vårt expertteam. Vi finns här för att säkerställa att din webbsida presterar optimalt.",
        points: ["Personlig rådgivning", "30 dagar fri support", "Svar inom 24h"],
    },
];

struct Plan {
    icon: &'static str,
    name: &'static str,
    price: &'static str,
    pitch: &'static str,
    features: &'static [&'static str],
    note: &'static str,
    cta: &'static str,
    link: &'static str,
    featured: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        icon: "💡",
        name: "Starter",
        price: "4 200",
        pitch: "För lokala företag som bara vill ha en enkel, ren webbsida, snabbt.",
        features: &[
            "Enkel landningssida levererad inom 72 timmar",
            "Mobiloptimerad, blixtsnabb laddning",
            "Byggd för att få ditt erbjudande live direkt",
        ],
        note: "Perfekt för att testa en idé eller lansera snabbt utan att övertänka.",
        cta: "Kom Igång",
        link: "https://cal.com/websives/starter",
        featured: false,
    },
    Plan {
        icon: "🚀",
        name: "Growth",
        price: "5 800",
        pitch: "Vårt toppval för företag redo att öka bokningar och försäljning, snabbt.",
        features: &[
            "Allt i Starter",
            "Fullständig webbsida (flera sektioner) levererad inom 72 timmar",
            "Copywriting anpassad för din målgrupp",
            "Byggd för förtroende, tydlighet och resultat",
        ],
        note: "Den perfekta balansen mellan kvalitet, hastighet och konverteringskraft.",
        cta: "Välj Growth",
        link: "https://cal.com/websives/growth",
        featured: true,
    },
    Plan {
        icon: "💎",
        name: "Premium",
        price: "9 900",
        pitch: "För varumärken som vill dominera sin marknad och se professionella ut.",
        features: &[
            "Allt i Growth",
            "Helt skräddarsydd, flersidig webbsida",
            "Strategisk konsultation innan projektet börjar",
            "Prioriterad leverans + support efter lansering",
            "Ser premium ut. Känns premium. Konverterar bättre.",
        ],
        note: "Du satsar inte småskaligt, det gör inte heller din webbsida.",
        cta: "Välj Premium",
        link: "https://cal.com/websives/premium",
        featured: false,
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
    rating: usize,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Lisa Bergström",
        role: "Ägare, L.B. Yoga & Hälsa",
        quote: "Jag visste inte ens vad jag ville ha exakt, men Websives lyckades ändå få till en hemsida som verkligen känns som mig. Den är snygg, enkel och mina kunder hittar allt direkt.",
        rating: 5,
    },
    Testimonial {
        name: "Johan Falk",
        role: "VD, Falk Teknikpartner AB",
        quote: "Fantastisk upplevelse rakt igenom. Från första mötet till lansering så kände jag att de hade koll. Vi har fått fler förfrågningar via hemsidan sedan lanseringen.",
        rating: 5,
    },
    Testimonial {
        name: "Mia Ekholm",
        role: "Marknadschef, North Creative",
        quote: "Det bästa var nog hur lyhörda de var. Vi hade mycket egna idéer, och de lyckades kombinera det med sin expertis. Resultatet blev riktigt bra.",
        rating: 5,
    },
];

const CLIENT_LOGOS: [&str; 10] = [
    "Solstråle Byggkonsult",
    "FjällTech Automatisering",
    "Norden Digital Studio",
    "PärlMat AB",
    "ArkNord Innovation",
    "VinterGrön Solutions",
    "HavsRörelse Media",
    "BergsVäg Infrastruktur",
    "SkogsGlöd Technologies",
    "Havsbris Design",
];

fn booking_button(label: &'static str, link: &'static str) -> Html {
    html! {
        <a href={link} target="_blank" rel="noopener noreferrer" class="rainbow-button">
            {label}
            <span class="arrow">{"→"}</span>
        </a>
    }
}

#[function_component(LogoScroller)]
fn logo_scroller() -> Html {
    html! {
        <div class="logo-scroller">
            <div class="logo-track">
                // three copies so the strip never runs dry mid-scroll
                { for (0..3).map(|copy| html! {
                    <div class="logo-set" key={copy.to_string()}>
                        { for CLIENT_LOGOS.iter().map(|logo| html! { <span class="client-logo">{*logo}</span> }) }
                    </div>
                }) }
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let availability = Availability::now(&SystemClock);
    let tone = availability.tone();

    html! {
        <div class="landing-page">
            <div class="grid-background"></div>

            <section class="hero">
                <div class="hero-content fade-up">
                    <h1>
                        {"Snabbare webbsidor."}
                        <br />
                        <span class="gradient-text">{"Fler kunder."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Vi bygger professionella webbsidor som konverterar besökare till kunder. Leverans inom 72 timmar. Byggt för svenska företag."}
                    </p>
                </div>
                <div class="hero-cta-group fade-up delay-1">
                    { booking_button("Få Din Webbsida På 72h", config::BOOKING_URL) }
                    <div class="hero-checks">
                        <span>{"✓ Leverans inom 72h"}</span>
                        <span>{"✓ Hosting"}</span>
                        <span>{"✓ 100% nöjdhetsgaranti"}</span>
                    </div>
                </div>
                <div class="hero-stats fade-up delay-2">
                    <div class="stat">
                        <div class="stat-value blue"><AnimatedCounter target={150} suffix="+" /></div>
                        <p>{"Nöjda Kunder"}</p>
                    </div>
                    <div class="stat">
                        <div class="stat-value purple"><AnimatedCounter target={72} />{"h"}</div>
                        <p>{"Genomsnittlig Leveranstid"}</p>
                    </div>
                    <div class="stat">
                        <div class="stat-value pink"><AnimatedCounter target={98} suffix="%" /></div>
                        <p>{"Kundnöjdhet"}</p>
                    </div>
                </div>
            </section>

            <section id="tjanster" class="section">
                <Reveal class="section-header">
                    <h2>{"Våra Tjänster"}</h2>
                    <p>{"Från enkla landningssidor till avancerade företagswebbsidor. Vi levererar kvalitet som konverterar."}</p>
                </Reveal>
                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal class="card" delay_ms={100 * (i as u32 + 1)}>
                            <div class="card-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.text}</p>
                            <ul class="check-list">
                                { for service.points.iter().map(|point| html! { <li>{"✓ "}{*point}</li> }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="priser" class="section">
                <Reveal class="section-header">
                    <h2>{"Enkla Priser"}</h2>
                    <p>{"Lansera snabbare. Konvertera bättre. Byggt för svenska företag."}</p>
                </Reveal>
                <div class="card-grid pricing">
                    { for PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <Reveal class={classes!("card", "plan", plan.featured.then(|| "featured"))} delay_ms={100 * (i as u32 + 1)}>
                            if plan.featured {
                                <div class="popular-badge">{"🔥 Mest Populär"}</div>
                            }
                            <div class="plan-head">
                                <h3>{plan.icon}{" "}{plan.name}</h3>
                                <div class="plan-price">{plan.price}<span>{" kr"}</span></div>
                                <p>{plan.pitch}</p>
                            </div>
                            <ul class="plan-features">
                                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                            <p class="plan-note">{plan.note}</p>
                            <a href={plan.link} target="_blank" rel="noopener noreferrer" class="plan-cta">{plan.cta}</a>
                        </Reveal>
                    }) }
                </div>
                <Reveal class="payment-note" delay_ms={400}>
                    <p>{"Trygg betalning: 50% vid start, 50% när allt är klart och godkänt."}</p>
                </Reveal>
            </section>

            <section class="section">
                <Reveal class="section-header">
                    <h2>{"Vad Våra Kunder Säger"}</h2>
                    <p>{"Över 150 nöjda kunder har förvandlat sina företag med våra webbsidor"}</p>
                </Reveal>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal class="card testimonial" delay_ms={100 * (i as u32 + 1)}>
                            <div class="stars">{("★").repeat(t.rating)}</div>
                            <p class="quote">{format!("\"{}\"", t.quote)}</p>
                            <p class="author">{t.name}</p>
                            <p class="role">{t.role}</p>
                        </Reveal>
                    }) }
                </div>
                <Reveal delay_ms={400}>
                    <LogoScroller />
                </Reveal>
                <Reveal class="centered" delay_ms={500}>
                    { booking_button("Bli Nästa Nöjda Kund", config::BOOKING_URL) }
                </Reveal>
            </section>

            <section class="section limited">
                <Reveal>
                    <h2>{"⏰ Begränsade Platser"}</h2>
                    <p class="limited-text">
                        {format!("Vi kan endast hantera {} nya projekt per månad för att garantera maximal kvalitet & snabbhet.", MONTHLY_CAPACITY)}
                    </p>
                    <div class="limited-spots-box">
                        <p class="spots-label">{format!("Antal platser kvar i {}:", availability.month)}</p>
                        <p
                            class={classes!("spots-count", tone.class())}
                            style={format!("filter: drop-shadow(0 0 10px {});", tone.glow())}
                        >
                            {availability.spots_left}
                        </p>
                    </div>
                    <div class="limited-cta">
                        { booking_button("Säkra din plats", config::BOOKING_URL) }
                        <span class="limited-hint">{"30 min samtal • Ingen kostnad"}</span>
                    </div>
                    <div class="contact-strip">
                        <a href={config::CONTACT_PHONE_LINK}>{"📞 "}{config::CONTACT_PHONE}</a>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"✉ "}{config::CONTACT_EMAIL}</a>
                        <span>{"📍 "}{config::LOCATION}</span>
                    </div>
                </Reveal>
            </section>

            <Footer />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                    overflow: hidden;
                    position: relative;
                }
                .grid-background {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                    background-size: 60px 60px;
                    animation: gridDrift 20s linear infinite;
                }
                @keyframes gridDrift {
                    from { background-position: 0 0; }
                    to { background-position: 60px 60px; }
                }
                .hero {
                    position: relative;
                    z-index: 10;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hero h1 {
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #60a5fa, #a855f7, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }
                .hero-checks {
                    display: flex;
                    gap: 2rem;
                    justify-content: center;
                    margin-top: 2rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 56rem;
                    margin: 3rem auto 0;
                }
                .stat-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }
                .stat-value.blue { color: #60a5fa; }
                .stat-value.purple { color: #c084fc; }
                .stat-value.pink { color: #f472b6; }
                .stat p { color: #9ca3af; }
                .fade-up {
                    opacity: 0;
                    animation: fadeUp 0.8s ease-out forwards;
                }
                .fade-up.delay-1 { animation-delay: 0.2s; }
                .fade-up.delay-2 { animation-delay: 0.4s; }
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .section {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1.5rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-header h2,
                .limited h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .section-header p {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .card {
                    position: relative;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }
                .card:hover { border-color: rgba(255, 255, 255, 0.2); }
                .card-icon { font-size: 2.5rem; margin-bottom: 1.5rem; }
                .card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                .card p { color: #d1d5db; margin-bottom: 1.5rem; }
                .check-list, .plan-features {
                    list-style: none;
                    padding: 0;
                    color: #9ca3af;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .plan.featured {
                    background: linear-gradient(135deg, rgba(59, 130, 246, 0.1), rgba(168, 85, 247, 0.1));
                    border: 2px solid rgba(59, 130, 246, 0.5);
                    transform: scale(1.05);
                }
                .popular-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: linear-gradient(90deg, #facc15, #f97316, #ec4899);
                    color: #000;
                    padding: 0.375rem 2rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 700;
                    white-space: nowrap;
                }
                .plan-head { text-align: center; margin-bottom: 1.5rem; }
                .plan-price { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                .plan-price span { font-size: 1.125rem; color: #9ca3af; }
                .plan-features { flex-grow: 1; margin-bottom: 2rem; }
                .plan-features li::before { content: "• "; color: #60a5fa; }
                .plan-note { font-style: italic; font-size: 0.875rem; color: #6b7280 !important; }
                .plan-cta {
                    margin-top: auto;
                    display: block;
                    text-align: center;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    background: #1f2937;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                }
                .plan.featured .plan-cta {
                    background: linear-gradient(90deg, #3b82f6, #9333ea);
                }
                .payment-note { text-align: center; color: #9ca3af; font-style: italic; }
                .testimonial .stars { color: #facc15; margin-bottom: 1rem; }
                .testimonial .quote { font-style: italic; flex-grow: 1; }
                .testimonial .author { font-weight: 600; color: #fff; margin: 0; }
                .testimonial .role { color: #9ca3af; font-size: 0.875rem; margin: 0; }
                .logo-scroller {
                    width: 100%;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 0.5rem;
                    padding: 1.5rem 0;
                    margin-bottom: 3rem;
                }
                .logo-track {
                    display: flex;
                    white-space: nowrap;
                    animation: logoScroll 30s linear infinite;
                }
                .logo-set { display: flex; gap: 1.5rem; padding: 0 0.75rem; }
                .client-logo { color: #9ca3af; font-size: 1.125rem; opacity: 0.8; }
                @keyframes logoScroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-33.333%); }
                }
                .centered { text-align: center; }
                .limited { text-align: center; max-width: 56rem; }
                .limited-text { font-size: 1.25rem; color: #d1d5db; max-width: 42rem; margin: 0 auto 2rem; }
                .limited-spots-box {
                    border: 1px solid rgba(249, 115, 22, 0.4);
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 2rem;
                }
                .spots-label { font-size: 1.75rem; font-weight: 700; }
                .spots-count { font-size: 1.75rem; font-weight: 700; }
                .spots-plenty { color: #4ade80; }
                .spots-good { color: #a3e635; }
                .spots-few { color: #facc15; }
                .spots-last { color: #fb923c; }
                .limited-cta {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 2rem;
                }
                .limited-hint { color: #9ca3af; font-size: 0.875rem; }
                .contact-strip {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .contact-strip a { color: inherit; text-decoration: none; }
                .contact-strip a:hover { color: #fff; }
                @media (max-width: 768px) {
                    .hero-stats, .card-grid, .contact-strip {
                        grid-template-columns: 1fr;
                    }
                    .hero-checks { flex-direction: column; gap: 0.5rem; }
                    .plan.featured { transform: none; }
                }
                "#}
            </style>
        </div>
    }
}
