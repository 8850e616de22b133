use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::footer::Footer;
use crate::components::visibility::Reveal;
use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

struct Offering {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    side: Side,
}

const OFFERINGS: [Offering; 6] = [
    Offering {
        icon: "🖌",
        title: "Webbdesign",
        text: "Vi skapar moderna och responsiva webbsidor som inte bara ser fantastiska ut, utan också levererar exceptionella användarupplevelser som konverterar besökare till kunder.",
        side: Side::Left,
    },
    Offering {
        icon: "🏷",
        title: "Varumärke",
        text: "Vi hjälper dig stärka ditt varumärke online med konsekvent design och tydlig kommunikation som bygger förtroende och skapar emotionella kopplingar till din målgrupp.",
        side: Side::Left,
    },
    Offering {
        icon: "📈",
        title: "SEO & Marknadsföring",
        text: "Vi optimerar dina sidor för Google och implementerar digitala marknadsstrategier som driver kvalificerad trafik till din hemsida.",
        side: Side::Left,
    },
    Offering {
        icon: "🧭",
        title: "UX/UI Design",
        text: "Vår designprocess förenar kreativitet med användardata. Resultatet? Intuitiva gränssnitt som besökare älskar att interagera med och som leder till fler affärer.",
        side: Side::Right,
    },
    Offering {
        icon: "🛠",
        title: "Support & Underhåll",
        text: "Vill du ändra något efter lansering? Inga problem. Välj själv: fast månadspris för löpande support eller betala per gång när du behöver oss. Du har full kontroll.",
        side: Side::Right,
    },
    Offering {
        icon: "💙",
        title: "Namnet Websives",
        text: "Vårt namn bär på en personlig historia. Websives är en hyllning till min lillebror Sive och ett löfte om att lägga hjärta i varje pixel. Det handlar inte bara om webbsidor. Det handlar om mening.",
        side: Side::Right,
    },
];

fn offering_column(side: Side) -> Html {
    html! {
        <div class="offering-column">
            { for OFFERINGS.iter().filter(|o| o.side == side).enumerate().map(|(i, o)| html! {
                <Reveal class="offering" delay_ms={200 * i as u32}>
                    <div class="offering-head">
                        <span class="offering-icon">{o.icon}</span>
                        <h3>{o.title}</h3>
                    </div>
                    <p>{o.text}</p>
                </Reveal>
            }) }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-section">
                <Reveal class="about-header">
                    <span class="eyebrow">{"UPPTÄCK VÅR HISTORIA"}</span>
                    <h1>{"Om Oss"}</h1>
                    <div class="underline"></div>
                </Reveal>

                <Reveal class="about-story" delay_ms={200}>
                    <p>
                        {"Vi är ett svenskt team av designers och utvecklare som brinner för att skapa moderna, funktionella webbsidor med känsla och mening. Med noggrannhet i detaljer och en djup passion för design hjälper vi svenska företag att ta plats online. Men Websives är mer än bara ett namn. Det är en hyllning till min bror, Sive, som gick bort i plötslig spädbarnsdöd. När jag startade detta företag visste jag att hans namn skulle leva vidare, och det gör det nu, i varje projekt vi levererar."}
                    </p>
                </Reveal>

                <div class="offerings">
                    { offering_column(Side::Left) }
                    { offering_column(Side::Right) }
                </div>

                <div class="about-stats">
                    <Reveal class="about-stat">
                        <div class="about-stat-icon">{"🏅"}</div>
                        <div class="about-stat-value"><AnimatedCounter target={150} suffix="+" /></div>
                        <p>{"Slutförda Projekt"}</p>
                    </Reveal>
                    <Reveal class="about-stat" delay_ms={200}>
                        <div class="about-stat-icon">{"📊"}</div>
                        <div class="about-stat-value"><AnimatedCounter target={98} suffix="%" /></div>
                        <p>{"Nöjdhetsgrad"}</p>
                    </Reveal>
                </div>

                <Reveal class="about-cta">
                    <h2>{"Redo att ta nästa steg?"}</h2>
                    <Link<Route> to={Route::Contact} classes="rainbow-button">
                        {"Kontakta oss"}
                        <span class="arrow">{"→"}</span>
                    </Link<Route>>
                </Reveal>
            </section>

            <Footer />

            <style>
                {r#"
                .about-page {
                    min-height: 100vh;
                    background: #000;
                    color: #fff;
                }
                .about-section {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .about-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .eyebrow {
                    color: #60a5fa;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                }
                .about-header h1 {
                    font-size: clamp(2.5rem, 6vw, 3.75rem);
                    font-weight: 300;
                    margin: 1rem 0;
                }
                .underline {
                    width: 6rem;
                    height: 4px;
                    margin: 0 auto;
                    background: #60a5fa;
                }
                .about-story p {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 4rem;
                    color: #d1d5db;
                    font-size: 1.125rem;
                    line-height: 1.75;
                }
                .offerings {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    margin-bottom: 5rem;
                }
                .offering-column {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .offering-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .offering-icon {
                    font-size: 1.5rem;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    background: rgba(96, 165, 250, 0.1);
                }
                .offering h3 { font-size: 1.25rem; font-weight: 500; }
                .offering p { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; padding-left: 3.5rem; }
                .about-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    max-width: 36rem;
                    margin: 0 auto 5rem;
                }
                .about-stat {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                }
                .about-stat-icon { font-size: 1.75rem; margin-bottom: 1rem; }
                .about-stat-value { font-size: 1.875rem; font-weight: 700; }
                .about-stat p { color: #d1d5db; font-size: 0.875rem; }
                .about-cta { text-align: center; }
                .about-cta h2 { font-size: 1.75rem; margin-bottom: 1.5rem; }
                @media (max-width: 768px) {
                    .offerings, .about-stats {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
