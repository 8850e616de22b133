use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod availability;
mod counter;
mod contact {
    pub mod delivery;
    pub mod form;
    pub mod validation;
}
mod components {
    pub mod animated_counter;
    pub mod footer;
    pub mod visibility;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod landing;
}

use pages::{about::About, contact::Contact, landing::Landing};

/// Past this many pixels the nav gets its solid background.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/kontakt")]
    Contact,
    #[at("/omoss")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::NotFound => {
            info!("Unknown route, showing not found");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"Sidan kunde inte hittas."}</p>
                    <Link<Route> to={Route::Home} classes="rainbow-button">
                        {"Till startsidan"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="globe-icon">{"🌐"}</span>
                    {"Websives"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    // section anchors live on the landing page
                    <a href="/#tjanster" class="nav-link" onclick={close_menu.clone()}>{"Tjänster"}</a>
                    <a href="/#priser" class="nav-link" onclick={close_menu.clone()}>{"Priser"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"Om oss"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Kontakt"}
                        </Link<Route>>
                    </div>
                    <a
                        href={config::BOOKING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                        onclick={close_menu}
                    >
                        {"Boka Konsultation"}
                    </a>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .rainbow-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #fff;
                    text-decoration: none;
                    background: linear-gradient(#121213, #121213) padding-box,
                        linear-gradient(90deg, #ff4d4d, #f9cb28, #4ade80, #60a5fa, #c084fc) border-box;
                    border: 2px solid transparent;
                    background-size: 200%;
                    animation: rainbow 3s linear infinite;
                }
                @keyframes rainbow {
                    from { background-position: 0%; }
                    to { background-position: 200%; }
                }
                .gradient-text {
                    background: linear-gradient(90deg, #818cf8, #c084fc, #f472b6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 1.5rem;
                    transition: background 0.3s, backdrop-filter 0.3s;
                }
                .top-nav.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #fff; }
                .nav-cta {
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #000;
                    font-weight: 600;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                }
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                }
                .not-found h1 { font-size: 4rem; margin: 0; }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(0, 0, 0, 0.95);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal { transition: none; }
                    .rainbow-button { animation: none; }
                }
                "#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
        }
}


fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting Websives");
    yew::Renderer::<App>::new().render();
}
