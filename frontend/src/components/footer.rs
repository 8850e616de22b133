use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="globe-icon">{"🌐"}</span>
                        <span>{"Websives"}</span>
                    </div>
                    <p class="footer-note">
                        {"Professionella webbsidor som konverterar. Byggt för svenska företag."}
                    </p>
                </div>
                <div>
                    <h4>{"Tjänster"}</h4>
                    <ul>
                        <li><a href="/#tjanster">{"Webbdesign"}</a></li>
                        <li><a href="/#tjanster">{"AI Automatisering"}</a></li>
                        <li><a href="/#tjanster">{"Marknadsföring"}</a></li>
                        <li><a href="/#tjanster">{"SEO"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Företag"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"Om Oss"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Kontakt"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Kontakt"}</h4>
                    <ul>
                        <li>{config::CONTACT_PHONE}</li>
                        <li>{config::CONTACT_EMAIL}</li>
                        <li>{config::LOCATION}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} Websives. Alla rättigheter förbehållna.", config::COPYRIGHT_YEAR)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 3rem 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .footer-grid {
                    max-width: 72rem;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .footer-note,
                .site-footer ul {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                .site-footer h4 {
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .site-footer a:hover {
                    color: #fff;
                }
                .footer-bottom {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
