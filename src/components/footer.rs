use chrono::Datelike;
use log::debug;
use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config;
use crate::content::{Link, FOOTER_LEGAL, FOOTER_NAVIGATION, FOOTER_SERVICES, SOCIAL_LINKS};

fn link_column(title: &'static str, links: &'static [Link]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{ title }</h4>
            <ul>
                { for links.iter().map(|link| html! {
                    <li><a href={link.href}>{ link.label }</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    // No newsletter backend yet, keep the browser from navigating away
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("newsletter form submitted");
    });

    html! {
        <footer class="site-footer">
            <div class="footer-line"></div>

            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="#home" class="footer-logo">
                        <img src={config::LOGO_SRC} alt="Makii Publicidade" width="56" height="56" />
                    </a>
                    <p>{"Transformamos ideias em marcas memoráveis. Design estratégico para resultados extraordinários."}</p>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                href={social.href}
                                class="footer-social-link"
                                aria-label={social.name}
                                title={social.name}
                            >
                                { icons::render(social.icon, 18) }
                            </a>
                        }) }
                    </div>
                </div>

                { link_column("Navegação", FOOTER_NAVIGATION) }
                { link_column("Serviços", FOOTER_SERVICES) }

                <div class="footer-column">
                    <h4>{"Newsletter"}</h4>
                    <p>{"Receba novidades e dicas de marketing direto no seu e-mail."}</p>
                    <form class="footer-newsletter" {onsubmit}>
                        <input type="email" placeholder="Seu e-mail" aria-label="Seu e-mail" />
                        <button type="submit" aria-label="Inscrever">{ icons::render(Icon::Send, 18) }</button>
                    </form>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{ format!("© {} Makii Publicidade. Todos os direitos reservados.", year) }</p>
                <div class="footer-legal">
                    { for FOOTER_LEGAL.iter().map(|link| html! {
                        <a href={link.href}>{ link.label }</a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    padding: 5rem 0 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .footer-line {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 1px;
                    background: linear-gradient(90deg, transparent, rgba(139, 92, 246, 0.5), transparent);
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 1.5fr 1fr 1fr 1.5fr;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }
                .footer-logo img {
                    border-radius: 0.75rem;
                }
                .footer-brand p,
                .footer-column p {
                    margin: 1.5rem 0;
                    font-size: 0.875rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.5);
                }
                .footer-column p {
                    margin-top: 0;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                }
                .footer-social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    transition: all 0.3s ease;
                }
                .footer-social-link:hover {
                    color: #fff;
                    background: linear-gradient(135deg, #7c3aed, #06b6d4);
                    transform: translateY(-2px);
                }
                .footer-column h4 {
                    margin: 0 0 1.5rem;
                    font-size: 1rem;
                    font-weight: 600;
                }
                .footer-column ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-column a,
                .footer-legal a {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.5);
                    transition: color 0.3s ease;
                }
                .footer-column a:hover,
                .footer-legal a:hover {
                    color: #fff;
                }
                .footer-newsletter {
                    display: flex;
                    gap: 0.5rem;
                }
                .footer-newsletter input {
                    flex: 1;
                    min-width: 0;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    outline: none;
                }
                .footer-newsletter input:focus {
                    border-color: rgba(139, 92, 246, 0.5);
                }
                .footer-newsletter button {
                    width: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    border: none;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #7c3aed, #06b6d4);
                    cursor: pointer;
                }
                .footer-bottom {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .footer-bottom p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
