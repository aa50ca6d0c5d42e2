use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config;
use crate::content::SERVICES;
use crate::hooks::use_in_view;

#[function_component(Services)]
pub fn services() -> Html {
    let content_ref = use_node_ref();
    let in_view = use_in_view(content_ref.clone(), config::IN_VIEW_MARGIN);

    html! {
        <section id="servicos" class="section services">
            <div class="services-glow left"></div>
            <div class="services-glow right"></div>

            <div ref={content_ref} class={classes!("container", in_view.then(|| "in-view"))}>
                <div class="section-header reveal">
                    <span class="section-tag">{"O que fazemos"}</span>
                    <h2>{"Nossos "}<span class="gradient-text">{"Serviços"}</span></h2>
                    <p>{"Soluções completas em publicidade e design para elevar sua marca ao próximo nível."}</p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div
                            class="service-card reveal"
                            style={format!("transition-delay: {:.2}s", index as f64 * 0.15)}
                        >
                            <div class="service-hover"></div>
                            <div class="service-corner"></div>
                            <div class="service-body">
                                <div class="service-icon">{ icons::render(service.icon, 32) }</div>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                                <div class="service-features">
                                    { for service.features.iter().map(|feature| html! {
                                        <span class="service-feature">{ *feature }</span>
                                    }) }
                                </div>
                                <div class="service-arrow">{ icons::render(Icon::ArrowUpRight, 20) }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .services-glow {
                    position: absolute;
                    height: 24rem;
                    filter: blur(64px);
                }
                .services-glow.left {
                    top: 50%;
                    left: 0;
                    width: 50%;
                    background: linear-gradient(to right, rgba(124, 58, 237, 0.05), transparent);
                }
                .services-glow.right {
                    top: 25%;
                    right: 0;
                    width: 33%;
                    background: linear-gradient(to left, rgba(6, 182, 212, 0.05), transparent);
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .service-card {
                    position: relative;
                    height: 100%;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.05), transparent);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    overflow: hidden;
                }
                .service-card:hover {
                    border-color: rgba(139, 92, 246, 0.3);
                    box-shadow: 0 25px 50px -12px rgba(139, 92, 246, 0.05);
                }
                .service-hover {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(124, 58, 237, 0.1), transparent, rgba(6, 182, 212, 0.1));
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .service-corner {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 8rem;
                    height: 8rem;
                    border-bottom-left-radius: 100%;
                    background: linear-gradient(to bottom left, rgba(139, 92, 246, 0.1), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .service-card:hover .service-hover,
                .service-card:hover .service-corner {
                    opacity: 1;
                }
                .service-body {
                    position: relative;
                    z-index: 10;
                }
                .service-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1.5rem;
                    border-radius: 1rem;
                    color: #a78bfa;
                    background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(6, 182, 212, 0.2));
                    transition: transform 0.5s ease, color 0.5s ease;
                }
                .service-card:hover .service-icon {
                    transform: scale(1.1);
                    color: #c4b5fd;
                }
                .service-card h3 {
                    margin: 0 0 1rem;
                    font-size: 1.5rem;
                    transition: color 0.3s ease;
                }
                .service-card:hover h3 {
                    color: #c4b5fd;
                }
                .service-card p {
                    margin: 0 0 1.5rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.5);
                }
                .service-features {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .service-feature {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.4);
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 9999px;
                }
                .service-arrow {
                    position: absolute;
                    right: 0;
                    bottom: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #a78bfa;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 50%;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .service-card:hover .service-arrow {
                    opacity: 1;
                }
                @media (max-width: 768px) {
                    .services-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
