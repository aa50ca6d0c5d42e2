use yew::prelude::*;

use crate::components::icons;
use crate::config;
use crate::content::{ABOUT_PARAGRAPHS, VALUES};
use crate::hooks::use_in_view;

#[function_component(About)]
pub fn about() -> Html {
    let content_ref = use_node_ref();
    let in_view = use_in_view(content_ref.clone(), config::IN_VIEW_MARGIN);

    html! {
        <section id="sobre" class="section about">
            <div class="about-glow"></div>

            <div ref={content_ref} class={classes!("container", "about-grid", in_view.then(|| "in-view"))}>
                <div class="about-copy reveal from-left">
                    <span class="section-tag">{"Sobre nós"}</span>
                    <h2>{"Somos a "}<span class="gradient-text">{"Makii"}</span></h2>
                    { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                        <p>{ *paragraph }</p>
                    }) }

                    <div class="about-values">
                        { for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <div
                                class="about-value reveal"
                                style={format!("transition-delay: {:.1}s", 0.3 + index as f64 * 0.1)}
                            >
                                <div class="about-value-icon">{ icons::render(value.icon, 24) }</div>
                                <div>
                                    <h4>{ value.title }</h4>
                                    <p>{ value.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="about-visual reveal from-right">
                    <div class="about-panel">
                        <div class="about-panel-grid grid-bg"></div>
                        <div class="about-ring outer"></div>
                        <div class="about-ring inner"></div>
                        <img class="about-logo" src={config::LOGO_SRC} alt="Makii Publicidade" />
                    </div>
                    <div class="about-badge">
                        <span class="about-badge-number gradient-text">{"5+"}</span>
                        <span class="about-badge-label">{"Anos criando marcas"}</span>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-glow {
                    position: absolute;
                    top: 50%;
                    right: 0;
                    width: 33%;
                    height: 24rem;
                    transform: translateY(-50%);
                    background: linear-gradient(to left, rgba(139, 92, 246, 0.08), transparent);
                    filter: blur(64px);
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-copy h2 {
                    margin: 1rem 0 1.5rem;
                    font-size: clamp(2.25rem, 5vw, 3rem);
                }
                .about-copy > p {
                    margin: 0 0 1rem;
                    line-height: 1.8;
                    color: rgba(255, 255, 255, 0.6);
                }
                .about-values {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .about-value {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    transition: border-color 0.3s ease;
                }
                .about-value:hover {
                    border-color: rgba(139, 92, 246, 0.3);
                }
                .about-value-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    color: #a78bfa;
                    background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(6, 182, 212, 0.2));
                }
                .about-value h4 {
                    margin: 0 0 0.25rem;
                    font-size: 1.125rem;
                }
                .about-value p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                .about-visual {
                    position: relative;
                }
                .about-panel {
                    position: relative;
                    aspect-ratio: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    background: linear-gradient(135deg, rgba(124, 58, 237, 0.2), rgba(6, 182, 212, 0.1));
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .about-panel-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.3;
                }
                .about-ring {
                    position: absolute;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    animation: spin 30s linear infinite;
                }
                .about-ring.outer {
                    width: 80%;
                    height: 80%;
                    border-style: dashed;
                }
                .about-ring.inner {
                    width: 60%;
                    height: 60%;
                    animation-direction: reverse;
                    animation-duration: 20s;
                }
                .about-logo {
                    position: relative;
                    width: 40%;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px -12px rgba(139, 92, 246, 0.4);
                    animation: float 6s ease-in-out infinite;
                }
                .about-badge {
                    position: absolute;
                    left: -1.5rem;
                    bottom: -1.5rem;
                    padding: 1.25rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    border-radius: 1rem;
                    background: rgba(10, 10, 10, 0.9);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(12px);
                }
                .about-badge-number {
                    font-size: 2rem;
                    font-weight: 700;
                }
                .about-badge-label {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-badge {
                        left: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
