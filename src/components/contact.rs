use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config;
use crate::hooks::use_in_view;

struct Channel {
    icon: Icon,
    label: &'static str,
    value: &'static str,
    href: String,
    external: bool,
}

fn channels() -> [Channel; 3] {
    [
        Channel {
            icon: Icon::Mail,
            label: "E-mail",
            value: config::CONTACT_EMAIL,
            href: config::mailto_link(config::CONTACT_EMAIL),
            external: false,
        },
        Channel {
            icon: Icon::WhatsApp,
            label: "WhatsApp",
            value: config::WHATSAPP_DISPLAY,
            href: config::whatsapp_link(config::WHATSAPP_NUMBER),
            external: true,
        },
        Channel {
            icon: Icon::Instagram,
            label: "Instagram",
            value: config::INSTAGRAM_HANDLE,
            href: config::INSTAGRAM_URL.to_string(),
            external: true,
        },
    ]
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let content_ref = use_node_ref();
    let in_view = use_in_view(content_ref.clone(), config::IN_VIEW_MARGIN);

    html! {
        <section id="contato" class="section contact">
            <div class="contact-blob"></div>

            <div ref={content_ref} class={classes!("container", in_view.then(|| "in-view"))}>
                <div class="section-header reveal">
                    <span class="section-tag cyan">{"Contato"}</span>
                    <h2>{"Vamos criar algo "}<span class="gradient-text">{"incrível"}</span></h2>
                    <p>{"Conte sua ideia e descubra como podemos levar sua marca mais longe."}</p>
                </div>

                <div class="contact-cards">
                    { for channels().into_iter().enumerate().map(|(index, channel)| html! {
                        <a
                            href={channel.href}
                            class="contact-card reveal"
                            style={format!("transition-delay: {:.1}s", index as f64 * 0.1)}
                            target={channel.external.then(|| "_blank")}
                            rel={channel.external.then(|| "noopener noreferrer")}
                        >
                            <div class="contact-card-icon">{ icons::render(channel.icon, 28) }</div>
                            <span class="contact-card-label">{ channel.label }</span>
                            <span class="contact-card-value">{ channel.value }</span>
                        </a>
                    }) }
                </div>

                <p class="contact-city reveal">{ config::CITY }</p>

                <div class="contact-cta reveal">
                    <a
                        href={config::whatsapp_link(config::WHATSAPP_NUMBER)}
                        class="contact-cta-button"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { icons::render(Icon::WhatsApp, 22) }
                        <span>{"Chamar no WhatsApp"}</span>
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .contact-blob {
                    position: absolute;
                    bottom: 0;
                    left: 50%;
                    width: 40rem;
                    height: 20rem;
                    transform: translateX(-50%);
                    border-radius: 50%;
                    background: rgba(124, 58, 237, 0.1);
                    filter: blur(80px);
                }
                .contact-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .contact-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 2rem;
                    text-align: center;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .contact-card:hover {
                    border-color: rgba(139, 92, 246, 0.3);
                    transform: translateY(-4px);
                }
                .contact-card-icon {
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    color: #a78bfa;
                    background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(6, 182, 212, 0.2));
                }
                .contact-card-label {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .contact-card-value {
                    font-weight: 600;
                    word-break: break-all;
                }
                .contact-city {
                    margin: 2.5rem 0 0;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.5);
                }
                .contact-cta {
                    margin-top: 2rem;
                    text-align: center;
                }
                .contact-cta-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    background: linear-gradient(90deg, #16a34a, #22c55e);
                    box-shadow: 0 25px 50px -12px rgba(34, 197, 94, 0.3);
                    transition: transform 0.3s ease;
                }
                .contact-cta-button:hover {
                    transform: scale(1.05);
                }
                @media (max-width: 768px) {
                    .contact-cards {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
