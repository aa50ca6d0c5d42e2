use log::debug;
use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config;
use crate::content::{filter_projects, ALL_CATEGORIES, PORTFOLIO_CATEGORIES};
use crate::hooks::use_in_view;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let content_ref = use_node_ref();
    let in_view = use_in_view(content_ref.clone(), config::IN_VIEW_MARGIN);
    let category = use_state_eq(|| ALL_CATEGORIES);
    let hovered = use_state_eq(|| None::<u32>);

    let projects = filter_projects(*category);

    html! {
        <section id="portfolio" class="section portfolio">
            <div ref={content_ref} class={classes!("container", in_view.then(|| "in-view"))}>
                <div class="section-header reveal">
                    <span class="section-tag">{"Portfólio"}</span>
                    <h2>{"Projetos em "}<span class="gradient-text">{"destaque"}</span></h2>
                    <p>{"Uma seleção de trabalhos que mostram nossa paixão por criar marcas memoráveis."}</p>
                </div>

                <div class="portfolio-tabs reveal">
                    { for PORTFOLIO_CATEGORIES.iter().map(|name| {
                        let onclick = {
                            let category = category.clone();
                            let name = *name;
                            Callback::from(move |_: MouseEvent| {
                                debug!("portfolio filter: {}", name);
                                category.set(name);
                            })
                        };
                        html! {
                            <button class={classes!("portfolio-tab", (*category == *name).then(|| "active"))} {onclick}>
                                { *name }
                            </button>
                        }
                    }) }
                </div>

                <div class="portfolio-grid">
                    { for projects.into_iter().enumerate().map(|(index, project)| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            let id = project.id;
                            Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        let is_hovered = *hovered == Some(project.id);
                        html! {
                            <div
                                key={project.id}
                                class={classes!("project-card", "reveal", "zoom", is_hovered.then(|| "hovered"))}
                                style={format!("transition-delay: {:.1}s", index as f64 * 0.1)}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="project-art" style={format!("background: {};", project.gradient)}>
                                    <span class="project-art-icon">{ icons::render(Icon::Image, 48) }</span>
                                </div>
                                <div class="project-overlay">
                                    <span class="project-category">{ project.category }</span>
                                    <h3>{ project.title }</h3>
                                    <p>{ project.description }</p>
                                    <div class="project-tags">
                                        { for project.tags.iter().map(|tag| html! {
                                            <span class="project-tag">{ *tag }</span>
                                        }) }
                                    </div>
                                </div>
                                <div class="project-link">{ icons::render(Icon::ArrowUpRight, 20) }</div>
                            </div>
                        }
                    }) }
                </div>

                <div class="portfolio-more reveal">
                    <a href="#contato" class="outline-button">
                        {"Quero um projeto assim"}
                        { icons::render(Icon::ArrowRight, 18) }
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .portfolio-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .portfolio-tab {
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .portfolio-tab:hover {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                }
                .portfolio-tab.active {
                    color: #fff;
                    border-color: transparent;
                    background: linear-gradient(90deg, #7c3aed, #06b6d4);
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .project-card {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    cursor: pointer;
                }
                .project-art {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.7s ease;
                }
                .project-card.hovered .project-art {
                    transform: scale(1.1);
                }
                .project-art-icon {
                    color: rgba(255, 255, 255, 0.2);
                }
                .project-overlay {
                    position: absolute;
                    inset: 0;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.4), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .project-card.hovered .project-overlay {
                    opacity: 1;
                }
                .project-category {
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #22d3ee;
                }
                .project-overlay h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.5rem;
                }
                .project-overlay p {
                    margin: 0 0 1rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .project-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .project-tag {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                }
                .project-link {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    opacity: 0;
                    transform: scale(0.5);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .project-card.hovered .project-link {
                    opacity: 1;
                    transform: scale(1);
                }
                .portfolio-more {
                    margin-top: 3rem;
                    text-align: center;
                }
                @media (max-width: 1024px) {
                    .portfolio-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .portfolio-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
