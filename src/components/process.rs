//! "Como trabalhamos": a pinned stage that walks through the process steps
//! as the visitor scrolls through a container one viewport tall per step.

use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::content::{ProcessStep, PROCESS_STEPS};
use crate::hooks::use_scroll_progress;

#[derive(Properties, PartialEq)]
struct StepCardProps {
    step: &'static ProcessStep,
    index: usize,
    total: usize,
}

#[function_component(StepText)]
fn step_text(props: &StepCardProps) -> Html {
    let StepCardProps { step, index, total } = props;

    html! {
        <div class={classes!("step-text", step.accent.class())}>
            <span class="step-ghost-number">{ format!("0{}", step.id) }</span>
            <div class="step-text-body">
                <div class="step-indicator">
                    <span class="step-counter">{ format!("ETAPA {} DE {}", step.id, total) }</span>
                    <div class="step-pips">
                        { for (0..*total).map(|i| html! {
                            <div class={classes!("step-pip", (i <= *index).then(|| "filled"))}></div>
                        }) }
                    </div>
                </div>
                <h3>{ step.title }</h3>
                <p class="step-subtitle">{ step.subtitle }</p>
                <p class="step-description">{ step.description }</p>
            </div>
        </div>
    }
}

#[function_component(StepVisual)]
fn step_visual(props: &StepCardProps) -> Html {
    let StepCardProps { step, total, .. } = props;
    let style = format!(
        "background: {}; box-shadow: 0 25px 80px -20px rgba({}, 0.4);",
        step.accent.gradient(),
        step.accent.rgb()
    );

    html! {
        <div class="step-visual">
            <div class="step-visual-card" style={style}>
                <div class="step-visual-grid grid-bg"></div>
                <div class="floater floater-a"></div>
                <div class="floater floater-b"></div>
                <div class="floater floater-c"></div>
                <div class="step-visual-number">{ format!("0{}", step.id) }</div>
                <div class="step-visual-footer">
                    <span class="step-visual-title">{ step.title }</span>
                    <span class="step-visual-count">{ format!("{}/{}", step.id, total) }</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(ProcessScroller)]
pub fn process_scroller() -> Html {
    let container_ref = use_node_ref();
    let steps = PROCESS_STEPS;
    let scroll = use_scroll_progress(container_ref.clone(), steps.len());
    // Dot navigation overrides the scroll-derived step until the next scroll tick
    let picked = use_state_eq(|| None::<usize>);

    {
        let picked = picked.clone();
        use_effect_with_deps(
            move |_| {
                picked.set(None);
                || ()
            },
            scroll,
        );
    }

    let active = (*picked).unwrap_or(scroll.active_step).min(steps.len() - 1);
    let step = &steps[active];
    let is_last = active + 1 >= steps.len();

    let container_style = format!("height: {}vh;", steps.len() * 100);
    let stage_style = if scroll.visible { "visibility: visible;" } else { "visibility: hidden;" };
    let glow_style = format!(
        "background: radial-gradient(circle at 70% 50%, rgba({}, 0.15) 0%, transparent 50%);",
        step.accent.rgb()
    );

    html! {
        <div ref={container_ref} class="process" style={container_style}>
            <div class={classes!("process-stage", scroll.mode.css_class())} style={stage_style}>
                <div class="process-inner">
                    <div class="process-glow" style={glow_style}></div>

                    <div class="process-progress">
                        <div class="process-progress-bar" style={format!("width: {}%;", scroll.progress)}></div>
                    </div>

                    <div class="process-heading">
                        <span class="section-tag">{"Nosso processo"}</span>
                        <h2>{"Como "}<span class="gradient-text">{"trabalhamos"}</span></h2>
                    </div>

                    <div class="process-content">
                        <StepText key={format!("text-{}", step.id)} step={step} index={active} total={steps.len()} />
                        <StepVisual key={format!("visual-{}", step.id)} step={step} index={active} total={steps.len()} />
                    </div>

                    <div class="process-dots">
                        { for steps.iter().enumerate().map(|(index, item)| {
                            let onclick = {
                                let picked = picked.clone();
                                Callback::from(move |_: MouseEvent| picked.set(Some(index)))
                            };
                            let dot_style = if index == active {
                                format!("background: rgb({});", item.accent.rgb())
                            } else {
                                String::new()
                            };
                            html! {
                                <button class={classes!("process-dot", (index == active).then(|| "active"))} {onclick}>
                                    <span class="process-dot-label">{ item.title }</span>
                                    <div class="process-dot-mark" style={dot_style}></div>
                                </button>
                            }
                        }) }
                    </div>

                    <div class="process-hint">
                        <span>{ if is_last { "Fim da seção" } else { "Continue rolando" } }</span>
                        if !is_last {
                            <div class="process-hint-arrow">{ icons::render(Icon::ArrowDown, 20) }</div>
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .process {
                    position: relative;
                    background: #050505;
                }
                .process-stage {
                    left: 0;
                    right: 0;
                    height: 100vh;
                    z-index: 40;
                }
                .process-stage.stage-top {
                    position: absolute;
                    top: 0;
                }
                .process-stage.stage-fixed {
                    position: fixed;
                    top: 0;
                }
                .process-stage.stage-bottom {
                    position: absolute;
                    bottom: 0;
                }
                .process-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                    background: #050505;
                }
                .process-glow {
                    position: absolute;
                    inset: 0;
                    transition: background 0.8s ease-in-out;
                }
                .process-progress {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.05);
                }
                .process-progress-bar {
                    height: 100%;
                    background: linear-gradient(90deg, #8b5cf6, #06b6d4, #ec4899);
                    transition: width 0.1s linear;
                }
                .process-heading {
                    position: absolute;
                    top: 3rem;
                    left: 0;
                    right: 0;
                    text-align: center;
                }
                .process-heading h2 {
                    margin: 0.5rem 0 0;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                }
                .process-content {
                    position: absolute;
                    inset: 0;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 0;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }
                .step-text {
                    position: relative;
                    height: 280px;
                    display: flex;
                    align-items: center;
                    animation: stepIn 0.5s cubic-bezier(0.22, 1, 0.36, 1);
                }
                @keyframes stepIn {
                    from { opacity: 0; transform: translateY(40px); filter: blur(10px); }
                    to { opacity: 1; transform: translateY(0); filter: blur(0); }
                }
                .step-ghost-number {
                    position: absolute;
                    left: -1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 220px;
                    font-weight: 700;
                    line-height: 1;
                    pointer-events: none;
                    opacity: 0.1;
                    color: var(--accent);
                }
                .step-text-body {
                    position: relative;
                    z-index: 10;
                }
                .step-indicator {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .step-counter {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--accent-light);
                }
                .step-pips {
                    display: flex;
                    gap: 0.25rem;
                }
                .step-pip {
                    width: 1.5rem;
                    height: 0.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    transition: background 0.3s ease;
                }
                .step-pip.filled {
                    background: var(--accent);
                }
                .step-text h3 {
                    margin: 0 0 0.75rem;
                    font-size: clamp(2.25rem, 4vw, 3rem);
                }
                .step-subtitle {
                    margin: 0 0 1rem;
                    font-size: 1.25rem;
                    color: var(--accent-light);
                }
                .step-description {
                    max-width: 28rem;
                    margin: 0;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.5);
                }
                .accent-violet { --accent: #8b5cf6; --accent-light: #a78bfa; }
                .accent-cyan { --accent: #06b6d4; --accent-light: #22d3ee; }
                .accent-pink { --accent: #ec4899; --accent-light: #f472b6; }
                .accent-amber { --accent: #f59e0b; --accent-light: #fbbf24; }
                .step-visual {
                    position: relative;
                    height: 420px;
                    perspective: 1000px;
                    animation: visualIn 0.6s cubic-bezier(0.22, 1, 0.36, 1);
                }
                @keyframes visualIn {
                    from { opacity: 0; transform: scale(0.9) rotateY(-10deg) translateX(50px); }
                    to { opacity: 1; transform: none; }
                }
                .step-visual-card {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }
                .step-visual-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                }
                .floater {
                    position: absolute;
                    backdrop-filter: blur(4px);
                    animation: float 6s ease-in-out infinite;
                }
                .floater-a {
                    top: 15%;
                    left: 12%;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                }
                .floater-b {
                    bottom: 18%;
                    right: 12%;
                    width: 5rem;
                    height: 5rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.15);
                    animation-delay: 0.5s;
                }
                .floater-c {
                    top: 45%;
                    right: 25%;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.1);
                    animation-delay: 1s;
                }
                .step-visual-number {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 140px;
                    font-weight: 700;
                    opacity: 0.1;
                }
                .step-visual-footer {
                    position: absolute;
                    left: 1.25rem;
                    right: 1.25rem;
                    bottom: 1.25rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .step-visual-title {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.3);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .step-visual-count {
                    padding: 0.375rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .process-dots {
                    position: absolute;
                    right: 2.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                }
                .process-dot {
                    position: relative;
                    display: flex;
                    align-items: center;
                    padding: 0;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .process-dot-label {
                    position: absolute;
                    right: 100%;
                    margin-right: 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    white-space: nowrap;
                    color: rgba(255, 255, 255, 0.5);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .process-dot.active .process-dot-label {
                    color: #fff;
                }
                .process-dot:hover .process-dot-label {
                    opacity: 1;
                }
                .process-dot-mark {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    transition: all 0.5s ease;
                }
                .process-dot.active .process-dot-mark {
                    height: 2.5rem;
                }
                .process-hint {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .process-hint span {
                    animation: pulse 2s infinite;
                }
                .process-hint-arrow {
                    color: rgba(255, 255, 255, 0.3);
                    animation: bob 1.5s infinite;
                }
                @media (max-width: 1024px) {
                    .process-content {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        align-content: center;
                    }
                    .step-visual {
                        height: 300px;
                    }
                    .step-ghost-number {
                        font-size: 180px;
                    }
                    .process-dots {
                        right: 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
