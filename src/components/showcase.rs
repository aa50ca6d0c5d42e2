//! Media showcase: a stage that swaps between videos and a photo slideshow
//! with a short exit/settle transition, plus the selector buttons below it.

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config;
use crate::content::{MediaKind, MEDIA_OPTIONS};
use crate::dom;
use crate::hooks::use_in_view;
use crate::media::{MediaAction, MediaSelector, Phase};

#[function_component(VideoShowcase)]
pub fn video_showcase() -> Html {
    let state = use_reducer_eq(|| MediaSelector::new(MEDIA_OPTIONS));
    let video_ref = use_node_ref();
    let header_ref = use_node_ref();
    let in_view = use_in_view(header_ref.clone(), config::IN_VIEW_MARGIN);

    // Exit then settle, each stage armed by the phase it follows
    {
        let phase = state.phase();
        let state = state.clone();
        use_effect_with_deps(
            move |phase| {
                let timeout = match phase {
                    Phase::Exiting { target } => {
                        debug!("media showcase: leaving for item {}", target);
                        Some(Timeout::new(config::MEDIA_EXIT_DELAY_MS, move || {
                            state.dispatch(MediaAction::ExitElapsed)
                        }))
                    }
                    Phase::Settling => Some(Timeout::new(config::MEDIA_SETTLE_DELAY_MS, move || {
                        state.dispatch(MediaAction::SettleElapsed)
                    })),
                    Phase::Idle => None,
                };
                move || drop(timeout)
            },
            phase,
        );
    }

    // Fresh source for the new video
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |(_, is_video)| {
                let reload = is_video.then(|| {
                    Timeout::new(config::MEDIA_RELOAD_DELAY_MS, move || {
                        if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                            video.load();
                        }
                    })
                });
                move || drop(reload)
            },
            (state.active(), state.is_video()),
        );
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |(muted, _)| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(*muted);
                    video.set_loop(true);
                    let _ = video.set_attribute("playsinline", "");
                }
                || ()
            },
            (state.is_muted(), state.active()),
        );
    }

    // Keep the element in step with `is_playing`
    {
        let playback = (state.is_playing(), state.active(), state.phase());
        let video_ref = video_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |(playing, _, phase)| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    if *playing && *phase == Phase::Idle {
                        if video.paused() {
                            spawn_local(async move {
                                if let Err(err) = dom::play(video).await {
                                    warn!("media showcase: {}", err);
                                    state.dispatch(MediaAction::PlaybackChanged(false));
                                }
                            });
                        }
                    } else if !video.paused() {
                        if let Err(err) = video.pause() {
                            warn!("media showcase: pause failed: {:?}", err);
                        }
                    }
                }
                || ()
            },
            playback,
        );
    }

    {
        let autoplay_ms = if state.is_slideshow() && !state.is_transitioning() {
            config::SLIDESHOW_INTERVAL_MS
        } else {
            0
        };
        let state = state.clone();
        use_interval(move || state.dispatch(MediaAction::AutoplayTick), autoplay_ms);
    }

    let dispatch = |action: MediaAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(action))
    };
    let on_play = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(MediaAction::PlaybackChanged(true)))
    };
    let on_pause = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(MediaAction::PlaybackChanged(false)))
    };

    let stage = match state.active_media() {
        Some(media) => match media.kind {
            MediaKind::Video { src } => html! {
                <div key={media.id} class="stage-media">
                    <video
                        ref={video_ref.clone()}
                        class="stage-video"
                        onplay={on_play}
                        onpause={on_pause}
                    >
                        <source src={src} type="video/mp4" />
                    </video>
                    <div class="stage-shade"></div>

                    if !state.is_playing() && !state.is_transitioning() {
                        <button class="stage-play-overlay" onclick={dispatch(MediaAction::TogglePlay)} aria-label="Reproduzir">
                            <span class="stage-play-ring"></span>
                            <span class="stage-play-button">{ icons::render(Icon::Play, 40) }</span>
                        </button>
                    }

                    <div class="stage-controls">
                        <div class="stage-controls-left">
                            <button class="stage-control" onclick={dispatch(MediaAction::TogglePlay)}>
                                { icons::render(if state.is_playing() { Icon::Pause } else { Icon::Play }, 20) }
                            </button>
                            <button class="stage-control" onclick={dispatch(MediaAction::ToggleMute)}>
                                { icons::render(if state.is_muted() { Icon::VolumeOff } else { Icon::VolumeOn }, 20) }
                            </button>
                        </div>
                        <div class="stage-caption">
                            <span class="stage-caption-icon">{ icons::render(media.icon, 16) }</span>
                            <span>{ media.title }</span>
                        </div>
                    </div>
                </div>
            },
            MediaKind::Slideshow { images } => {
                let slide_class = match state.slide_direction() {
                    d if d > 0 => "slide-from-right",
                    d if d < 0 => "slide-from-left",
                    _ => "slide-fade",
                };
                let current = state.current_slide();
                html! {
                    <div key={media.id} class="stage-media">
                        if let Some(image) = images.get(current) {
                            <img
                                key={current}
                                class={classes!("stage-slide", slide_class)}
                                src={*image}
                                alt={format!("{} - Foto {}", media.title, current + 1)}
                            />
                        }
                        <div class="stage-shade"></div>

                        <button class="stage-arrow prev" onclick={dispatch(MediaAction::Advance(-1))} aria-label="Foto anterior">
                            { icons::render(Icon::ChevronLeft, 24) }
                        </button>
                        <button class="stage-arrow next" onclick={dispatch(MediaAction::Advance(1))} aria-label="Próxima foto">
                            { icons::render(Icon::ChevronRight, 24) }
                        </button>

                        <div class="stage-controls">
                            <div class="slide-indicators">
                                { for (0..images.len()).map(|index| {
                                    let active = index == current;
                                    html! {
                                        <button
                                            class={classes!("slide-indicator", active.then(|| "active"))}
                                            onclick={dispatch(MediaAction::GoToSlide(index))}
                                            aria-label={format!("Foto {}", index + 1)}
                                        >
                                            if active {
                                                <span key={current} class="slide-indicator-fill"></span>
                                            }
                                        </button>
                                    }
                                }) }
                            </div>
                            <div class="stage-caption">
                                <span class="stage-caption-icon">{ icons::render(media.icon, 16) }</span>
                                <span>{ media.title }</span>
                                <span class="stage-caption-count">{ format!("{}/{}", current + 1, images.len()) }</span>
                            </div>
                        </div>
                    </div>
                }
            }
        },
        None => html! {},
    };

    html! {
        <section class="section showcase">
            <div class="showcase-blob violet"></div>
            <div class="showcase-blob cyan"></div>

            <div class="container">
                <div ref={header_ref} class={classes!("section-header", in_view.then(|| "in-view"))}>
                    <div class="reveal">
                        <span class="section-tag cyan">{"Nosso trabalho em ação"}</span>
                        <h2>{"Conheça nossa "}<span class="gradient-text">{"produção"}</span></h2>
                        <p>{"Do planejamento à entrega, cada projeto é produzido com dedicação e criatividade."}</p>
                    </div>
                </div>

                <div class={classes!("showcase-stage", in_view.then(|| "in-view"))}>
                    <div class="showcase-frame reveal zoom">
                        <div class={classes!("stage-inner", state.is_transitioning().then(|| "leaving"))}>
                            { stage }
                        </div>

                        if state.is_transitioning() {
                            <div class="stage-loading">
                                <div class="stage-spinner"></div>
                            </div>
                        }
                    </div>
                </div>

                <div class="showcase-options">
                    { for state.media().iter().enumerate().map(|(index, media)| {
                        let active = index == state.active();
                        html! {
                            <button
                                class={classes!("showcase-option", active.then(|| "active"))}
                                disabled={state.is_transitioning()}
                                onclick={dispatch(MediaAction::Select(index))}
                            >
                                <span class="option-icon">{ icons::render(media.icon, 24) }</span>
                                <span class="option-text">
                                    <span class="option-title">{ media.title }</span>
                                    <span class="option-description">{ media.description }</span>
                                </span>
                                if active {
                                    <span class="option-badge">{"Reproduzindo"}</span>
                                }
                            </button>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .showcase {
                    background: linear-gradient(to bottom, #050505, #0a0a0a, #050505);
                }
                .showcase-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                }
                .showcase-blob.violet {
                    top: 0;
                    left: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(124, 58, 237, 0.1);
                }
                .showcase-blob.cyan {
                    bottom: 0;
                    right: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(6, 182, 212, 0.1);
                }
                .showcase-stage {
                    max-width: 64rem;
                    margin: 0 auto 2.5rem;
                }
                .showcase-frame {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    background: #000;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 25px 50px -12px rgba(139, 92, 246, 0.1);
                }
                .stage-inner {
                    position: absolute;
                    inset: 0;
                    opacity: 1;
                    transform: scale(1);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .stage-inner.leaving {
                    opacity: 0;
                    transform: scale(0.95);
                }
                .stage-media {
                    position: absolute;
                    inset: 0;
                }
                .stage-video,
                .stage-slide {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .stage-slide {
                    position: absolute;
                    inset: 0;
                }
                .slide-from-right { animation: slideFromRight 0.5s ease; }
                .slide-from-left { animation: slideFromLeft 0.5s ease; }
                .slide-fade { animation: fadeUp 0.5s ease; }
                @keyframes slideFromRight {
                    from { opacity: 0; transform: translateX(100%); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes slideFromLeft {
                    from { opacity: 0; transform: translateX(-100%); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .stage-shade {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent 50%, rgba(0, 0, 0, 0.2));
                }
                .stage-play-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .stage-play-ring {
                    position: absolute;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    background: rgba(139, 92, 246, 0.3);
                    animation: ping 1.5s infinite;
                }
                @keyframes ping {
                    75%, 100% { transform: scale(1.6); opacity: 0; }
                }
                .stage-play-button {
                    position: relative;
                    width: 6rem;
                    height: 6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    color: #fff;
                    background: linear-gradient(135deg, #8b5cf6, #06b6d4);
                    box-shadow: 0 25px 50px -12px rgba(139, 92, 246, 0.5);
                    transition: transform 0.3s ease;
                }
                .stage-play-overlay:hover .stage-play-button {
                    transform: scale(1.1);
                }
                .stage-controls {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .stage-controls-left {
                    display: flex;
                    gap: 0.75rem;
                }
                .stage-control,
                .stage-arrow {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                    border: none;
                    backdrop-filter: blur(4px);
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .stage-control {
                    width: 3rem;
                    height: 3rem;
                }
                .stage-control:hover,
                .stage-arrow:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .stage-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    z-index: 10;
                }
                .stage-arrow.prev { left: 1rem; }
                .stage-arrow.next { right: 1rem; }
                .stage-caption {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .stage-caption-icon {
                    display: inline-flex;
                    color: #a78bfa;
                }
                .stage-caption-count {
                    color: rgba(255, 255, 255, 0.5);
                }
                .slide-indicators {
                    display: flex;
                    gap: 0.5rem;
                }
                .slide-indicator {
                    position: relative;
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 9999px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                    transition: width 0.3s ease;
                }
                .slide-indicator.active {
                    width: 2rem;
                }
                .slide-indicator-fill {
                    position: absolute;
                    inset: 0;
                    background: #fff;
                    transform-origin: left;
                    animation: indicatorFill 4s linear;
                }
                @keyframes indicatorFill {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }
                .stage-loading {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 20;
                }
                .stage-spinner {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 2px solid rgba(139, 92, 246, 0.3);
                    border-top-color: #8b5cf6;
                    animation: spin 1s linear infinite;
                }
                .showcase-options {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .showcase-option {
                    position: relative;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.5rem;
                    text-align: left;
                    color: #fff;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    cursor: pointer;
                    transition: background 0.5s ease, border-color 0.5s ease, transform 0.3s ease;
                }
                .showcase-option:hover {
                    background: rgba(255, 255, 255, 0.1);
                    border-color: rgba(255, 255, 255, 0.1);
                    transform: translateY(-4px);
                }
                .showcase-option:disabled {
                    cursor: wait;
                }
                .showcase-option.active {
                    background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(6, 182, 212, 0.2));
                    border-color: rgba(139, 92, 246, 0.5);
                }
                .option-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.1);
                }
                .showcase-option.active .option-icon {
                    color: #fff;
                    background: linear-gradient(135deg, #8b5cf6, #06b6d4);
                }
                .option-text {
                    display: flex;
                    flex-direction: column;
                }
                .option-title {
                    margin-bottom: 0.25rem;
                    font-weight: 600;
                    color: rgba(255, 255, 255, 0.8);
                }
                .showcase-option.active .option-title {
                    color: #fff;
                }
                .option-description {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .option-badge {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    padding: 0.25rem 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #8b5cf6, #06b6d4);
                }
                @media (max-width: 768px) {
                    .showcase-options {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
