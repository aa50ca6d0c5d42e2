use yew::prelude::*;

use crate::content::MARQUEE_WORDS;

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    class: &'static str,
    reverse: bool,
    duration_secs: u32,
}

#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    // Two copies back to back so the -50% keyframe loops without a seam
    let words = MARQUEE_WORDS.iter().chain(MARQUEE_WORDS.iter());
    let style = format!(
        "animation-duration: {}s; animation-direction: {};",
        props.duration_secs,
        if props.reverse { "reverse" } else { "normal" }
    );

    html! {
        <div class="marquee-row">
            <div class="marquee-fade left"></div>
            <div class="marquee-fade right"></div>
            <div class="marquee-track" style={style}>
                { for words.map(|word| html! {
                    <span class={classes!("marquee-word", props.class)}>{ *word }</span>
                }) }
            </div>
        </div>
    }
}

#[function_component(ScrollMarquee)]
pub fn scroll_marquee() -> Html {
    html! {
        <section class="marquee">
            <MarqueeRow class="large" reverse={false} duration_secs={20} />
            <MarqueeRow class="small" reverse={true} duration_secs={25} />
            <div class="marquee-divider"></div>

            <style>
                {r#"
                .marquee {
                    padding: 5rem 0;
                    overflow: hidden;
                }
                .marquee-row {
                    position: relative;
                    margin-bottom: 3rem;
                }
                .marquee-fade {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 8rem;
                    z-index: 10;
                }
                .marquee-fade.left {
                    left: 0;
                    background: linear-gradient(to right, #050505, transparent);
                }
                .marquee-fade.right {
                    right: 0;
                    background: linear-gradient(to left, #050505, transparent);
                }
                .marquee-track {
                    display: flex;
                    gap: 2rem;
                    width: max-content;
                    white-space: nowrap;
                    animation-name: marqueeScroll;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                @keyframes marqueeScroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                .marquee-word {
                    font-weight: 700;
                    cursor: default;
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    transition: background 0.5s ease;
                }
                .marquee-word.large {
                    font-size: clamp(3.75rem, 8vw, 6rem);
                    background-image: linear-gradient(90deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                }
                .marquee-word.small {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    background-image: linear-gradient(90deg, rgba(139, 92, 246, 0.2), rgba(6, 182, 212, 0.2));
                }
                .marquee-word:hover {
                    background-image: linear-gradient(90deg, #8b5cf6, #06b6d4);
                }
                .marquee-divider {
                    max-width: 80rem;
                    height: 1px;
                    margin: 5rem auto 0;
                    background: linear-gradient(90deg, transparent, rgba(139, 92, 246, 0.5), transparent);
                }
                "#}
            </style>
        </section>
    }
}
