use yew::prelude::*;

use crate::components::icons::{self, Icon};
use crate::config;
use crate::content::{CONTACT_ANCHOR, HERO_STATS, PORTFOLIO_ANCHOR};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-blobs">
                <div class="blob blob-violet"></div>
                <div class="blob blob-cyan"></div>
                <div class="blob blob-pink"></div>
            </div>
            <div class="hero-grid grid-bg"></div>
            <div class="hero-fade"></div>

            <svg class="hero-lines" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                <line class="hero-line" x1="10%" y1="0" x2="30%" y2="100%" stroke="url(#lineGradient)" stroke-width="1" />
                <line class="hero-line" x1="50%" y1="0" x2="70%" y2="100%" stroke="url(#lineGradient)" stroke-width="1" style="animation-delay: 0.5s" />
                <line class="hero-line" x1="90%" y1="0" x2="60%" y2="100%" stroke="url(#lineGradient)" stroke-width="1" style="animation-delay: 1s" />
                <defs>
                    <linearGradient id="lineGradient" x1="0%" y1="0%" x2="0%" y2="100%">
                        <stop offset="0%" stop-color="#8b5cf6" />
                        <stop offset="100%" stop-color="#06b6d4" />
                    </linearGradient>
                </defs>
            </svg>

            <div class="hero-content">
                <div class="hero-badge">
                    <span class="badge-dot"></span>
                    <span>{"Transformando ideias em resultados"}</span>
                </div>

                <div class="hero-logo">
                    <img src={config::LOGO_SRC} alt="Makii Publicidade" />
                    <div class="hero-logo-glow"></div>
                </div>

                <h1 class="hero-title">
                    <span class="hero-title-main">{"Makii"}</span>
                    <span class="gradient-text">{"Publicidade"}</span>
                </h1>

                <p class="hero-subtitle">
                    {"Criamos experiências visuais únicas que conectam sua marca ao público certo. Design estratégico, resultados extraordinários."}
                </p>

                <div class="hero-cta-group">
                    <a href={PORTFOLIO_ANCHOR} class="hero-cta-primary">
                        <span>{"Ver Portfólio"}</span>
                        <span class="cta-arrow">{ icons::render(Icon::ArrowRight, 20) }</span>
                    </a>
                    <a href={CONTACT_ANCHOR} class="outline-button">
                        {"Iniciar Projeto"}
                    </a>
                </div>

                <div class="hero-stats">
                    { for HERO_STATS.iter().enumerate().map(|(index, stat)| html! {
                        <div class="hero-stat" style={format!("animation-delay: {:.1}s", 1.2 + index as f64 * 0.1)}>
                            <div class="hero-stat-number gradient-text">{ stat.number }</div>
                            <div class="hero-stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="scroll-cue">
                <div class="scroll-cue-mouse">
                    <div class="scroll-cue-wheel"></div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-blobs {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: blob 7s infinite;
                }
                .blob-violet {
                    top: 25%;
                    left: -5rem;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(124, 58, 237, 0.2);
                }
                .blob-cyan {
                    top: 33%;
                    right: 0;
                    width: 20rem;
                    height: 20rem;
                    background: rgba(6, 182, 212, 0.15);
                    animation-delay: 2s;
                }
                .blob-pink {
                    bottom: 25%;
                    left: 33%;
                    width: 18rem;
                    height: 18rem;
                    background: rgba(236, 72, 153, 0.1);
                    animation-delay: 4s;
                }
                @keyframes blob {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(30px, -50px) scale(1.1); }
                    66% { transform: translate(-20px, 20px) scale(0.9); }
                }
                .hero-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.5;
                }
                .hero-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.5), #050505);
                }
                .hero-lines {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }
                .hero-line {
                    opacity: 0;
                    animation: lineIn 3s ease-out forwards;
                }
                @keyframes lineIn {
                    to { opacity: 0.1; }
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                    animation: fadeUp 0.8s ease both;
                }
                .badge-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #4ade80;
                    animation: pulse 2s infinite;
                }
                .hero-logo {
                    position: relative;
                    width: 8rem;
                    height: 8rem;
                    margin: 0 auto 2rem;
                    animation: fadeUp 1s ease 0.2s both;
                }
                .hero-logo img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    border-radius: 1rem;
                }
                .hero-logo-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: rgba(139, 92, 246, 0.2);
                    filter: blur(40px);
                    opacity: 0.5;
                }
                .hero-title {
                    margin: 0 0 1.5rem;
                    font-size: clamp(3rem, 9vw, 6rem);
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    animation: fadeUp 1s ease 0.3s both;
                }
                .hero-title span {
                    display: block;
                }
                .hero-subtitle {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.6);
                    animation: fadeUp 1s ease 0.5s both;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    animation: fadeUp 1s ease 0.7s both;
                }
                .hero-cta-primary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #000;
                    font-weight: 600;
                    transition: background 0.5s ease, color 0.5s ease, box-shadow 0.5s ease;
                }
                .hero-cta-primary:hover {
                    background: linear-gradient(90deg, #8b5cf6, #06b6d4);
                    color: #fff;
                    box-shadow: 0 25px 50px -12px rgba(139, 92, 246, 0.2);
                }
                .cta-arrow {
                    display: inline-flex;
                    animation: nudge 1.5s infinite;
                }
                @keyframes nudge {
                    0%, 100% { transform: translateX(0); }
                    50% { transform: translateX(5px); }
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 42rem;
                    margin: 5rem auto 0;
                }
                .hero-stat {
                    animation: fadeUp 0.5s ease both;
                }
                .hero-stat-number {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 700;
                    transition: transform 0.3s ease;
                }
                .hero-stat:hover .hero-stat-number {
                    transform: scale(1.1);
                }
                .hero-stat-label {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .scroll-cue {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    animation: fadeUp 1s ease 2s both;
                }
                .scroll-cue-mouse {
                    width: 1.5rem;
                    height: 2.5rem;
                    padding: 0.5rem;
                    display: flex;
                    justify-content: center;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    animation: bob 2s infinite;
                }
                .scroll-cue-wheel {
                    width: 0.25rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.6);
                    animation: wheel 2s infinite;
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(10px); }
                }
                @keyframes wheel {
                    0%, 100% { opacity: 1; transform: translateY(0); }
                    50% { opacity: 0; transform: translateY(8px); }
                }
                "#}
            </style>
        </section>
    }
}
