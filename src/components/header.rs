use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{CONTACT_ANCHOR, NAV_ITEMS};
use crate::hooks::use_scrolled_past;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::HEADER_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, this only folds the menu away
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <nav class="site-nav">
                <a href="#home" class="nav-logo">
                    <img src={config::LOGO_SRC} alt="Makii Publicidade" width="48" height="48" />
                    <span class="nav-logo-glow"></span>
                </a>

                <ul class="nav-links">
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <li style={format!("animation-delay: {:.1}s", index as f64 * 0.1)}>
                            <a href={item.href} class="nav-link">
                                { item.label }
                                <span class="nav-underline"></span>
                            </a>
                        </li>
                    }) }
                </ul>

                <a href={CONTACT_ANCHOR} class="nav-cta">
                    <span>{"Fale Conosco"}</span>
                </a>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Abrir menu"
                    aria-expanded={(*menu_open).to_string()}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li>
                                <a href={item.href} onclick={close_menu.clone()}>{ item.label }</a>
                            </li>
                        }) }
                        <li>
                            <a href={CONTACT_ANCHOR} class="mobile-cta" onclick={close_menu.clone()}>
                                {"Fale Conosco"}
                            </a>
                        </li>
                    </ul>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.5s ease, border-color 0.5s ease, backdrop-filter 0.5s ease;
                    border-bottom: 1px solid transparent;
                    animation: headerDrop 0.8s ease-out;
                }
                .site-header.scrolled {
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom-color: rgba(255, 255, 255, 0.05);
                }
                @keyframes headerDrop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .site-nav {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    position: relative;
                    display: block;
                }
                .nav-logo img {
                    border-radius: 0.5rem;
                    transition: transform 0.3s ease;
                }
                .nav-logo:hover img {
                    transform: scale(1.05);
                }
                .nav-logo-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 0.5rem;
                    background: rgba(139, 92, 246, 0.2);
                    filter: blur(24px);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .nav-logo:hover .nav-logo-glow {
                    opacity: 1;
                }
                .nav-links {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 2rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-links li {
                    opacity: 0;
                    animation: fadeDown 0.5s ease forwards;
                }
                .nav-link {
                    position: relative;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.7);
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-underline {
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 0;
                    height: 2px;
                    background: linear-gradient(90deg, #8b5cf6, #06b6d4);
                    transition: width 0.3s ease;
                }
                .nav-link:hover .nav-underline {
                    width: 100%;
                }
                .nav-cta {
                    padding: 0.625rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    background: linear-gradient(90deg, #7c3aed, #8b5cf6);
                    transition: background 0.5s ease;
                }
                .nav-cta:hover {
                    background: linear-gradient(90deg, #06b6d4, #8b5cf6);
                }
                .burger-menu {
                    display: none;
                    width: 2.5rem;
                    height: 2.5rem;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 6px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 1.5rem;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(8px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-8px) rotate(-45deg);
                }
                .mobile-menu {
                    background: rgba(0, 0, 0, 0.95);
                    backdrop-filter: blur(24px);
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    animation: fadeDown 0.3s ease;
                }
                .mobile-menu ul {
                    list-style: none;
                    margin: 0;
                    padding: 2rem 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .mobile-menu a {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.7);
                }
                .mobile-menu a.mobile-cta {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    color: #fff;
                    background: linear-gradient(90deg, #7c3aed, #06b6d4);
                }
                @media (max-width: 768px) {
                    .nav-links, .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
