use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, header::Header, hero::Hero,
    marquee::ScrollMarquee, portfolio::Portfolio, process::ProcessScroller,
    services::Services, showcase::VideoShowcase,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="page">
            <div class="noise-overlay"></div>
            <Header />
            <Hero />
            <ScrollMarquee />
            <Services />
            <ProcessScroller />
            <VideoShowcase />
            <Portfolio />
            <About />
            <Contact />
            <Footer />
        </main>
    }
}
