use yew::prelude::*;

use crate::components::toast::{use_toast, ToastView};
use crate::pages::calculator::PriceCalculator;
use crate::pages::common::{scroll_callback, CALCULATOR_SECTION_ID, ENQUIRY_SECTION_ID};
use crate::pages::enquiry_form::EnquiryFormSection;

const STEPS: [(&str, &str, &str); 3] = [
    ("📝", "Fill Your Details", "Tell us about your assignment - class, subject, deadline, and pages"),
    ("⏳", "We Handle the Grind", "Our experts get to work on your assignments while you relax"),
    ("🎉", "You Ace It Effortlessly!", "Receive your completed work and submit with confidence"),
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Instagram", "https://instagram.com/thehelpingclub"),
    ("Facebook", "https://facebook.com/thehelpingclub"),
    ("Twitter", "https://twitter.com/thehelpingclub"),
    ("LinkedIn", "https://linkedin.com/company/thehelpingclub"),
];

const PAGE_STYLES: &str = r#"
    .landing {
        min-height: 100vh;
        background: linear-gradient(135deg, #111827, #581c87, #000);
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        overflow-x: hidden;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 5rem 1rem;
        gap: 1.5rem;
    }
    .hero-title {
        font-size: clamp(3rem, 8vw, 6rem);
        font-weight: 900;
        margin: 0;
        background: linear-gradient(to right, #c084fc, #f472b6, #60a5fa);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-subtitle { font-size: 1.75rem; color: #d1d5db; }
    .hero-buttons { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
    .hero-button {
        border: none;
        color: #fff;
        font-weight: 700;
        font-size: 1.25rem;
        padding: 1.25rem 2.5rem;
        border-radius: 9999px;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .hero-button:hover { transform: scale(1.05); }
    .hero-button.blue { background: linear-gradient(to right, #2563eb, #0891b2); }
    .hero-button.purple { background: linear-gradient(to right, #9333ea, #db2777); }
    .section { max-width: 56rem; margin: 0 auto; padding: 5rem 1rem; }
    .section-title {
        font-size: clamp(2.5rem, 6vw, 4rem);
        font-weight: 900;
        text-align: center;
        margin-bottom: 3rem;
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-title.purple { background-image: linear-gradient(to right, #c084fc, #f472b6); }
    .section-title.green { background-image: linear-gradient(to right, #4ade80, #22d3ee); }
    .section-title.blue { background-image: linear-gradient(to right, #60a5fa, #c084fc); }
    .card {
        background: rgba(17, 24, 39, 0.85);
        backdrop-filter: blur(16px);
        border-radius: 1.5rem;
        padding: 2.5rem;
    }
    .purple-border { border: 1px solid rgba(168, 85, 247, 0.3); }
    .green-border { border: 1px solid rgba(34, 197, 94, 0.3); }
    .highlight { color: #4ade80; font-weight: 700; }
    .muted { color: #9ca3af; font-size: 0.9rem; }
    .card label { display: block; font-weight: 600; margin: 1.25rem 0 0.5rem; color: #e5e7eb; }
    .card input, .card select, .card textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 1rem 1.25rem;
        background: rgba(31, 41, 55, 0.5);
        border: 1px solid rgba(168, 85, 247, 0.3);
        border-radius: 0.75rem;
        color: #fff;
        font-size: 1rem;
    }
    .card option, .card optgroup { background: #1f2937; }
    .calculate-button, .submit-button {
        width: 100%;
        margin-top: 2rem;
        border: none;
        color: #fff;
        font-weight: 700;
        font-size: 1.25rem;
        padding: 1.25rem 2rem;
        border-radius: 0.75rem;
        cursor: pointer;
    }
    .calculate-button { background: linear-gradient(to right, #16a34a, #0891b2); }
    .submit-button { background: linear-gradient(to right, #9333ea, #db2777); }
    .submit-button:disabled { opacity: 0.5; cursor: not-allowed; }
    .price-breakdown {
        margin-top: 2rem;
        padding: 1.5rem;
        border: 1px solid rgba(34, 197, 94, 0.5);
        border-radius: 1rem;
        background: rgba(20, 83, 45, 0.4);
    }
    .price-breakdown h3 { text-align: center; color: #4ade80; }
    .breakdown-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem 1rem; }
    .breakdown-label { text-align: right; font-weight: 600; }
    .breakdown-total {
        display: flex;
        justify-content: space-between;
        font-size: 1.5rem;
        font-weight: 700;
        border-top: 1px solid rgba(34, 197, 94, 0.3);
        margin-top: 1rem;
        padding-top: 1rem;
    }
    .total-amount { color: #facc15; }
    .breakdown-note { text-align: center; font-size: 0.85rem; color: #9ca3af; }
    .about-card { text-align: center; }
    .about-icons { display: flex; justify-content: center; gap: 2rem; font-size: 3.5rem; }
    .about-backlogs { font-size: 1.75rem; font-weight: 700; color: #fb923c; }
    .about-tagline { font-size: 2.25rem; font-weight: 900; }
    .steps { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem; }
    .step { text-align: center; }
    .step-icon { font-size: 4rem; margin-bottom: 1.5rem; }
    .enquiry-terms {
        margin-top: 2rem;
        padding: 1.5rem;
        text-align: center;
        border: 1px solid rgba(234, 179, 8, 0.3);
        border-radius: 0.75rem;
        background: rgba(113, 63, 18, 0.3);
    }
    .enquiry-terms p { margin: 0.25rem 0; }
    .loading-spinner {
        display: inline-block;
        width: 20px;
        height: 20px;
        border: 3px solid rgba(255,255,255,.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s ease-in-out infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .footer {
        padding: 3rem 1rem;
        border-top: 1px solid rgba(168, 85, 247, 0.3);
        background: rgba(17, 24, 39, 0.5);
    }
    .footer-columns {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 2rem;
        text-align: center;
    }
    .footer-columns a { display: block; color: #9ca3af; margin: 0.5rem 0; text-decoration: none; }
    .footer-columns a:hover { color: #c084fc; }
    .footer-logo { font-size: 1.75rem; font-weight: 900; color: #c084fc; }
    .footer-bottom { text-align: center; margin-top: 2rem; padding-top: 2rem; border-top: 1px solid rgba(168, 85, 247, 0.3); }
    @media (max-width: 768px) {
        .card { padding: 1.5rem; }
        .breakdown-grid { grid-template-columns: 1fr; }
        .breakdown-label { text-align: left; }
    }
"#;

fn hero() -> Html {
    html! {
        <section class="hero">
            <h1 class="hero-title">{"FROM I TRIED"}</h1>
            <h1 class="hero-title">{"TO I ACED IT!"}</h1>
            <p class="hero-subtitle">{"We handle the grind so that you don't have to! 😊"}</p>
            <div class="card purple-border hero-card">
                <p>
                    {"We keep it 100% "}
                    <span class="highlight">{"confidential"}</span>
                    {" and "}
                    <span class="highlight">{"secure"}</span>
                </p>
                <p class="muted">{"DM for price enquiry and services"}</p>
            </div>
            <div class="hero-buttons">
                <button class="hero-button blue" onclick={scroll_callback(CALCULATOR_SECTION_ID)}>
                    {"Calculate Price 💰"}
                </button>
                <button class="hero-button purple" onclick={scroll_callback(ENQUIRY_SECTION_ID)}>
                    {"Get Help Now →"}
                </button>
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section class="section">
            <h2 class="section-title purple">{"THE HELPING CLUB"}</h2>
            <div class="card purple-border about-card">
                <h3>{"STRUGGLING WITH ASSIGNMENTS AND INCOMPLETE COPIES?!"}</h3>
                <div class="about-icons">
                    <span>{"📘"}</span>
                    <span>{"✍️"}</span>
                    <span>{"🗓️"}</span>
                </div>
                <p class="about-backlogs">{"WE GOT YOUR BACKLOGS"}</p>
                <p class="about-tagline">{"Don't waste your time on boring assignments."}</p>
            </div>
        </section>
    }
}

fn how_it_works() -> Html {
    html! {
        <section class="section">
            <h2 class="section-title blue">{"How It Works"}</h2>
            <div class="steps">
                {
                    STEPS.iter().map(|(icon, title, desc)| html! {
                        <div class="card purple-border step">
                            <div class="step-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p class="muted">{*desc}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-columns">
                <div>
                    <h3 class="footer-logo">{"THE HELPING CLUB"}</h3>
                    <p>{"From I Tried to I Aced It! 🎯"}</p>
                    <p class="muted">{"We handle the grind so that you don't have to!"}</p>
                </div>
                <div>
                    <h4>{"Get In Touch 📞"}</h4>
                    <a href="mailto:contact@thehelpingclub.com">{"contact@thehelpingclub.com"}</a>
                    <a href="tel:+919876543210">{"+91 98765 43210"}</a>
                    <a href="https://wa.me/919876543210" target="_blank" rel="noopener noreferrer">{"WhatsApp Us"}</a>
                </div>
                <div>
                    <h4>{"Follow Us 🚀"}</h4>
                    {
                        SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name}>{*name}</a>
                        }).collect::<Html>()
                    }
                    <p class="muted">{"🔒 100% Confidential & Secure"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2025 The Helping Club - From I Tried to I Aced It!"}</p>
                <p class="muted">{"Made with ❤️ for students who want to ace it effortlessly"}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let toast = use_toast();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <style>{PAGE_STYLES}</style>
            <ToastView toast={toast.current()} />
            { hero() }
            { about() }
            <PriceCalculator toast={toast.clone()} />
            { how_it_works() }
            <EnquiryFormSection toast={toast.clone()} />
            { footer() }
        </div>
    }
}
