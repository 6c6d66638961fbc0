//! Landing Hero Component

use leptos::html::{Div, A};
use leptos::prelude::*;
use page_effects::{bind_magnetic, bind_pressed, bind_tilt, StatCounter, HERO_TILT_DEG};

#[component]
pub fn LandingHero() -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();
    let cta_ref = NodeRef::<A>::new();

    Effect::new(move |_| {
        if let Some(card) = card_ref.get() {
            bind_tilt(&card, HERO_TILT_DEG);
        }
    });
    Effect::new(move |_| {
        if let Some(cta) = cta_ref.get() {
            bind_magnetic(&cta);
            bind_pressed(&cta);
        }
    });

    view! {
        <section class="hero" aria-labelledby="hero-heading">
            <div class="hero-image-overlay" aria-hidden="true"></div>
            <div class="container">
                <div class="hero-left">
                    <div class="hero-badges" aria-hidden="true">
                        <span class="hero-badge">"⚡ 30-minute average delivery"</span>
                        <span class="hero-badge">"🔥 Handpicked local favourites"</span>
                        <span class="hero-badge">"🛡️ Secure online payments"</span>
                    </div>
                    <h1 id="hero-heading" class="hero-title">
                        "Your favourite food, delivered faster than ever."
                    </h1>
                    <p class="hero-subtitle">
                        "Browse curated menus from nearby restaurants, track your order in real-time, and enjoy fresh meals at your doorstep."
                    </p>
                    <div class="hero-actions">
                        <a
                            node_ref=cta_ref
                            href="/user/menu"
                            class="btn btn-primary hero-cta"
                            role="button"
                            aria-label="Browse Menu"
                        >
                            "Browse Menu"
                        </a>
                        <a href="/user/register" class="btn btn-outline-light" role="button">
                            "Create free account"
                        </a>
                    </div>
                    <div class="hero-stats" aria-hidden="true">
                        <StatCounter target=250.0 label="+ Partner Restaurants" />
                        <StatCounter target=12.0 label="min Avg. Prep Time" suffix="+" />
                        <StatCounter target=4.8 label="★ App Rating" />
                    </div>
                </div>
                <div class="hero-right">
                    <div node_ref=card_ref class="hero-card" id="heroCard" tabindex="0" aria-label="Live order preview">
                        <div class="hero-card-header">
                            <div>
                                <div class="hero-card-title">"Live Order Preview"</div>
                                <small>"Example of an active delivery"</small>
                            </div>
                            <span class="hero-chip">"On the way"</span>
                        </div>
                        <div class="hero-card-items" aria-live="polite">
                            <div>"• Spicy Paneer Wrap x 1"</div>
                            <div>"• Loaded Fries x 1"</div>
                            <div>"• Cold Coffee x 2"</div>
                        </div>
                        <div class="hero-card-footer">
                            <div>
                                <div style="font-size: 0.8rem">"ETA"</div>
                                <strong>"18–22 min"</strong>
                            </div>
                            <div>
                                <div style="font-size: 0.8rem">"Payable"</div>
                                <strong>"₹ 529"</strong>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
