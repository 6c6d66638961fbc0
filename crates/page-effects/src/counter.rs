//! Animated numeric counters.
//!
//! Counts from 0 to a target in fixed steps. Integer targets display whole
//! numbers, fractional targets one decimal. The last frame is always the
//! exact target.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::{observe_once, prefers_reduced_motion, query_all};

pub const COUNTER_DURATION_MS: u32 = 900;
const STEP_MS: u32 = 25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    steps: u32,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: u32) -> Self {
        let steps = (duration_ms / STEP_MS).max(1);
        Self {
            target,
            steps,
            increment: target / steps as f64,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Text for frame `step` (1-based).
    pub fn frame(&self, step: u32) -> String {
        if step >= self.steps {
            self.final_text()
        } else {
            format_counter(self.increment * step as f64, is_integer(self.target))
        }
    }

    pub fn final_text(&self) -> String {
        format_counter(self.target, is_integer(self.target))
    }

    /// Nothing to animate: jump straight to the final text.
    pub fn should_skip(target: f64, reduced_motion: bool) -> bool {
        target == 0.0 || reduced_motion
    }
}

/// Lenient number parse: anything unparsable counts as 0.
pub fn parse_target(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn is_integer(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

fn format_counter(value: f64, integer: bool) -> String {
    if integer {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", (value * 10.0).round() / 10.0)
    }
}

/// Animate `el`'s text from 0 to `target`.
pub fn animate_counter(el: web_sys::Element, target: f64, reduced_motion: bool) {
    let animation = CounterAnimation::new(target, COUNTER_DURATION_MS);
    if CounterAnimation::should_skip(target, reduced_motion) {
        el.set_text_content(Some(&animation.final_text()));
        return;
    }
    spawn_local(async move {
        for step in 1..=animation.steps() {
            TimeoutFuture::new(STEP_MS).await;
            el.set_text_content(Some(&animation.frame(step)));
        }
    });
}

/// Animate every `[data-counter]` element once it scrolls into view.
pub fn init_counters(selector: &str, threshold: f64) {
    let counters = query_all(selector);
    if counters.is_empty() {
        return;
    }
    let reduced = prefers_reduced_motion();
    let target_of = |el: &web_sys::Element| {
        el.get_attribute("data-counter")
            .or_else(|| el.text_content())
            .unwrap_or_default()
    };

    if reduced {
        for el in &counters {
            el.set_text_content(Some(&target_of(el)));
        }
        return;
    }
    observe_once(counters, threshold, move |el| {
        animate_counter(el.clone(), parse_target(&target_of(el)), false);
    });
}

/// Hero statistic that counts up once mounted.
#[component]
pub fn StatCounter(
    target: f64,
    #[prop(into)] label: String,
    #[prop(optional, into)] suffix: String,
) -> impl IntoView {
    let animation = CounterAnimation::new(target, COUNTER_DURATION_MS);
    let (value, set_value) = signal(String::from("0"));

    Effect::new(move |_| {
        if CounterAnimation::should_skip(target, prefers_reduced_motion()) {
            set_value.set(animation.final_text());
            return;
        }
        spawn_local(async move {
            for step in 1..=animation.steps() {
                TimeoutFuture::new(STEP_MS).await;
                if set_value.try_set(animation.frame(step)).is_some() {
                    // unmounted
                    break;
                }
            }
        });
    });

    view! {
        <div class="hero-stat" aria-hidden="true">
            <div class="hero-stat-number">{move || value.get()}{suffix}</div>
            <div class="hero-stat-label">{label}</div>
        </div>
    }
}
