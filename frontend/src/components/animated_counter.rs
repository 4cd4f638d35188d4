use gloo_timers::callback::Timeout;
use web_sys::js_sys::Date;
use yew::prelude::*;

const FRAME_MS: u32 = 16;

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(4)
}

/// Value shown `elapsed_ms` into an animation counting up to `target`.
pub fn counter_value(target: u32, elapsed_ms: f64, duration_ms: u32) -> u32 {
    let progress = if duration_ms == 0 {
        1.0
    } else {
        (elapsed_ms / duration_ms as f64).min(1.0)
    };
    (ease_out_quart(progress) * target as f64).floor() as u32
}

/// Whether another frame has to be scheduled after `so_far_ms` of animation.
pub fn needs_frame(in_view: bool, so_far_ms: f64, duration_ms: f64) -> bool {
    in_view && so_far_ms < duration_ms
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(false)]
    pub in_view: bool,
    #[prop_or(2000)]
    pub duration: u32,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let elapsed = use_state(|| 0.0_f64);
    let started_at = use_mut_ref(|| None::<f64>);

    {
        let so_far_now = *elapsed;
        let elapsed = elapsed.clone();
        let duration = props.duration as f64;
        use_effect_with_deps(
            move |(in_view, so_far)| {
                let mut frame = None;
                if needs_frame(*in_view, *so_far, duration) {
                    let start = *started_at.borrow_mut().get_or_insert_with(Date::now);
                    frame = Some(Timeout::new(FRAME_MS, move || {
                        elapsed.set((Date::now() - start).min(duration));
                    }));
                }
                move || drop(frame)
            },
            (props.in_view, so_far_now),
        );
    }

    let shown = if props.in_view {
        counter_value(props.value, *elapsed, props.duration)
    } else {
        0
    };

    html! {
        <span class="animated-counter" data-testid={format!("counter-{}", props.value)}>
            { props.prefix.clone() }{ shown }{ props.suffix.clone() }
        </span>
    }
}
