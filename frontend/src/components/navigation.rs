use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const SCROLLED_THRESHOLD: f64 = 10.0;

pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("services", "Services"),
    ("about", "About"),
    ("faq", "FAQ"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

/// Smooth-scrolls to the element with `id`. Returns false when the current
/// page has no such section.
pub fn scroll_to_section(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > SCROLLED_THRESHOLD);
                    }
                });
                if let Some(window) = &window {
                    if let Err(err) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("could not watch scrolling: {:?}", err);
                    }
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let go_to_section = {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: &'static str| {
            if !scroll_to_section(id) {
                // Sections only live on the landing page.
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            }
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_home = {
        let go_to_section = go_to_section.clone();
        Callback::from(move |_: MouseEvent| go_to_section.emit("hero"))
    };

    let join_waitlist = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::JoinWaitlist);
            }
        })
    };

    let section_links = |class: &'static str| -> Html {
        NAV_SECTIONS
            .iter()
            .map(|(id, label)| {
                let go_to_section = go_to_section.clone();
                let id: &'static str = *id;
                html! {
                    <button class={class} onclick={Callback::from(move |_: MouseEvent| go_to_section.emit(id))}>
                        { *label }
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo" onclick={go_home}>
                    <span class="logo-mark">{"N"}</span>
                    <span class="logo-text">{"Nousu Collective"}</span>
                </div>
                <div class="nav-links">
                    { section_links("nav-link") }
                </div>
                <div class="nav-actions">
                    <button class="nav-cta" onclick={join_waitlist.clone()}>{"Join Waitlist"}</button>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { section_links("mobile-nav-link") }
                            <button class="nav-cta mobile" onclick={join_waitlist}>{"Join Waitlist"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
