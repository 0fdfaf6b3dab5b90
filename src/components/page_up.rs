use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

// The button stays dimmed and inert until the reader has scrolled past
// this offset.
const SHOW_AFTER_PX: i32 = 300;

#[function_component(PageUp)]
pub fn page_up() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    visible.set(scroll_top > SHOW_AFTER_PX);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_click = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <button
                class={classes!("page-up", (*visible).then(|| "visible"))}
                onclick={on_click}
                aria-label="Back to top"
            >
                {"↑"}
            </button>
            <style>
                {r#"
                .page-up {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid rgba(192, 160, 128, 0.6);
                    background: rgba(10, 37, 64, 0.9);
                    color: #C0A080;
                    font-size: 1.3rem;
                    cursor: pointer;
                    opacity: 0.3;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 900;
                }
                .page-up.visible {
                    opacity: 1;
                    pointer-events: auto;
                }
                .page-up:hover {
                    background: rgba(192, 160, 128, 0.2);
                }
                "#}
            </style>
        </>
    }
}
