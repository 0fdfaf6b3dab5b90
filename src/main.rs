use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod footer;
    pub mod page_up;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod faq;
    pub mod fees;
    pub mod home;
    pub mod performance;
    pub mod share_testimonial;
    pub mod strategies;
}
mod testimonials {
    pub mod form;
    pub mod picture;
    pub mod rating;
    pub mod record;
    pub mod store;
    pub mod validate;
}

use components::{footer::Footer, page_up::PageUp};
use pages::{
    about::About,
    blog::Blog,
    contact::Contact,
    faq::Faq,
    fees::Fees,
    home::Home,
    performance::Performance,
    share_testimonial::ShareTestimonial,
    strategies::Strategies,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/strategies")]
    Strategies,
    #[at("/performance")]
    Performance,
    #[at("/fees")]
    Fees,
    #[at("/blog")]
    Blog,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[at("/share-testimonial")]
    ShareTestimonial,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Strategies => {
            info!("Rendering Strategies page");
            html! { <Strategies /> }
        },
        Route::Performance => {
            info!("Rendering Performance page");
            html! { <Performance /> }
        },
        Route::Fees => {
            info!("Rendering Fees page");
            html! { <Fees /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::ShareTestimonial => {
            info!("Rendering Share Testimonial page");
            html! { <ShareTestimonial /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 50);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"MRG Capital"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Strategies} classes="nav-link">
                            {"Strategies"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Performance} classes="nav-link">
                            {"Performance"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Fees} classes="nav-link">
                            {"Fees"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Insights"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::ShareTestimonial} classes="nav-cta">
                            {"Share Your Story"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 37, 64, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #C0A080;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: rgba(245, 247, 250, 0.8);
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-link:hover {
                    color: #C0A080;
                }
                .nav-cta {
                    background: #C0A080;
                    color: #0A2540;
                    font-weight: 600;
                    text-decoration: none;
                    padding: 0.55rem 1.1rem;
                    border-radius: 8px;
                    font-size: 0.95rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #F5F7FA;
                }
                @media (max-width: 960px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        position: fixed;
                        top: 0;
                        right: -100%;
                        height: 100vh;
                        width: 260px;
                        background: #071B30;
                        flex-direction: column;
                        align-items: flex-start;
                        padding: 5rem 2rem;
                        transition: right 0.3s ease;
                    }
                    .nav-right.mobile-menu-open {
                        right: 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <PageUp />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
