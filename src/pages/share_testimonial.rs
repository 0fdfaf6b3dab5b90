use yew::prelude::*;

use crate::testimonials::form::TestimonialForm;

#[function_component(ShareTestimonial)]
pub fn share_testimonial() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    html! {
        <div class="share-page">
            <section class="share-hero">
                <h1>{"Share Your Story"}</h1>
                <p>{"Tell other families what working with MRG Capital has meant for your portfolio. Selected testimonials appear on our website."}</p>
            </section>
            <section class="share-form-section">
                <TestimonialForm />
            </section>
            <style>
                {r#"
                .share-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .share-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .share-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .share-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 560px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .share-form-section {
                    padding: 2rem 1.5rem 6rem;
                }
                @media (max-width: 768px) {
                    .share-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
