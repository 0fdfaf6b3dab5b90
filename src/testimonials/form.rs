use std::collections::BTreeMap;

use chrono::Utc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::testimonials::picture::{initials, read_picture};
use crate::testimonials::rating::{star_fill, STAR_COUNT};
use crate::testimonials::record::submit_testimonial;
use crate::testimonials::store::LocalTestimonialStore;
use crate::testimonials::validate::{validate, Field, TestimonialDraft, MIN_TESTIMONIAL_CHARS};

pub enum Msg {
    FullNameInput(String),
    DesignationInput(String),
    CompanyInput(String),
    EmailInput(String),
    TestimonialInput(String),
    AgreeToggled(bool),
    StarClicked(u8),
    StarHovered(u8),
    HoverCleared,
    BrowsePicture,
    PictureChosen(Option<web_sys::File>),
    PictureRead(Result<String, String>),
    PictureRemoved,
    Submit,
}

pub struct TestimonialForm {
    draft: TestimonialDraft,
    errors: BTreeMap<Field, &'static str>,
    hover_rating: Option<u8>,
    picture: Option<String>,
    save_failed: bool,
    submitted: bool,
    file_input: NodeRef,
    store: LocalTestimonialStore,
}

impl Component for TestimonialForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TestimonialForm {
            draft: TestimonialDraft::default(),
            errors: BTreeMap::new(),
            hover_rating: None,
            picture: None,
            save_failed: false,
            submitted: false,
            file_input: NodeRef::default(),
            store: LocalTestimonialStore,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FullNameInput(value) => {
                self.draft.full_name = value;
                true
            }
            Msg::DesignationInput(value) => {
                self.draft.designation = value;
                true
            }
            Msg::CompanyInput(value) => {
                self.draft.company = value;
                true
            }
            Msg::EmailInput(value) => {
                self.draft.email = value;
                true
            }
            Msg::TestimonialInput(value) => {
                self.draft.testimonial = value;
                true
            }
            Msg::AgreeToggled(checked) => {
                self.draft.agreed = checked;
                true
            }
            Msg::StarClicked(value) => {
                self.draft.rating = value;
                // picking a star clears its message straight away
                self.errors.remove(&Field::Rating);
                true
            }
            Msg::StarHovered(value) => {
                self.hover_rating = Some(value);
                true
            }
            Msg::HoverCleared => {
                self.hover_rating = None;
                true
            }
            Msg::BrowsePicture => {
                if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::PictureChosen(None) => false,
            Msg::PictureChosen(Some(file)) => {
                ctx.link()
                    .send_future(async move { Msg::PictureRead(read_picture(file).await) });
                false
            }
            Msg::PictureRead(Ok(data_url)) => {
                self.picture = Some(data_url);
                true
            }
            Msg::PictureRead(Err(err)) => {
                // keep whatever was shown before; choosing again retries
                gloo_console::error!(format!("could not read picture: {}", err));
                false
            }
            Msg::PictureRemoved => {
                if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                self.picture = None;
                true
            }
            Msg::Submit => {
                self.save_failed = false;
                self.errors = validate(&self.draft).into_errors();
                if !self.errors.is_empty() {
                    return true;
                }
                match submit_testimonial(&self.store, &self.draft, self.picture.clone(), Utc::now()) {
                    Ok(record) => {
                        log::info!("Testimonial {} saved", record.id);
                        self.submitted = true;
                    }
                    Err(err) => {
                        log::error!("Testimonial save failed: {}", err);
                        self.save_failed = true;
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_full_name = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FullNameInput(input.value())
        });
        let on_designation = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::DesignationInput(input.value())
        });
        let on_company = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::CompanyInput(input.value())
        });
        let on_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::EmailInput(input.value())
        });
        let on_testimonial = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::TestimonialInput(area.value())
        });
        let on_agree = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::AgreeToggled(input.checked())
        });
        let on_picture = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::PictureChosen(input.files().and_then(|files| files.get(0)))
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="testimonial-form-wrap">
                <form class="testimonial-form" onsubmit={on_submit} novalidate=true>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Full Name *"}</label>
                            <input
                                type="text"
                                value={self.draft.full_name.clone()}
                                oninput={on_full_name}
                                placeholder="Jane Doe"
                            />
                            { self.field_error(Field::FullName) }
                        </div>
                        <div class="form-group">
                            <label>{"Designation *"}</label>
                            <input
                                type="text"
                                value={self.draft.designation.clone()}
                                oninput={on_designation}
                                placeholder="Chief Financial Officer"
                            />
                            { self.field_error(Field::Designation) }
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Company"}</label>
                            <input
                                type="text"
                                value={self.draft.company.clone()}
                                oninput={on_company}
                                placeholder="Acme Industries (optional)"
                            />
                        </div>
                        <div class="form-group">
                            <label>{"Email *"}</label>
                            <input
                                type="email"
                                value={self.draft.email.clone()}
                                oninput={on_email}
                                placeholder="jane@acme.com"
                            />
                            { self.field_error(Field::Email) }
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Your Photo"}</label>
                        <div class="picture-row">
                            <div class="picture-frame">
                                {
                                    match &self.picture {
                                        Some(data_url) => html! {
                                            <img class="picture-preview" src={data_url.clone()} alt="Preview" />
                                        },
                                        None => html! {
                                            <span class="picture-initials">{ initials(&self.draft.full_name) }</span>
                                        },
                                    }
                                }
                            </div>
                            <div class="picture-actions">
                                <input
                                    ref={self.file_input.clone()}
                                    class="picture-input"
                                    type="file"
                                    accept="image/*"
                                    onchange={on_picture}
                                />
                                <button type="button" class="ghost-button"
                                    onclick={ctx.link().callback(|_| Msg::BrowsePicture)}>
                                    { if self.picture.is_some() { "Change Photo" } else { "📷 Upload Photo" } }
                                </button>
                                {
                                    if self.picture.is_some() {
                                        html! {
                                            <button type="button" class="ghost-button remove"
                                                onclick={ctx.link().callback(|_| Msg::PictureRemoved)}>
                                                {"Remove"}
                                            </button>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Your Rating *"}</label>
                        { self.render_stars(ctx) }
                        { self.field_error(Field::Rating) }
                    </div>

                    <div class="form-group">
                        <label>{"Your Testimonial *"}</label>
                        <textarea
                            rows="6"
                            value={self.draft.testimonial.clone()}
                            oninput={on_testimonial}
                            placeholder="How has working with MRG Capital shaped your portfolio?"
                        />
                        <span class="char-count">
                            { format!("{} / {} characters minimum", self.draft.testimonial.chars().count(), MIN_TESTIMONIAL_CHARS) }
                        </span>
                        { self.field_error(Field::Testimonial) }
                    </div>

                    <div class="form-group">
                        <label class="agree-row">
                            <input type="checkbox" checked={self.draft.agreed} onchange={on_agree} />
                            <span>{"I agree that MRG Capital may publish this testimonial on its website."}</span>
                        </label>
                        { self.field_error(Field::Agreement) }
                    </div>

                    {
                        if self.save_failed {
                            html! { <div class="save-error">{"Error submitting testimonial. Please try again."}</div> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="submit-button">{"Submit Testimonial"}</button>
                </form>

                // No close control and no reset: a successful submission parks
                // the page on this overlay until the next load.
                <div class={classes!("success-overlay", self.submitted.then(|| "show"))}>
                    <div class="success-card">
                        <svg class="success-check" viewBox="0 0 52 52">
                            <circle class="success-check-circle" cx="26" cy="26" r="24" fill="none" />
                            <path class="success-check-mark" fill="none" d="M14 27l8 8 16-16" />
                        </svg>
                        <h3>{"Thank You!"}</h3>
                        <p>{"Your testimonial has been submitted successfully."}</p>
                    </div>
                </div>

                <style>
                    {r#"
                    .testimonial-form-wrap {
                        max-width: 720px;
                        margin: 0 auto;
                    }
                    .testimonial-form {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.12);
                        border-radius: 16px;
                        padding: 2.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1.4rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.4rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }
                    .form-group label {
                        font-size: 0.85rem;
                        letter-spacing: 0.04em;
                        color: #98D8C8;
                    }
                    .form-group input[type="text"],
                    .form-group input[type="email"],
                    .form-group textarea {
                        background: rgba(10, 37, 64, 0.6);
                        border: 1px solid rgba(255, 255, 255, 0.18);
                        border-radius: 8px;
                        padding: 0.7rem 0.9rem;
                        color: #F5F7FA;
                        font-size: 0.95rem;
                    }
                    .form-group input:focus,
                    .form-group textarea:focus {
                        outline: none;
                        border-color: #C0A080;
                    }
                    .form-group textarea {
                        resize: vertical;
                    }
                    .field-error {
                        color: #E88D8D;
                        font-size: 0.8rem;
                    }
                    .char-count {
                        font-size: 0.75rem;
                        color: rgba(245, 247, 250, 0.6);
                        align-self: flex-end;
                    }
                    .picture-row {
                        display: flex;
                        align-items: center;
                        gap: 1.2rem;
                    }
                    .picture-frame {
                        width: 72px;
                        height: 72px;
                        border-radius: 50%;
                        overflow: hidden;
                        border: 2px solid rgba(192, 160, 128, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(192, 160, 128, 0.15);
                        flex-shrink: 0;
                    }
                    .picture-preview {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .picture-initials {
                        font-size: 1.4rem;
                        font-weight: 600;
                        color: #C0A080;
                    }
                    .picture-input {
                        display: none;
                    }
                    .picture-actions {
                        display: flex;
                        gap: 0.8rem;
                    }
                    .ghost-button {
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.25);
                        border-radius: 8px;
                        color: #F5F7FA;
                        padding: 0.55rem 1rem;
                        cursor: pointer;
                        font-size: 0.85rem;
                    }
                    .ghost-button:hover {
                        border-color: #C0A080;
                    }
                    .ghost-button.remove {
                        color: #E88D8D;
                    }
                    .rating-stars {
                        display: flex;
                        gap: 0.4rem;
                        font-size: 1.8rem;
                        cursor: pointer;
                        width: fit-content;
                    }
                    .star {
                        color: rgba(255, 255, 255, 0.25);
                        transition: color 0.15s ease, transform 0.15s ease;
                        user-select: none;
                    }
                    .star:hover {
                        transform: scale(1.15);
                    }
                    .star.filled {
                        color: #C0A080;
                    }
                    .agree-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.6rem;
                        font-size: 0.9rem;
                        color: #F5F7FA !important;
                        cursor: pointer;
                    }
                    .agree-row input {
                        margin-top: 0.2rem;
                        accent-color: #C0A080;
                    }
                    .save-error {
                        background: rgba(232, 141, 141, 0.12);
                        border: 1px solid rgba(232, 141, 141, 0.5);
                        border-radius: 8px;
                        color: #E88D8D;
                        padding: 0.8rem 1rem;
                        font-size: 0.9rem;
                    }
                    .submit-button {
                        background: linear-gradient(135deg, #C0A080, #a8875f);
                        border: none;
                        border-radius: 10px;
                        color: #0A2540;
                        font-weight: 600;
                        font-size: 1rem;
                        padding: 0.9rem;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .submit-button:hover {
                        transform: translateY(-2px);
                        box-shadow: 0 8px 24px rgba(192, 160, 128, 0.35);
                    }
                    .success-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(10, 37, 64, 0.92);
                        backdrop-filter: blur(6px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        visibility: hidden;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                        z-index: 2000;
                    }
                    .success-overlay.show {
                        opacity: 1;
                        visibility: visible;
                        pointer-events: auto;
                    }
                    .success-card {
                        text-align: center;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 16px;
                        padding: 3rem 4rem;
                    }
                    .success-card h3 {
                        font-size: 1.8rem;
                        margin: 1rem 0 0.5rem;
                        color: #F5F7FA;
                    }
                    .success-card p {
                        color: rgba(245, 247, 250, 0.7);
                        margin: 0;
                    }
                    .success-check {
                        width: 72px;
                        height: 72px;
                    }
                    .success-check-circle {
                        stroke: #98D8C8;
                        stroke-width: 2;
                        stroke-dasharray: 166;
                        stroke-dashoffset: 166;
                    }
                    .success-overlay.show .success-check-circle {
                        animation: stroke-draw 0.6s ease forwards;
                    }
                    .success-check-mark {
                        stroke: #98D8C8;
                        stroke-width: 3;
                        stroke-linecap: round;
                        stroke-dasharray: 48;
                        stroke-dashoffset: 48;
                    }
                    .success-overlay.show .success-check-mark {
                        animation: stroke-draw 0.4s ease 0.5s forwards;
                    }
                    @keyframes stroke-draw {
                        to { stroke-dashoffset: 0; }
                    }
                    @media (max-width: 640px) {
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                        .testimonial-form {
                            padding: 1.5rem;
                        }
                        .success-card {
                            padding: 2rem;
                            margin: 0 1rem;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl TestimonialForm {
    fn field_error(&self, field: Field) -> Html {
        match self.errors.get(&field) {
            Some(message) => html! { <span class="field-error">{ *message }</span> },
            None => html! {},
        }
    }

    fn render_stars(&self, ctx: &Context<Self>) -> Html {
        let fill = star_fill(self.draft.rating, self.hover_rating);
        html! {
            <div class="rating-stars" onmouseleave={ctx.link().callback(|_| Msg::HoverCleared)}>
                {
                    for (1..=STAR_COUNT).map(|value| {
                        let filled = fill[(value - 1) as usize];
                        html! {
                            <span
                                class={classes!("star", filled.then(|| "filled"))}
                                onclick={ctx.link().callback(move |_| Msg::StarClicked(value))}
                                onmouseover={ctx.link().callback(move |_| Msg::StarHovered(value))}
                            >
                                {"★"}
                            </span>
                        }
                    })
                }
            </div>
        }
    }
}
