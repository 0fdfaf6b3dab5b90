use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Markets,
    Planning,
    Insights,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Markets, Category::Planning, Category::Insights];

    pub fn label(self) -> &'static str {
        match self {
            Category::Markets => "Markets",
            Category::Planning => "Planning",
            Category::Insights => "Insights",
        }
    }
}

/// `None` is the "All" filter; otherwise only matching posts show.
pub fn post_visible(filter: Option<Category>, post: Category) -> bool {
    filter.map_or(true, |category| category == post)
}

struct BlogPost {
    title: &'static str,
    excerpt: &'static str,
    category: Category,
    date: &'static str,
    read_minutes: u8,
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "What the 2024 smallcap froth tells long-term investors",
        excerpt: "Valuations in parts of the smallcap index have crossed their 2017 peaks. We walk through how we are repositioning the Wealth Maximizer book without abandoning conviction names.",
        category: Category::Markets,
        date: "October 18, 2024",
        read_minutes: 7,
    },
    BlogPost {
        title: "A practical guide to the new PMS fee disclosure format",
        excerpt: "SEBI's revised disclosure norms make fee comparisons genuinely possible for the first time. Here is how to read the new annexure and the questions to ask any manager.",
        category: Category::Planning,
        date: "September 30, 2024",
        read_minutes: 5,
    },
    BlogPost {
        title: "Why we sold a compounder we still admire",
        excerpt: "Selling a great business is harder than buying one. A case study from the Wealth Enhancer portfolio on position sizing, opportunity cost, and knowing what you own.",
        category: Category::Insights,
        date: "September 12, 2024",
        read_minutes: 9,
    },
    BlogPost {
        title: "Rate cuts, election years, and other things we do not forecast",
        excerpt: "Our investment process deliberately ignores macro timing. A look back at what that discipline cost us, and what it saved us, over five years.",
        category: Category::Markets,
        date: "August 25, 2024",
        read_minutes: 6,
    },
    BlogPost {
        title: "Structuring family wealth across three generations",
        excerpt: "Trusts, HUFs, and plain joint accounts each solve different problems. A framework for deciding which vehicles your family actually needs.",
        category: Category::Planning,
        date: "August 2, 2024",
        read_minutes: 8,
    },
    BlogPost {
        title: "The quiet costs of over-diversification",
        excerpt: "Forty stocks across five advisors is not safety, it is an expensive index fund. How we think about concentration, and where the real risks hide.",
        category: Category::Insights,
        date: "July 15, 2024",
        read_minutes: 6,
    },
];

#[function_component(Blog)]
pub fn blog() -> Html {
    let filter = use_state(|| None::<Category>);

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
        <div class="blog-page">
            <section class="blog-hero">
                <h1>{"Letters and notes"}</h1>
                <p>{"What we are reading, buying, and unlearning. Written by the investment team, not a content agency."}</p>
            </section>

            <div class="blog-filters">
                {
                    {
                        let filter_handle = filter.clone();
                        html! {
                            <button
                                class={classes!("filter-button", filter.is_none().then(|| "active"))}
                                onclick={Callback::from(move |_| filter_handle.set(None))}
                            >
                                {"All"}
                            </button>
                        }
                    }
                }
                {
                    for Category::ALL.iter().map(|category| {
                        let category = *category;
                        let filter_handle = filter.clone();
                        html! {
                            <button
                                class={classes!("filter-button", (*filter == Some(category)).then(|| "active"))}
                                onclick={Callback::from(move |_| filter_handle.set(Some(category)))}
                            >
                                { category.label() }
                            </button>
                        }
                    })
                }
            </div>

            <section class="blog-grid">
                {
                    for POSTS
                        .iter()
                        .filter(|post| post_visible(*filter, post.category))
                        .map(|post| html! {
                            <article class="blog-card">
                                <span class="blog-category">{ post.category.label() }</span>
                                <h2>{ post.title }</h2>
                                <p>{ post.excerpt }</p>
                                <div class="blog-meta">
                                    <span>{ post.date }</span>
                                    <span>{ format!("{} min read", post.read_minutes) }</span>
                                </div>
                            </article>
                        })
                }
            </section>

            <style>
                {r#"
                .blog-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .blog-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .blog-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .blog-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 560px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .blog-filters {
                    display: flex;
                    justify-content: center;
                    gap: 0.8rem;
                    padding: 2rem;
                    flex-wrap: wrap;
                }
                .filter-button {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 999px;
                    color: #F5F7FA;
                    padding: 0.5rem 1.3rem;
                    cursor: pointer;
                    font-size: 0.85rem;
                    transition: all 0.2s ease;
                }
                .filter-button:hover {
                    border-color: #C0A080;
                }
                .filter-button.active {
                    background: #C0A080;
                    border-color: #C0A080;
                    color: #0A2540;
                    font-weight: 600;
                }
                .blog-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 1rem 2rem 6rem;
                }
                .blog-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    padding: 2rem;
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }
                .blog-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(192, 160, 128, 0.5);
                }
                .blog-category {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.7rem;
                    color: #98D8C8;
                }
                .blog-card h2 {
                    font-size: 1.3rem;
                    margin: 0.8rem 0;
                    line-height: 1.4;
                }
                .blog-card p {
                    color: rgba(245, 247, 250, 0.7);
                    line-height: 1.6;
                    font-size: 0.92rem;
                }
                .blog-meta {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.2rem;
                    font-size: 0.8rem;
                    color: rgba(245, 247, 250, 0.5);
                }
                @media (max-width: 820px) {
                    .blog-grid {
                        grid-template-columns: 1fr;
                    }
                    .blog-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_everything() {
        for post in POSTS {
            assert!(post_visible(None, post.category));
        }
    }

    #[test]
    fn category_filter_shows_only_its_own_posts() {
        let visible: Vec<&BlogPost> = POSTS
            .iter()
            .filter(|post| post_visible(Some(Category::Markets), post.category))
            .collect();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|post| post.category == Category::Markets));
    }

    #[test]
    fn every_category_has_at_least_one_post() {
        for category in Category::ALL {
            assert!(POSTS.iter().any(|post| post.category == category));
        }
    }
}
