use yew::prelude::*;

use crate::testimonials::picture::initials;

#[derive(PartialEq)]
struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    credentials: &'static [&'static str],
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Mohan R. Gandhi",
        role: "Founder and Chief Investment Officer",
        bio: "Mohan spent fourteen years running midcap research at a Mumbai institutional desk before founding MRG Capital in 2019. He reads annual reports the way other people read novels.",
        credentials: &["CFA charterholder", "IIM Ahmedabad, PGP", "14 years in equity research"],
    },
    TeamMember {
        name: "Rukmini Iyer",
        role: "Portfolio Manager, Wealth Protector",
        bio: "Rukmini built her career in fixed income before crossing to equities, which shows in how she sizes risk. She runs the Protector book and chairs the risk committee.",
        credentials: &["FRM", "10 years across debt and equity", "Previously at a leading AMC"],
    },
    TeamMember {
        name: "Arjun Nair",
        role: "Head of Client Partnerships",
        bio: "Arjun translates portfolio decisions into plain language for client families. Every quarterly letter crosses his desk before it crosses yours.",
        credentials: &["CA", "Ex-private bank advisory", "Handles onboarding end to end"],
    },
];

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    pub member: &'static TeamMember,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let flipped = use_state(|| false);
    let member = props.member;

    let flip = {
        let flipped = flipped.clone();
        Callback::from(move |_| flipped.set(true))
    };
    let flip_back = {
        let flipped = flipped.clone();
        Callback::from(move |_| flipped.set(false))
    };

    html! {
        <div class={classes!("team-card", (*flipped).then(|| "flipped"))}>
            <div class="team-card-inner">
                <div class="team-face team-front">
                    <div class="team-avatar">{ initials(member.name) }</div>
                    <h3>{ member.name }</h3>
                    <span class="team-role">{ member.role }</span>
                    <button class="team-flip-button" onclick={flip}>{"Know more"}</button>
                </div>
                <div class="team-face team-back">
                    <p>{ member.bio }</p>
                    <ul>
                        { for member.credentials.iter().map(|credential| html! { <li>{ *credential }</li> }) }
                    </ul>
                    <button class="team-flip-button" onclick={flip_back}>{"Back"}</button>
                </div>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
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
        <div class="about-page">
            <section class="about-hero">
                <h1>{"A small firm, on purpose"}</h1>
                <p>{"MRG Capital manages concentrated equity portfolios for a limited number of families. We cap the client count so the people researching the stocks are the people you talk to."}</p>
            </section>

            <section class="about-story">
                <h2>{"How we got here"}</h2>
                <p>{"The firm began in May 2019 with eleven families and a conviction that most wealthy Indian households were paying institutional fees for retail products. We built the opposite: institutional research discipline, applied to personal portfolios, with fees that only work if clients stay for years."}</p>
                <p>{"Five years later the strategies have been through a pandemic crash, a smallcap mania, and a flat 2022. The client list has grown mostly by referral, which is the only marketing that says anything."}</p>
            </section>

            <section class="about-team">
                <h2>{"The team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! { <TeamCard member={member} /> }) }
                </div>
            </section>

            <style>
                {r#"
                .about-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .about-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .about-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .about-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 640px;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .about-story {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .about-story h2 {
                    font-size: 2rem;
                    text-align: center;
                    margin-bottom: 1.5rem;
                }
                .about-story p {
                    color: rgba(245, 247, 250, 0.75);
                    line-height: 1.8;
                }
                .about-team {
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 2rem 2rem 6rem;
                    text-align: center;
                }
                .about-team h2 {
                    font-size: 2rem;
                    margin-bottom: 2.5rem;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .team-card {
                    perspective: 1000px;
                    height: 340px;
                }
                .team-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.6s ease;
                    transform-style: preserve-3d;
                }
                .team-card.flipped .team-card-inner {
                    transform: rotateY(180deg);
                }
                .team-face {
                    position: absolute;
                    inset: 0;
                    backface-visibility: hidden;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.8rem;
                }
                .team-back {
                    transform: rotateY(180deg);
                    text-align: left;
                    align-items: flex-start;
                    justify-content: space-between;
                }
                .team-avatar {
                    width: 72px;
                    height: 72px;
                    border-radius: 50%;
                    background: rgba(192, 160, 128, 0.2);
                    border: 2px solid rgba(192, 160, 128, 0.6);
                    color: #C0A080;
                    font-size: 1.8rem;
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .team-card h3 {
                    margin: 0;
                }
                .team-role {
                    font-size: 0.85rem;
                    color: rgba(245, 247, 250, 0.6);
                }
                .team-back p {
                    color: rgba(245, 247, 250, 0.75);
                    font-size: 0.88rem;
                    line-height: 1.6;
                    margin: 0;
                }
                .team-back ul {
                    margin: 0;
                    padding-left: 1.2rem;
                    color: #98D8C8;
                    font-size: 0.82rem;
                }
                .team-back li {
                    padding: 0.15rem 0;
                }
                .team-flip-button {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 8px;
                    color: #F5F7FA;
                    padding: 0.5rem 1.2rem;
                    cursor: pointer;
                    font-size: 0.85rem;
                }
                .team-flip-button:hover {
                    border-color: #C0A080;
                }
                @media (max-width: 900px) {
                    .team-grid {
                        grid-template-columns: 1fr;
                    }
                    .team-card {
                        height: 320px;
                    }
                    .about-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
