use heartswap_core::{no_style, taunt, yes_style};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct QuestionProps {
    pub no_clicks: u32,
    pub on_yes: Callback<MouseEvent>,
    pub on_no: Callback<MouseEvent>,
}

#[function_component]
pub(crate) fn QuestionView(props: &QuestionProps) -> Html {
    let QuestionProps {
        no_clicks,
        on_yes,
        on_no,
    } = props;

    let yes = yes_style(*no_clicks).css();
    let no = no_style(*no_clicks).map(|style| style.css());

    html! {
        <div class="page question">
            <article>
                <h1 class="note">
                    {"Our schedules didn't align so I couldn't ask you in person, but I wanted to ask you nevertheless :)"}
                </h1>
                <h2>{"Will you be my Valentine ♡??"}</h2>
                <div class="answers">
                    <button class="yes" style={yes} onclick={on_yes.clone()}>{"Yes!"}</button>
                    if let Some(style) = no {
                        <button class="no" {style} onclick={on_no.clone()}>{"No"}</button>
                    }
                </div>
                <p class="taunt">{taunt(*no_clicks)}</p>
            </article>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FinalProps {
    pub on_reset: Callback<MouseEvent>,
}

#[function_component]
pub(crate) fn FinalView(props: &FinalProps) -> Html {
    html! {
        <div class="page final">
            <div>
                <h1 class="heart">{"❤️"}</h1>
                <h2>{"Yay!"}</h2>
                <p>{"I knew you'd say yes! Happy Soon To Be Valentine's Day! 💕"}</p>
                <button onclick={props.on_reset.clone()}>{"Back to Puzzle 🧩"}</button>
            </div>
        </div>
    }
}
