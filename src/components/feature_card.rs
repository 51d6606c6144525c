use yew::prelude::*;

use crate::content::Feature;
use crate::transition::TransitionStyle;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    pub index: usize,
    pub active: bool,
    pub style: TransitionStyle,
    pub on_select: Callback<usize>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_select.emit(index))
    };

    html! {
        <div
            class={props.style.card_class(props.active)}
            role="tab"
            aria-selected={props.active.to_string()}
            {onclick}
        >
            if props.active {
                <div class="accent-bar"></div>
            }
            <h2 class="feature-title">{ &props.feature.title }</h2>
            <p class="feature-text">{ &props.feature.description }</p>
        </div>
    }
}
