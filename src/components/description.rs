use yew::prelude::*;

use crate::transition::TransitionStyle;

#[derive(Properties, PartialEq)]
pub struct DescriptionPanelProps {
    pub text: AttrValue,
    /// Changing the key remounts the line, which restarts its CSS animation.
    pub index: usize,
    pub style: TransitionStyle,
}

#[function_component(DescriptionPanel)]
pub fn description_panel(props: &DescriptionPanelProps) -> Html {
    html! {
        <div class="description-frame" aria-live="polite">
            <p key={props.index} class={props.style.description_class()}>
                { &*props.text }
            </p>
        </div>
    }
}
