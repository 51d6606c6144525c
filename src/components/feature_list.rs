use gloo::console::debug;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, WheelEvent};
use yew::prelude::*;

use crate::content::Feature;
use crate::transition::TransitionStyle;

use super::FeatureCard;

#[derive(Properties, PartialEq)]
pub struct FeatureListProps {
    pub features: Vec<Feature>,
    pub active: usize,
    pub style: TransitionStyle,
    pub on_select: Callback<usize>,
    /// Vertical wheel delta over the list.
    pub on_wheel: Callback<f64>,
}

#[function_component(FeatureList)]
pub fn feature_list(props: &FeatureListProps) -> Html {
    let list_ref = use_node_ref();

    // Yew registers wheel handlers as passive, so the page would still scroll.
    // Attach our own non-passive listener; dropping it (on unmount or when
    // `on_wheel` changes) removes it.
    {
        use_effect_with((list_ref.clone(), props.on_wheel.clone()), |(list_ref, on_wheel)| {
            let on_wheel = on_wheel.clone();
            let listener = list_ref.cast::<HtmlElement>().map(|el| {
                EventListener::new_with_options(
                    &el,
                    "wheel",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                            on_wheel.emit(wheel.delta_y());
                        }
                    },
                )
            });
            if listener.is_none() {
                debug!("verify: feature list not mounted, wheel navigation off");
            }
            move || drop(listener)
        });
    }

    html! {
        <div class="feature-list" role="tablist" ref={list_ref}>
            { for props.features.iter().enumerate().map(|(i, f)| html! {
                <FeatureCard
                    key={i}
                    feature={f.clone()}
                    index={i}
                    active={i == props.active}
                    style={props.style}
                    on_select={props.on_select.clone()}
                />
            })}
        </div>
    }
}
