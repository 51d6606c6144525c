use yew::prelude::*;

use crate::config::LandingConfig;
use crate::content::Content;
use crate::hooks::use_feature_selector;

use super::{DescriptionPanel, FeatureList};

#[derive(Properties, PartialEq)]
pub struct VerifyHeroProps {
    pub content: Content,
    #[prop_or_default]
    pub config: LandingConfig,
}

#[function_component(VerifyHero)]
pub fn verify_hero(props: &VerifyHeroProps) -> Html {
    let VerifyHeroProps { content, config } = props;
    let style = config.transition;
    let selector = use_feature_selector(content.features.len(), config);

    let section_style = format!("--transition-ms: {}ms;", config.transition_ms());
    let background_style = format!("background-image: url('{}');", config.background_url);

    html! {
        <main>
            <section class={style.section_class()} style={section_style}>
                <div class="hero-background" style={background_style}></div>

                <div class="hero-content">
                    <div class="tag-pill">{ &content.tag }</div>

                    <div class="hero-columns">
                        <div class="hero-text">
                            <h1 class="hero-title">{ &content.title }</h1>
                            <DescriptionPanel
                                text={AttrValue::from(content.description_at(selector.active).to_string())}
                                index={selector.active}
                                {style}
                            />
                        </div>

                        <FeatureList
                            features={content.features.clone()}
                            active={selector.active}
                            {style}
                            on_select={selector.select.clone()}
                            on_wheel={selector.wheel.clone()}
                        />
                    </div>
                </div>
            </section>
        </main>
    }
}
