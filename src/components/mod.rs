mod description;
mod feature_card;
mod feature_list;
mod hero;

pub use description::DescriptionPanel;
pub use feature_card::FeatureCard;
pub use feature_list::FeatureList;
pub use hero::{VerifyHero, VerifyHeroProps};
