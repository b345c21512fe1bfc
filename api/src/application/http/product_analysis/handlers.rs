pub mod analyze_product;
pub mod recommend_alternatives;
pub mod research_product;
pub mod score_ingredients;
pub mod update_preferences_from_text;
