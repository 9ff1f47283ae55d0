pub mod elements;
pub mod rulers;
pub mod sun_sign;
pub mod types;

pub use elements::{summarize_sign_elements, ElementBalance};
pub use rulers::{sign_ruler, sign_to_lord, Rulership};
pub use sun_sign::{deterministic_sign, sun_sign_for_date, SIGN_WINDOWS};
pub use types::{Element, Planet, Sign, PLANETS, ZODIAC};
