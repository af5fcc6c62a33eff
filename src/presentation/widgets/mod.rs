mod rounded_button;

pub use rounded_button::{BUTTON_HEIGHT, RoundedButton};
