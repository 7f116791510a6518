pub(crate) mod formatters;
mod js_functions;
mod js_media_element;

pub use js_functions::*;
pub(crate) use js_media_element::{JsMediaElement, JsTimers};
