use wasm_bindgen::prelude::*;

mod bindings;
pub mod dispatcher;
mod media_element;
mod utils;

pub use utils::logger::Logger;
