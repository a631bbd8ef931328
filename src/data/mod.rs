pub mod bool_element;
pub mod column;
pub mod element;
pub mod element_value;
pub mod float_element;
pub mod int_element;
pub mod text_element;
pub mod time_element;
