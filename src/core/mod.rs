pub mod float_utils;
pub mod newton;
pub mod text_format;
