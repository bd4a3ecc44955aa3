pub mod decoder;
pub mod file_source;
pub mod regex_markup;
