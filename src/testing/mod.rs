mod scripted_image_generator;
mod scripted_text_generator;

#[allow(unused_imports)]
pub use scripted_image_generator::ScriptedImageGenerator;
#[allow(unused_imports)]
pub use scripted_text_generator::ScriptedTextGenerator;
