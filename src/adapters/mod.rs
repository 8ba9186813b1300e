pub mod catalogs;
pub mod openai_chat_http;
pub mod openai_images_http;
pub mod retrying_text_generator;
pub mod template;

pub use openai_chat_http::HttpChatClient;
pub use openai_images_http::HttpImageClient;
pub use retrying_text_generator::{RetryPolicy, RetryingTextGenerator};
pub use template::{render_prompt, render_static};
