mod openai;
mod proxy;

pub use openai::OpenAiProvider;
pub use proxy::ProxyProvider;
