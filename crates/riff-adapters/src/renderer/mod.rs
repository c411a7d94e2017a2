//! Descriptor rendering adapters.

mod invoker;
mod manifest;

pub use invoker::InvokerRenderer;
pub use manifest::{FunctionManifest, TopicManifest};
