// Point Extractor: condenses each topic's combined notes into a short list of
// generic discussion points with one completion call per topic.
// All completion calls go through llm_client; nothing here builds HTTP requests.

pub mod cache;
pub mod extractor;
pub mod parse;
pub mod pipeline;
pub mod prompts;

pub use cache::TopicCache;
pub use extractor::PointExtractor;
pub use pipeline::{build_digest, cached_digest};
