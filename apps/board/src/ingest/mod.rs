// Document Loader: turns a folder of Topic_<N>_Team_<M>.docx files into
// per-topic note text. Everything here is synchronous file I/O; callers on the
// async side run it inside tokio::task::spawn_blocking.

pub mod docx;
pub mod filename;
pub mod loader;

pub use loader::load_topic_texts;
