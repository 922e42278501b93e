pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod handler;
pub mod request;
pub mod response;
pub mod storage;
pub mod synthesis;

// Public library API - the types an embedding runtime or CLI needs to wire
// up one invocation.
pub use config::Config;
pub use error::HandlerError;
pub use event::{HttpEvent, HttpResponse};
pub use format::AudioFormat;
pub use handler::Handler;
pub use request::SynthesisRequest;
pub use storage::AudioStore;
pub use synthesis::SpeechSynthesizer;
