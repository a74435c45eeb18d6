pub mod outcome;
pub mod transcript;

pub use outcome::JobOutcome;
pub use transcript::{SubmitResponse, TranscriptStatusResponse, Utterance};
