pub mod corpus;
pub mod matcher;
pub mod trigger;

pub use corpus::{Corpus, CorpusError, EmojiRecord};
pub use matcher::MatchConfig;
pub use trigger::Trigger;
