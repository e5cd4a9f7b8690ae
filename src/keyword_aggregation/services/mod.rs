mod keyword_counter;

pub use keyword_counter::KeywordCounter;
