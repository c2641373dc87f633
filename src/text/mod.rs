// Text processing: raw text to tokens to n-grams.

pub mod ngrams;
pub mod normalize;
pub mod stopwords;
