// Topicgram: topic classification for short text documents.
//
// This is the library root. Text flows leaf-first through the modules:
// text -> document -> model, with corpus/pipeline driving training and
// evaluation over directory-of-topics datasets.

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod text;
