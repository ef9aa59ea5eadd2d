// wordcloud: word frequency ranking and word-cloud rendering
//
// This is the library root. Data flows source -> text (tokenizer + stop
// words) -> frequency (ranked table) -> cloud (layout + raster) and output
// (report, image, terminal), orchestrated per run cycle by pipeline.

pub mod cloud;
pub mod config;
pub mod error;
pub mod frequency;
pub mod output;
pub mod pipeline;
pub mod session;
pub mod source;
pub mod text;
