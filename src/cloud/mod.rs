// Word-cloud generation: layout of ranked words and PNG rasterization.

pub mod layout;
pub mod render;
