//! Adapters implementing the domain ports

pub mod huggingface;
