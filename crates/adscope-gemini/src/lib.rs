//! Gemini-backed ad analysis.
//!
//! Talks to the Generative Language API (`generateContent`) over plain
//! HTTP. The model is asked to answer with a fixed JSON contract; the
//! response parser tolerates markdown code fences around the JSON.

pub mod client;
pub mod prompt;

pub use client::GeminiAnalyzer;
