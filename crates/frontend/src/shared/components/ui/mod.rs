pub mod badge;

pub use badge::{Badge, FlagBadge, Tone};
