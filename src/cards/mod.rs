// Flashcard generation: sentence segmentation, keyword selection, masking.

pub mod deck;
pub mod generator;
pub mod keyword;
pub mod segmenter;
pub mod stopwords;
pub mod synthesizer;
pub mod traits;

pub use generator::{generate_cards, Card, CardGenerator, GenerateOptions};

/// Demo paragraph for `flashforge sample` and for trying out the study mode.
pub const SAMPLE_PARAGRAPH: &str = "Photosynthesis is the process by which plants and other organisms convert light energy into chemical energy stored in glucose. It primarily occurs in chloroplasts, where the pigment chlorophyll captures sunlight. During photosynthesis, carbon dioxide and water react to form glucose and oxygen; this process is fundamental to life on Earth as it produces oxygen and forms the base of most food chains.";
