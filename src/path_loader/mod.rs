mod challenge_deserializer;
mod loader;
mod path_entry_deserializer;
mod witness_deserializer;

pub use loader::{LoadedChallenge, LoaderError, load_challenges_from};
