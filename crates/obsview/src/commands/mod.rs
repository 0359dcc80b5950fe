pub mod evaluate;
pub mod prompts;
pub mod stats;
pub mod traces;
pub mod tree;
pub mod version;
