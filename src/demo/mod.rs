// Demo Module
// Non-interactive walkthrough of the toy cryptosystem

pub mod walkthrough;

pub use walkthrough::{Walkthrough, WalkthroughReport};
