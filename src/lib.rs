//! Policy-driven password and passphrase generation.
//!
//! A [`Policy`] names the length, the character categories and whether the password is
//! built from dictionary words. [`generate`] turns it into a string using a caller-supplied
//! random source:
//!
//! ```
//! use passcraft::{Policy, generate};
//!
//! let policy = Policy { target_length: 20, ..Policy::default() };
//! let password = generate(&policy, &mut rand::rng()).unwrap();
//! assert_eq!(password.as_str().chars().count(), 20);
//! ```
//!
//! Fragments are shuffled as whole units and the result is cut to length afterwards. When
//! the length is smaller than the number of guaranteed categories, the cut can remove
//! some of them; [`Report::dropped`] lists which.

pub mod corpus;
pub mod entropy;
pub mod error;
pub mod pass;
pub mod policy;
pub mod settings;

pub use error::{CorpusError, GenerationError, SettingsError};
pub use pass::{Generated, Report, generate, generate_with_fallback};
pub use policy::{Category, Policy};
