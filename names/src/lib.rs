#![deny(missing_docs)]

//! Random first names.
//!
//! This crate provides the [`NameSource`] seam used by the first-name Lambda
//! and its default implementation, [`RandomFirstNames`], which draws names
//! from frequency-weighted tables so that common names come up more often
//! than rare ones.
//!
//! ```
//! use first_names::{first_name, Gender};
//!
//! let name = first_name(Some(Gender::Female)).unwrap();
//! assert!(!name.is_empty());
//! ```

mod error;
mod gender;
mod random;
mod source;
mod table;

pub use crate::{
    error::NameError,
    gender::{Gender, ParseGenderError},
    random::{first_name, RandomFirstNames},
    source::NameSource,
};
