#![cfg_attr(not(feature = "std"), no_std)]

//! Shared types, errors and signature helpers for the TokenForge token
//! contract family.

mod constants;
mod errors;
mod events;
mod roles;
mod signature;
mod structs;
pub mod test;
mod types;

pub use crate::{
    constants::*, errors::*, events::*, roles::*, signature::*, structs::*, types::*,
};

use concordium_cis2::*;
use concordium_std::*;
