#![cfg_attr(not(feature = "std"), no_std)]

//! Capped fungible token contract.

mod contract;
mod events;
mod external;
mod state;

pub use crate::{contract::*, events::*, external::*, state::*};

use commons::*;
use concordium_cis2::*;
use concordium_std::*;
