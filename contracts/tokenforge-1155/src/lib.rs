#![cfg_attr(not(feature = "std"), no_std)]

//! Semi-fungible token contract. Tokens are created with a content reference
//! first and can be minted in any amount afterwards, both steps authorized
//! by backend signatures.

mod contract;
mod events;
mod external;
mod state;

pub use crate::{contract::*, events::*, external::*, state::*};

use commons::*;
use concordium_cis2::*;
use concordium_std::*;
