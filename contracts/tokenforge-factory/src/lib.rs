#![cfg_attr(not(feature = "std"), no_std)]

//! Registry initializing and tracking token contract instances.

mod contract;
mod events;
mod external;
mod state;

pub use crate::{contract::*, events::*, external::*, state::*};

use commons::*;
use concordium_std::*;
