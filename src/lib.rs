#![allow(dead_code)]

pub mod app;
pub mod block_puzzle;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeSet, HashMap, HashSet},
            ops::{Add, Sub}
        };
    }
}

pub mod prelude {
    pub use super::app::*;
    pub use super::block_puzzle::prelude::*;
    pub use super::utils::prelude::*;
}
