use clap::Parser;
use crate::prelude::*;

#[derive(Clone, Debug, Parser)]
pub struct AppOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    #[arg(long, default_value_t = DEFAULT_SLOT_SIZE)]
    pub slot_size: f32,

    #[arg(short, long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 0)]
    pub level_index: usize,
}

impl AppOptions {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            columns: self.columns,
            slot_size: self.slot_size,
            seed: self.seed,
        }
    }
}
