mod common;
mod performance;
