//! Shared parsing utilities for pasted Slurm command output.
//!
//! This crate provides the format-agnostic building blocks used by
//! squint-slurm and squint-state: unit normalizers, the key=value line
//! splitter, host-list range expansion, TRES descriptor parsing, and
//! relative-time rendering.

pub mod hostlist;
pub mod kv;
pub mod time;
pub mod tres;
pub mod units;

pub use hostlist::expand_host_list;
pub use kv::parse_kv_line;
pub use time::{relative_time, TimezoneMode};
pub use tres::{parse_gres_decl, parse_tres, TresSummary};
pub use units::{leading_f64, parse_mem_mb, parse_quantity};
