//! Pareto front extraction with Multiple Dominance Relations (MDR).
//!
//! Filters a collection of candidate designs, each scored on several
//! metrics (some minimized, some maximized), down to the designs that no
//! other design strictly outperforms. Comparisons are pairwise: two
//! metrics at a time, optionally stacked into prioritized layers.
//!
//! - **Design model** ([`design`]): metrics, designs, dominance relations.
//! - **Dominance** ([`dominance`]): 2D, multi-pair and layered (MDR)
//!   comparison as pure functions of two designs and a relation.
//! - **Pareto** ([`pareto`]): domination-count front extraction,
//!   non-dominated sorting, and incremental per-layer ranking.
//! - **Optimization** ([`optimize`]): staged reduction over a metric
//!   order, recording every intermediate front.
//! - **Loader / report** ([`loader`], [`report`]): design tables in,
//!   id lists and CSV out.
//!
//! # Example
//!
//! ```
//! use u_mdr::loader::parse_designs;
//! use u_mdr::optimize::{OptimizeConfig, OptimizeRunner};
//! use u_mdr::report::front_ids;
//!
//! let table = "L_D,M_empty,MTOW,Stall\n\
//!              false,true,true,true\n\
//!              14.0,300.0,500.0,21.0\n\
//!              12.0,310.0,510.0,22.0\n\
//!              15.0,290.0,530.0,22.0\n";
//! let batch = parse_designs(table, 0).unwrap();
//!
//! let result = OptimizeRunner::run(&batch.designs, &[0, 2, 1, 3], &OptimizeConfig::default())
//!     .unwrap();
//! assert_eq!(result.stage_count(), 2);
//! assert_eq!(front_ids(&result.front), "0,2");
//! ```
//!
//! # Logging
//!
//! Stage progress is emitted through [`tracing`]; install a subscriber to
//! see it.

pub mod design;
pub mod dominance;
mod error;
pub mod loader;
pub mod optimize;
pub mod pareto;
pub mod report;

pub use error::{ErrorKind, MdrError, Result};
