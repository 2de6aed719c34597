//! Tilescape is a constraint-satisfaction solver for the tile placement
//! puzzle: drop one 4x4 tile onto every 4x4 region of a landscape so that
//! each region ends up showing exactly its target number of bushes of each
//! category.
//!
//! The engine combines backtracking search with three classic CSP
//! techniques, all with fixed deterministic tie-breaking:
//!
//! - **MRV** region selection: branch on the region with the fewest
//!   remaining placements ([`MinimumRemainingValues`]).
//! - **LCV** placement ordering: try the candidate that eliminates the
//!   fewest options from neighboring regions first
//!   ([`LeastConstrainingValue`]).
//! - **AC-3** propagation: after every tentative placement, prune every
//!   region's domain against the shared tile pool until a fixpoint or a
//!   wipeout ([`propagation::enforce`]).
//!
//! [`MinimumRemainingValues`]: solver::heuristics::variable::MinimumRemainingValues
//! [`LeastConstrainingValue`]: solver::heuristics::value::LeastConstrainingValue
//! [`propagation::enforce`]: solver::propagation::enforce
//!
//! # Example
//!
//! A single-region landscape whose targets only one tile orientation can
//! meet:
//!
//! ```
//! use tilescape::landscape::Landscape;
//! use tilescape::solver::engine::{SearchOutcome, Solver};
//! use tilescape::tiles::{Rotation, TileVariant};
//!
//! let input = "\
//! ## landscape
//! 1 . . .
//! . . . 2
//! . . . .
//! . 1 . .
//! ## tiles
//! OUTER_BOUNDARY=0 EL_SHAPE=1 FULL_BLOCK=0
//! ## targets
//! 0 1 1 0 0
//! ";
//!
//! let mut landscape = Landscape::build(input).unwrap();
//! let (outcome, stats) = Solver::new(&mut landscape).solve();
//!
//! match outcome {
//!     SearchOutcome::Solved(placement) => {
//!         assert_eq!(
//!             placement.variant_for(0),
//!             Some(TileVariant::El(Rotation::R0)),
//!         );
//!     }
//!     other => panic!("expected a solution, got {other:?}"),
//! }
//! assert!(stats.nodes_visited >= 1);
//! ```

pub mod error;
pub mod landscape;
pub mod solver;
pub mod tiles;
