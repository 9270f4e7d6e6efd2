//! A conflict analysis engine for pseudo-Boolean constraint solvers based on cutting-planes
//! resolution.
//!
//! Given a falsified constraint `sum(c_i * l_i) >= d` and the assignment trail of the
//! embedding solver, [`CuttingPlanesResolver`](engine::conflict_analysis::CuttingPlanesResolver)
//! repeatedly cancels the most recently propagated literal against its reason constraint until
//! the derived constraint is assertive, and returns it together with the level to backjump to.
//! Reasons are weakened as needed so that every intermediate cut is falsified again, which is
//! what makes the derived constraint sound to learn.
//!
//! Coefficients are arbitrary-precision and can grow quickly under repeated cuts. The
//! [`SwitchToClause`](engine::conflict_analysis::SwitchToClause) degradation strategy bounds
//! this by rewriting the derived constraint into a clause once any coefficient would exceed a
//! configured number of decimal digits; [`KeepLinear`](engine::conflict_analysis::KeepLinear)
//! never degrades.
//!
//! # Example
//!
//! After the decisions `~x1`, `~x2` and `~x3`, the constraint `5 ~x0 + 1 x3 >= 5` propagates
//! `~x0`, which falsifies `3 x0 + 2 x1 + 2 x2 >= 4`. With a digit limit of one the analysis
//! degrades to a clause on its first step and learns `x0 \/ x1 \/ x2`:
//!
//! ```
//! use std::rc::Rc;
//!
//! use cutplane_solver::basic_types::Literal;
//! use cutplane_solver::basic_types::PbConstraint;
//! use cutplane_solver::engine::conflict_analysis::ConflictAnalysisContext;
//! use cutplane_solver::engine::conflict_analysis::CuttingPlanesResolver;
//! use cutplane_solver::engine::conflict_analysis::SwitchToClause;
//! use cutplane_solver::engine::termination::Indefinite;
//! use cutplane_solver::engine::Assignments;
//! use cutplane_solver::engine::ConflictAnalysisStatistics;
//! use num::BigUint;
//!
//! let big = |value: u32| BigUint::from(value);
//!
//! let mut assignments = Assignments::default();
//! let x = (0..4)
//!     .map(|_| Literal::new(assignments.grow(), true))
//!     .collect::<Vec<_>>();
//!
//! assignments.decide(!x[1]);
//! assignments.decide(!x[2]);
//! assignments.decide(!x[3]);
//! let reason = Rc::new(PbConstraint::new(
//!     vec![(!x[0], big(5)), (x[3], big(1))],
//!     big(5),
//! ));
//! assignments.enqueue(!x[0], reason);
//!
//! let conflicting = PbConstraint::new(
//!     vec![(x[0], big(3)), (x[1], big(2)), (x[2], big(2))],
//!     big(4),
//! );
//!
//! let mut statistics = ConflictAnalysisStatistics::default();
//! let mut context = ConflictAnalysisContext {
//!     assignments: &assignments,
//!     statistics: &mut statistics,
//! };
//! let mut strategy = SwitchToClause::with_digit_limit(1)?;
//!
//! let learned = CuttingPlanesResolver::new(&conflicting, !x[0], 3)
//!     .resolve_conflict(&mut context, &mut strategy, &mut Indefinite)?;
//!
//! assert_eq!(
//!     learned.constraint,
//!     PbConstraint::clause(vec![x[0], x[1], x[2]])
//! );
//! assert_eq!(learned.backjump_level, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[doc(hidden)]
pub mod asserts;
pub mod basic_types;
pub mod engine;
pub mod optimisation;
pub mod options;
pub mod statistics;

pub use options::ConflictAnalysisOptions;
pub use options::DegradationPolicy;
