//! TimeCalc Expressions - Arithmetic over timeline producers.
//!
//! Timelines are combined with `+ - * /` into an expression that records
//! the pending operations and evaluates nothing until it is asked to
//! process an input. Evaluation folds the operations left to right,
//! combining samples positionally.

pub mod config;
pub mod expression;
pub mod operator;
pub mod pipe;

pub use config::{AlignmentPolicy, EvaluationConfig};
pub use expression::{Operand, SharedProcessor, TimelineExpression};
pub use operator::Operator;
