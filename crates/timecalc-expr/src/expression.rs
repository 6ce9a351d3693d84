//! Timeline expressions: construction and evaluation.
//!
//! An expression wraps a base processor and an ordered list of pending
//! `(operator, operand)` pairs. Combining two expressions never evaluates
//! anything and never touches either side; it returns a new expression whose
//! operation list is the left side's list plus one trailing entry.
//!
//! Operation lists are persistent: each entry points back at the list it was
//! appended to, so combined expressions share their common prefix instead of
//! copying it.
//!
//! Precedence comes from the host expression. In `a + b - c * d`, `c * d` is
//! built first as its own expression, and the outer chain becomes `a` with
//! operations `[(+, b), (-, c * d)]`.

use std::fmt;
use std::ops;
use std::sync::Arc;

use timecalc_core::{Processor, Result, Sample, Timeline, TimelineError};
use tracing::{debug, trace, warn};

use crate::config::{AlignmentPolicy, EvaluationConfig};
use crate::operator::Operator;

/// A timeline processor shared between expressions.
pub type SharedProcessor<I, T> = Arc<dyn Processor<Input = I, Output = Timeline<T>> + Send + Sync>;

// ── Operation list ──────────────────────────────────────────────

struct OperationNode<I: ?Sized, T> {
    operator: Operator,
    operand: TimelineExpression<I, T>,
    previous: Option<Arc<OperationNode<I, T>>>,
    /// Number of operations up to and including this one.
    depth: usize,
}

impl<I: ?Sized, T> Drop for OperationNode<I, T> {
    // Unlink uniquely owned predecessors one at a time so long chains
    // don't recurse once per node.
    fn drop(&mut self) {
        let mut previous = self.previous.take();
        while let Some(node) = previous {
            match Arc::try_unwrap(node) {
                Ok(mut node) => previous = node.previous.take(),
                Err(_) => break,
            }
        }
    }
}

// ── Expression ──────────────────────────────────────────────────

/// A lazily evaluated arithmetic combination of timeline processors.
pub struct TimelineExpression<I: ?Sized, T> {
    processor: SharedProcessor<I, T>,
    operations: Option<Arc<OperationNode<I, T>>>,
    config: EvaluationConfig,
}

impl<I: ?Sized, T> TimelineExpression<I, T> {
    /// Wrap a processor. The new expression has no pending operations.
    pub fn new<P>(processor: P) -> Self
    where
        P: Processor<Input = I, Output = Timeline<T>> + Send + Sync + 'static,
    {
        Self::from_shared(Arc::new(processor))
    }

    /// Wrap a processor that is already behind an `Arc`.
    pub fn from_shared(processor: SharedProcessor<I, T>) -> Self {
        Self {
            processor,
            operations: None,
            config: EvaluationConfig::default(),
        }
    }

    /// Use `config` when this expression folds its operations.
    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// The base processor whose output the operations are applied to.
    pub fn processor(&self) -> &SharedProcessor<I, T> {
        &self.processor
    }

    pub fn operation_count(&self) -> usize {
        self.operations.as_ref().map_or(0, |node| node.depth)
    }

    /// The pending operations, in application order.
    pub fn operations(&self) -> Vec<(Operator, &TimelineExpression<I, T>)> {
        let mut ops = Vec::with_capacity(self.operation_count());
        let mut cursor = self.operations.as_deref();
        while let Some(node) = cursor {
            ops.push((node.operator, &node.operand));
            cursor = node.previous.as_deref();
        }
        ops.reverse();
        ops
    }

    /// Append one operation, returning the new expression.
    ///
    /// The result keeps this expression's processor and config.
    pub fn combine_with(&self, operator: Operator, operand: TimelineExpression<I, T>) -> Self {
        let depth = self.operation_count() + 1;
        debug!(%operator, depth, "combining timeline expressions");
        Self {
            processor: Arc::clone(&self.processor),
            operations: Some(Arc::new(OperationNode {
                operator,
                operand,
                previous: self.operations.clone(),
                depth,
            })),
            config: self.config.clone(),
        }
    }

    /// Append one operation against an operand of any kind.
    ///
    /// Only expressions can be combined; anything else is a `TypeMismatch`.
    pub fn combine(&self, operator: Operator, operand: impl Into<Operand<I, T>>) -> Result<Self> {
        match operand.into() {
            Operand::Expression(expr) => Ok(self.combine_with(operator, expr)),
            other => Err(TimelineError::TypeMismatch {
                expected: "timeline expression".to_string(),
                got: other.kind().to_string(),
            }),
        }
    }

    pub fn add(&self, operand: impl Into<Operand<I, T>>) -> Result<Self> {
        self.combine(Operator::Add, operand)
    }

    pub fn subtract(&self, operand: impl Into<Operand<I, T>>) -> Result<Self> {
        self.combine(Operator::Subtract, operand)
    }

    pub fn multiply(&self, operand: impl Into<Operand<I, T>>) -> Result<Self> {
        self.combine(Operator::Multiply, operand)
    }

    pub fn divide(&self, operand: impl Into<Operand<I, T>>) -> Result<Self> {
        self.combine(Operator::Divide, operand)
    }
}

impl<I: ?Sized, T: PartialEq + fmt::Debug> TimelineExpression<I, T> {
    /// Fold one operation into the accumulated result.
    fn apply_operation(
        &self,
        operation: usize,
        operator: Operator,
        left: Timeline<T>,
        right: &[Sample<T>],
    ) -> Result<Timeline<T>> {
        if left.len() != right.len() {
            warn!(
                operation,
                left = left.len(),
                right = right.len(),
                "timeline length mismatch"
            );
            return Err(TimelineError::LengthMismatch {
                operation,
                left: left.len(),
                right: right.len(),
            });
        }

        if self.config.alignment == AlignmentPolicy::StrictTime {
            if let Some(index) = left.iter().zip(right).position(|(l, r)| l.time != r.time) {
                warn!(operation, index, "timeline time mismatch");
                return Err(TimelineError::TimeMismatch {
                    operation,
                    index,
                    left: format!("{:?}", left[index].time),
                    right: format!("{:?}", right[index].time),
                });
            }
        }

        trace!(operation, %operator, samples = left.len(), "folding operation");
        Ok(left
            .into_iter()
            .zip(right)
            .map(|(l, r)| Sample {
                time: l.time,
                value: operator.apply(l.value, r.value),
            })
            .collect())
    }
}

impl<I: ?Sized, T: PartialEq + fmt::Debug> Processor for TimelineExpression<I, T> {
    type Input = I;
    type Output = Timeline<T>;

    /// Evaluate the base processor, then fold every operation left to right.
    ///
    /// Each operand is evaluated in full on the same input. The first failure
    /// aborts the evaluation and no partial result is returned.
    fn process(&self, input: &I) -> Result<Timeline<T>> {
        let mut result = self.processor.process(input)?;
        let operations = self.operations();
        if operations.is_empty() {
            return Ok(result);
        }

        debug!(
            operations = operations.len(),
            samples = result.len(),
            "evaluating timeline expression"
        );
        for (index, (operator, operand)) in operations.into_iter().enumerate() {
            let other = operand.process(input)?;
            result = self.apply_operation(index, operator, result, &other)?;
        }
        debug!(samples = result.len(), "timeline expression evaluated");
        Ok(result)
    }
}

impl<I: ?Sized, T> Clone for TimelineExpression<I, T> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
            operations: self.operations.clone(),
            config: self.config.clone(),
        }
    }
}

impl<I: ?Sized, T> fmt::Debug for TimelineExpression<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ops: Vec<String> = self
            .operations()
            .into_iter()
            .map(|(op, operand)| format!("{} {:?}", op, operand))
            .collect();
        f.debug_struct("TimelineExpression")
            .field("operations", &ops)
            .field("config", &self.config)
            .finish()
    }
}

// ── Operator overloads ──────────────────────────────────────────

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<I: ?Sized, T> ops::$trait for TimelineExpression<I, T> {
            type Output = TimelineExpression<I, T>;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine_with($op, rhs)
            }
        }

        impl<'a, I: ?Sized, T> ops::$trait<&'a TimelineExpression<I, T>>
            for &'a TimelineExpression<I, T>
        {
            type Output = TimelineExpression<I, T>;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine_with($op, rhs.clone())
            }
        }
    };
}

impl_binary_op!(Add, add, Operator::Add);
impl_binary_op!(Sub, sub, Operator::Subtract);
impl_binary_op!(Mul, mul, Operator::Multiply);
impl_binary_op!(Div, div, Operator::Divide);

// ── Dynamic operands ────────────────────────────────────────────

/// Anything a caller might try to combine an expression with.
pub enum Operand<I: ?Sized, T> {
    Expression(TimelineExpression<I, T>),
    Scalar(f64),
    Samples(Timeline<T>),
}

impl<I: ?Sized, T> Operand<I, T> {
    /// Short name of the operand kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Expression(_) => "timeline expression",
            Self::Scalar(_) => "scalar",
            Self::Samples(_) => "raw samples",
        }
    }
}

impl<I: ?Sized, T> From<TimelineExpression<I, T>> for Operand<I, T> {
    fn from(expr: TimelineExpression<I, T>) -> Self {
        Self::Expression(expr)
    }
}

impl<I: ?Sized, T> From<&TimelineExpression<I, T>> for Operand<I, T> {
    fn from(expr: &TimelineExpression<I, T>) -> Self {
        Self::Expression(expr.clone())
    }
}

impl<I: ?Sized, T> From<f64> for Operand<I, T> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<I: ?Sized, T> From<Timeline<T>> for Operand<I, T> {
    fn from(samples: Timeline<T>) -> Self {
        Self::Samples(samples)
    }
}
