//! Integration tests for timeline arithmetic.
//!
//! Exercises timecalc-core sources and serialization together with
//! timecalc-expr evaluation.

use timecalc_core::{FnProcessor, Processor, Result, Sample, StaticSource, Timeline, TimelineError};
use timecalc_expr::{EvaluationConfig, Operator, TimelineExpression};

use crate::init_tracing;

// ── Helpers ────────────────────────────────────────────────────

const RATES_JSON: &[u8] = br#"[
    {"time": 1, "value": 0.05},
    {"time": 2, "value": 0.02}
]"#;

const ZERO_JSON: &[u8] = br#"[
    {"time": 1, "value": 0.0},
    {"time": 2, "value": 0.0}
]"#;

fn from_json(data: &[u8]) -> TimelineExpression<(), i64> {
    TimelineExpression::new(StaticSource::from_json(data).unwrap())
}

fn assert_timeline_close(result: &[Sample<i64>], expected: &[(i64, f64)]) {
    assert_eq!(result.len(), expected.len(), "timeline lengths differ");
    for (i, (r, (t, v))) in result.iter().zip(expected).enumerate() {
        assert_eq!(r.time, *t, "time mismatch at index {}", i);
        assert!(
            (r.value - v).abs() < 1e-7,
            "value mismatch at index {}: {} vs {}",
            i,
            r.value,
            v
        );
    }
}

/// A feed keyed by symbol: each symbol yields a different price series.
fn price_feed() -> TimelineExpression<str, i64> {
    TimelineExpression::new(FnProcessor::new(|symbol: &str| -> Result<Timeline<i64>> {
        let base = match symbol {
            "AAA" => 10.0,
            "BBB" => 20.0,
            other => return Err(TimelineError::Source(format!("unknown symbol {}", other))),
        };
        Ok((0..4).map(|t| Sample::new(t, base + t as f64)).collect())
    }))
}

fn volume_feed() -> TimelineExpression<str, i64> {
    TimelineExpression::new(FnProcessor::new(|_: &str| -> Result<Timeline<i64>> {
        Ok((0..4).map(|t| Sample::new(t, 100.0)).collect())
    }))
}

// ── Concrete scenario ──────────────────────────────────────────

#[test]
fn json_sources_add() {
    init_tracing();
    let out = (from_json(RATES_JSON) + from_json(RATES_JSON)).process(&()).unwrap();
    assert_timeline_close(&out, &[(1, 0.10), (2, 0.04)]);
}

#[test]
fn json_sources_subtract() {
    let out = (from_json(RATES_JSON) - from_json(RATES_JSON)).process(&()).unwrap();
    assert_timeline_close(&out, &[(1, 0.0), (2, 0.0)]);
}

#[test]
fn json_sources_divide() {
    let out = (from_json(RATES_JSON) / from_json(RATES_JSON)).process(&()).unwrap();
    assert_timeline_close(&out, &[(1, 1.0), (2, 1.0)]);
}

#[test]
fn json_sources_divide_by_zero() {
    let out = (from_json(RATES_JSON) / from_json(ZERO_JSON)).process(&()).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|s| s.value == f64::INFINITY));
    assert_eq!(out[0].time, 1);
    assert_eq!(out[1].time, 2);
}

#[test]
fn result_serializes_like_the_input() {
    let out = (from_json(RATES_JSON) + from_json(ZERO_JSON)).process(&()).unwrap();
    let json = serde_json::to_string(&out).unwrap();
    assert_eq!(json, r#"[{"time":1,"value":0.05},{"time":2,"value":0.02}]"#);
}

// ── Input pass-through ─────────────────────────────────────────

#[test]
fn input_reaches_every_processor() {
    init_tracing();
    // notional = price * volume, spread against the same notional is zero
    let notional = price_feed() * volume_feed();
    let out = notional.process("AAA").unwrap();
    assert_timeline_close(&out, &[(0, 1000.0), (1, 1100.0), (2, 1200.0), (3, 1300.0)]);

    let out = notional.process("BBB").unwrap();
    assert_timeline_close(&out, &[(0, 2000.0), (1, 2100.0), (2, 2200.0), (3, 2300.0)]);

    let flat = &notional - &notional;
    assert!(flat.process("AAA").unwrap().iter().all(|s| s.value == 0.0));
}

#[test]
fn source_failure_surfaces_from_any_operand() {
    let expr = volume_feed() + price_feed();
    let err = expr.process("ZZZ").unwrap_err();
    assert_eq!(err, TimelineError::Source("unknown symbol ZZZ".into()));
}

// ── Mixed chains ───────────────────────────────────────────────

#[test]
fn mixed_chain_matches_manual_fold() {
    let a = from_json(RATES_JSON);
    let b = from_json(br#"[{"time": 1, "value": 2.0}, {"time": 2, "value": 4.0}]"#);
    let c = from_json(br#"[{"time": 1, "value": 0.5}, {"time": 2, "value": 0.25}]"#);

    // a + b - c * b, folded as ((a + b) - (c * b))
    let expr = &(&a + &b) - &(&c * &b);
    let ops: Vec<Operator> = expr.operations().iter().map(|(op, _)| *op).collect();
    assert_eq!(ops, vec![Operator::Add, Operator::Subtract]);

    let out = expr.process(&()).unwrap();
    assert_timeline_close(&out, &[(1, 0.05 + 2.0 - 1.0), (2, 0.02 + 4.0 - 1.0)]);
}

#[test]
fn scalar_operand_is_rejected() {
    let err = from_json(RATES_JSON).multiply(3.0).unwrap_err();
    assert!(matches!(err, TimelineError::TypeMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "Type mismatch: expected timeline expression, got scalar"
    );
}

#[test]
fn length_mismatch_is_not_truncated() {
    init_tracing();
    let short = from_json(br#"[{"time": 1, "value": 1.0}]"#);
    let err = (from_json(RATES_JSON) + short).process(&()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Length mismatch in operation 0: left has 2 samples, right has 1"
    );
}

#[test]
fn strict_config_from_json() {
    let config = EvaluationConfig::from_json(br#"{"alignment": "strict_time"}"#).unwrap();
    let shifted = from_json(br#"[{"time": 1, "value": 1.0}, {"time": 5, "value": 1.0}]"#);

    let lenient = from_json(RATES_JSON) + shifted.clone();
    assert!(lenient.process(&()).is_ok());

    let strict = from_json(RATES_JSON).with_config(config) + shifted;
    let err = strict.process(&()).unwrap_err();
    assert!(matches!(err, TimelineError::TimeMismatch { index: 1, .. }));
}
