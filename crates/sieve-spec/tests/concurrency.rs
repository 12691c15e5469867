//! Sharing one specification across threads.

use std::thread;

use sieve_spec::{
    filter, from_fn, AllOf, Always, And, AnyOf, AttributeSpec, Attributes, BoxedSpec, Never, Not,
    Number, Or, Predicate, Query, SpecificationExt, Value,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn combinators_are_send_and_sync() {
    type Even = Predicate<fn(&i64) -> bool>;

    assert_send_sync::<Always>();
    assert_send_sync::<Never>();
    assert_send_sync::<And<Even, Even>>();
    assert_send_sync::<Or<Even, Not<Even>>>();
    assert_send_sync::<Not<Even>>();
    assert_send_sync::<AllOf<BoxedSpec<'static, i64>>>();
    assert_send_sync::<AnyOf<AttributeSpec>>();
    assert_send_sync::<AttributeSpec>();
    assert_send_sync::<Query>();
}

fn is_even(n: &i64) -> bool {
    n % 2 == 0
}

fn is_positive(n: &i64) -> bool {
    *n > 0
}

#[test]
fn shared_spec_in_scoped_threads() {
    let spec = from_fn(is_even).and(from_fn(is_positive));
    let left: Vec<i64> = (-10..=10).collect();
    let right: Vec<i64> = (0..100).rev().collect();

    let expected_left: Vec<i64> = filter(&left, &spec).copied().collect();
    let expected_right: Vec<i64> = filter(&right, &spec).copied().collect();

    let (got_left, got_right) = thread::scope(|scope| {
        let a = scope.spawn(|| filter(&left, &spec).copied().collect::<Vec<_>>());
        let b = scope.spawn(|| filter(&right, &spec).copied().collect::<Vec<_>>());
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(got_left, expected_left);
    assert_eq!(got_right, expected_right);
    assert_eq!(got_left, [2, 4, 6, 8, 10]);
    assert_eq!(got_right.len(), 49);
}

struct Reading {
    sensor: &'static str,
    level: i64,
}

impl Attributes for Reading {
    fn attribute(&self, name: &str) -> Value<'_> {
        match name {
            "sensor" => Value::String(self.sensor),
            "level" => Value::Number(Number::from(self.level)),
            _ => Value::None,
        }
    }
}

#[test]
fn shared_query_in_scoped_threads() {
    let query = Query::builder()
        .and_starts_with("sensor", "north")
        .and_gte("level", 50)
        .build();

    let batches: Vec<Vec<Reading>> = (0..4)
        .map(|batch| {
            (0..25)
                .map(|i| Reading {
                    sensor: if i % 3 == 0 { "south-1" } else { "north-1" },
                    level: batch * 25 + i,
                })
                .collect()
        })
        .collect();

    let sequential: Vec<usize> = batches.iter().map(|b| query.count(b)).collect();

    let shared = &query;
    let parallel: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = batches
            .iter()
            .map(|batch| scope.spawn(move || shared.count(batch)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
    assert_eq!(
        parallel.iter().sum::<usize>(),
        filter(batches.iter().flatten(), &query).count()
    );
}
