use alloc::vec::Vec;
use core::cmp::Ordering;

use quickcheck::{QuickCheck, TestResult};

use crate::ByteBuffer;

/// Property: `compare` agrees with slice ordering and is antisymmetric
/// whenever both sides hold storage.
#[test]
fn compare_matches_slice_order_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(a: Vec<u8>, b: Vec<u8>) -> TestResult {
        let (Ok(x), Ok(y)) = (ByteBuffer::from_slice(&a), ByteBuffer::from_slice(&b)) else {
            return TestResult::discard();
        };
        let forward = x.compare(&y).unwrap();
        let backward = y.compare(&x).unwrap();
        TestResult::from_bool(
            forward == a.cmp(&b) && backward == forward.reverse() && x.cmp(&y) == forward,
        )
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}

/// Property: a shared prefix always sorts before any extension of it.
#[test]
fn prefix_sorts_first_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(prefix: Vec<u8>, tail: Vec<u8>) -> TestResult {
        if prefix.is_empty() || tail.is_empty() {
            return TestResult::discard();
        }
        let short = ByteBuffer::from_slice(&prefix).unwrap();
        let mut long = short.clone();
        long.concat(&ByteBuffer::from_slice(&tail).unwrap()).unwrap();
        TestResult::from_bool(short.compare(&long).unwrap() == Ordering::Less)
    }

    QuickCheck::new().quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> TestResult);
}
