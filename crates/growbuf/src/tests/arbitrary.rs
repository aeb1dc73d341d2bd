use quickcheck::{Arbitrary, Gen};

/// One mutation applied to both a `ByteBuffer` and a `Vec<u8>` model.
///
/// Indices are raw and reduced against the current length when applied, so
/// that roughly one in `len + 2` lands out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    PushBack(u8),
    PushFront(u8),
    PopBack,
    PopFront,
    Insert(usize, u8),
    Remove(usize),
    Set(usize, u8),
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        // Bias towards growth so sequences reach interesting capacities.
        match usize::arbitrary(g) % 16 {
            0..=3 => Op::PushBack(u8::arbitrary(g)),
            4..=5 => Op::PushFront(u8::arbitrary(g)),
            6..=7 => Op::Insert(usize::arbitrary(g), u8::arbitrary(g)),
            8..=9 => Op::PopBack,
            10 => Op::PopFront,
            11..=12 => Op::Remove(usize::arbitrary(g)),
            13..=14 => Op::Set(usize::arbitrary(g), u8::arbitrary(g)),
            _ => Op::Clear,
        }
    }
}
