#![no_main]

use arbitrary::Arbitrary;
use growbuf::{BufferError, ByteBuffer};
use libfuzzer_sys::fuzz_target;

/// Self-concatenation doubles the length; stop before inputs get huge.
const MAX_CONCAT_LEN: usize = 4096;

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Op {
    PushBack(u8),
    PushFront(u8),
    PopBack,
    PopFront,
    Insert(u16, u8),
    Remove(u16),
    Set(u16, u8),
    CopySelf,
    ConcatSelf,
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    seed: Vec<u8>,
    ops: Vec<Op>,
}

/// Drive a `ByteBuffer` and a `Vec<u8>` with the same operations and require
/// identical contents plus intact capacity invariants after every step.
fn run(input: Input) {
    let mut buf = match ByteBuffer::from_slice(&input.seed) {
        Ok(buf) => buf,
        Err(BufferError::EmptyInput) => ByteBuffer::new(),
        Err(err) => panic!("unexpected constructor error: {err}"),
    };
    let mut model = input.seed;

    for op in input.ops {
        let len = model.len();
        match op {
            Op::PushBack(v) => {
                buf.push_back(v).unwrap();
                model.push(v);
            }
            Op::PushFront(v) => {
                buf.push_front(v).unwrap();
                model.insert(0, v);
            }
            Op::PopBack => assert_eq!(buf.pop_back(), model.pop()),
            Op::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(buf.pop_front(), expected);
            }
            Op::Insert(i, v) => {
                let i = usize::from(i);
                if i <= len {
                    buf.insert(i, v).unwrap();
                    model.insert(i, v);
                } else {
                    assert!(buf.insert(i, v).is_err());
                }
            }
            Op::Remove(i) => {
                let i = usize::from(i);
                let expected = (i < len).then(|| model.remove(i));
                assert_eq!(buf.remove(i), expected);
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                if i < len {
                    buf.set(i, v).unwrap();
                    model[i] = v;
                } else {
                    assert!(buf.set(i, v).is_err());
                }
            }
            Op::CopySelf => {
                let snapshot = buf.clone();
                let mut copy = ByteBuffer::new();
                match copy.copy_from(&snapshot) {
                    Ok(()) => assert_eq!(copy.capacity(), snapshot.capacity()),
                    Err(err) => assert!(matches!(err, BufferError::Unallocated) && len == 0),
                }
                assert_eq!(copy, snapshot);
            }
            Op::ConcatSelf if len <= MAX_CONCAT_LEN => {
                let snapshot = buf.clone();
                buf.concat(&snapshot).unwrap();
                model.extend_from_within(..);
            }
            Op::ConcatSelf => {}
            Op::Clear => {
                buf.clear();
                model.clear();
            }
        }
        buf.assert_invariants();
        assert_eq!(buf.as_bytes(), model.as_slice());
    }
}

fuzz_target!(|input: Input| run(input));
