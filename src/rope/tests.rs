use crate::api::*;
use crate::rope::*;

use bytes::Bytes;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ops::{Bound};
use std::thread;

///
/// The deepest tree we'll accept for a rope with the specified number of chunks
///
fn depth_bound(count: usize) -> usize {
    let ceil_log2 = (usize::BITS - (count.max(1) - 1).leading_zeros()) as usize;
    2 * ceil_log2 + 2
}

fn std_hash(rope: &Rope) -> u64 {
    let mut hasher = DefaultHasher::new();
    rope.hash(&mut hasher);
    hasher.finish()
}

///
/// Appends a rope to itself until it is bigger than `isize::MAX` bytes (sharing makes this cheap)
///
fn larger_than_memory(chunk: Vec<u8>) -> Rope {
    let mut rope = Rope::wrap(chunk);

    while rope.size() <= isize::MAX as usize {
        rope = rope.append(&rope);
    }

    rope
}

fn hello_world() -> Rope {
    Rope::wrap("hello").append(&Rope::wrap("world"))
}

#[test]
fn wrap_single_chunk() {
    let rope = Rope::wrap("hello");

    assert!(rope.size() == 5);
    assert!(rope.count() == 1);
    assert!(rope.depth() == 1);
    assert!(rope == "hello");
}

#[test]
fn append_two_leaves() {
    let rope = hello_world();

    assert!(rope.size() == 10);
    assert!(rope.count() == 2);
    assert!(rope.to_vec() == b"helloworld".to_vec());
}

#[test]
fn slice_across_the_join() {
    let rope = hello_world();

    assert!(rope.subr(3, 8).unwrap() == "lowor");
    assert!(rope.slice(3..8).unwrap() == "lowor");
    assert!(rope.slice(3..=7).unwrap() == "lowor");
}

#[test]
fn slice_within_one_side() {
    let rope = hello_world();

    assert!(rope.subr(1, 4).unwrap() == "ell");
    assert!(rope.subr(6, 10).unwrap() == "orld");
    assert!(rope.subr(6, 10).unwrap().count() == 1);
}

#[test]
fn whole_slice_is_the_same_rope() {
    let leaf = Rope::wrap("hello");
    let rope = hello_world();

    assert!(leaf.subr(0, 5).unwrap().ptr_eq(&leaf));
    assert!(rope.subr(0, 10).unwrap().ptr_eq(&rope));
    assert!(rope.slice(..).unwrap().ptr_eq(&rope));
}

#[test]
fn slicing_a_whole_child_shares_it() {
    let hello = Rope::wrap("hello");
    let world = Rope::wrap("world");
    let rope  = hello.append(&world);

    assert!(rope.subr(0, 5).unwrap().ptr_eq(&hello));
    assert!(rope.subr(5, 10).unwrap().ptr_eq(&world));
}

#[test]
fn empty_slices() {
    let rope = hello_world();

    for pos in 0..=10 {
        let slice = rope.subr(pos, pos).unwrap();

        assert!(slice.is_empty());
        assert!(slice == Rope::empty());
    }
}

#[test]
fn reversed_range_is_rejected() {
    let rope = hello_world();

    assert!(matches!(rope.subr(5, 3), Err(RopeError::InvalidRange { start: 5, end: 3 })));
}

#[test]
fn range_past_end_is_rejected() {
    let rope = hello_world();

    assert!(matches!(rope.subr(3, 11), Err(RopeError::OutOfBounds { start: 3, end: 11, size: 10 })));
    assert!(matches!(rope.slice(..=10), Err(RopeError::OutOfBounds { .. })));
    assert!(matches!(Rope::wrap("abc").subr(0, 4), Err(RopeError::OutOfBounds { .. })));
}

#[test]
fn append_and_prepend_empty_ropes() {
    let rope  = hello_world();
    let empty = Rope::empty();

    assert!(rope.append(&empty).ptr_eq(&rope));
    assert!(rope.prepend(&empty).ptr_eq(&rope));
    assert!(empty.append(&rope).ptr_eq(&rope));
    assert!(empty.prepend(&rope).ptr_eq(&rope));
    assert!(Rope::join(&empty, &rope).ptr_eq(&rope));
    assert!(Rope::join(&rope, &empty).ptr_eq(&rope));
}

#[test]
fn appending_leaves_the_original_unchanged() {
    let rope     = hello_world();
    let extended = rope.append(&Rope::wrap("!"));

    assert!(rope == "helloworld");
    assert!(extended == "helloworld!");
}

#[test]
fn equality_ignores_shape() {
    let a   = Rope::wrap("a");
    let bb  = Rope::wrap("bb");
    let ccc = Rope::wrap("ccc");

    let appended    = a.append(&bb).append(&ccc);
    let prepended   = ccc.prepend(&bb).prepend(&a);
    let joined      = Rope::join(&a, &Rope::join(&bb, &ccc));
    let single      = Rope::wrap("abbccc");
    let resliced    = Rope::wrap("xxabbcccxx").subr(2, 8).unwrap();

    for rope in [&prepended, &joined, &single, &resliced] {
        assert!(&appended == rope);
        assert!(rope == &appended);
        assert!(appended.content_hash() == rope.content_hash());
        assert!(std_hash(&appended) == std_hash(rope));
    }
}

#[test]
fn different_content_is_not_equal() {
    let left  = Rope::wrap("hello").append(&Rope::wrap("world"));
    let right = Rope::wrap("hellow").append(&Rope::wrap("orle"));

    assert!(left != right);
    assert!(right != left);
    assert!(left != Rope::wrap("hello"));
}

#[test]
fn unequal_cached_hashes_short_circuit() {
    let left  = Rope::wrap("abc").append(&Rope::wrap("def"));
    let right = Rope::wrap("abd").append(&Rope::wrap("def"));

    left.content_hash();
    right.content_hash();

    assert!(left != right);
}

#[test]
fn hash_matches_flattened_bytes() {
    let rope = Rope::wrap("a")
        .append(&Rope::wrap("bb"))
        .append(&Rope::wrap("ccc"))
        .prepend(&Rope::wrap("dddd"));

    let expected = b"ddddabbccc".iter()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(*byte as u32));

    assert!(rope.content_hash() == expected);
    assert!(rope.content_hash() == hash_bytes(HASH_SEED, &rope.to_vec()));
}

#[test]
fn hash_is_idempotent() {
    let rope  = hello_world();
    let first = rope.content_hash();

    assert!(rope.content_hash() == first);
    assert!(rope.clone().content_hash() == first);
}

#[test]
fn hash_of_high_bytes() {
    let rope = Rope::wrap(vec![0xff, 0x80]).append(&Rope::wrap(vec![0x7f]));

    // Bytes are signed: 0xff is -1 and 0x80 is -128
    let expected = ((-1i32 * 31) + -128) * 31 + 0x7f;

    assert!(rope.content_hash() == expected as u32);
    assert!(Rope::wrap(vec![0xff, 0x80]).content_hash() == (-159i32) as u32);
}

#[test]
fn high_byte_hash_is_shape_independent() {
    let content = vec![0x01, 0xfe, 0x80, 0x7f, 0xff, 0x00, 0xc3];
    let single  = Rope::wrap(content.clone());
    let pieces  = Rope::wrap(vec![0x01, 0xfe])
        .append(&Rope::wrap(vec![0x80]))
        .append(&Rope::wrap(vec![0x7f, 0xff, 0x00]))
        .prepend(&Rope::empty())
        .append(&Rope::wrap(vec![0xc3]));

    let expected = content.iter()
        .fold(0i32, |hash, byte| hash.wrapping_mul(31).wrapping_add(*byte as i8 as i32));

    assert!(single == pieces);
    assert!(single.content_hash() == expected as u32);
    assert!(pieces.content_hash() == expected as u32);
}

#[test]
fn empty_rope_hash() {
    assert!(Rope::empty().content_hash() == HASH_SEED);
}

#[test]
fn round_trip_through_append() {
    let r = Rope::wrap("abc").append(&Rope::wrap("defg"));
    let s = Rope::wrap("hi").prepend(&Rope::wrap("jkl"));

    let joined = r.append(&s);

    assert!(joined.subr(0, r.size()).unwrap() == r);
    assert!(joined.subr(r.size(), r.size() + s.size()).unwrap() == s);
}

#[test]
fn three_chunks_stay_shallow() {
    let rope = Rope::wrap("a")
        .append(&Rope::wrap("bb"))
        .append(&Rope::wrap("ccc"));

    assert!(rope == "abbccc");
    assert!(rope.count() == 3);
    assert!(rope.depth() <= depth_bound(rope.count()));
}

#[test]
fn repeated_single_byte_appends_stay_shallow() {
    let mut rope = Rope::wrap(vec![0u8]);

    for idx in 1..1000 {
        rope = rope.append(&Rope::wrap(vec![(idx % 256) as u8]));
        assert!(rope.depth() <= depth_bound(rope.count()), "Depth {} with {} chunks", rope.depth(), rope.count());
    }

    assert!(rope.size() == 1000);
    assert!(rope.count() == 1000);
    assert!(rope.bytes().enumerate().all(|(idx, byte)| byte == (idx % 256) as u8));
}

#[test]
fn repeated_single_byte_prepends_stay_shallow() {
    let mut rope = Rope::wrap(vec![0u8]);

    for _ in 1..1000 {
        rope = rope.prepend(&Rope::wrap(vec![0u8]));
        assert!(rope.depth() <= depth_bound(rope.count()));
    }

    assert!(rope.size() == 1000);
}

#[test]
fn repeated_single_byte_joins_stay_shallow() {
    let mut rope = Rope::wrap(vec![0u8]);

    for _ in 1..1000 {
        rope = Rope::join(&rope, &Rope::wrap(vec![1u8]));
        assert!(rope.depth() <= depth_bound(rope.count()));
    }

    assert!(rope.size() == 1000);
}

#[test]
fn mixed_operations_stay_shallow() {
    let mut rope     = Rope::wrap(vec![0u8]);
    let mut expected = vec![0u8];

    for idx in 1..1000usize {
        let chunk = vec![(idx % 256) as u8; (idx * 7) % 13 + 1];

        rope = match idx % 3 {
            0 => { expected.extend(&chunk); rope.append(&Rope::wrap(chunk)) }
            1 => { expected.splice(0..0, chunk.iter().copied()); rope.prepend(&Rope::wrap(chunk)) }
            _ => { expected.extend(&chunk); Rope::join(&rope, &Rope::wrap(chunk)) }
        };

        assert!(rope.depth() <= depth_bound(rope.count()));
    }

    assert!(rope == expected);
}

#[test]
fn chunks_in_order() {
    let rope = Rope::wrap("a")
        .append(&Rope::wrap("bb"))
        .append(&Rope::wrap("ccc"));

    let chunks = rope.chunks().cloned().collect::<Vec<_>>();
    assert!(chunks == vec![Bytes::from("a"), Bytes::from("bb"), Bytes::from("ccc")]);

    let seq = rope.seq();
    assert!(seq.len() == rope.count());
    assert!(seq.iter().map(|chunk| chunk.len()).collect::<Vec<_>>() == vec![1, 2, 3]);

    let mut target = vec![];
    assert!(rope.populate(&mut target) == 3);

    assert!((&rope).into_iter().len() == 3);
    assert!(rope.chunks().rev().next() == Some(&Bytes::from("ccc")));
}

#[test]
fn chunk_sequence_trait() {
    fn total_size<Sequence: ChunkSequence<Chunk=Bytes>>(sequence: &Sequence) -> usize {
        sequence.chunks().map(|chunk| chunk.len()).sum()
    }

    let rope = hello_world();

    assert!(total_size(&rope) == 10);
    assert!(ChunkSequence::count(&rope) == 2);
    assert!(ChunkSequence::seq(&rope).len() == 2);
}

#[test]
fn reduce_without_seed() {
    let rope = Rope::wrap("a")
        .append(&Rope::wrap("bb"))
        .append(&Rope::wrap("ccc"));

    let joined = rope.reduce(|acc, chunk| {
        let mut bytes = acc.to_vec();
        bytes.extend_from_slice(&chunk);
        Reduction::Continue(Bytes::from(bytes))
    });

    assert!(joined == Bytes::from("abbccc"));
}

#[test]
fn reduce_single_leaf_does_not_call_function() {
    let rope   = Rope::wrap("hello");
    let result = rope.reduce(|_acc, _chunk| panic!("Should not be called"));

    assert!(result == Bytes::from("hello"));
}

#[test]
fn reduce_with_seed() {
    let rope  = hello_world();
    let total = rope.reduce_with(0, |total, chunk| Reduction::Continue(total + chunk.len()));

    assert!(total == 10);
}

#[test]
fn reduce_stops_early() {
    let rope = (0..10u8)
        .map(|idx| Bytes::from(vec![idx]))
        .collect::<Rope>();

    let mut calls = 0;
    let result = rope.reduce_with(0u32, |total, chunk| {
        calls += 1;
        let total = total + chunk[0] as u32;

        if total >= 6 { Reduction::Stop(total) } else { Reduction::Continue(total) }
    });

    // 0 + 1 + 2 + 3 = 6
    assert!(result == 6);
    assert!(calls == 4);

    let first_two = rope.reduce(|acc, _chunk| Reduction::Stop(acc));
    assert!(first_two == Bytes::from(vec![0]));
}

#[test]
fn reduction_helpers() {
    assert!(Reduction::Stop(3).is_stop());
    assert!(!Reduction::Continue(3).is_stop());
    assert!(Reduction::Continue(4).into_inner() == 4);
}

#[test]
fn byte_at() {
    let rope = hello_world();

    assert!(rope.byte_at(0) == Some(b'h'));
    assert!(rope.byte_at(4) == Some(b'o'));
    assert!(rope.byte_at(5) == Some(b'w'));
    assert!(rope.byte_at(9) == Some(b'd'));
    assert!(rope.byte_at(10) == None);
}

#[test]
fn try_to_vec_copies_content() {
    let rope = hello_world();

    assert!(rope.try_to_vec().unwrap() == b"helloworld".to_vec());
    assert!(Rope::empty().try_to_vec().unwrap().is_empty());
}

#[test]
fn conversions_and_operators() {
    let hello = Rope::from("hello");
    let world = Rope::from(String::from("world"));

    assert!(&hello + &world == "helloworld");
    assert!(hello.clone() + world.clone() == "helloworld");

    let mut rope = Rope::from(b"abc".to_vec());
    rope += &Rope::from(&b"def"[..]);
    assert!(rope == "abcdef");

    rope.extend(vec![Bytes::from("g"), Bytes::from("hi")]);
    assert!(rope == "abcdefghi");
    assert!(rope.count() == 4);

    let collected = vec![Rope::from("ab"), Rope::empty(), Rope::from("cde")]
        .into_iter()
        .collect::<Rope>();
    assert!(collected == "abcde");
    assert!(collected.count() == 2);

    assert!(Rope::default().is_empty());
}

#[test]
fn compare_with_byte_slices() {
    let rope = hello_world();

    assert!(rope == b"helloworld".to_vec());
    assert!(rope == &b"helloworld"[..]);
    assert!(rope != &b"helloworle"[..]);
    assert!(rope != &b"hello"[..]);
}

#[test]
fn debug_shows_summary() {
    let debug = format!("{:?}", hello_world());

    assert!(debug.contains("size: 10"));
    assert!(debug.contains("count: 2"));
    assert!(debug.contains("helloworld"));
}

#[test]
fn ropes_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send+Sync>() { }
    assert_send_sync::<Rope>();

    let rope = (0..64u8)
        .map(|idx| Bytes::from(vec![idx; 3]))
        .collect::<Rope>();
    let expected = hash_bytes(HASH_SEED, &rope.to_vec());

    let hashes = thread::scope(|scope| {
        let workers = (0..4)
            .map(|_| scope.spawn(|| rope.content_hash()))
            .collect::<Vec<_>>();

        workers.into_iter()
            .map(|worker| worker.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert!(hashes.iter().all(|hash| *hash == expected));
}

#[test]
fn slice_start_past_usize_max_is_out_of_bounds() {
    let rope = hello_world();

    assert!(matches!(rope.slice((Bound::Excluded(usize::MAX), Bound::Unbounded)), Err(RopeError::OutOfBounds { start: usize::MAX, end: 10, size: 10 })));
    assert!(matches!(rope.slice((Bound::Included(0), Bound::Included(usize::MAX))), Err(RopeError::OutOfBounds { start: 0, end: usize::MAX, size: 10 })));
    assert!(rope.slice((Bound::Excluded(2), Bound::Included(4))).unwrap() == "lo");
}

#[test]
#[should_panic(expected = "rope size overflow")]
fn size_overflow_panics_instead_of_wrapping() {
    let mut rope = Rope::wrap(vec![1u8]);

    for _ in 0..usize::BITS {
        rope = rope.append(&rope.clone());
    }
}

#[test]
fn doubling_up_to_the_largest_size() {
    let mut rope = Rope::wrap(vec![1u8]);

    for _ in 0..(usize::BITS - 1) {
        rope = rope.append(&rope.clone());
    }

    assert!(rope.size() == 1 << (usize::BITS - 1));
    assert!(rope.count() == 1 << (usize::BITS - 1));
    assert!(rope.depth() == usize::BITS as usize);
    assert!(rope.byte_at(rope.size() - 1) == Some(1));
}

#[test]
fn try_to_vec_reports_allocation_failure() {
    let rope = larger_than_memory(vec![0u8; 1024]);

    match rope.try_to_vec() {
        Err(RopeError::AllocationFailed { size, .. })   => assert!(size == rope.size()),
        _                                               => assert!(false, "Expected an allocation failure")
    }
}

#[test]
fn debug_only_reads_the_start_of_the_rope() {
    let rope  = larger_than_memory(vec![b'x'; 1024]);
    let debug = format!("{:?}", rope);

    assert!(debug.contains(&format!("size: {}", rope.size())));
    assert!(debug.contains(&format!("count: {}", rope.count())));
    assert!(debug.contains(&"x".repeat(32)));
    assert!(!debug.contains(&"x".repeat(33)));
}
