use super::*;
use crate::testing::crash_test::{CrashTestDummy, DropLog, Panic};
use crate::{Builder, HeapErrorKind, DEFAULT_INITIAL_CAPACITY};
use alloc::boxed::Box;
use rand::Rng;
use std::cell::Cell;
use std::cmp::Ordering;
use std::panic::{catch_unwind, AssertUnwindSafe};

// Pushed in this order, a min-heap stores them as `LAYOUT`.
const INPUT: [i32; 10] = [10, 4, 7, 9, 8, 6, 2, 3, 5, 1];
const LAYOUT: [i32; 10] = [1, 2, 4, 5, 3, 7, 6, 10, 8, 9];

fn filled_min_heap() -> BinaryHeap<i32, MinOrder<i32>> {
    let mut heap = BinaryHeap::min_heap().unwrap();
    heap.try_extend(INPUT).unwrap();
    heap
}

fn check_order<T, C: Comparator<T>>(heap: &BinaryHeap<T, C>) {
    let data = heap.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert_ne!(
            heap.comparator().compare(&data[i], &data[parent]),
            Ordering::Less,
            "slot {i} precedes its parent"
        );
    }
}

#[test]
fn test_new() {
    let heap = BinaryHeap::<i32, _>::new(|a: &i32, b: &i32| a.cmp(b)).unwrap();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), DEFAULT_INITIAL_CAPACITY);
    assert_eq!(heap.capacity(), 20);
}

#[test]
fn test_push_peek() {
    let expected_tops = [10, 4, 4, 4, 4, 4, 2, 2, 2, 1];
    let mut heap = BinaryHeap::min_heap().unwrap();
    for (i, (&x, &top)) in INPUT.iter().zip(expected_tops.iter()).enumerate() {
        heap.push(x).unwrap();
        assert_eq!(heap.peek(), Some(&top));
        assert_eq!(heap.len(), i + 1);
        assert_eq!(heap.capacity(), 20);
        check_order(&heap);
    }
}

#[test]
fn test_pop() {
    let mut heap = filled_min_heap();
    for expected in 1..=10 {
        assert_eq!(heap.pop(), Some(expected));
        assert_eq!(heap.len(), 10 - expected as usize);
        check_order(&heap);
    }
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), 20);
}

#[test]
fn test_traverse_layout() {
    let heap = filled_min_heap();

    let mut seen = Vec::new();
    heap.traverse(|x| seen.push(*x));
    assert_eq!(seen, LAYOUT);
    assert_eq!(heap.as_slice(), LAYOUT);
    assert_eq!(heap.iter().copied().collect::<Vec<_>>(), LAYOUT);
    assert_eq!((&heap).into_iter().rev().next(), Some(&9));
    assert_eq!(heap.iter().len(), 10);
    assert_eq!(format!("{heap:?}"), "[1, 2, 4, 5, 3, 7, 6, 10, 8, 9]");

    // Traversal leaves the heap alone.
    assert_eq!(heap.len(), 10);
    assert_eq!(heap.peek(), Some(&1));
}

#[test]
fn test_traverse_empty() {
    let heap = BinaryHeap::<i32, _>::min_heap().unwrap();
    let mut visits = 0;
    heap.traverse(|_| visits += 1);
    assert_eq!(visits, 0);
}

#[test]
fn test_pop_layouts() {
    // After each pop, the former last element was moved to the root and
    // bubbled down with the lesser child winning.
    let mut heap = filled_min_heap();
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.as_slice(), [2, 3, 4, 5, 9, 7, 6, 10, 8]);
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.as_slice(), [3, 5, 4, 8, 9, 7, 6, 10]);
}

#[test]
fn test_resize() {
    let mut heap = BinaryHeap::min_heap().unwrap();
    let mut resizes = Vec::new();
    for i in (0..21).rev() {
        let before = heap.capacity();
        heap.push(i).unwrap();
        if heap.capacity() != before {
            resizes.push((heap.len(), before, heap.capacity()));
        }
    }
    assert_eq!(resizes, [(21, 20, 40)]);
    assert_eq!(heap.into_sorted_vec(), (0..21).collect::<Vec<_>>());
}

#[test]
fn test_capacity_never_shrinks() {
    let mut heap = BinaryHeap::min_heap().unwrap();
    heap.try_extend(0..100).unwrap();
    assert_eq!(heap.capacity(), 160);
    while heap.pop().is_some() {
        assert_eq!(heap.capacity(), 160);
    }
    heap.clear();
    assert_eq!(heap.capacity(), 160);
}

#[test]
fn test_custom_growth_factor() {
    let config = HeapConfig::default().with_initial_capacity(2).with_growth(Growth::Factor(3));
    let mut heap = BinaryHeap::with_config(MinOrder::<i32>::new(), config).unwrap();
    let mut capacities = Vec::new();
    for i in 0..20 {
        heap.push(i).unwrap();
        capacities.push(heap.capacity());
    }
    assert_eq!(capacities[..3], [2, 2, 6]);
    assert_eq!(capacities[5..7], [6, 18]);
    assert_eq!(capacities[17..19], [18, 54]);
    assert_eq!(heap.capacity(), 54);
}

#[test]
fn test_zero_initial_capacity() {
    let config = HeapConfig::default().with_initial_capacity(0);
    let mut heap = BinaryHeap::with_config(MinOrder::<i32>::new(), config).unwrap();
    assert_eq!(heap.capacity(), 0);
    heap.push(3).unwrap();
    assert_eq!(heap.capacity(), 1);
    heap.push(2).unwrap();
    assert_eq!(heap.capacity(), 2);
    heap.push(1).unwrap();
    assert_eq!(heap.capacity(), 4);
    assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);
}

#[test]
fn test_growth_disabled() {
    let config = HeapConfig::default().with_initial_capacity(3).with_growth(Growth::Disabled);
    let mut heap = BinaryHeap::with_config(MinOrder::<i32>::new(), config).unwrap();
    heap.try_extend([5, 1, 3]).unwrap();

    let err = heap.push(0).unwrap_err();
    assert_eq!(err.kind(), &HeapErrorKind::CapacityOverflow);
    assert_eq!(err.into_inner(), 0);
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.capacity(), 3);
    assert_eq!(heap.as_slice(), [1, 5, 3]);

    // Room again after a pop.
    assert_eq!(heap.pop(), Some(1));
    heap.push(0).unwrap();
    assert_eq!(heap.peek(), Some(&0));
}

#[test]
fn test_max_capacity_clamps_growth() {
    let mut heap = Builder::new()
        .comparator(MinOrder::<i32>::new())
        .initial_capacity(3)
        .max_capacity(5)
        .build::<i32>()
        .unwrap();
    heap.try_extend([1, 2, 3]).unwrap();
    heap.push(4).unwrap();
    assert_eq!(heap.capacity(), 5);
    heap.push(5).unwrap();

    let (element, error) = heap.push(6).unwrap_err().into_parts();
    assert_eq!(element, 6);
    assert_eq!(error.kind(), &HeapErrorKind::CapacityOverflow);
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.capacity(), 5);
    check_order(&heap);
}

#[test]
fn test_try_extend_stops_at_failure() {
    let config = HeapConfig::default().with_initial_capacity(2).with_growth(Growth::Disabled);
    let mut heap = BinaryHeap::with_config(MinOrder::<i32>::new(), config).unwrap();
    let mut rest = [7, 8, 9, 10].into_iter();
    let err = heap.try_extend(&mut rest).unwrap_err();
    assert_eq!(err.into_inner(), 9);
    assert_eq!(rest.next(), Some(10));
    assert_eq!(heap.as_slice(), [7, 8]);
}

#[test]
fn test_builder() {
    let err = Builder::<MinOrder<i32>>::new().build::<i32>().unwrap_err();
    assert_eq!(err.kind(), &HeapErrorKind::InvalidArgument("a comparator is required"));

    let err = Builder::new().maybe_comparator(None::<MinOrder<i32>>).build::<i32>().unwrap_err();
    assert!(matches!(err.kind(), HeapErrorKind::InvalidArgument(_)));

    let err = Builder::new()
        .comparator(MinOrder::<i32>::new())
        .growth(Growth::Factor(1))
        .build::<i32>()
        .unwrap_err();
    assert!(matches!(err.kind(), HeapErrorKind::InvalidArgument(_)));

    let config = HeapConfig::default().with_initial_capacity(8);
    let heap =
        Builder::new().comparator(MaxOrder::<u8>::new()).config(config).build::<u8>().unwrap();
    assert_eq!(heap.capacity(), 8);
    assert_eq!(heap.config(), &config);
}

#[test]
fn test_initial_capacity_out_of_reach() {
    let config = HeapConfig::default().with_initial_capacity(usize::MAX);
    let err = BinaryHeap::<u64, _>::with_config(MinOrder::new(), config).unwrap_err();
    assert!(matches!(err.kind(), HeapErrorKind::InvalidArgument(_)));

    // Within the addressable limit but far beyond what any allocator hands out.
    let config = HeapConfig::default().with_initial_capacity(isize::MAX as usize / 8);
    let err = BinaryHeap::<u64, _>::with_config(MinOrder::new(), config).unwrap_err();
    assert!(matches!(err.kind(), HeapErrorKind::ResourceExhaustion(_)));
}

#[test]
fn test_growth_out_of_reach_keeps_heap() {
    // The factor clamps the next capacity to the addressable maximum, which
    // no allocator hands out.
    let config = HeapConfig::default()
        .with_initial_capacity(1)
        .with_growth(Growth::Factor(isize::MAX as usize));
    let mut heap = BinaryHeap::<u64, _>::with_config(MinOrder::new(), config).unwrap();
    heap.push(7).unwrap();

    let err = heap.push(3).unwrap_err();
    assert!(matches!(err.kind(), HeapErrorKind::ResourceExhaustion(_)));
    assert_eq!(err.into_inner(), 3);
    assert_eq!(heap.capacity(), 1);
    assert_eq!(heap.as_slice(), [7]);

    assert_eq!(heap.pop(), Some(7));
    heap.push(5).unwrap();
    assert_eq!(heap.peek(), Some(&5));
}

#[test]
fn test_into_vec_matches_release() {
    let heap = filled_min_heap();
    assert_eq!(heap.clone().into_vec(), LAYOUT);
    assert_eq!(Vec::from(heap.clone()), LAYOUT);
    assert_eq!(heap.release(), LAYOUT);
}

#[test]
fn test_max_heap() {
    let mut heap = BinaryHeap::max_heap().unwrap();
    heap.try_extend(INPUT).unwrap();
    check_order(&heap);
    assert_eq!(heap.peek(), Some(&10));
    assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), [10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_closure_comparator_on_key() {
    let mut heap = BinaryHeap::new(|a: &(u32, &str), b: &(u32, &str)| b.0.cmp(&a.0)).unwrap();
    heap.try_extend([(2, "two"), (9, "nine"), (4, "four")]).unwrap();
    assert_eq!(heap.pop(), Some((9, "nine")));
    assert_eq!(heap.pop(), Some((4, "four")));
    assert_eq!(heap.pop(), Some((2, "two")));
}

#[test]
fn test_equal_elements_stay_put() {
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    let mut heap = BinaryHeap::new(by_key).unwrap();
    heap.try_extend([(1, 'a'), (1, 'b'), (1, 'c'), (0, 'd')]).unwrap();
    // `d` rises past `b` and `a`; the equal keys never swap among themselves.
    assert_eq!(heap.as_slice(), [(0, 'd'), (1, 'a'), (1, 'c'), (1, 'b')]);
}

#[test]
fn test_bubble_down_tie_prefers_left() {
    let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
    let mut heap = BinaryHeap::new(by_key).unwrap();
    heap.try_extend([(0, 'r'), (1, 'l'), (1, 'm'), (2, 'z')]).unwrap();
    assert_eq!(heap.as_slice(), [(0, 'r'), (1, 'l'), (1, 'm'), (2, 'z')]);

    assert_eq!(heap.pop(), Some((0, 'r')));
    assert_eq!(heap.as_slice(), [(1, 'l'), (2, 'z'), (1, 'm')]);
}

#[test]
fn test_peek_pop_coherence() {
    let mut rng = crate::test_helpers::test_rng();
    let mut heap = BinaryHeap::min_heap().unwrap();
    let mut pushes = 0usize;
    let mut pops = 0usize;

    for _ in 0..2000 {
        if rng.gen_bool(0.6) {
            let before = heap.len();
            heap.push(rng.gen_range(-50..50i32)).unwrap();
            assert_eq!(heap.len(), before + 1);
            pushes += 1;
        } else {
            let peeked = heap.peek().copied();
            let before = heap.len();
            let popped = heap.pop();
            assert_eq!(peeked, popped);
            if popped.is_some() {
                assert_eq!(heap.len(), before - 1);
                pops += 1;
            } else {
                assert_eq!(before, 0);
            }
        }
        check_order(&heap);
    }
    assert_eq!(heap.len(), pushes - pops);
}

#[test]
fn test_sorted_extraction_random() {
    let mut rng = crate::test_helpers::test_rng();
    for len in [0, 1, 2, 3, 7, 8, 20, 21, 100] {
        let data: Vec<u16> = (0..len).map(|_| rng.gen()).collect();
        let mut expected = data.clone();
        expected.sort();

        let mut heap = BinaryHeap::min_heap().unwrap();
        heap.try_extend(data.iter().copied()).unwrap();
        check_order(&heap);
        assert_eq!(heap.clone().into_sorted_vec(), expected);

        let mut popped = Vec::new();
        while let Some(x) = heap.pop() {
            popped.push(x);
        }
        assert_eq!(popped, expected);
    }
}

#[test]
fn test_into_sorted_vec_custom() {
    let mut heap = BinaryHeap::new(|a: &&str, b: &&str| a.len().cmp(&b.len())).unwrap();
    heap.try_extend(["ccc", "a", "dddd", "bb"]).unwrap();
    assert_eq!(heap.into_sorted_vec(), ["a", "bb", "ccc", "dddd"]);
}

#[test]
fn test_drain_sorted() {
    let mut heap = filled_min_heap();
    let first: Vec<_> = heap.drain_sorted().take(3).collect();
    assert_eq!(first, [1, 2, 3]);
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), 20);

    heap.try_extend([3, 2, 1]).unwrap();
    let mut drain = heap.drain_sorted();
    assert_eq!(drain.len(), 3);
    assert_eq!(drain.next(), Some(1));
    assert_eq!(drain.size_hint(), (2, Some(2)));
}

#[test]
fn test_into_iter() {
    let heap = filled_min_heap();
    assert_eq!(heap.clone().into_iter().collect::<Vec<_>>(), LAYOUT);
    assert_eq!(heap.clone().into_vec(), LAYOUT);
    assert_eq!(Vec::from(heap), LAYOUT);
}

#[test]
fn test_zero_sized() {
    let mut heap = BinaryHeap::new(|_: &(), _: &()| Ordering::Equal).unwrap();
    for _ in 0..50 {
        heap.push(()).unwrap();
    }
    assert_eq!(heap.len(), 50);
    assert_eq!(heap.capacity(), 80);
    while heap.pop().is_some() {}
    assert!(heap.is_empty());
}

#[test]
fn test_non_owning_handles() {
    struct Job {
        priority: u8,
        name: &'static str,
    }
    let jobs = [
        Job { priority: 3, name: "c" },
        Job { priority: 1, name: "a" },
        Job { priority: 2, name: "b" },
    ];

    let mut heap = BinaryHeap::new(|a: &&Job, b: &&Job| a.priority.cmp(&b.priority)).unwrap();
    for job in &jobs {
        heap.push(job).unwrap();
    }
    assert_eq!(heap.peek().map(|job| job.name), Some("a"));

    let released = heap.release();
    assert_eq!(released.iter().map(|job| job.name).collect::<Vec<_>>(), ["a", "c", "b"]);
    drop(released);
    assert_eq!(jobs.iter().map(|job| job.name).collect::<Vec<_>>(), ["c", "a", "b"]);
}

#[test]
fn test_release_drops_nothing() {
    let dummies: Vec<_> = INPUT.iter().map(|&id| CrashTestDummy::new(id as usize)).collect();
    let mut heap = BinaryHeap::min_heap().unwrap();
    for dummy in &dummies {
        heap.push(dummy.spawn(Panic::Never)).unwrap();
    }

    let elements = heap.release();
    assert!(dummies.iter().all(|d| d.dropped() == 0));
    assert_eq!(elements.iter().map(|e| e.id() as i32).collect::<Vec<_>>(), LAYOUT);

    drop(elements);
    assert!(dummies.iter().all(|d| d.dropped() == 1));
}

#[test]
fn test_destroy_drops_in_storage_order() {
    let log = DropLog::leak();
    let dummies: Vec<_> =
        INPUT.iter().map(|&id| CrashTestDummy::logged(id as usize, log)).collect();
    let mut heap = BinaryHeap::min_heap().unwrap();
    for dummy in &dummies {
        heap.push(dummy.spawn(Panic::Never)).unwrap();
    }
    assert!(log.ids().is_empty());

    heap.destroy();
    assert_eq!(log.ids(), LAYOUT.map(|id| id as usize));
    assert!(dummies.iter().all(|d| d.dropped() == 1));
}

#[test]
fn test_destroy_panic_in_drop() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let c = CrashTestDummy::new(2);
    let mut heap = BinaryHeap::min_heap().unwrap();
    heap.push(a.spawn(Panic::Never)).unwrap();
    heap.push(b.spawn(Panic::InDrop)).unwrap();
    heap.push(c.spawn(Panic::Never)).unwrap();

    catch_unwind(AssertUnwindSafe(|| heap.destroy())).unwrap_err();
    assert_eq!(a.dropped(), 1);
    assert_eq!(b.dropped(), 1);
    assert_eq!(c.dropped(), 1);
}

#[test]
fn test_drop_and_clear() {
    let dummies: Vec<_> = (0..5).map(CrashTestDummy::new).collect();
    let mut heap = BinaryHeap::max_heap().unwrap();
    for dummy in &dummies {
        heap.push(dummy.spawn(Panic::Never)).unwrap();
    }
    heap.clear();
    assert!(dummies.iter().all(|d| d.dropped() == 1));
    assert_eq!(heap.capacity(), 20);

    for dummy in &dummies {
        heap.push(dummy.spawn(Panic::Never)).unwrap();
    }
    drop(heap);
    assert!(dummies.iter().all(|d| d.dropped() == 2));
}

#[test]
fn test_clone() {
    let dummies: Vec<_> = (0..30).map(CrashTestDummy::new).collect();
    let mut heap = BinaryHeap::min_heap().unwrap();
    for dummy in dummies.iter().rev() {
        heap.push(dummy.spawn(Panic::Never)).unwrap();
    }
    assert_eq!(heap.capacity(), 40);

    let copy = heap.clone();
    assert_eq!(copy.capacity(), 40);
    assert_eq!(copy.as_slice(), heap.as_slice());
    assert!(dummies.iter().all(|d| d.cloned() == 1));

    drop(heap);
    let ids: Vec<_> = copy.into_iter_sorted().map(|e| e.id()).collect();
    assert_eq!(ids, (0..30).collect::<Vec<_>>());
}

#[test]
fn test_clone_panic_leaves_source() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let mut heap = BinaryHeap::min_heap().unwrap();
    heap.push(a.spawn(Panic::Never)).unwrap();
    heap.push(b.spawn(Panic::InClone)).unwrap();

    catch_unwind(AssertUnwindSafe(|| heap.clone())).unwrap_err();
    assert_eq!(a.dropped(), 1);
    assert_eq!(heap.len(), 2);
    check_order(&heap);
}

#[test]
#[allow(clippy::borrowed_box)]
fn test_comparator_panic_keeps_every_element() {
    let calls = Cell::new(0usize);
    let panic_at = Cell::new(usize::MAX);
    let cmp = |a: &Box<i32>, b: &Box<i32>| {
        calls.set(calls.get() + 1);
        if calls.get() == panic_at.get() {
            panic!("comparator gave up");
        }
        a.cmp(b)
    };
    let mut heap = BinaryHeap::new(cmp).unwrap();
    for x in INPUT {
        heap.push(Box::new(x)).unwrap();
    }

    // Mid-way through the second comparison of a bubble-down.
    panic_at.set(calls.get() + 2);
    catch_unwind(AssertUnwindSafe(|| heap.pop())).unwrap_err();
    assert_eq!(heap.len(), 9);

    panic_at.set(calls.get() + 1);
    catch_unwind(AssertUnwindSafe(|| heap.push(Box::new(0)))).unwrap_err();
    assert_eq!(heap.len(), 10);

    // Every box is still owned exactly once.
    let mut left: Vec<i32> = heap.release().into_iter().map(|b| *b).collect();
    left.sort();
    assert_eq!(left, [0, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}
