/*!
 * Scratch Tests
 * Checkpoint/restore and nesting rules
 */

use brocopy::memory::{Arena, ArenaAlloc, ArenaError};
use pretty_assertions::assert_eq;

#[test]
fn test_restore_reuses_offset() {
    let arena = Arena::new(256).unwrap();
    arena.allocate(5).unwrap();

    let scratch = arena.checkpoint().unwrap();
    let first = arena.offset_of(scratch.allocate(32).unwrap()).unwrap();
    scratch.restore();

    let scratch = arena.checkpoint().unwrap();
    let second = arena.offset_of(scratch.allocate(32).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_drop_restores() {
    let arena = Arena::new(256).unwrap();
    let before = arena.position();
    {
        let scratch = arena.checkpoint().unwrap();
        scratch.allocate(64).unwrap();
        assert_eq!(scratch.used(), 64);
    }
    assert_eq!(arena.position(), before);
    assert_eq!(arena.stats().high_water, 64);
}

#[test]
fn test_outer_handles_refuse_while_scratch_live() {
    let arena = Arena::new(256).unwrap();
    let scratch = arena.checkpoint().unwrap();

    assert_eq!(
        arena.allocate(8).unwrap_err(),
        ArenaError::ScratchActive {
            requested_level: 0,
            active_level: 1,
        }
    );
    assert!(matches!(
        arena.checkpoint(),
        Err(ArenaError::ScratchActive { .. })
    ));

    let inner = scratch.checkpoint().unwrap();
    assert!(scratch.allocate(8).is_err());
    assert!(inner.allocate(8).is_ok());

    inner.restore();
    assert!(scratch.allocate(8).is_ok());
    scratch.restore();
    assert!(arena.allocate(8).is_ok());
}

#[test]
fn test_nested_restore_order() {
    let arena = Arena::new(256).unwrap();
    let outer = arena.checkpoint().unwrap();
    outer.allocate(16).unwrap();
    let mark = arena.position();

    let inner = outer.checkpoint().unwrap();
    inner.allocate(64).unwrap();
    assert_eq!(inner.origin(), mark);
    drop(inner);

    assert_eq!(arena.position(), mark);
    assert_eq!(arena.stats().scratch_depth, 1);
    drop(outer);
    assert_eq!(arena.position(), 0);
    assert_eq!(arena.stats().scratch_depth, 0);
}

#[test]
fn test_allocations_before_checkpoint_survive() {
    let arena = Arena::new(256).unwrap();
    let kept = arena.alloc_copy(b"kept").unwrap();

    let scratch = arena.checkpoint().unwrap();
    scratch.alloc_copy(b"temporary").unwrap();
    scratch.restore();

    assert_eq!(kept, b"kept");
}
