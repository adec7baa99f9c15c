//! The shared bottle.
//!
//! A bottle sits on one edge of the topology and is shared by the two
//! philosophers at its ends plus the bartender. All state lives behind a
//! single mutex; no operation ever touches two bottles at once.

use parking_lot::{Condvar, Mutex, MutexGuard};
use std::time::Duration;

/// Default number of drinks in a full bottle
pub const DEFAULT_CAPACITY: u32 = 5;

#[derive(Debug)]
struct BottleState {
    remaining: u32,
    refilling: bool,
    refills: u64,
}

/// A depletable, lock-protected drink counter.
#[derive(Debug)]
pub struct Bottle {
    capacity: u32,
    state: Mutex<BottleState>,
    refilled: Condvar,
}

impl Bottle {
    /// Creates a full bottle holding `capacity` drinks.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            state: Mutex::new(BottleState {
                remaining: capacity,
                refilling: false,
                refills: 0,
            }),
            refilled: Condvar::new(),
        }
    }

    /// Creates a full bottle of the default capacity.
    pub fn full() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    fn lock(&self) -> MutexGuard<'_, BottleState> {
        self.state.lock()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn remaining(&self) -> u32 {
        self.lock().remaining
    }

    pub fn is_refilling(&self) -> bool {
        self.lock().refilling
    }

    /// Number of refills completed since the bottle was created.
    pub fn refills_completed(&self) -> u64 {
        self.lock().refills
    }

    /// Takes up to `requested` drinks and returns how many were granted.
    ///
    /// Never waits for a refill: an empty bottle grants 0 immediately.
    pub fn try_take(&self, requested: u32) -> u32 {
        let mut state = self.lock();
        let granted = requested.min(state.remaining);
        state.remaining -= granted;
        granted
    }

    /// Claims the refill of an empty bottle.
    ///
    /// Returns `true` to exactly one caller per depletion episode; the claim
    /// holds until [`Bottle::complete_refill`] is called.
    pub fn refill_if_needed(&self) -> bool {
        let mut state = self.lock();
        if state.remaining == 0 && !state.refilling {
            state.refilling = true;
            true
        } else {
            false
        }
    }

    /// Fills the bottle back to capacity, releases the refill claim and
    /// wakes anyone waiting in [`Bottle::wait_refilled`].
    pub fn complete_refill(&self) {
        let mut state = self.lock();
        state.remaining = self.capacity;
        state.refilling = false;
        state.refills += 1;
        drop(state);
        self.refilled.notify_all();
    }

    /// Blocks until the next refill completes or `timeout` elapses.
    ///
    /// Returns `true` if a refill completed during the wait. Philosophers
    /// poll instead of calling this; it exists for observers.
    pub fn wait_refilled(&self, timeout: Duration) -> bool {
        let mut state = self.lock();
        let seen = state.refills;
        let _ = self
            .refilled
            .wait_while_for(&mut state, |s| s.refills == seen, timeout);
        state.refills != seen
    }
}

impl Default for Bottle {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn bottle_with(remaining: u32) -> Bottle {
        let bottle = Bottle::full();
        assert_eq!(bottle.try_take(DEFAULT_CAPACITY - remaining), DEFAULT_CAPACITY - remaining);
        bottle
    }

    #[test]
    fn test_new_bottle_is_full() {
        let bottle = Bottle::full();
        assert_eq!(bottle.remaining(), 5);
        assert_eq!(bottle.capacity(), 5);
        assert!(!bottle.is_refilling());
        assert_eq!(bottle.refills_completed(), 0);
    }

    #[test]
    fn test_try_take_grants_at_most_remaining() {
        let bottle = bottle_with(3);
        assert_eq!(bottle.try_take(5), 3);
        assert_eq!(bottle.remaining(), 0);
        assert_eq!(bottle.try_take(2), 0);
        assert_eq!(bottle.remaining(), 0);
    }

    #[test]
    fn test_try_take_zero_request() {
        let bottle = Bottle::full();
        assert_eq!(bottle.try_take(0), 0);
        assert_eq!(bottle.remaining(), 5);
    }

    #[test]
    fn test_concurrent_takes_share_three_drinks() {
        for _ in 0..200 {
            let bottle = Arc::new(bottle_with(3));
            let barrier = Arc::new(Barrier::new(2));

            let handles: Vec<_> = [5u32, 2u32]
                .into_iter()
                .map(|requested| {
                    let bottle = Arc::clone(&bottle);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        bottle.try_take(requested)
                    })
                })
                .collect();

            let granted: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
            assert_eq!(granted, 3);
            assert_eq!(bottle.remaining(), 0);
        }
    }

    #[test]
    fn test_refill_claimed_once_per_episode() {
        let bottle = bottle_with(0);
        assert!(bottle.refill_if_needed());
        assert!(!bottle.refill_if_needed());
        assert!(bottle.is_refilling());

        bottle.complete_refill();
        assert_eq!(bottle.remaining(), 5);
        assert!(!bottle.is_refilling());
        assert_eq!(bottle.refills_completed(), 1);

        // Full again, nothing to claim
        assert!(!bottle.refill_if_needed());
    }

    #[test]
    fn test_refill_not_claimed_while_drinks_remain() {
        let bottle = bottle_with(1);
        assert!(!bottle.refill_if_needed());
        assert!(!bottle.is_refilling());
    }

    #[test]
    fn test_concurrent_refill_claims() {
        let bottle = Arc::new(bottle_with(0));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let bottle = Arc::clone(&bottle);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    bottle.refill_if_needed()
                })
            })
            .collect();

        let claims = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|claimed| *claimed)
            .count();
        assert_eq!(claims, 1);
    }

    #[test]
    fn test_stress_no_lost_updates() {
        let bottle = Arc::new(Bottle::new(1_000));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let bottle = Arc::clone(&bottle);
                thread::spawn(move || {
                    let mut taken = 0;
                    for _ in 0..500 {
                        taken += bottle.try_take(1);
                    }
                    taken
                })
            })
            .collect();

        let taken: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(taken, 1_000);
        assert_eq!(bottle.remaining(), 0);
    }

    #[test]
    fn test_wait_refilled_wakes_on_refill() {
        let bottle = Arc::new(bottle_with(0));
        assert!(bottle.refill_if_needed());

        let waiter = {
            let bottle = Arc::clone(&bottle);
            thread::spawn(move || bottle.wait_refilled(Duration::from_secs(5)))
        };

        thread::sleep(Duration::from_millis(20));
        bottle.complete_refill();
        assert!(waiter.join().unwrap());
    }

    #[test]
    fn test_wait_refilled_times_out() {
        let bottle = Bottle::full();
        assert!(!bottle.wait_refilled(Duration::from_millis(10)));
    }
}
