// src/verification.rs
// Fake "blockchain verification": four timed stages and a random display hash.
// Nothing here touches a network or does real cryptography.

use std::rc::Rc;

use yew::Reducible;

pub const DEFAULT_TICK_MS: u32 = 2000;
pub const PROGRESS_QUANTUM: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationStage {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const STAGES: [VerificationStage; 4] = [
    VerificationStage { id: "hash", label: "Generating Policy Hash", glyph: "#" },
    VerificationStage { id: "blockchain", label: "Submitting to Blockchain", glyph: "⛁" },
    VerificationStage { id: "verify", label: "Cryptographic Verification", glyph: "🛡" },
    VerificationStage { id: "complete", label: "Verification Complete", glyph: "✔" },
];

const LAST_STEP: usize = STAGES.len() - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Done,
    Active,
    Pending,
}

/// One activation of the verify screen. Build a fresh one each time the screen mounts.
///
/// Every tick moves one stage forward until the last stage is active; the tick
/// after that settles it (progress 100). Later ticks are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationProgress {
    ticks: u8,
    tx_hash: Option<String>,
}

impl VerificationProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_index(&self) -> usize {
        usize::from(self.ticks).min(LAST_STEP)
    }

    pub fn progress_pct(&self) -> u8 {
        self.ticks * PROGRESS_QUANTUM
    }

    /// The success state shows once the last stage is reached.
    pub fn is_complete(&self) -> bool {
        self.step_index() == LAST_STEP
    }

    pub fn is_settled(&self) -> bool {
        usize::from(self.ticks) == STAGES.len()
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.tx_hash.as_deref()
    }

    pub fn stage_status(&self, index: usize) -> StageStatus {
        let current = self.step_index();
        if index < current || (index == current && self.is_settled()) {
            StageStatus::Done
        } else if index == current {
            StageStatus::Active
        } else {
            StageStatus::Pending
        }
    }

    /// Advances one tick. `random` yields values in `[0, 1)` and is only
    /// consulted on the tick that moves from stage 0 to stage 1.
    /// Returns false once settled.
    pub fn advance(&mut self, random: impl FnMut() -> f64) -> bool {
        if self.is_settled() {
            return false;
        }
        let before = self.step_index();
        self.ticks += 1;
        if before == 0 && self.step_index() == 1 && self.tx_hash.is_none() {
            self.tx_hash = Some(pseudo_tx_hash(random));
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationAction {
    Tick,
}

impl Reducible for VerificationProgress {
    type Action = VerificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            VerificationAction::Tick => {
                let mut next = (*self).clone();
                if next.advance(js_sys::Math::random) {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

/// `0x` followed by 16 lowercase hex digits.
pub fn pseudo_tx_hash(mut random: impl FnMut() -> f64) -> String {
    let mut out = String::with_capacity(18);
    out.push_str("0x");
    for _ in 0..16 {
        let d = ((random() * 16.0).floor() as u32).min(15);
        out.push(char::from_digit(d, 16).unwrap_or('0'));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::clock::{Clock, ManualClock};

    fn fixed(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn starts_at_zero_without_hash() {
        let p = VerificationProgress::new();
        assert_eq!(p.step_index(), 0);
        assert_eq!(p.progress_pct(), 0);
        assert!(p.tx_hash().is_none());
        assert!(!p.is_complete());
        assert_eq!(p.stage_status(0), StageStatus::Active);
        assert_eq!(p.stage_status(1), StageStatus::Pending);
    }

    #[test]
    fn four_ticks_settle_at_step_three_and_full_progress() {
        let mut p = VerificationProgress::new();
        let expected = [(1, 25), (2, 50), (3, 75), (3, 100)];
        for (step, pct) in expected {
            assert!(p.advance(fixed(0.5)));
            assert_eq!((p.step_index(), p.progress_pct()), (step, pct));
        }
        assert!(p.is_complete());
        assert!(p.is_settled());

        assert!(!p.advance(fixed(0.5)));
        assert_eq!((p.step_index(), p.progress_pct()), (3, 100));
    }

    #[test]
    fn complete_shows_before_settle() {
        let mut p = VerificationProgress::new();
        for _ in 0..3 {
            p.advance(fixed(0.1));
        }
        assert!(p.is_complete());
        assert_eq!(p.stage_status(3), StageStatus::Active);
        p.advance(fixed(0.1));
        assert_eq!(p.stage_status(3), StageStatus::Done);
        assert!((0..4).all(|i| p.stage_status(i) == StageStatus::Done));
    }

    #[test]
    fn hash_is_generated_once_on_first_tick() {
        let calls = RefCell::new(0u32);
        let mut counting = || {
            *calls.borrow_mut() += 1;
            0.75
        };

        let mut p = VerificationProgress::new();
        p.advance(&mut counting);
        let first = p.tx_hash().map(str::to_string);
        assert_eq!(first.as_deref(), Some("0xcccccccccccccccc"));
        assert_eq!(*calls.borrow(), 16);

        for _ in 0..4 {
            p.advance(&mut counting);
        }
        assert_eq!(p.tx_hash().map(str::to_string), first);
        assert_eq!(*calls.borrow(), 16);
    }

    #[test]
    fn hash_digits_stay_in_range() {
        let mut seq = [0.0, 0.999_999, 0.0625].into_iter().cycle();
        let h = pseudo_tx_hash(|| seq.next().unwrap_or(0.0));
        assert_eq!(h, "0x0f10f10f10f10f10");
        assert_eq!(pseudo_tx_hash(|| 1.0), "0xffffffffffffffff");
    }

    #[test]
    fn clock_drives_sequence_and_stops_on_drop() {
        let clock = ManualClock::new();
        let progress = Rc::new(RefCell::new(VerificationProgress::new()));
        let p = progress.clone();
        let handle = clock.every(DEFAULT_TICK_MS, move || {
            p.borrow_mut().advance(|| 0.3);
        });

        clock.advance(u64::from(DEFAULT_TICK_MS) * 4);
        assert_eq!(progress.borrow().progress_pct(), 100);
        clock.advance(u64::from(DEFAULT_TICK_MS) * 3);
        assert_eq!(progress.borrow().step_index(), 3);
        assert_eq!(progress.borrow().progress_pct(), 100);

        drop(handle);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn re_entry_starts_a_fresh_run() {
        let clock = ManualClock::new();
        let mut hashes = Vec::new();
        for seed in [0.2, 0.9] {
            let progress = Rc::new(RefCell::new(VerificationProgress::new()));
            let p = progress.clone();
            let handle = clock.every(DEFAULT_TICK_MS, move || {
                p.borrow_mut().advance(|| seed);
            });
            assert_eq!(clock.live_timers(), 1);
            clock.advance(u64::from(DEFAULT_TICK_MS));
            hashes.push(progress.borrow().tx_hash().map(str::to_string));
            drop(handle);
        }
        assert_eq!(clock.live_timers(), 0);
        assert_ne!(hashes[0], hashes[1]);
    }
}
