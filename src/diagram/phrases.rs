//! Rotation through the request phrases shown in the speech capsule.

/// Map a uniform pick `raw` onto an index that never equals `prev`: a
/// collision advances to the next entry modulo the list length. Lists with a
/// single entry have nowhere else to go and may repeat.
pub fn no_repeat_index(prev: usize, raw: usize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    if raw == prev { (raw + 1) % len } else { raw }
}

/// Picks the phrase for each cycle: uniform-ish random with no immediate
/// repetition. Owns the current index; nothing else mutates it.
pub struct PhraseSelector {
    phrases: &'static [&'static str],
    state: u64,
    current: usize,
}

impl PhraseSelector {
    /// The list must be non-empty and stays fixed for the selector's lifetime.
    /// Callers pick the seed (wall clock in the browser, fixed in tests).
    pub fn new(phrases: &'static [&'static str], seed: u64) -> Self {
        assert!(!phrases.is_empty(), "phrase list must be non-empty");
        Self {
            phrases,
            state: seed,
            current: 0,
        }
    }

    // Simple linear congruential step and modulus; phrase shuffling for a
    // decorative diagram does not need anything stronger.
    fn next_raw(&mut self) -> usize {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.state >> 16) as usize % self.phrases.len()
    }

    /// Phrase for the next cycle, never the one returned last time (unless
    /// the list has a single entry).
    pub fn pick_next(&mut self) -> &'static str {
        let raw = self.next_raw();
        self.current = no_repeat_index(self.current, raw, self.phrases.len());
        self.phrases[self.current]
    }

    /// Most recently selected phrase (index 0 before any pick).
    pub fn current(&self) -> &'static str {
        self.phrases[self.current]
    }
}
