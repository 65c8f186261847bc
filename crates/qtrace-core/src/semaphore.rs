//! Observer-interest counter backing gated markers
//!
//! A semaphore is a process-wide `u16` counter associated with one marker
//! name. The tracer runtime increments it when an observer attaches to the
//! marker and decrements it on detach; the traced process only ever reads it.
//! Non-zero means "at least one observer wants this marker", which lets call
//! sites skip expensive argument computation when nobody is listening.
//!
//! The counter is a single-word lock-free load on the read side. Relaxed
//! ordering is sufficient: the value is advisory, and a stale read only
//! delays or wastes one firing.
//!
//! `qtrace-probe`'s `define_semaphore!` places instances of this type in the
//! `.probes` link section, where SystemTap-compatible tracers expect to find
//! and increment them.

use std::sync::atomic::{AtomicU16, Ordering};

/// Process-wide observer-interest counter for one marker.
///
/// `repr(transparent)` over `AtomicU16`: the in-memory layout is exactly the
/// 16-bit counter that external tracer tooling writes through.
#[repr(transparent)]
pub struct Semaphore(AtomicU16);

impl Semaphore {
    /// New counter with no observers attached.
    pub const fn new() -> Self {
        Self(AtomicU16::new(0))
    }

    /// True iff at least one observer is attached.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Relaxed) > 0
    }

    /// Current observer count.
    #[inline]
    pub fn count(&self) -> u16 {
        self.0.load(Ordering::Relaxed)
    }

    /// Record one observer attaching.
    ///
    /// Normally the external tracer bumps the counter directly in process
    /// memory; this method exists for in-process tracer integrations and for
    /// attach/detach simulation in tests. Returns the new count.
    pub fn attach(&self) -> u16 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record one observer detaching. Saturates at zero. Returns the new count.
    pub fn detach(&self) -> u16 {
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            let next = current.saturating_sub(1);
            match self
                .0
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(observed) => current = observed,
            }
        }
    }
}

impl Default for Semaphore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Semaphore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Semaphore").field(&self.count()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive() {
        let sema = Semaphore::new();
        assert!(!sema.is_active());
        assert_eq!(sema.count(), 0);
    }

    #[test]
    fn test_attach_detach() {
        let sema = Semaphore::new();
        assert_eq!(sema.attach(), 1);
        assert!(sema.is_active());
        assert_eq!(sema.attach(), 2);
        assert_eq!(sema.detach(), 1);
        assert!(sema.is_active());
        assert_eq!(sema.detach(), 0);
        assert!(!sema.is_active());
    }

    #[test]
    fn test_detach_saturates() {
        let sema = Semaphore::new();
        assert_eq!(sema.detach(), 0);
        assert_eq!(sema.count(), 0);
    }

    #[test]
    fn test_layout_is_one_u16() {
        // External tracers write the raw 16-bit word; the wrapper must not
        // change size or alignment.
        assert_eq!(std::mem::size_of::<Semaphore>(), 2);
        assert_eq!(
            std::mem::align_of::<Semaphore>(),
            std::mem::align_of::<AtomicU16>()
        );
    }
}
