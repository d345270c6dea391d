//! The no-payload "edited" notification and its bulk-load suppression guard.

use std::{cell::Cell, rc::Rc};

/// Accumulates "edited" notifications fired by committed field changes.
///
/// Bulk refreshes (loading a material into the form) hold a [`SuppressGuard`]
/// so that programmatic field writes do not surface as spurious edits. The
/// guard releases on every exit path, including panics, via `Drop`.
#[derive(Debug, Default)]
pub struct EditedSignal {
    suppress_depth: Rc<Cell<u32>>,
    fired: Cell<u32>,
}

impl EditedSignal {
    pub fn emit(&self) {
        if self.suppress_depth.get() == 0 {
            self.fired.set(self.fired.get() + 1);
        }
    }

    /// Number of notifications fired since the last take, draining the count.
    pub fn take(&self) -> u32 {
        self.fired.replace(0)
    }

    pub fn suppress(&self) -> SuppressGuard {
        self.suppress_depth.set(self.suppress_depth.get() + 1);
        SuppressGuard {
            depth: Rc::clone(&self.suppress_depth),
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppress_depth.get() > 0
    }
}

/// Scoped suppression of [`EditedSignal::emit`]; nests.
pub struct SuppressGuard {
    depth: Rc<Cell<u32>>,
}

impl Drop for SuppressGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_and_take() {
        let signal = EditedSignal::default();
        assert_eq!(signal.take(), 0);
        signal.emit();
        signal.emit();
        assert_eq!(signal.take(), 2);
        assert_eq!(signal.take(), 0);
    }

    #[test]
    fn suppressed_emits_are_dropped() {
        let signal = EditedSignal::default();
        {
            let _guard = signal.suppress();
            assert!(signal.is_suppressed());
            signal.emit();
        }
        assert!(!signal.is_suppressed());
        assert_eq!(signal.take(), 0);

        signal.emit();
        assert_eq!(signal.take(), 1);
    }

    #[test]
    fn suppression_nests() {
        let signal = EditedSignal::default();
        let outer = signal.suppress();
        {
            let _inner = signal.suppress();
            signal.emit();
        }
        assert!(signal.is_suppressed());
        signal.emit();
        drop(outer);
        assert!(!signal.is_suppressed());
        assert_eq!(signal.take(), 0);
    }

    #[test]
    fn guard_releases_on_early_exit() {
        let signal = EditedSignal::default();
        let refresh = |signal: &EditedSignal, bail: bool| {
            let _guard = signal.suppress();
            if bail {
                return;
            }
            signal.emit();
        };
        refresh(&signal, true);
        assert!(!signal.is_suppressed());
        refresh(&signal, false);
        assert!(!signal.is_suppressed());
        assert_eq!(signal.take(), 0);
    }
}
