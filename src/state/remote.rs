//! Sequence-checked slot for remotely loaded data.
//!
//! DESIGN
//! ======
//! Loads are not cancelled and not mutually excluded: a user action or poll
//! tick may start a second load while an earlier one is still in flight.
//! Each load takes a ticket from a monotonic counter, and a completion only
//! lands if its ticket still matches the latest issued one, so a slow older
//! response can never overwrite a newer one.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

/// A data slot whose value is replaced wholesale by sequence-checked loads.
#[derive(Clone, Debug, Default)]
pub struct Remote<T> {
    /// Last applied payload.
    pub value: T,
    /// Whether the latest issued load is still in flight.
    pub loading: bool,
    seq: u64,
}

impl<T> Remote<T> {
    /// Start a load. Bumps the sequence and returns the ticket the
    /// completion must present.
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    /// Apply a successful completion.
    ///
    /// Returns `false` and leaves the value untouched when a newer load has
    /// been issued since `ticket`.
    pub fn apply(&mut self, ticket: u64, value: T) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.value = value;
        self.loading = false;
        true
    }

    /// Record a failed completion. The previous value stays in place.
    ///
    /// Returns `false` when a newer load has been issued since `ticket`, in
    /// which case the failure belongs to a superseded request and callers
    /// should not surface it.
    pub fn fail(&mut self, ticket: u64) -> bool {
        if ticket != self.seq {
            return false;
        }
        self.loading = false;
        true
    }
}
