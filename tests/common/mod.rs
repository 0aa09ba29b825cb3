//! Shared test doubles for integration suites.

// Each suite uses a different subset of the mock surface.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use viewcore::visibility::{ObservationHost, ObserveError, ObserverConfig, TargetId};

/// One recorded host interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// `observe(target, epoch)` succeeded.
    Observe(TargetId, u64),
    /// `unobserve(target)` was invoked.
    Unobserve(TargetId),
}

/// Scripted visibility-observation capability.
///
/// Records every observe/unobserve call into a log the test keeps a handle
/// to (the tracker owns the host itself), and can be told to fail the next
/// registration.
#[derive(Debug, Default)]
pub struct MockHost {
    log: Rc<RefCell<Vec<HostCall>>>,
    fail_observe: bool,
}

impl MockHost {
    /// Host writing into an externally held call log.
    pub fn with_log(log: Rc<RefCell<Vec<HostCall>>>) -> Self {
        Self {
            log,
            fail_observe: false,
        }
    }

    /// Host whose `observe` always fails.
    pub fn failing() -> Self {
        Self {
            log: Rc::default(),
            fail_observe: true,
        }
    }

    /// Handle to the call log.
    pub fn log(&self) -> Rc<RefCell<Vec<HostCall>>> {
        Rc::clone(&self.log)
    }
}

impl ObservationHost for MockHost {
    fn observe(
        &mut self,
        target: TargetId,
        epoch: u64,
        _config: &ObserverConfig,
    ) -> Result<(), ObserveError> {
        if self.fail_observe {
            return Err(ObserveError::HostUnavailable);
        }
        self.log.borrow_mut().push(HostCall::Observe(target, epoch));
        Ok(())
    }

    fn unobserve(&mut self, target: TargetId) {
        self.log.borrow_mut().push(HostCall::Unobserve(target));
    }
}
