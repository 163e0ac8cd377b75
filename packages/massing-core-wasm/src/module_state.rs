use lazy_static::lazy_static;
use parking_lot::ReentrantMutex;
use std::cell::RefCell;

use crate::config::MassingConfig;
use crate::session::Session;

// Module state holding the single massing session the front-end drives
pub struct ModuleState {
    pub session: Session,

    // Stats
    pub uploads: usize,
    pub recomputes: usize,
}

// Create a global static instance of the module state
lazy_static! {
    static ref MODULE_STATE: ReentrantMutex<RefCell<ModuleState>> =
        ReentrantMutex::new(RefCell::new(ModuleState::new()));
}

impl ModuleState {
    pub fn new() -> Self {
        ModuleState {
            session: Session::default(),
            uploads: 0,
            recomputes: 0,
        }
    }

    pub fn with_mut<F, R>(f: F) -> R
    where
        F: FnOnce(&mut ModuleState) -> R,
    {
        let guard = MODULE_STATE.lock();
        let mut borrow = guard.borrow_mut();
        f(&mut borrow)
    }

    pub fn with<F, R>(f: F) -> R
    where
        F: FnOnce(&ModuleState) -> R,
    {
        let guard = MODULE_STATE.lock();
        let borrow = guard.borrow();
        f(&borrow)
    }

    /// Swap in a new configuration; the session starts over under it
    pub fn configure(&mut self, config: MassingConfig) {
        self.session = Session::new(config);
        self.uploads = 0;
        self.recomputes = 0;
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.uploads = 0;
        self.recomputes = 0;
    }
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::new()
    }
}
