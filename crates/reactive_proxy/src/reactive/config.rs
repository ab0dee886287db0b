use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use super::classify::{ExclusionPredicate, NoExclusion};
use super::handlers::Handlers;
use super::identity::Flavor;
use super::state;
use super::tracker::{NoopTracker, Tracker};

/// Configuration of the wrapper system for the current thread.
///
/// Installed with [`configure`]; changes only affect operations made afterwards, existing
/// wrappers keep the strategies they were created with.
#[derive(Clone)]
pub struct ReactiveConfig {
    diagnostics: bool,
    exclusion: Rc<dyn ExclusionPredicate>,
    tracker: Rc<dyn Tracker>,
    mutable_handlers: Handlers,
    read_only_handlers: Handlers,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            diagnostics: cfg!(debug_assertions),
            exclusion: Rc::new(NoExclusion),
            tracker: Rc::new(NoopTracker),
            mutable_handlers: Handlers::for_flavor(Flavor::Mutable),
            read_only_handlers: Handlers::for_flavor(Flavor::ReadOnly),
        }
    }
}

impl ReactiveConfig {
    /// Development diagnostics, enabled by default in debug builds.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl ExclusionPredicate + 'static) -> Self {
        self.exclusion = Rc::new(exclusion);
        self
    }

    pub fn with_tracker(mut self, tracker: Rc<dyn Tracker>) -> Self {
        self.tracker = tracker;
        self
    }

    /// Strategies used by [`mutable`](super::factory::mutable) and
    /// [`read_only`](super::factory::read_only) for the given flavor.
    pub fn with_handlers(mut self, flavor: Flavor, handlers: Handlers) -> Self {
        match flavor {
            Flavor::Mutable => self.mutable_handlers = handlers,
            Flavor::ReadOnly => self.read_only_handlers = handlers,
        }
        self
    }

    pub fn diagnostics(&self) -> bool {
        self.diagnostics
    }

    pub fn exclusion(&self) -> &Rc<dyn ExclusionPredicate> {
        &self.exclusion
    }

    pub fn tracker(&self) -> &Rc<dyn Tracker> {
        &self.tracker
    }

    pub fn handlers(&self, flavor: Flavor) -> &Handlers {
        match flavor {
            Flavor::Mutable => &self.mutable_handlers,
            Flavor::ReadOnly => &self.read_only_handlers,
        }
    }
}

impl Debug for ReactiveConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveConfig")
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

/// Installs `config` for the current thread.
pub fn configure(config: ReactiveConfig) {
    state::replace_config(config)
}

/// A copy of the configuration in effect on the current thread.
pub fn current_config() -> ReactiveConfig {
    state::config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReactiveConfig::default();

        assert_eq!(config.diagnostics(), cfg!(debug_assertions));
        assert!(!config
            .exclusion()
            .excludes(&crate::reactive::object::ObjectRef::plain()));
    }

    #[test]
    fn configure_replaces_the_thread_config() {
        configure(ReactiveConfig::default().with_diagnostics(false));
        assert!(!current_config().diagnostics());

        configure(ReactiveConfig::default().with_diagnostics(true));
        assert!(current_config().diagnostics());
    }
}
