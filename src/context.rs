//! Page Context
//!
//! Each page keeps its view state in one signal provided via the Leptos
//! Context API. Actions build a controller over that signal and run it on
//! the local executor.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use skillshare_core::view::{
    FeedController, FeedState, Notice, Notices, ProfileController, ProfileState, StateHandle,
};
use skillshare_core::{ApiConfig, HttpApi};

/// How long a notice stays up unless dismissed by hand
const NOTICE_MS: u32 = 5_000;

/// `StateHandle` backed by a signal. Reads and writes return `None` once
/// the page owning the signal has been disposed.
pub struct SignalState<T: 'static>(RwSignal<T>);

impl<T: 'static> Clone for SignalState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalState<T> {}

impl<T: Send + Sync + 'static> StateHandle<T> for SignalState<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// Page state that can carry a notice
pub trait NoticeHost {
    fn notices(&self) -> &Notices;
    fn notices_mut(&mut self) -> &mut Notices;
}

impl NoticeHost for FeedState {
    fn notices(&self) -> &Notices {
        &self.notices
    }

    fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }
}

impl NoticeHost for ProfileState {
    fn notices(&self) -> &Notices {
        &self.notices
    }

    fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }
}

pub struct PageContext<S: 'static> {
    /// Client shared by every action of the page
    api: StoredValue<HttpApi, LocalStorage>,
    pub state: RwSignal<S>,
}

impl<S: 'static> Clone for PageContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for PageContext<S> {}

pub type FeedContext = PageContext<FeedState>;
pub type ProfileContext = PageContext<ProfileState>;

pub type FeedCtl = FeedController<HttpApi, SignalState<FeedState>>;
pub type ProfileCtl = ProfileController<HttpApi, SignalState<ProfileState>>;

impl<S> PageContext<S>
where
    S: NoticeHost + Default + Send + Sync + 'static,
{
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: StoredValue::new_local(HttpApi::new(config)),
            state: RwSignal::new(S::default()),
        }
    }

    /// Synchronous state change (form input, dialog toggles)
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        self.state.update(f);
    }

    pub fn notice(&self) -> Signal<Option<Notice>> {
        let state = self.state;
        Memo::new(move |_| state.with(|s| s.notices().current().cloned())).into()
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.notices_mut().dismiss(id));
    }

    /// Dismiss every notice after `NOTICE_MS` unless a newer one replaced it.
    pub fn auto_dismiss_notices(&self) {
        let state = self.state;
        let notice = self.notice();
        Effect::new(move |_| {
            let Some(id) = notice.get().map(|n| n.id) else {
                return;
            };
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_MS).await;
                state.try_update(|s| s.notices_mut().dismiss(id));
            });
        });
    }

    fn spawn<C, F, Fut>(&self, build: impl FnOnce(HttpApi, SignalState<S>) -> C, action: F)
    where
        F: FnOnce(C) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        spawn_local(action(build(api, SignalState(self.state))));
    }
}

impl FeedContext {
    /// Run a feed action, e.g. `ctx.run(|ctl| async move { ctl.load().await })`.
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(FeedCtl) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        self.spawn(FeedController::new, action);
    }
}

impl ProfileContext {
    pub fn run<F, Fut>(&self, action: F)
    where
        F: FnOnce(ProfileCtl) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        self.spawn(ProfileController::new, action);
    }
}

pub fn use_feed() -> FeedContext {
    use_context::<FeedContext>().expect("FeedContext should be provided")
}

pub fn use_profile() -> ProfileContext {
    use_context::<ProfileContext>().expect("ProfileContext should be provided")
}
