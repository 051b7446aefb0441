use leptos_reactive::{RwSignal, SignalSet, WriteSignal};

/// Somewhere to put the current user, owned by the caller
///
/// `None` means nobody is logged in.
pub trait UserState<U> {
    fn set(&self, user: Option<U>);
}

impl<U: 'static> UserState<U> for RwSignal<Option<U>> {
    fn set(&self, user: Option<U>) {
        SignalSet::set(self, user);
    }
}

impl<U: 'static> UserState<U> for WriteSignal<Option<U>> {
    fn set(&self, user: Option<U>) {
        SignalSet::set(self, user);
    }
}

impl<U, F: Fn(Option<U>)> UserState<U> for F {
    fn set(&self, user: Option<U>) {
        self(user)
    }
}
