use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Warning => "toast toast-warning",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✖",
            ToastKind::Warning => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Holds at most one pending timer. Putting a new one in drops the old one,
/// which for a `Timeout` cancels it.
pub struct PendingTimer<T>(Rc<RefCell<Option<T>>>);

impl<T> PendingTimer<T> {
    pub fn replace(&self, timer: T) {
        *self.0.borrow_mut() = Some(timer);
    }
}

impl<T> Default for PendingTimer<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> Clone for PendingTimer<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for PendingTimer<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Page-wide toast slot shared by the calculator and the enquiry form.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    current: UseStateHandle<Option<Toast>>,
    hide: PendingTimer<Timeout>,
}

impl ToastHandle {
    /// Shows `toast` for five seconds. A newer toast restarts the countdown.
    pub fn show(&self, toast: Toast) {
        self.current.set(Some(toast));
        let current = self.current.clone();
        self.hide
            .replace(Timeout::new(TOAST_DURATION_MS, move || current.set(None)));
    }

    pub fn current(&self) -> Option<Toast> {
        (*self.current).clone()
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    let current = use_state(|| None::<Toast>);
    let hide = use_mut_ref(|| None::<Timeout>);
    ToastHandle {
        current,
        hide: PendingTimer(hide),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    html! {
        <div class="toast-container">
            <style>
                {r#"
                    .toast-container {
                        position: fixed;
                        top: 2rem;
                        right: 2rem;
                        z-index: 50;
                        animation: slideInRight 0.5s ease-out;
                    }
                    @keyframes slideInRight {
                        from { transform: translateX(400px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #fff;
                        font-weight: 600;
                        padding: 1rem 1.5rem;
                        border-radius: 1rem;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(10px);
                    }
                    .toast-success { background: linear-gradient(to right, #22c55e, #059669); }
                    .toast-error { background: linear-gradient(to right, #ef4444, #e11d48); }
                    .toast-warning { background: linear-gradient(to right, #eab308, #ea580c); }
                "#}
            </style>
            <div class={toast.kind.class()} role="status">
                <span>{toast.kind.icon()}</span>
                <span>{&toast.message}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountsDrops(Rc<Cell<u32>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn newer_timer_cancels_the_pending_one() {
        let dropped = Rc::new(Cell::new(0));
        let slot = PendingTimer::default();

        slot.replace(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        slot.replace(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 1);

        drop(slot);
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn clones_share_one_slot() {
        let dropped = Rc::new(Cell::new(0));
        let slot = PendingTimer::default();
        let other = slot.clone();

        slot.replace(CountsDrops(dropped.clone()));
        other.replace(CountsDrops(dropped.clone()));

        assert_eq!(dropped.get(), 1);
        assert!(slot == other);
        assert!(slot != PendingTimer::default());
    }
}
