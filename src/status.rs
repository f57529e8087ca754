use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

/// Holds at most one pending hide timer. Arming a new one drops the
/// previous handle; for `Timeout` that clears it.
pub struct TimerSlot<H>(RefCell<Option<H>>);

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self(RefCell::new(None))
    }
}

impl<H> TimerSlot<H> {
    pub fn arm(&self, handle: H) {
        let previous = self.0.borrow_mut().replace(handle);
        drop(previous);
    }
}

/// The status region's current message and a stable callback for showing
/// a new one.
#[derive(Clone)]
pub struct StatusHandle {
    message: Option<StatusMessage>,
    show: Callback<StatusMessage>,
}

impl StatusHandle {
    pub fn current(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Same `Callback` on every render while the lifetime is unchanged.
    pub fn callback(&self) -> Callback<StatusMessage> {
        self.show.clone()
    }
}

#[hook]
pub fn use_status(ttl_ms: u32) -> StatusHandle {
    let message = use_state(|| None::<StatusMessage>);
    let timer: Rc<TimerSlot<Timeout>> = use_memo((), |_| TimerSlot::default());

    let show = {
        let message = message.clone();
        use_callback(ttl_ms, move |msg: StatusMessage, ttl: &u32| {
            message.set(Some(msg));
            let message = message.clone();
            timer.arm(Timeout::new(*ttl, move || message.set(None)));
        })
    };

    StatusHandle {
        message: (*message).clone(),
        show,
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
    pub message: Option<StatusMessage>,
}

#[function_component(StatusBanner)]
pub fn status_banner(props: &StatusBannerProps) -> Html {
    match &props.message {
        Some(msg) => html! {
            <div id="message" class={msg.kind.class()}>{ msg.text.clone() }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
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
    fn new_timer_cancels_the_pending_one() {
        let dropped = Rc::new(Cell::new(0));
        let slot = TimerSlot::default();

        slot.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        slot.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 1);

        slot.arm(CountsDrops(dropped.clone()));
        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn dropping_the_slot_clears_the_last_timer() {
        let dropped = Rc::new(Cell::new(0));
        let slot = TimerSlot::default();
        slot.arm(CountsDrops(dropped.clone()));
        drop(slot);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn callback_is_shared_not_rebuilt() {
        let handle = StatusHandle {
            message: None,
            show: Callback::from(|_: StatusMessage| ()),
        };
        let copy = handle.clone();
        assert_eq!(handle.callback(), handle.callback());
        assert_eq!(handle.callback(), copy.callback());
    }

    #[test]
    fn status_classes() {
        assert_eq!(StatusMessage::success("ok").kind.class(), "success");
        assert_eq!(StatusMessage::error("no").kind.class(), "error");
    }
}
