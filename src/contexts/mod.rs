//! Transient, dismissable notifications. Every backend-call failure surfaces
//! here; none of them is fatal to the application.

use std::collections::HashSet;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MILLIS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Push {
        kind: ToastKind,
        title: String,
        detail: Option<String>,
    },
    Dismiss(u64),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            ToastAction::Push { kind, title, detail } => {
                let id = state.next_id;
                state.next_id += 1;
                state.toasts.push(Toast {
                    id,
                    kind,
                    title,
                    detail,
                });
            }
            ToastAction::Dismiss(id) => {
                state.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(state)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Consumer handle; a no-op when rendered outside the provider.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    handle: Option<ToastContext>,
}

impl Toaster {
    pub fn success(&self, title: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), None);
    }

    pub fn error(&self, title: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), None);
    }

    pub fn error_with_detail(&self, title: impl Into<String>, detail: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), Some(detail.into()));
    }

    fn push(&self, kind: ToastKind, title: String, detail: Option<String>) {
        match &self.handle {
            Some(handle) => handle.dispatch(ToastAction::Push { kind, title, detail }),
            None => log::warn!("toast dropped (no provider): {title}"),
        }
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    Toaster {
        handle: use_context::<ToastContext>(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let scheduled = use_mut_ref(HashSet::<u64>::new);

    {
        let state = state.clone();
        use_effect_with(state.toasts.clone(), move |toasts| {
            for toast in toasts {
                if scheduled.borrow_mut().insert(toast.id) {
                    let state = state.clone();
                    let id = toast.id;
                    Timeout::new(AUTO_DISMISS_MILLIS, move || {
                        state.dispatch(ToastAction::Dismiss(id));
                    })
                    .forget();
                }
            }
            || ()
        });
    }

    html! {
        <ContextProvider<ToastContext> context={state.clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 space-y-2 w-80">
                { for state.toasts.iter().map(|toast| {
                    let dismiss = {
                        let state = state.clone();
                        let id = toast.id;
                        Callback::from(move |_| state.dispatch(ToastAction::Dismiss(id)))
                    };
                    let classes = match toast.kind {
                        ToastKind::Success => "bg-green-100 border border-green-400 text-green-800 px-4 py-3 rounded shadow",
                        ToastKind::Error => "bg-red-100 border border-red-400 text-red-800 px-4 py-3 rounded shadow",
                    };
                    html! {
                        <div key={toast.id.to_string()} class={classes}>
                            <div class="flex items-start justify-between gap-2">
                                <div>
                                    <p class="font-semibold">{&toast.title}</p>
                                    if let Some(detail) = &toast.detail {
                                        <p class="text-sm opacity-80">{detail}</p>
                                    }
                                </div>
                                <button onclick={dismiss} class="font-bold">{"×"}</button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(state: Rc<ToastState>, title: &str) -> Rc<ToastState> {
        state.reduce(ToastAction::Push {
            kind: ToastKind::Error,
            title: title.to_string(),
            detail: None,
        })
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let state = push(push(Rc::new(ToastState::default()), "a"), "b");
        let ids: Vec<u64> = state.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let state = push(push(Rc::new(ToastState::default()), "a"), "b");
        let state = state.reduce(ToastAction::Dismiss(0));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].title, "b");
        // ids keep growing after a dismissal
        let state = push(state, "c");
        assert_eq!(state.toasts[1].id, 2);
    }
}
