use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth_status;
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving: show a placeholder, never the children.
    Pending,
    /// Resolved without a session: replace the history entry with `/auth`.
    RedirectToAuth,
    Render,
}

pub fn guard_outcome(loading: bool, is_authenticated: bool) -> GuardOutcome {
    if loading {
        GuardOutcome::Pending
    } else if !is_authenticated {
        GuardOutcome::RedirectToAuth
    } else {
        GuardOutcome::Render
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let status = use_auth_status();
    let navigator = use_navigator().unwrap();
    let outcome = guard_outcome(status.loading, status.is_authenticated);

    // replace, not push: the back button must not return to the guarded screen
    use_effect_with(outcome, move |outcome| {
        if *outcome == GuardOutcome::RedirectToAuth {
            navigator.replace(&Route::Auth);
        }
        || ()
    });

    match outcome {
        GuardOutcome::Pending => html! {
            <div class="w-full h-screen flex items-center justify-center text-gray-500">
                {"Carregando..."}
            </div>
        },
        GuardOutcome::RedirectToAuth => Html::default(),
        GuardOutcome::Render => html! { <>{props.children.clone()}</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_never_renders_children() {
        assert_eq!(guard_outcome(true, false), GuardOutcome::Pending);
        assert_eq!(guard_outcome(true, true), GuardOutcome::Pending);
    }

    #[test]
    fn resolved_unauthenticated_redirects() {
        assert_eq!(guard_outcome(false, false), GuardOutcome::RedirectToAuth);
    }

    #[test]
    fn resolved_authenticated_renders() {
        assert_eq!(guard_outcome(false, true), GuardOutcome::Render);
    }
}
