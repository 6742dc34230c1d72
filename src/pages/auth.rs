use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::contexts::use_toast;
use crate::i18n::use_translation;
use crate::router::Route;
use crate::services::api::ApiError;
use crate::services::auth::{AuthService, SignUpMetadata};
use crate::utils::validation::{is_valid_email, is_valid_phone};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    SignUp,
}

#[function_component(Auth)]
pub fn auth() -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();
    let i18n = use_translation();

    let tab = use_state(|| Tab::Login);
    let loading = use_state(|| false);
    let role = use_state(|| "tutor");

    let email_input = use_node_ref();
    let password_input = use_node_ref();
    let name_input = use_node_ref();
    let phone_input = use_node_ref();

    let on_sign_in = {
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = email_input.cast::<HtmlInputElement>().unwrap().value();
            let password = password_input.cast::<HtmlInputElement>().unwrap().value();

            if email.is_empty() || password.is_empty() {
                toast.error(i18n.t("auth_fill_required"));
                return;
            }
            if !is_valid_email(&email) {
                toast.error(i18n.t("auth_invalid_email"));
                return;
            }

            let loading = loading.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            loading.set(true);

            spawn_local(async move {
                match AuthService::sign_in(&email, &password).await {
                    Ok(_) => {
                        toast.success(i18n.t("login_success_title"));
                        navigator.push(&Route::Dashboard);
                    }
                    Err(ApiError::EmailNotConfirmed) => {
                        toast.error_with_detail(
                            i18n.t("login_unconfirmed_title"),
                            i18n.t("login_unconfirmed_desc"),
                        );
                        navigator.push_with_state(&Route::VerifyEmail, email);
                    }
                    Err(ApiError::Unauthorized) => {
                        toast.error(i18n.t("login_error_title"));
                    }
                    Err(error) => {
                        log::error!("sign-in failed: {error}");
                        toast.error_with_detail(i18n.t("login_error_title"), error.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_sign_up = {
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let name_input = name_input.clone();
        let phone_input = phone_input.clone();
        let role = role.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let full_name = name_input.cast::<HtmlInputElement>().unwrap().value();
            let phone = phone_input.cast::<HtmlInputElement>().unwrap().value();
            let email = email_input.cast::<HtmlInputElement>().unwrap().value();
            let password = password_input.cast::<HtmlInputElement>().unwrap().value();

            if full_name.is_empty() || phone.is_empty() || email.is_empty() || password.is_empty() {
                toast.error(i18n.t("auth_fill_required"));
                return;
            }
            if !is_valid_email(&email) {
                toast.error(i18n.t("auth_invalid_email"));
                return;
            }
            if !is_valid_phone(&phone) {
                toast.error(i18n.t("auth_invalid_phone"));
                return;
            }

            let metadata = SignUpMetadata {
                full_name,
                phone,
                role: *role,
            };

            let loading = loading.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            loading.set(true);

            spawn_local(async move {
                match AuthService::sign_up(&email, &password, &metadata).await {
                    Ok(()) => {
                        toast.success(i18n.t("signup_success_title"));
                        navigator.push_with_state(&Route::VerifyEmail, email);
                    }
                    Err(error) => {
                        log::error!("sign-up failed: {error}");
                        toast.error_with_detail(i18n.t("signup_error_title"), error.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_resend = {
        let email_input = email_input.clone();
        let loading = loading.clone();
        let toast = toast.clone();

        Callback::from(move |_: MouseEvent| {
            let email = email_input.cast::<HtmlInputElement>().unwrap().value();
            if email.is_empty() {
                toast.error(i18n.t("verify_error_no_email"));
                return;
            }
            let loading = loading.clone();
            let toast = toast.clone();
            loading.set(true);
            spawn_local(async move {
                match AuthService::resend_confirmation(&email).await {
                    Ok(()) => toast.success(i18n.t("login_resend_success_title")),
                    Err(error) => {
                        toast.error_with_detail(i18n.t("login_resend_error_title"), error.to_string())
                    }
                }
                loading.set(false);
            });
        })
    };

    let tab_button = |target: Tab, label: &'static str| {
        let tab = tab.clone();
        let active = *tab == target;
        let onclick = Callback::from(move |_| tab.set(target));
        let classes = if active {
            "flex-1 py-2 rounded-md bg-white shadow font-semibold"
        } else {
            "flex-1 py-2 rounded-md text-gray-500 hover:text-gray-800"
        };
        html! { <button type="button" {onclick} class={classes}>{i18n.t(label)}</button> }
    };

    let role_button = |value: &'static str, title: &'static str, subtitle: &'static str, emoji: &str| {
        let role = role.clone();
        let active = *role == value;
        let onclick = Callback::from(move |_| role.set(value));
        let classes = if active {
            "p-4 rounded-xl border-2 border-orange-500 bg-orange-50 text-orange-600 font-semibold"
        } else {
            "p-4 rounded-xl border-2 border-gray-200 hover:border-orange-300"
        };
        html! {
            <button type="button" {onclick} class={classes}>
                <div class="text-center">
                    <div class="text-2xl mb-1">{emoji}</div>
                    <div>{i18n.t(title)}</div>
                    <div class="text-xs opacity-70">{i18n.t(subtitle)}</div>
                </div>
            </button>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <Link<Route> to={Route::Landing} classes="inline-flex items-center gap-2 mb-8 text-gray-500 hover:text-gray-800">
                    {"← "}{i18n.t("verify_back_to_auth")}
                </Link<Route>>

                <div class="bg-white border-2 rounded-xl shadow-xl p-6">
                    <div class="text-center mb-6">
                        <div class="text-4xl mb-3">{"🐾"}</div>
                        <h1 class="text-2xl font-bold">{i18n.t("auth_title")}</h1>
                        <p class="text-gray-500">{i18n.t("auth_description")}</p>
                    </div>

                    <div class="grid grid-cols-2 gap-1 bg-gray-100 rounded-lg p-1 mb-6">
                        {tab_button(Tab::Login, "tabs_login")}
                        {tab_button(Tab::SignUp, "tabs_signup")}
                    </div>

                    if *tab == Tab::Login {
                        <form onsubmit={on_sign_in} class="space-y-4">
                            <div>
                                <label for="login-email" class="block text-sm font-medium mb-1">
                                    {i18n.t("login_email_label")}
                                </label>
                                <input
                                    ref={email_input.clone()}
                                    id="login-email"
                                    type="email"
                                    placeholder="seu@email.com"
                                    class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                                />
                            </div>
                            <div>
                                <label for="login-password" class="block text-sm font-medium mb-1">
                                    {i18n.t("login_password_label")}
                                </label>
                                <input
                                    ref={password_input.clone()}
                                    id="login-password"
                                    type="password"
                                    placeholder="••••••••"
                                    class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                                />
                            </div>
                            <button
                                type="submit"
                                disabled={*loading}
                                class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                            >
                                if *loading { {i18n.t("login_loading")} } else { {i18n.t("login_submit")} }
                            </button>
                            <div class="flex items-center gap-2 text-sm pt-1">
                                <span class="text-gray-500">{i18n.t("login_resend_hint")}</span>
                                <button type="button" onclick={on_resend} class="text-orange-600 hover:underline">
                                    {i18n.t("login_resend_button")}
                                </button>
                            </div>
                        </form>
                    } else {
                        <form onsubmit={on_sign_up} class="space-y-4">
                            <div>
                                <label for="signup-name" class="block text-sm font-medium mb-1">
                                    {i18n.t("signup_name_label")}
                                </label>
                                <input
                                    ref={name_input.clone()}
                                    id="signup-name"
                                    type="text"
                                    placeholder="Seu nome"
                                    class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                                />
                            </div>
                            <div>
                                <label for="signup-phone" class="block text-sm font-medium mb-1">
                                    {i18n.t("signup_phone_label")}
                                </label>
                                <input
                                    ref={phone_input.clone()}
                                    id="signup-phone"
                                    type="tel"
                                    placeholder="(00) 00000-0000"
                                    class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                                />
                            </div>
                            <div>
                                <label for="signup-email" class="block text-sm font-medium mb-1">
                                    {i18n.t("signup_email_label")}
                                </label>
                                <input
                                    ref={email_input.clone()}
                                    id="signup-email"
                                    type="email"
                                    placeholder="seu@email.com"
                                    class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                                />
                            </div>
                            <div>
                                <label for="signup-password" class="block text-sm font-medium mb-1">
                                    {i18n.t("signup_password_label")}
                                </label>
                                <input
                                    ref={password_input.clone()}
                                    id="signup-password"
                                    type="password"
                                    minlength="6"
                                    placeholder="••••••••"
                                    class="w-full px-3 py-2 border rounded-md focus:outline-none focus:ring-2 focus:ring-orange-400"
                                />
                            </div>
                            <div>
                                <p class="block text-sm font-medium mb-2">{i18n.t("role_label")}</p>
                                <div class="grid grid-cols-2 gap-3">
                                    {role_button("tutor", "role_tutor_title", "role_tutor_sub", "🐕")}
                                    {role_button("cuidador", "role_caregiver_title", "role_caregiver_sub", "❤️")}
                                </div>
                            </div>
                            <button
                                type="submit"
                                disabled={*loading}
                                class="w-full bg-orange-500 hover:bg-orange-600 disabled:bg-orange-300 text-white font-bold py-2 px-4 rounded-md"
                            >
                                if *loading { {i18n.t("signup_loading")} } else { {i18n.t("signup_submit")} }
                            </button>
                        </form>
                    }
                </div>
            </div>
        </div>
    }
}
