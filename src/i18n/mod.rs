//! Process-wide key→string lookup with a selectable locale. Pure data: the
//! locale lives in a context, the tables are static matches. Unknown keys
//! fall back to the key itself so a missing entry degrades visibly instead
//! of panicking.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

pub type LocaleContext = UseStateHandle<Locale>;

#[derive(Properties, PartialEq)]
pub struct I18nProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(I18nProvider)]
pub fn i18n_provider(props: &I18nProviderProps) -> Html {
    let locale = use_state(Locale::default);

    html! {
        <ContextProvider<LocaleContext> context={locale}>
            {props.children.clone()}
        </ContextProvider<LocaleContext>>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct I18n {
    locale: Locale,
}

impl I18n {
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.locale, key)
    }
}

#[hook]
pub fn use_translation() -> I18n {
    let locale = use_context::<LocaleContext>()
        .map(|handle| *handle)
        .unwrap_or_default();
    I18n { locale }
}

pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    let translated = match locale {
        Locale::PtBr => pt_br(key),
        Locale::En => en(key),
    };
    translated.unwrap_or(key)
}

fn pt_br(key: &str) -> Option<&'static str> {
    let text = match key {
        "auth_title" => "Bem-vindo ao PetConnect",
        "auth_description" => "Entre ou crie sua conta para começar",
        "tabs_login" => "Entrar",
        "tabs_signup" => "Cadastrar",
        "login_email_label" => "E-mail",
        "login_password_label" => "Senha",
        "login_submit" => "Entrar",
        "login_loading" => "Entrando...",
        "login_success_title" => "Login realizado!",
        "login_success_desc" => "Bem-vindo de volta.",
        "login_error_title" => "Erro ao entrar",
        "login_unconfirmed_title" => "E-mail não confirmado",
        "login_unconfirmed_desc" => "Confirme seu e-mail antes de entrar.",
        "login_resend_hint" => "Não recebeu o e-mail de confirmação?",
        "login_resend_button" => "Reenviar",
        "login_resend_success_title" => "E-mail reenviado!",
        "login_resend_success_desc" => "Verifique sua caixa de entrada.",
        "login_resend_error_title" => "Erro ao reenviar",
        "signup_name_label" => "Nome completo",
        "signup_phone_label" => "Telefone",
        "signup_email_label" => "E-mail",
        "signup_password_label" => "Senha",
        "signup_submit" => "Criar conta",
        "signup_loading" => "Criando conta...",
        "signup_success_title" => "Conta criada!",
        "signup_success_desc" => "Enviamos um link de confirmação para seu e-mail.",
        "signup_error_title" => "Erro ao cadastrar",
        "auth_fill_required" => "Preencha todos os campos obrigatórios",
        "auth_invalid_email" => "Informe um e-mail válido",
        "auth_invalid_phone" => "Informe um telefone válido",
        "role_label" => "Como você quer usar o PetConnect?",
        "role_tutor_title" => "Tutor",
        "role_tutor_sub" => "Tenho um pet",
        "role_caregiver_title" => "Cuidador",
        "role_caregiver_sub" => "Cuido de pets",
        "verify_title" => "Confirme seu e-mail",
        "verify_description" => "Enviamos um link de confirmação para sua caixa de entrada",
        "verify_email_label" => "E-mail cadastrado",
        "verify_back_to_auth" => "Voltar",
        "verify_hint" => "O link expira em 24 horas. Confira também a pasta de spam.",
        "verify_already_confirmed" => "Já confirmou? Entre aqui",
        "verify_resend_button" => "Reenviar",
        "verify_resend_loading" => "Enviando...",
        "verify_resend_success_title" => "E-mail reenviado!",
        "verify_resend_success_desc" => "Verifique sua caixa de entrada.",
        "verify_resend_error_title" => "Erro ao reenviar",
        "verify_error_title" => "Erro",
        "verify_error_no_email" => "Informe o e-mail cadastrado",
        _ => return None,
    };
    Some(text)
}

fn en(key: &str) -> Option<&'static str> {
    let text = match key {
        "auth_title" => "Welcome to PetConnect",
        "auth_description" => "Sign in or create an account to get started",
        "tabs_login" => "Sign in",
        "tabs_signup" => "Sign up",
        "login_email_label" => "Email",
        "login_password_label" => "Password",
        "login_submit" => "Sign in",
        "login_loading" => "Signing in...",
        "login_success_title" => "Signed in!",
        "login_success_desc" => "Welcome back.",
        "login_error_title" => "Sign-in failed",
        "login_unconfirmed_title" => "Email not confirmed",
        "login_unconfirmed_desc" => "Confirm your email before signing in.",
        "login_resend_hint" => "Didn't get the confirmation email?",
        "login_resend_button" => "Resend",
        "login_resend_success_title" => "Email sent!",
        "login_resend_success_desc" => "Check your inbox.",
        "login_resend_error_title" => "Resend failed",
        "signup_name_label" => "Full name",
        "signup_phone_label" => "Phone",
        "signup_email_label" => "Email",
        "signup_password_label" => "Password",
        "signup_submit" => "Create account",
        "signup_loading" => "Creating account...",
        "signup_success_title" => "Account created!",
        "signup_success_desc" => "We sent a confirmation link to your email.",
        "signup_error_title" => "Sign-up failed",
        "auth_fill_required" => "Fill in all required fields",
        "auth_invalid_email" => "Enter a valid email",
        "auth_invalid_phone" => "Enter a valid phone number",
        "role_label" => "How do you want to use PetConnect?",
        "role_tutor_title" => "Tutor",
        "role_tutor_sub" => "I have a pet",
        "role_caregiver_title" => "Caregiver",
        "role_caregiver_sub" => "I care for pets",
        "verify_title" => "Confirm your email",
        "verify_description" => "We sent a confirmation link to your inbox",
        "verify_email_label" => "Registered email",
        "verify_back_to_auth" => "Back",
        "verify_hint" => "The link expires in 24 hours. Check your spam folder too.",
        "verify_already_confirmed" => "Already confirmed? Sign in here",
        "verify_resend_button" => "Resend",
        "verify_resend_loading" => "Sending...",
        "verify_resend_success_title" => "Email sent!",
        "verify_resend_success_desc" => "Check your inbox.",
        "verify_resend_error_title" => "Resend failed",
        "verify_error_title" => "Error",
        "verify_error_no_email" => "Enter the registered email",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_translates_per_locale() {
        assert_eq!(translate(Locale::PtBr, "tabs_login"), "Entrar");
        assert_eq!(translate(Locale::En, "tabs_login"), "Sign in");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        assert_eq!(translate(Locale::PtBr, "no_such_key"), "no_such_key");
        assert_eq!(translate(Locale::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn every_pt_key_has_an_en_counterpart() {
        // keys rendered by the auth and verification screens
        for key in [
            "auth_title",
            "auth_description",
            "tabs_login",
            "tabs_signup",
            "login_submit",
            "login_unconfirmed_title",
            "signup_submit",
            "role_label",
            "verify_title",
            "verify_resend_button",
        ] {
            assert!(pt_br(key).is_some(), "missing pt-BR entry: {key}");
            assert!(en(key).is_some(), "missing en entry: {key}");
        }
    }
}
