use crate::{
    components::{
        common::{Button, ButtonVariant},
        input::Input,
        modal::Modal,
    },
    pages::login::utils::{password_input_type, FieldErrors, LoginField},
};
use leptos::*;

#[component]
pub fn LoginForm(
    email: Signal<String>,
    password: Signal<String>,
    errors: Signal<FieldErrors>,
    password_visible: Signal<bool>,
    submitting: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<()>,
    on_toggle_password: Callback<()>,
    on_activate: Callback<()>,
) -> impl IntoView {
    let field_error = move |field: LoginField| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };
    let password_type = Signal::derive(move || password_input_type(password_visible.get()));

    let body = view! {
        <div class="flex flex-col gap-4">
            <Input
                id=LoginField::Email.id()
                label=LoginField::Email.label()
                value=email
                on_input=on_email_input
                error=field_error(LoginField::Email)
                disabled=submitting
                required=true
                autocomplete="username"
            />
            <div class="relative">
                <Input
                    id=LoginField::Password.id()
                    label=LoginField::Password.label()
                    value=password
                    on_input=on_password_input
                    error=field_error(LoginField::Password)
                    disabled=submitting
                    required=true
                    input_type=password_type
                    autocomplete="current-password"
                />
                <button
                    type="button"
                    class="absolute right-4 top-11 text-fg-muted hover:text-fg"
                    aria-label=move || if password_visible.get() { "Ukryj hasło" } else { "Pokaż hasło" }
                    aria-pressed=move || if password_visible.get() { "true" } else { "false" }
                    on:click=move |_| on_toggle_password.call(())
                >
                    <i class=move || if password_visible.get() { "fas fa-eye-slash" } else { "fas fa-eye" }></i>
                </button>
            </div>
        </div>
    }
    .into_view();

    let footer = view! {
        <Button
            variant=ButtonVariant::Outline
            small=true
            on_click=Callback::new(move |_| on_activate.call(()))
            attr:type="button"
        >
            {"Aktywuj konto"}
        </Button>
    }
    .into_view();

    view! {
        <div class="min-h-screen flex flex-col z-10 items-center justify-center gap-8 bg-surface-inverse px-4">
            <h1 class="text-center leading-none font-bold text-5xl md:text-7xl p-8 md:p-16 text-text-inverse m-0">
                {"👋"}<span class="text-brand">{"Witaj"}</span>{" w "}<br/>
                <span class="text-brand">{"CSL"}</span>{"Schedule📅"}
            </h1>
            <Modal
                action_label="Zaloguj się"
                on_submit=on_submit
                body=body
                footer=footer
                disabled=submitting
            />
        </div>
    }
}
