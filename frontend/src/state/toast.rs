use leptos::*;
use uuid::Uuid;

pub const SUCCESS_TOAST_MS: u32 = 2_000;
pub const ERROR_TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn duration_ms(&self) -> u32 {
        match self {
            ToastLevel::Success => SUCCESS_TOAST_MS,
            ToastLevel::Error => ERROR_TOAST_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
}

/// Fire-and-forget notification sink shared through context.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    pub fn push(&self, message: impl Into<String>, level: ToastLevel) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));
        self.schedule_dismiss(id, level.duration_ms());
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid, after_ms: u32) {
        let ctx = *self;
        gloo_timers::callback::Timeout::new(after_ms, move || ctx.dismiss(id)).forget();
    }

    // No browser timers on the host; toasts stay until dismissed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid, _after_ms: u32) {}
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastContext {
    match use_context::<ToastContext>() {
        Some(ctx) => ctx,
        None => {
            let ctx = ToastContext::new();
            provide_context(ctx);
            ctx
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toasts_outlive_success_toasts() {
        assert!(ToastLevel::Error.duration_ms() > ToastLevel::Success.duration_ms());
    }
}
