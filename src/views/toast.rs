/// One transient status message. Starts loading, then settles exactly once
/// into success or error; later transition attempts are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    state: ToastState,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Loading,
    Success,
    Error,
}

impl Toast {
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            state: ToastState::Loading,
            message: message.into(),
        }
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        if self.state == ToastState::Loading {
            self.state = ToastState::Success;
            self.message = message.into();
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        if self.state == ToastState::Loading {
            self.state = ToastState::Error;
            self.message = message.into();
        }
    }

    pub fn state(&self) -> ToastState {
        self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
