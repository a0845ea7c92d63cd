//! Application shell: owns the gate, the reveal sequencer, and the reset
//! dialog, and maps async service results back onto them.

use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, container, text, Space};
use iced::{application, window, Element, Length, Size, Task, Theme};

use coffer_core::config::AppConfig;
use coffer_core::gate::{GatePhase, Submit, UnlockGate, VerifyOutcome};
use coffer_core::lock::LockStore;
use coffer_core::reset::ResetConfirmation;
use coffer_core::reveal::{RevealPhase, RevealSequencer};
use coffer_vault::{AppReset, CredentialAttempt, CredentialVerifier, LocalAuthenticator};

use crate::{reset_dialog, theme, unlock};

/// Services the shell talks to. The verifier is absent until `coffer init`
/// has written a credential record.
///
/// `Clone` because the boot closure handed to the runtime is a `Fn` it
/// may call again; every field is shared behind an [`Arc`].
#[derive(Clone)]
pub struct UiServices {
    pub verifier: Option<Arc<dyn CredentialVerifier>>,
    pub authenticator: Option<Arc<dyn LocalAuthenticator>>,
    pub reset: Arc<dyn AppReset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Unlock,
    Home,
    SetupRequired,
    ResetComplete,
}

#[derive(Debug, Clone)]
pub enum Message {
    PasswordChanged(String),
    UnlockPressed,
    VerifyFinished(VerifyOutcome),
    BiometricPressed,
    BiometricFinished(Result<(), String>),
    RevealTick(u64),
    ForgetPasswordPressed,
    ResetTypedChanged(String),
    ResetConfirmPressed,
    ResetCancelPressed,
    ResetFinished {
        attempt: u64,
        result: Result<(), String>,
    },
}

pub struct CofferApp {
    pub(crate) config: AppConfig,
    pub(crate) screen: Screen,
    pub(crate) gate: UnlockGate,
    pub(crate) reveal: RevealSequencer,
    pub(crate) reset: ResetConfirmation,
    pub(crate) password: String,
    pub(crate) reset_error: Option<String>,
    pub(crate) biometric_in_flight: bool,
    verifier: Option<Arc<dyn CredentialVerifier>>,
    authenticator: Option<Arc<dyn LocalAuthenticator>>,
    reset_service: Arc<dyn AppReset>,
}

/// Launch the shell with the given services.
pub fn run(config: AppConfig, services: UiServices) -> iced::Result {
    let size = Size::new(
        config.ui.default_width as f32,
        config.ui.default_height as f32,
    );
    application(
        move || CofferApp::init(config.clone(), services.clone()),
        CofferApp::update,
        CofferApp::view,
    )
    .title("Coffer")
    .window(window::Settings {
        size,
        ..window::Settings::default()
    })
    .theme(CofferApp::theme)
    .run()
}

impl CofferApp {
    pub fn init(config: AppConfig, services: UiServices) -> (Self, Task<Message>) {
        let screen = if services.verifier.is_some() {
            Screen::Unlock
        } else {
            tracing::info!("no credential record, showing setup notice");
            Screen::SetupRequired
        };

        let app = Self {
            screen,
            gate: UnlockGate::new(LockStore::new()),
            reveal: RevealSequencer::new(),
            reset: ResetConfirmation::new(),
            password: String::new(),
            reset_error: None,
            biometric_in_flight: false,
            verifier: services.verifier,
            authenticator: services.authenticator,
            reset_service: services.reset,
            config,
        };

        let boot = if app.screen == Screen::Unlock {
            app.schedule_reveal_tick(app.config.ui.title_delay_ms)
        } else {
            Task::none()
        };
        (app, boot)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PasswordChanged(value) => {
                if self.screen == Screen::Unlock {
                    self.password = value;
                }
                Task::none()
            }
            Message::UnlockPressed => {
                if self.screen != Screen::Unlock {
                    return Task::none();
                }
                match self.gate.submit(&self.password) {
                    Submit::Start => self.spawn_verification(),
                    Submit::Rejected(_) | Submit::Ignored => Task::none(),
                }
            }
            Message::VerifyFinished(outcome) => {
                if self.screen != Screen::Unlock {
                    return Task::none();
                }
                self.gate.resolve(outcome);
                self.after_gate_change();
                Task::none()
            }
            Message::BiometricPressed => {
                if self.screen != Screen::Unlock
                    || self.biometric_in_flight
                    || self.gate.phase() == GatePhase::Unlocked
                {
                    return Task::none();
                }
                let Some(authenticator) = self.authenticator.clone() else {
                    return Task::none();
                };
                if !authenticator.capability().is_usable() {
                    return Task::none();
                }
                self.biometric_in_flight = true;
                Task::perform(
                    async move {
                        authenticator
                            .authenticate("unlock Coffer")
                            .await
                            .map_err(|err| err.to_string())
                    },
                    Message::BiometricFinished,
                )
            }
            Message::BiometricFinished(result) => {
                self.biometric_in_flight = false;
                if self.screen != Screen::Unlock {
                    return Task::none();
                }
                match result {
                    Ok(()) => {
                        self.gate.biometric_unlocked();
                        self.after_gate_change();
                    }
                    Err(reason) => {
                        // A dismissed or failed prompt falls back to the
                        // password path without annotating the form.
                        tracing::warn!("biometric unlock failed: {reason}");
                    }
                }
                Task::none()
            }
            Message::RevealTick(epoch) => match self.reveal.advance(epoch) {
                Some(RevealPhase::TitleRevealed) => {
                    self.schedule_reveal_tick(self.config.ui.fade_ms)
                }
                Some(RevealPhase::FormRevealed) => unlock::focus_password_input(),
                _ => Task::none(),
            },
            Message::ForgetPasswordPressed => {
                if self.screen != Screen::Unlock || self.reset.is_visible() {
                    return Task::none();
                }
                self.reset.open();
                self.reset_error = None;
                reset_dialog::focus_confirmation_input()
            }
            Message::ResetTypedChanged(value) => {
                self.reset.set_typed(value);
                Task::none()
            }
            Message::ResetCancelPressed => {
                self.reset.close();
                self.reset_error = None;
                Task::none()
            }
            Message::ResetConfirmPressed => {
                let Some(attempt) = self.reset.begin() else {
                    return Task::none();
                };
                self.reset_error = None;
                tracing::info!("application reset confirmed");
                let service = self.reset_service.clone();
                Task::perform(
                    async move {
                        let result = service
                            .reset_application()
                            .await
                            .map_err(|err| err.to_string());
                        (attempt, result)
                    },
                    |(attempt, result)| Message::ResetFinished { attempt, result },
                )
            }
            Message::ResetFinished { attempt, result } => {
                let live = self.reset.acknowledge(attempt);
                match result {
                    Ok(()) => {
                        // The wipe happened even if the dialog was
                        // dismissed while the call ran.
                        self.reset.close();
                        self.reset_error = None;
                        self.password.clear();
                        self.reveal.cancel();
                        self.screen = Screen::ResetComplete;
                        tracing::info!("application reset completed");
                    }
                    Err(reason) => {
                        tracing::error!("application reset failed: {reason}");
                        if live {
                            self.reset_error = Some(reason);
                        }
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.screen {
            Screen::Unlock => {
                let base = unlock::view(self);
                if self.reset.is_visible() {
                    reset_dialog::overlay(base, self)
                } else {
                    base
                }
            }
            Screen::Home => notice_view("Welcome back", "Your vault is unlocked."),
            Screen::SetupRequired => notice_view(
                "Set up Coffer",
                "No credentials are configured on this machine. Run `coffer init` \
                 from a terminal to choose a password, then start Coffer again.",
            ),
            Screen::ResetComplete => notice_view(
                "Reset complete",
                "All local data has been deleted. Run `coffer init` to set a new \
                 password, then start Coffer again.",
            ),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.config.ui.theme.as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub(crate) fn biometric_available(&self) -> bool {
        self.config.auth.biometric_enabled
            && self
                .authenticator
                .as_ref()
                .is_some_and(|auth| auth.capability().is_usable())
    }

    fn spawn_verification(&self) -> Task<Message> {
        let Some(verifier) = self.verifier.clone() else {
            return Task::done(Message::VerifyFinished(VerifyOutcome::Unavailable(
                "credential store is not initialized".into(),
            )));
        };
        let attempt = CredentialAttempt::new(self.password.clone());
        Task::perform(run_verification(verifier, attempt), Message::VerifyFinished)
    }

    fn after_gate_change(&mut self) {
        if self.gate.phase() == GatePhase::Unlocked && self.screen == Screen::Unlock {
            self.password.clear();
            self.reveal.cancel();
            self.reset.close();
            self.reset_error = None;
            self.screen = Screen::Home;
        }
    }

    fn schedule_reveal_tick(&self, delay_ms: u64) -> Task<Message> {
        let epoch = self.reveal.epoch();
        let delay = Duration::from_millis(delay_ms);
        Task::future(async move {
            tokio::time::sleep(delay).await;
            Message::RevealTick(epoch)
        })
    }
}

pub(crate) async fn run_verification(
    verifier: Arc<dyn CredentialVerifier>,
    attempt: CredentialAttempt,
) -> VerifyOutcome {
    match verifier.verify_password(attempt).await {
        Ok(true) => VerifyOutcome::Granted,
        Ok(false) => VerifyOutcome::Denied,
        Err(err) => VerifyOutcome::Unavailable(err.to_string()),
    }
}

fn notice_view<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    let content = column![
        text(title).size(24).color(theme::text_primary()),
        Space::new().height(12),
        text(body)
            .size(14)
            .color(theme::text_dim())
            .wrapping(text::Wrapping::Word),
    ]
    .spacing(0)
    .padding(40)
    .width(420);

    container(container(content).style(theme::panel_style))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(theme::dark_background)
        .into()
}
