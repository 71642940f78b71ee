//! Main egui application — owns the session and spawns backend calls.

use std::rc::Rc;

use chrono::Datelike;
use egui::{self, CentralPanel, SidePanel, TopBottomPanel};

use talksy_core::event_bus::EventBus;
use talksy_core::gateway::CommandGateway;
use talksy_core::ports::AssistantPort;
use talksy_core::session::{ListenToggle, PendingCall, SessionController};
use talksy_platform::FetchTransport;
use talksy_types::config::{BackendConfig, TalksyConfig};
use talksy_types::event::SessionEvent;
use talksy_ui::panels::settings::SettingsAction;
use talksy_ui::panels::{chat, footer, header, settings};
use talksy_ui::state::{ChatIntent, SaveFeedback, UiState};
use talksy_ui::theme;

pub struct TalksyApp {
    config: TalksyConfig,
    session: SessionController,
    ui_state: UiState,
    event_bus: EventBus,
    assistant: Rc<dyn AssistantPort>,
    first_frame: bool,
}

impl TalksyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = TalksyConfig::default();
        let assistant = build_assistant(&config.backend);
        log::info!("Backend: {}", config.backend.normalized_base());

        Self {
            session: SessionController::new(config.backend.normalized_base()),
            ui_state: UiState::new(config.backend.clone()),
            config,
            event_bus: EventBus::new(),
            assistant,
            first_frame: true,
        }
    }

    /// Spawn the network half of a call; its completion comes back through the bus.
    fn dispatch(&self, call: PendingCall, ctx: &egui::Context) {
        let assistant = self.assistant.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = call.run(assistant.as_ref()).await;
            bus.emit(event);
            ctx.request_repaint();
        });
    }

    /// The result is tagged with the current backend epoch so a check against
    /// a URL that has since been replaced cannot set the status.
    fn check_connection(&self, ctx: &egui::Context) {
        let epoch = self.session.backend_epoch();
        let assistant = self.assistant.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let connected = assistant.check_connection().await;
            bus.emit(SessionEvent::ConnectionChecked { epoch, connected });
            ctx.request_repaint();
        });
    }

    /// Read a reply aloud. Fire-and-forget; history is untouched.
    fn speak(&self, text: String) {
        let assistant = self.assistant.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match assistant.speak(&text).await {
                Ok(resp) if resp.indicates_connected() => log::info!("Spoke {} chars", text.len()),
                Ok(resp) => log::warn!(
                    "Speak failed: {}",
                    resp.speech_text().unwrap_or("no detail")
                ),
                Err(e) => log::error!("Speak error: {}", e),
            }
        });
    }

    fn handle_intent(&mut self, intent: ChatIntent, ctx: &egui::Context) {
        match intent {
            ChatIntent::Submit(text) => {
                if let Some(call) = self.session.begin_submit(&text) {
                    self.ui_state.input_text.clear();
                    self.dispatch(call, ctx);
                }
            }
            ChatIntent::ToggleListen => match self.session.toggle_listen() {
                ListenToggle::Started(call) => self.dispatch(call, ctx),
                ListenToggle::Stopped => self.ui_state.focus_input = true,
                ListenToggle::Advisory | ListenToggle::Ignored => {}
            },
            ChatIntent::Speak(text) => self.speak(text),
        }
    }

    fn handle_settings(&mut self, action: SettingsAction, ctx: &egui::Context) {
        match action {
            SettingsAction::None => {}
            SettingsAction::CheckConnection => self.check_connection(ctx),
            SettingsAction::SaveClicked => {
                let draft = self.ui_state.settings_draft.clone();
                let feedback = match draft.validate() {
                    Ok(()) => {
                        self.apply_backend(draft);
                        self.check_connection(ctx);
                        SaveFeedback {
                            message: "Saved".to_string(),
                            success: true,
                        }
                    }
                    Err(e) => {
                        log::warn!("Rejected settings: {}", e);
                        SaveFeedback {
                            message: e.to_string(),
                            success: false,
                        }
                    }
                };
                self.ui_state.save_feedback = Some(feedback);
            }
        }
    }

    fn apply_backend(&mut self, backend: BackendConfig) {
        if backend == self.config.backend {
            return;
        }
        self.assistant = build_assistant(&backend);
        self.session.set_backend_url(backend.normalized_base());
        log::info!("Backend changed to {}", backend.normalized_base());
        self.config.backend = backend;
    }
}

fn build_assistant(backend: &BackendConfig) -> Rc<dyn AssistantPort> {
    let transport = Rc::new(FetchTransport::new(backend));
    Rc::new(CommandGateway::new(transport, backend.probe_timeout_ms))
}

impl eframe::App for TalksyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            let call = self.session.begin_mount();
            self.dispatch(call, ctx);
            self.first_frame = false;
        }

        if self.event_bus.apply_to(&mut self.session) > 0 {
            if !self.session.is_busy() {
                self.ui_state.focus_input = true;
            }
            ctx.request_repaint();
        }

        TopBottomPanel::top("header").show(ctx, |ui| {
            header::header(ui, &mut self.ui_state);
        });

        let year = chrono::Local::now().year();
        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::footer(ui, year);
        });

        if self.ui_state.show_settings {
            let status = self.session.status();
            let action = SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| settings::settings_panel(ui, &mut self.ui_state, status))
                .inner;
            self.handle_settings(action, ctx);
        }

        let intent = CentralPanel::default()
            .show(ctx, |ui| chat::chat_panel(ui, &self.session, &mut self.ui_state))
            .inner;
        if let Some(intent) = intent {
            self.handle_intent(intent, ctx);
        }
    }
}
