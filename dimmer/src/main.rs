mod bar;

use bar::BrightnessBar;
use dimmer_core::{Capability, DimmerError, DimmerPanel, PanelConfig, StatusTone, TorchOutcome};
use iced::alignment::Horizontal;
use iced::keyboard::{self, Event as KeyboardEvent, Key, Modifiers, key::Named};
use iced::widget::{button, canvas, column, container, slider, text};
use iced::{Alignment, Color, Element, Length, Subscription, Task, Theme};
use log::{error, info};

pub fn main() -> iced::Result {
    env_logger::init();

    let config = PanelConfig::default();
    info!("starting {}", config.window_title);

    iced::application(DimmerApp::boot, DimmerApp::update, DimmerApp::view)
        .title(config.window_title)
        .window_size(config.window_size)
        .resizable(false)
        .subscription(DimmerApp::subscription)
        .theme(DimmerApp::theme)
        .run()
}

const STATUS_ON: Color = Color::from_rgb8(0, 128, 0);
const STATUS_OFF: Color = Color::from_rgb8(220, 0, 0);
const NOTE: Color = Color::from_rgb8(255, 165, 0);

struct DimmerApp {
    panel: DimmerPanel,
    config: PanelConfig,
    bar_cache: canvas::Cache,
    error_message: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    // Torch
    Toggle,

    // Brightness
    SliderMoved(f32),
    Nudge(i8),

    // Keyboard event
    KeyboardEvent(KeyboardEvent),

    Exit,
}

impl DimmerApp {
    fn boot() -> Self {
        Self::new(Capability::probe())
    }

    fn new(capability: Capability) -> Self {
        let config = PanelConfig::default();
        Self {
            panel: DimmerPanel::with_config(capability, &config),
            config,
            bar_cache: canvas::Cache::new(),
            error_message: None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Clear previous errors on new actions
        if !matches!(message, Message::KeyboardEvent(_)) {
            self.error_message = None;
        }

        let result = match message {
            Message::Toggle => self.panel.toggle().map(Some),

            Message::SliderMoved(value) => self.panel.slider_moved(value),

            Message::Nudge(step) => self.panel.nudge(step),

            Message::KeyboardEvent(event) => {
                if let KeyboardEvent::KeyPressed { key, modifiers, .. } = event {
                    if let Some(message) = self.shortcut(key.as_ref(), modifiers) {
                        return self.update(message);
                    }
                }
                return Task::none();
            }

            Message::Exit => {
                info!("exit requested");
                return iced::exit();
            }
        };

        self.report(result);

        if self.panel.take_redraw() {
            self.bar_cache.clear();
        }

        Task::none()
    }

    fn report(&mut self, result: Result<Option<TorchOutcome>, DimmerError>) {
        match result {
            Ok(Some(TorchOutcome::Simulated(line))) => println!("{}", line),
            Ok(_) => {}
            Err(e) => {
                error!("torch request failed: {}", e);
                self.error_message = Some(format!("Torch error: {}", e));
            }
        }
    }

    fn shortcut(&self, key: Key<&str>, modifiers: Modifiers) -> Option<Message> {
        if !modifiers.is_empty() {
            return None;
        }

        let step = self.config.keyboard_step;
        match key {
            Key::Named(Named::Space) => Some(Message::Toggle),
            Key::Named(Named::ArrowRight) => Some(Message::Nudge(step)),
            Key::Named(Named::ArrowLeft) => Some(Message::Nudge(-step)),
            _ => None,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let state = self.panel.state();

        let heading = text(self.config.heading).size(22);

        let status = text(state.status_text())
            .size(16)
            .color(status_color(state.status_tone()));

        let toggle_button = button(
            text(state.toggle_label())
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(180.0))
        .on_press(Message::Toggle);

        // Brightness slider
        let slider_section = column![
            text(self.config.slider_section).size(16),
            text(self.config.slider_caption).size(14),
            slider(
                0.0..=100.0,
                f32::from(state.brightness.percent()),
                Message::SliderMoved
            )
            .step(0.1)
            .width(Length::Fixed(self.config.bar.width as f32)),
            text(state.percent_label()).size(14),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let brightness_bar = canvas(BrightnessBar::new(&self.panel, &self.bar_cache))
            .width(Length::Fixed(self.config.bar.width as f32))
            .height(Length::Fixed(self.config.bar.height as f32));

        // Info area; the note only matters while the torch is simulated
        let mut info = column![text(self.config.info_caption).size(12)]
            .spacing(5)
            .align_x(Alignment::Center);
        if !self.panel.hardware_available() {
            info = info.push(
                text(self.config.unavailable_note)
                    .size(10)
                    .color(NOTE)
                    .align_x(Horizontal::Center),
            );
        }

        let error_line = if let Some(ref msg) = self.error_message {
            text(msg).size(12).color(STATUS_OFF)
        } else {
            text("").size(12)
        };

        let exit_button = button(text(self.config.exit_label)).on_press(Message::Exit);

        // Main layout
        let content = column![
            heading,
            status,
            toggle_button,
            slider_section,
            brightness_bar,
            info,
            error_line,
            exit_button,
        ]
        .spacing(15)
        .padding(20)
        .width(Length::Fill)
        .align_x(Alignment::Center);

        container(content).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(Message::KeyboardEvent)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn status_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Active => STATUS_ON,
        StatusTone::Inactive => STATUS_OFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimmer_core::{Brightness, MockTorch, TorchCall};
    use std::sync::Arc;

    #[test]
    fn test_initial_app() {
        let app = DimmerApp::new(Capability::Unavailable);
        let state = app.panel.state();
        assert!(!state.is_on);
        assert_eq!(state.brightness.percent(), 50);
        assert!(app.error_message.is_none());
        assert!(!app.panel.hardware_available());
    }

    #[test]
    fn test_toggle_and_slide() {
        let mock = Arc::new(MockTorch::new());
        let mut app = DimmerApp::new(Capability::PlatformHandle(mock.clone()));

        let _ = app.update(Message::Toggle);
        let _ = app.update(Message::SliderMoved(75.4));
        assert_eq!(app.panel.state().percent_label(), "75%");

        let _ = app.update(Message::Toggle);
        assert_eq!(
            mock.calls(),
            vec![
                TorchCall::Light(Brightness::new(50).unwrap()),
                TorchCall::Light(Brightness::new(75).unwrap()),
                TorchCall::Extinguish,
            ]
        );
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_backend_error_is_shown_then_cleared() {
        let failing = Capability::PlatformHandle(Arc::new(MockTorch::failing()));
        let mut app = DimmerApp::new(failing);

        let _ = app.update(Message::Toggle);
        let msg = app.error_message.clone().unwrap();
        assert!(msg.starts_with("Torch error:"));

        let _ = app.update(Message::Toggle);
        assert!(app.error_message.is_some());

        // Moving the slider while off never reaches the backend.
        let _ = app.update(Message::SliderMoved(10.0));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_shortcuts() {
        let app = DimmerApp::new(Capability::Unavailable);

        assert!(matches!(
            app.shortcut(Key::Named(Named::Space), Modifiers::empty()),
            Some(Message::Toggle)
        ));
        assert!(matches!(
            app.shortcut(Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(Message::Nudge(10))
        ));
        assert!(matches!(
            app.shortcut(Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(Message::Nudge(-10))
        ));
        assert!(app.shortcut(Key::Named(Named::Space), Modifiers::CTRL).is_none());
        assert!(app.shortcut(Key::Character("x"), Modifiers::empty()).is_none());
    }

    #[test]
    fn test_nudge_saturates() {
        let mut app = DimmerApp::new(Capability::Unavailable);
        for _ in 0..8 {
            let _ = app.update(Message::Nudge(10));
        }
        assert_eq!(app.panel.state().brightness, Brightness::MAX);
    }
}
