// SPDX-License-Identifier: MPL-2.0
//! Demo application root: a small form that fires toasts of each severity.
//!
//! The `App` owns the toast presenter, forwards its tick messages and stacks
//! the toast over the form.

pub mod cli;
mod message;

pub use message::{Flags, Message};

use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Notification, Presenter, Severity, ToastSurface};
use iced::widget::{button, column, container, row, stack, text, text_input};
use iced::{Element, Length, Subscription, Task};
use std::time::Duration;

const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;

/// Root Iced application state.
pub struct App {
    presenter: Presenter,
    title: String,
    body: String,
    /// Per-toast duration override from the command line.
    duration: Option<Duration>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window_size((WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT))
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App {
            presenter: Presenter::new(ToastSurface::new(), &flags.config),
            title: "Booking confirmed".to_string(),
            body: "See you at the venue!".to_string(),
            duration: flags.duration_ms.map(Duration::from_millis),
        };

        if let Some(severity) = flags.initial_severity {
            app.show(severity);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Toast".to_string()
    }

    fn show(&mut self, severity: Severity) {
        let mut notification = Notification::new(severity, &self.title, &self.body);
        if let Some(duration) = self.duration {
            notification = notification.with_duration(duration);
        }
        self.presenter.display(&notification);
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleChanged(title) => self.title = title,
            Message::BodyChanged(body) => self.body = body,
            Message::Show(severity) => self.show(severity),
            Message::Toast(toast_message) => self.presenter.handle_message(&toast_message),
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.presenter.subscription().map(Message::Toast)
    }

    fn view(&self) -> Element<'_, Message> {
        let form = column![
            text_input("Title", &self.title).on_input(Message::TitleChanged),
            text_input("Message", &self.body).on_input(Message::BodyChanged),
            row![
                button(text("Normal")).on_press(Message::Show(Severity::Normal)),
                button(text("Success")).on_press(Message::Show(Severity::Success)),
                button(text("Error")).on_press(Message::Show(Severity::Error)),
            ]
            .spacing(spacing::XS),
        ]
        .spacing(spacing::SM)
        .max_width(WINDOW_DEFAULT_WIDTH / 1.5);

        let content = container(form)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG);

        stack![content, self.presenter.view().map(Message::Toast)].into()
    }
}
