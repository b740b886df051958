use iced::widget::text_editor;
use iced::{window, Element, Size, Subscription, Task, Theme};
use log::{debug, info};

use syb::input::{self, Request};
use syb::pipeline::{self, SendReport};
use syb::serial;
use syb::session::Session;

use crate::log_view::LogWindow;

pub struct App {
    pub session: Session,
    pub input: String,
    pub log: LogWindow,
    pub main_window: window::Id,
    pub log_window: Option<window::Id>,
    /// A send is running; further sends wait until it reports back.
    pub busy: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Send,
    SendFinished(SendReport),
    ToggleLog(bool),
    LogAction(text_editor::Action),
    WindowOpened(window::Id),
    WindowClosed(window::Id),
}

impl App {
    pub fn new(session: Session, show_log: bool) -> (Self, Task<Message>) {
        let (main_window, open_main) = window::open(window::Settings {
            size: Size::new(520.0, 130.0),
            ..window::Settings::default()
        });

        let mut app = Self {
            session,
            input: String::new(),
            log: LogWindow::new(),
            main_window,
            log_window: None,
            busy: false,
        };
        app.greet();

        let mut tasks = vec![open_main.map(Message::WindowOpened)];
        if show_log {
            tasks.push(app.show_log());
        }

        (app, Task::batch(tasks))
    }

    fn greet(&mut self) {
        self.log
            .log(&format!("SYB v{} online", env!("CARGO_PKG_VERSION")));
        self.log.log(&format!(
            "To change the serial port type its name & click Send. Port is currently {}",
            self.session.port
        ));
        self.log.log(&self.session.converter.status_line());
        self.log.log(&self.session.sender.status_line());
        self.log
            .log(&serial::ports_line(&serial::available_ports()));
    }

    pub fn title(&self, window: window::Id) -> String {
        if Some(window) == self.log_window {
            String::from("SYB - Log")
        } else {
            format!("SYB - {}", self.session.port)
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(text) => {
                self.input = input::uppercase(&text);
                Task::none()
            }
            Message::Send => match input::classify(&self.input) {
                Request::SetPort(port) => {
                    info!("Serial port changed to {}", port);
                    self.session.port = port;
                    self.log
                        .log(&format!("Serial port is now {}", self.session.port));
                    Task::none()
                }
                Request::Nothing => Task::none(),
                Request::Speak(text) => self.start_send(text),
            },
            Message::SendFinished(report) => {
                self.busy = false;
                debug!(
                    "Send finished: {} bytes, sent = {}",
                    report.allophones.len(),
                    report.sent
                );
                for entry in report.entries {
                    self.log.append(entry);
                }
                Task::none()
            }
            Message::ToggleLog(true) => self.show_log(),
            Message::ToggleLog(false) => self.hide_log(),
            Message::LogAction(action) => {
                self.log.perform(action);
                Task::none()
            }
            Message::WindowOpened(id) => {
                debug!("Window {:?} opened", id);
                Task::none()
            }
            Message::WindowClosed(id) => {
                if id == self.main_window {
                    iced::exit()
                } else {
                    if Some(id) == self.log_window {
                        self.log_window = None;
                    }
                    Task::none()
                }
            }
        }
    }

    pub fn view(&self, window: window::Id) -> Element<Message> {
        if Some(window) == self.log_window {
            crate::ui::log_view(self)
        } else {
            crate::ui::main_view(self)
        }
    }

    pub fn theme(&self, _window: window::Id) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_events().map(Message::WindowClosed)
    }

    /// Send stays pressable while busy so port changes still go through.
    pub fn send_enabled(&self) -> bool {
        self.session.send_enabled()
    }

    fn start_send(&mut self, text: String) -> Task<Message> {
        if !self.send_enabled() || self.busy {
            debug!(
                "Send ignored (enabled = {}, busy = {})",
                self.send_enabled(),
                self.busy
            );
            return Task::none();
        }
        self.busy = true;
        Task::perform(
            pipeline::speak(self.session.tools(), self.session.port.clone(), text),
            Message::SendFinished,
        )
    }

    fn show_log(&mut self) -> Task<Message> {
        if self.log_window.is_some() {
            return Task::none();
        }
        let (id, open) = window::open(window::Settings {
            size: Size::new(560.0, 420.0),
            ..window::Settings::default()
        });
        self.log_window = Some(id);
        open.map(Message::WindowOpened)
    }

    fn hide_log(&mut self) -> Task<Message> {
        match self.log_window.take() {
            Some(id) => window::close(id),
            None => Task::none(),
        }
    }
}
