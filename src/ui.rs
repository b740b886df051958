use crate::app::App;
use crate::app::Message;
use iced::{
    widget::{
        button, checkbox, column, container, horizontal_space, row, text, text_editor, text_input,
    },
    Alignment, Element, Font, Length,
};

pub fn main_view(app: &App) -> Element<Message> {
    let can_send = app.send_enabled();

    let input = text_input("Type English text, or a port name like COM4", &app.input)
        .on_input(Message::InputChanged)
        .padding(8)
        .size(18);
    let input = if can_send {
        input.on_submit(Message::Send)
    } else {
        input
    };

    let send = button(text(if app.busy { "Sending..." } else { "Send" }))
        .on_press_maybe(can_send.then_some(Message::Send))
        .padding([6, 18]);

    let controls = row![
        checkbox("Show log", app.log_window.is_some()).on_toggle(Message::ToggleLog),
        horizontal_space(),
        text(format!("Port: {}", app.session.port)).size(14),
        send,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(column![input, controls].spacing(12))
        .padding(15)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

pub fn log_view(app: &App) -> Element<Message> {
    container(
        text_editor(app.log.content())
            .on_action(Message::LogAction)
            .font(Font::MONOSPACE)
            .height(Length::Fill),
    )
    .padding(10)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
