use iced::{Element, Length, Alignment};
use iced::widget::{Button, Column, Container, Row, Scrollable, Space, Text, TextInput};
use crate::client::gui::style::{
    input_appearance, panel_appearance, ACCENT, BOLD_FONT, EMOJI_FONT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::client::gui::widgets::avatar;
use crate::client::models::chat::{Friend, FriendsState};
use crate::client::models::messages::Message;
use crate::utils::format::{initials, short_time};

pub const FRIENDS_WIDTH: f32 = 300.0;

/// Longest preview shown under a contact name.
const PREVIEW_CHARS: usize = 34;

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(PREVIEW_CHARS - 1).collect();
        format!("{}…", cut)
    }
}

fn friend_row<'a>(friend: &'a Friend, selected: bool) -> Element<'a, Message> {
    let mut name_row = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new(&friend.name).font(BOLD_FONT).size(15).style(TEXT_PRIMARY))
        .push(avatar::presence_dot(friend.is_online))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)));
    if let Some(time) = &friend.last_message_time {
        name_row = name_row.push(Text::new(short_time(time)).size(11).style(TEXT_MUTED));
    }

    let mut details = Column::new().spacing(4).width(Length::Fill).push(name_row);
    if let Some(last) = &friend.last_message {
        details = details.push(Text::new(preview(last)).size(13).style(TEXT_SECONDARY));
    }

    let row = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(avatar::view(initials(&friend.name), 44.0, ACCENT))
        .push(details);

    Button::new(row)
        .on_press(Message::FriendSelected(friend.id.clone()))
        .style(if selected { iced::theme::Button::Secondary } else { iced::theme::Button::Text })
        .width(Length::Fill)
        .padding([12, 14])
        .into()
}

pub fn view(friends: &FriendsState) -> Element<'_, Message> {
    let header = Row::new()
        .align_items(Alignment::Center)
        .push(Text::new("Messages").font(BOLD_FONT).size(20).style(TEXT_PRIMARY))
        .push(Space::new(Length::Fill, Length::Fixed(0.0)))
        .push(
            Button::new(Text::new("➕").font(EMOJI_FONT).size(16))
                .on_press(Message::AddFriend)
                .style(iced::theme::Button::Text)
                .padding(6),
        );

    let search = Container::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("🔍").font(EMOJI_FONT).size(14).style(TEXT_MUTED))
            .push(
                TextInput::new("Search conversations...", &friends.search_query)
                    .on_input(Message::FriendSearchChanged)
                    .padding(8)
                    .size(14)
                    .width(Length::Fill),
            ),
    )
    .padding([2, 10])
    .style(iced::theme::Container::Custom(Box::new(input_appearance)));

    let selected_id = friends.selected_id.as_deref();
    let filtered = friends.filtered();
    let mut list = Column::new().spacing(2);
    if filtered.is_empty() {
        list = list.push(
            Container::new(Text::new("No conversations match your search").size(13).style(TEXT_MUTED))
                .width(Length::Fill)
                .center_x()
                .padding(20),
        );
    }
    for friend in filtered {
        list = list.push(friend_row(friend, selected_id == Some(friend.id.as_str())));
    }

    let content = Column::new()
        .spacing(16)
        .push(Column::new().spacing(16).padding(16).push(header).push(search))
        .push(Scrollable::new(list).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(FRIENDS_WIDTH))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(panel_appearance)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_text() {
        assert_eq!(preview("Got it!"), "Got it!");
        let long = "Same here! Want to hop on a quick video call to discuss?";
        let p = preview(long);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
        assert!(p.ends_with('…'));
    }
}
