use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::types::PendingCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub display_name: String,
    /// Returned verbatim as the callback payload when pressed.
    pub value: String,
}

impl MenuButton {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Menu {
    pub rows: Vec<Vec<MenuButton>>,
}

pub fn main_menu() -> Menu {
    let mut rows: Vec<Vec<MenuButton>> = vec![];

    rows.push(vec![
        MenuButton::new("📝 Добавить анкету", PendingCommand::AddForm.token()),
        MenuButton::new("✍️ Изменить анкету", PendingCommand::UpdateForm.token()),
    ]);
    rows.push(vec![MenuButton::new(
        "❓ Задать вопрос",
        PendingCommand::AskQuestion.token(),
    )]);

    Menu { rows }
}

pub fn render_menu(menu: &Menu) -> InlineKeyboardMarkup {
    let keyboard: Vec<Vec<InlineKeyboardButton>> = menu
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|button| {
                    InlineKeyboardButton::callback(button.display_name.clone(), button.value.clone())
                })
                .collect()
        })
        .collect();

    InlineKeyboardMarkup::new(keyboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn main_menu_layout() {
        let menu = main_menu();
        let values: Vec<Vec<&str>> = menu
            .rows
            .iter()
            .map(|row| row.iter().map(|b| b.value.as_str()).collect())
            .collect();

        assert_eq!(
            values,
            vec![vec!["/add_form", "/update_form"], vec!["/ask_question"]]
        );
    }

    #[test]
    fn rendered_keyboard_keeps_grid_and_payloads() {
        let markup = render_menu(&main_menu());

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[1].len(), 1);

        let button = &markup.inline_keyboard[1][0];
        assert_eq!(button.text, "❓ Задать вопрос");
        assert_eq!(
            button.kind,
            InlineKeyboardButtonKind::CallbackData("/ask_question".to_string())
        );
    }

    #[test]
    fn empty_menu_renders_empty_keyboard() {
        assert!(render_menu(&Menu::default()).inline_keyboard.is_empty());
    }
}
