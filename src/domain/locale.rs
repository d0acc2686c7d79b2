// src/domain/locale.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language of every user-facing string and of the date format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

#[derive(Debug)]
pub struct Messages {
    pub empty_notes: &'static str,
    pub title_required: &'static str,
    pub edit_title_required: &'static str,
    pub add_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub invalid_date: &'static str,
    pub created_prefix: &'static str,
    pub view_label: &'static str,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
    pub delete_confirm: &'static str,
    pub page_title: &'static str,
}

static RU: Messages = Messages {
    empty_notes: "Заметок пока нет. Добавьте первую!",
    title_required: "Пожалуйста, введите заголовок заметки.",
    edit_title_required: "Заголовок не может быть пустым.",
    add_failed: "Ошибка при добавлении заметки",
    update_failed: "Ошибка при обновлении заметки",
    delete_failed: "Ошибка при удалении заметки",
    invalid_date: "Неверная дата",
    created_prefix: "Создано",
    view_label: "Просмотр",
    edit_label: "Редактировать",
    delete_label: "Удалить",
    delete_confirm: "Вы уверены, что хотите удалить эту заметку?",
    page_title: "Мои заметки",
};

static EN: Messages = Messages {
    empty_notes: "No notes yet. Add the first one!",
    title_required: "Please enter a note title.",
    edit_title_required: "Title cannot be empty.",
    add_failed: "Error adding note",
    update_failed: "Error updating note",
    delete_failed: "Error deleting note",
    invalid_date: "Invalid date",
    created_prefix: "Created",
    view_label: "View",
    edit_label: "Edit",
    delete_label: "Delete",
    delete_confirm: "Are you sure you want to delete this note?",
    page_title: "My notes",
};

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// chrono pattern for a date with hours and minutes
    pub fn date_pattern(self) -> &'static str {
        match self {
            Locale::Ru => "%d.%m.%Y, %H:%M",
            Locale::En => "%m/%d/%Y, %I:%M %p",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Ok(Locale::Ru),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}
