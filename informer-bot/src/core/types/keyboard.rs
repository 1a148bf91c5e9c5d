//! Transport-agnostic inline keyboard. The Telegram adapter turns it into `InlineKeyboardMarkup`.

/// What pressing a button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonKind {
    /// Sends the data back as a callback query.
    Callback(String),
    /// Opens the URL.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub kind: ButtonKind,
}

impl Button {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ButtonKind::Callback(data.into()),
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ButtonKind::Url(url.into()),
        }
    }

    /// Callback data, `None` for URL buttons.
    pub fn data(&self) -> Option<&str> {
        match &self.kind {
            ButtonKind::Callback(data) => Some(data),
            ButtonKind::Url(_) => None,
        }
    }
}

/// Rows of buttons, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row; empty rows are skipped.
    pub fn row(mut self, buttons: Vec<Button>) -> Self {
        if !buttons.is_empty() {
            self.rows.push(buttons);
        }
        self
    }

    /// One button per row.
    pub fn column(buttons: Vec<Button>) -> Self {
        buttons
            .into_iter()
            .fold(Self::new(), |kb, button| kb.row(vec![button]))
    }

    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Callback data of every callback button, in reading order.
    pub fn callback_data(&self) -> Vec<&str> {
        self.buttons().filter_map(Button::data).collect()
    }
}
