/// A rich message sent through the messaging gateway.
///
/// Rendered as message content plus a single embed by the Discord gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    pub content: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub color: u32,
    pub fields: Vec<NotificationField>,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Notification {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Adds a field; empty values are skipped since Discord rejects them.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.fields.push(NotificationField {
                name: name.into(),
                value,
                inline,
            });
        }
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.image_url = Some(url);
        }
        self
    }
}
