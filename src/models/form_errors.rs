use std::str::FromStr;

pub const GENERIC_CREATE_ERROR: &str = "There was an error creating the post.";

/// The create-post fields the API may report problems for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Author,
    Cover,
}

impl FormField {
    pub const ALL: [FormField; 4] = [FormField::Title, FormField::Content, FormField::Author, FormField::Cover];
}

impl FromStr for FormField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FormField::Title),
            "content" => Ok(FormField::Content),
            "author" => Ok(FormField::Author),
            "cover" => Ok(FormField::Cover),
            _ => Err(()),
        }
    }
}

/// Per-field messages shown when the create form is redisplayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub cover: Option<String>,
}

impl FormErrors {
    /// Same message on every field, used when the failure is not a
    /// recognizable validation error.
    pub fn uniform(message: &str) -> Self {
        let mut errors = Self::default();
        for field in FormField::ALL {
            errors.set(field, message.to_string());
        }
        errors
    }

    pub fn set(&mut self, field: FormField, message: String) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Content => &mut self.content,
            FormField::Author => &mut self.author,
            FormField::Cover => &mut self.cover,
        };
        *slot = Some(message);
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => self.title.as_deref(),
            FormField::Content => self.content.as_deref(),
            FormField::Author => self.author.as_deref(),
            FormField::Cover => self.cover.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}
