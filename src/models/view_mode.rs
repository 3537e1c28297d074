/// Grid or list layout for the post listing. Lives only for one page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("grid") => ViewMode::Grid,
            _ => ViewMode::List,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Grid,
            ViewMode::Grid => ViewMode::List,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        }
    }

    /// Label of the button that switches to the other layout.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ViewMode::List => "Grid view",
            ViewMode::Grid => "List view",
        }
    }
}
