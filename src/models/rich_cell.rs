/// Background color with channels in the 0..=1 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl CellColor {
    pub const YELLOW: CellColor = CellColor {
        red: 1.0,
        green: 1.0,
        blue: 0.0,
    };
}

/// One spreadsheet cell plus its styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichCell {
    pub text: String,
    pub link: Option<String>,
    pub bold: bool,
    pub background: Option<CellColor>,
}

impl RichCell {
    pub fn text(text: impl Into<String>) -> Self {
        RichCell {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        RichCell {
            text: text.into(),
            link: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_background(mut self, color: CellColor) -> Self {
        self.background = Some(color);
        self
    }
}
