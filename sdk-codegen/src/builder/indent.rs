//! Indentation of generated code.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A number of spaces per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// 2-space indentation used by every built-in template.
    pub const JAVASCRIPT: Self = Self::Spaces(2);

    /// Write `level` indentation units to `out`.
    pub fn write_to(&self, out: &mut String, level: usize) {
        match self {
            Self::Spaces(width) => {
                out.extend(std::iter::repeat_n(' ', level * usize::from(*width)))
            }
            Self::Tab => out.extend(std::iter::repeat_n('\t', level)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVASCRIPT
    }
}
