use core::fmt::Write;

use crate::{Identifier, SequenceId};

/// How a [`SequenceId`] is rendered into an [`Identifier`].
///
/// The rendered form is `{prefix}{separator}{value}`, where `value` is
/// zero-padded to `width` digits. A width of `0` (the default) disables
/// padding, so the defaults produce `0000-1`, `0000-2`, and so on.
///
/// # Example
/// ```
/// use seqid::{IdFormat, SequenceId};
///
/// let format = IdFormat::default().with_width(4);
/// assert_eq!(format.render(SequenceId::new(7)), "0000-0007");
///
/// let format = IdFormat::new("ACC").with_separator('/');
/// assert_eq!(format.render(SequenceId::new(12)), "ACC/12");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdFormat {
    pub prefix: String,
    pub separator: char,
    /// Minimum number of digits. Longer values are never truncated.
    pub width: usize,
}

impl IdFormat {
    pub const DEFAULT_PREFIX: &'static str = "0000";
    pub const DEFAULT_SEPARATOR: char = '-';

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: Self::DEFAULT_SEPARATOR,
            width: 0,
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self, id: SequenceId) -> Identifier {
        // u64::MAX has 20 digits.
        let mut rendered =
            String::with_capacity(self.prefix.len() + self.separator.len_utf8() + self.width.max(20));
        rendered.push_str(&self.prefix);
        rendered.push(self.separator);
        // Writing into a String cannot fail.
        let _ = write!(rendered, "{:0width$}", id.get(), width = self.width);
        Identifier::from_rendered(rendered)
    }
}

impl Default for IdFormat {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}
