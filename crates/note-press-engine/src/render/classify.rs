/// Block kinds a single note line can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    H1,
    H2,
    H3,
    ListItem,
    Paragraph,
}

impl BlockTag {
    /// Looks up a flag in the fixed flag table.
    ///
    /// Returns `None` for anything that is not exactly one of `#`, `##`, `###` or `-`;
    /// such lines become paragraphs.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "#" => Some(Self::H1),
            "##" => Some(Self::H2),
            "###" => Some(Self::H3),
            "-" => Some(Self::ListItem),
            _ => None,
        }
    }

    /// HTML element name for this block.
    pub fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::ListItem => "li",
            Self::Paragraph => "p",
        }
    }
}

/// One non-blank note line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLine {
    pub tag: BlockTag,
    /// Text placed between the tags, emitted verbatim (no escaping).
    pub content: String,
}

impl BlockLine {
    pub fn to_html(&self) -> String {
        let tag = self.tag.name();
        format!("<{tag}>{}</{tag}>", self.content)
    }
}

/// Whitespace stripped from both ends of a line: Unicode whitespace plus the
/// ASCII information separators `\x1c`..=`\x1f`.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classifies one raw line by its flag.
///
/// The line is trimmed first. The flag is everything up to the first space
/// character, or the whole line if it has none. A recognised flag is dropped
/// together with the single space after it; an unrecognised one stays part of
/// the paragraph text.
pub fn classify_line(line: &str) -> BlockLine {
    let line = line.trim_matches(is_strippable);
    let flag = line.split_once(' ').map_or(line, |(flag, _)| flag);

    match BlockTag::from_flag(flag) {
        Some(tag) => BlockLine {
            tag,
            content: line.get(flag.len() + 1..).unwrap_or_default().to_string(),
        },
        None => BlockLine {
            tag: BlockTag::Paragraph,
            content: line.to_string(),
        },
    }
}
