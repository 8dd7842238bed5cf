//! Pure screen construction for kommander.
//!
//! Builds every screen (listing, help, feedback, farewell) as lines of
//! semantically tagged spans. No terminal I/O happens here; the
//! [crate::ui::screen] adapter resolves tags to colors and writes them.
//! This keeps the Session Controller and Listing Engine testable without a
//! real terminal.

use crate::app::state::{Feedback, FeedbackKind, SessionState};
use crate::core::fm::Entry;
use crate::core::formatter::{format_mtime, format_size, pad_left_to_width, pad_to_width, shorten_name};
use crate::utils::helpers::shorten_home_path;

use phf::phf_map;

// Inner column widths of the listing table.
const COL_TYPE: usize = 6;
const COL_NAME: usize = 34;
const COL_SIZE: usize = 12;
const COL_DATE: usize = 18;

/// Semantic style of a rendered span. The theme maps tags to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Border,
    Title,
    Text,
    Path,
    Hint,
    Dir,
    Executable,
    Source,
    Document,
    Image,
    File,
    Size,
    DirMarker,
    Success,
    Error,
}

/// Category (lowercased extension) to display tier.
static CATEGORY_TAGS: phf::Map<&'static str, Tag> = phf_map! {
    ".exe" => Tag::Executable,
    ".bat" => Tag::Executable,
    ".cmd" => Tag::Executable,
    ".sh" => Tag::Executable,
    ".c" => Tag::Source,
    ".cpp" => Tag::Source,
    ".h" => Tag::Source,
    ".py" => Tag::Source,
    ".rs" => Tag::Source,
    ".txt" => Tag::Document,
    ".md" => Tag::Document,
    ".jpg" => Tag::Image,
    ".jpeg" => Tag::Image,
    ".png" => Tag::Image,
    ".gif" => Tag::Image,
};

/// One colored run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub tag: Tag,
    pub text: String,
}

pub type StyledLine = Vec<Span>;

fn span(tag: Tag, text: impl Into<String>) -> Span {
    Span {
        tag,
        text: text.into(),
    }
}

fn entry_tag(entry: &Entry) -> Tag {
    if entry.is_dir() {
        Tag::Dir
    } else {
        CATEGORY_TAGS
            .get(entry.category())
            .copied()
            .unwrap_or(Tag::File)
    }
}

/// The full listing screen: header box, current path, view status, entry
/// table, hint line.
pub fn session_screen(state: &SessionState, entries: &[Entry]) -> Vec<StyledLine> {
    let mut lines = Vec::with_capacity(entries.len() + 12);

    let inner = COL_TYPE + COL_NAME + COL_SIZE + COL_DATE + 3;
    let title = format!("KOMMANDER v{} — КОНСОЛЬНЫЙ КОМАНДИР", env!("CARGO_PKG_VERSION"));

    lines.push(vec![span(Tag::Border, format!("╔{}╗", "═".repeat(inner)))]);
    lines.push(vec![
        span(Tag::Border, "║"),
        span(Tag::Title, center_to_width(&title, inner)),
        span(Tag::Border, "║"),
    ]);
    lines.push(vec![span(Tag::Border, format!("╚{}╝", "═".repeat(inner)))]);
    lines.push(Vec::new());

    lines.push(vec![
        span(Tag::Hint, "📍 "),
        span(Tag::Text, "Текущая папка: "),
        span(Tag::Path, shorten_home_path(state.current_dir())),
    ]);

    let mut status = format!("📊 Сортировка: {}", state.sort_key());
    if state.show_hidden() {
        status.push_str(" | Показывать скрытые");
    }
    lines.push(vec![span(Tag::Hint, status)]);
    lines.push(Vec::new());

    lines.push(table_border('┌', '┬', '┐'));
    lines.push(vec![
        span(Tag::Border, "│"),
        span(Tag::Border, pad_to_width(" Тип", COL_TYPE)),
        span(Tag::Border, "│"),
        span(Tag::Border, pad_to_width(" Имя", COL_NAME)),
        span(Tag::Border, "│"),
        span(Tag::Border, pad_to_width(" Размер", COL_SIZE)),
        span(Tag::Border, "│"),
        span(Tag::Border, pad_to_width(" Дата изменения", COL_DATE)),
        span(Tag::Border, "│"),
    ]);
    lines.push(table_border('├', '┼', '┤'));

    for entry in entries {
        lines.push(entry_row(entry));
    }

    lines.push(table_border('└', '┴', '┘'));
    lines.push(Vec::new());
    lines.push(vec![span(
        Tag::Hint,
        "💡 'help' — список команд, 'exit' — выход",
    )]);

    lines
}

fn entry_row(entry: &Entry) -> StyledLine {
    let tag = entry_tag(entry);
    let glyph = if entry.is_dir() { " 📁" } else { " 📄" };

    let (size_tag, size_text) = if entry.is_dir() {
        (Tag::DirMarker, "<ПАПКА> ".to_string())
    } else {
        (Tag::Size, format!("{} ", format_size(entry.size())))
    };

    vec![
        span(Tag::Border, "│"),
        span(tag, pad_to_width(glyph, COL_TYPE)),
        span(Tag::Border, "│"),
        span(tag, pad_to_width(&format!(" {}", shorten_name(entry.name())), COL_NAME)),
        span(Tag::Border, "│"),
        span(size_tag, pad_left_to_width(&size_text, COL_SIZE)),
        span(Tag::Border, "│"),
        span(Tag::Text, pad_to_width(&format!(" {}", format_mtime(entry.modified())), COL_DATE)),
        span(Tag::Border, "│"),
    ]
}

fn table_border(left: char, mid: char, right: char) -> StyledLine {
    let mut text = String::new();
    text.push(left);
    for (i, width) in [COL_TYPE, COL_NAME, COL_SIZE, COL_DATE].iter().enumerate() {
        if i > 0 {
            text.push(mid);
        }
        text.push_str(&"─".repeat(*width));
    }
    text.push(right);
    vec![span(Tag::Border, text)]
}

fn center_to_width(text: &str, width: usize) -> String {
    let used = unicode_width::UnicodeWidthStr::width(text);
    if used >= width {
        return pad_to_width(text, width);
    }
    let left = (width - used) / 2;
    let mut out = " ".repeat(left);
    out.push_str(text);
    pad_to_width(&out, width)
}

/// The help screen shown by the `help` command.
pub fn help_screen() -> Vec<StyledLine> {
    let mut lines = Vec::new();

    lines.push(Vec::new());
    lines.push(vec![span(
        Tag::Border,
        "=================== СПРАВКА ===================",
    )]);

    let sections: [(&str, &[(&str, &str)]); 4] = [
        (
            "📁 НАВИГАЦИЯ:",
            &[
                ("<имя папки>", "войти в папку"),
                ("..", "вернуться назад"),
                ("~", "перейти в домашнюю папку"),
                ("/", "перейти в корень диска"),
            ],
        ),
        (
            "📄 КОМАНДЫ:",
            &[
                ("copy <файл> <путь>", "копировать файл"),
                ("move <файл> <путь>", "переместить файл"),
                ("rename <старое> <новое>", "переименовать"),
                ("del <имя>", "удалить файл или папку"),
                ("mkdir <имя>", "создать папку"),
            ],
        ),
        (
            "🔧 НАСТРОЙКИ:",
            &[
                ("sort name", "сортировать по имени"),
                ("sort size", "сортировать по размеру"),
                ("sort date", "сортировать по дате"),
                ("sort type", "сортировать по типу"),
                ("show hidden", "показать скрытые файлы"),
                ("hide hidden", "скрыть скрытые файлы"),
            ],
        ),
        (
            "🎨 ПРОЧЕЕ:",
            &[
                ("clear", "очистить экран"),
                ("help", "показать эту справку"),
                ("exit / q", "выйти"),
            ],
        ),
    ];

    for (header, items) in sections {
        lines.push(Vec::new());
        lines.push(vec![span(Tag::Title, header)]);
        for (cmd, what) in items {
            lines.push(vec![
                span(Tag::Text, format!("  {}", pad_to_width(cmd, 26))),
                span(Tag::Hint, format!("- {what}")),
            ]);
        }
    }

    lines.push(Vec::new());
    lines.push(vec![span(
        Tag::Border,
        "==============================================",
    )]);
    lines.push(Vec::new());
    lines
}

/// A reported success/failure message.
pub fn feedback_screen(feedback: &Feedback) -> Vec<StyledLine> {
    let (tag, glyph) = match feedback.kind {
        FeedbackKind::Success => (Tag::Success, "✅"),
        FeedbackKind::Error => (Tag::Error, "❌"),
    };
    vec![
        Vec::new(),
        vec![span(tag, format!("{glyph} {}", feedback.text))],
    ]
}

/// Shown once when the session ends.
pub fn farewell_screen() -> Vec<StyledLine> {
    vec![
        Vec::new(),
        vec![span(Tag::Success, "👋 Пока! Заходи ещё!")],
    ]
}
