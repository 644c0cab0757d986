use crate::category::Category;

/// Светлый текст для тёмного фона.
const LIGHT_TEXT: &str = "#FFFFFF";
/// Тёмный текст для светлого фона.
const DARK_TEXT: &str = "#212121";

/// Цвет фона для метки категории.
///
/// Нераспознанная метка получает цвет категории "Other".
pub fn category_color(label: &str) -> &'static str {
    match Category::parse(label).unwrap_or(Category::Other) {
        Category::Housing => "#FFECB3",
        Category::Food => "#FFCDD2",
        Category::Services => "#BBDEFB",
        Category::LostFound => "#C8E6C9",
        Category::Events => "#D1C4E9",
        Category::Other => "#FFE0B2",
    }
}

/// Тёмный ли цвет `#RRGGBB` по перцептивной яркости
/// `0.299*R + 0.587*G + 0.114*B`; порог — строго меньше 128.
///
/// Неразбираемая строка считается светлой.
pub fn is_color_dark(hex: &str) -> bool {
    match brightness(hex) {
        Some(brightness) => brightness < 128,
        None => false,
    }
}

/// Контрастный цвет текста для заданного фона.
pub fn text_color(background: &str) -> &'static str {
    if is_color_dark(background) {
        LIGHT_TEXT
    } else {
        DARK_TEXT
    }
}

fn brightness(hex: &str) -> Option<u32> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<u32> {
        u32::from_str_radix(hex.get(range)?, 16).ok()
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;

    Some((r * 299 + g * 587 + b * 114) / 1000)
}
