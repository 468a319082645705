//! Fallback card imagery keyed by place title
//!
//! Real place photos need a separate Places API key, so cards use a curated image
//! per category instead. Selection is pure: keyword rules first, then a fallback
//! derived from the title length.

/// Image category, in fallback-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCategory {
    Boba,
    Coffee,
    Juice,
    Bar,
    Sushi,
    Ramen,
    Hotpot,
    DimSum,
    Thai,
    Korean,
    Burger,
    Pizza,
    Pasta,
    Steak,
    Brunch,
    Dessert,
    Generic,
}

impl ImageCategory {
    /// Every category; the fallback indexes into this
    pub const ALL: [ImageCategory; 17] = [
        ImageCategory::Boba,
        ImageCategory::Coffee,
        ImageCategory::Juice,
        ImageCategory::Bar,
        ImageCategory::Sushi,
        ImageCategory::Ramen,
        ImageCategory::Hotpot,
        ImageCategory::DimSum,
        ImageCategory::Thai,
        ImageCategory::Korean,
        ImageCategory::Burger,
        ImageCategory::Pizza,
        ImageCategory::Pasta,
        ImageCategory::Steak,
        ImageCategory::Brunch,
        ImageCategory::Dessert,
        ImageCategory::Generic,
    ];

    pub fn image_url(&self) -> &'static str {
        match self {
            ImageCategory::Boba => "https://images.unsplash.com/photo-1558855410-3112e253d755?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Coffee => "https://images.unsplash.com/photo-1497935586351-b67a49e012bf?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Juice => "https://images.unsplash.com/photo-1603569283847-aa295f0d016a?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Bar => "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Sushi => "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Ramen => "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Hotpot => "https://images.unsplash.com/photo-1549048085-bab2f1f49f65?auto=format&fit=crop&w=800&q=80",
            ImageCategory::DimSum => "https://images.unsplash.com/photo-1496116218417-1a781b1c423c?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Thai => "https://images.unsplash.com/photo-1559314809-0d155014e29e?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Korean => "https://images.unsplash.com/photo-1580651315530-69c8e0026377?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Burger => "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Pizza => "https://images.unsplash.com/photo-1604382354936-07c5d9983bd3?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Pasta => "https://images.unsplash.com/photo-1473093295043-cdd812d0e601?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Steak => "https://images.unsplash.com/photo-1600891964092-4316c288032e?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Brunch => "https://images.unsplash.com/photo-1533089862017-5614ec87e25c?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Dessert => "https://images.unsplash.com/photo-1563729768-74915bd6c276?auto=format&fit=crop&w=800&q=80",
            ImageCategory::Generic => "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=800&q=80",
        }
    }
}

/// Keyword rules, checked in order against the lowercased title
const RULES: &[(&[&str], ImageCategory)] = &[
    // Drinks
    (&["茶", "tea", "bubble", "boba", "milk"], ImageCategory::Boba),
    (&["cafe", "coffee", "咖啡", "starbucks"], ImageCategory::Coffee),
    (&["juice", "fruit", "果汁", "smoothie"], ImageCategory::Juice),
    (&["bar", "pub", "lounge", "酒", "bistro"], ImageCategory::Bar),
    // Asian
    (
        &["sushi", "japanese", "壽司", "日式", "izakaya", "居酒屋"],
        ImageCategory::Sushi,
    ),
    (&["ramen", "noodle", "拉麵", "麵"], ImageCategory::Ramen),
    (&["hotpot", "shabu", "火鍋", "鍋"], ImageCategory::Hotpot),
    (&["thai", "泰式"], ImageCategory::Thai),
    (&["korean", "bbq", "韓式"], ImageCategory::Korean),
    // Western
    (&["burger", "漢堡"], ImageCategory::Burger),
    (&["pizza", "披薩", "義式"], ImageCategory::Pizza),
    (&["pasta", "義大利麵"], ImageCategory::Pasta),
    (&["steak", "牛排"], ImageCategory::Steak),
    (&["brunch", "早午餐"], ImageCategory::Brunch),
    (
        &["bakery", "cake", "dessert", "甜點", "烘焙"],
        ImageCategory::Dessert,
    ),
];

/// Category for a title: first matching keyword rule, else the length-based fallback
pub fn select_category(title: &str) -> ImageCategory {
    let lowered = title.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or_else(|| fallback_category(title))
}

/// Image url for a card titled `title`
pub fn select_image(title: &str) -> &'static str {
    select_category(title).image_url()
}

/// Title length counts UTF-16 code units, so astral characters count twice
fn fallback_category(title: &str) -> ImageCategory {
    let index = title.encode_utf16().count() % ImageCategory::ALL.len();
    ImageCategory::ALL[index]
}
