//! Closed vocabularies for every preference dimension.
//!
//! Guests and catalog editors write free-form text ("Красное", "red",
//! "полусухое", "notes of black cherry"). Each dimension maps that text onto
//! a small enum by looking for known word stems; once classified, a
//! preference and a wine attribute are compared by exact variant equality.

/// A preference dimension backed by a stem table
pub trait Vocabulary: Copy + PartialEq + Sized + 'static {
    /// `(stem, variant)` pairs, checked in order
    const STEMS: &'static [(&'static str, Self)];
}

/// Lowercase and fold the letters that catalog editors use interchangeably
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ё' => 'е',
            'é' | 'è' => 'e',
            _ => c,
        })
        .collect()
}

/// True for answers meaning "no opinion"
pub fn is_indifferent(text: &str) -> bool {
    const SENTINELS: &[&str] = &[
        "",
        "не важно",
        "неважно",
        "любое",
        "любой",
        "без разницы",
        "any",
        "indifferent",
        "no preference",
        "doesn't matter",
    ];

    let normalized = normalize(text);
    SENTINELS.contains(&normalized.as_str())
}

/// Table entries whose stem starts a word of `text`, in table order
///
/// "бел" matches "белое" and "игристое белое" but not "изабелла". A match
/// lying inside a longer match is dropped, so "земляника" is a berry and
/// not also "земля", and "semi-dry" is not also "dry".
fn matching_variants<T: Vocabulary>(text: &str) -> Vec<T> {
    let normalized = normalize(text);

    let mut spans: Vec<(usize, usize, usize)> = Vec::new();
    for (entry, (stem, _)) in T::STEMS.iter().enumerate() {
        for (index, _) in normalized.match_indices(stem) {
            let at_word_start = normalized[..index]
                .chars()
                .next_back()
                .map_or(true, |previous| !previous.is_alphanumeric());
            if at_word_start {
                spans.push((index, index + stem.len(), entry));
            }
        }
    }

    let mut entries: Vec<usize> = spans
        .iter()
        .filter(|(start, end, _)| {
            !spans.iter().any(|(other_start, other_end, _)| {
                other_start <= start && end <= other_end && other_end - other_start > end - start
            })
        })
        .map(|(_, _, entry)| *entry)
        .collect();
    entries.sort_unstable();
    entries.dedup();

    entries.into_iter().map(|entry| T::STEMS[entry].1).collect()
}

/// First variant, in table order, with a stem starting a word of `text`
pub fn classify_first<T: Vocabulary>(text: &str) -> Option<T> {
    matching_variants(text).into_iter().next()
}

/// Every distinct variant with a stem starting a word of `text`, in table order
pub fn classify_all<T: Vocabulary>(text: &str) -> Vec<T> {
    let mut found: Vec<T> = Vec::new();
    for variant in matching_variants(text) {
        if !found.contains(&variant) {
            found.push(variant);
        }
    }
    found
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WineColor {
    Red,
    White,
    Rose,
    Sparkling,
    Orange,
}

impl Vocabulary for WineColor {
    const STEMS: &'static [(&'static str, Self)] = &[
        ("красн", WineColor::Red),
        ("red", WineColor::Red),
        ("rouge", WineColor::Red),
        ("rosso", WineColor::Red),
        ("tinto", WineColor::Red),
        ("бел", WineColor::White),
        ("white", WineColor::White),
        ("blanc", WineColor::White),
        ("bianco", WineColor::White),
        ("розов", WineColor::Rose),
        ("rose", WineColor::Rose),
        ("rosado", WineColor::Rose),
        ("игрист", WineColor::Sparkling),
        ("шампан", WineColor::Sparkling),
        ("просекко", WineColor::Sparkling),
        ("sparkling", WineColor::Sparkling),
        ("champagne", WineColor::Sparkling),
        ("prosecco", WineColor::Sparkling),
        ("cremant", WineColor::Sparkling),
        ("оранж", WineColor::Orange),
        ("янтарн", WineColor::Orange),
        ("orange", WineColor::Orange),
        ("amber", WineColor::Orange),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dish {
    Meat,
    Fish,
    Cheese,
    Dessert,
    JustDrinking,
    Other,
}

impl Dish {
    /// Whether the dish takes part in pairing at all
    pub fn pairs(self) -> bool {
        !matches!(self, Dish::JustDrinking | Dish::Other)
    }
}

impl Vocabulary for Dish {
    const STEMS: &'static [(&'static str, Self)] = &[
        ("просто", Dish::JustDrinking),
        ("без еды", Dish::JustDrinking),
        ("just drinking", Dish::JustDrinking),
        ("мяс", Dish::Meat),
        ("стейк", Dish::Meat),
        ("говяд", Dish::Meat),
        ("баран", Dish::Meat),
        ("дичь", Dish::Meat),
        ("meat", Dish::Meat),
        ("steak", Dish::Meat),
        ("beef", Dish::Meat),
        ("lamb", Dish::Meat),
        ("рыб", Dish::Fish),
        ("морепрод", Dish::Fish),
        ("устриц", Dish::Fish),
        ("fish", Dish::Fish),
        ("seafood", Dish::Fish),
        ("oyster", Dish::Fish),
        ("сыр", Dish::Cheese),
        ("cheese", Dish::Cheese),
        ("десерт", Dish::Dessert),
        ("dessert", Dish::Dessert),
        ("друг", Dish::Other),
        ("other", Dish::Other),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sweetness {
    Dry,
    SemiDry,
    SemiSweet,
    Sweet,
}

impl Sweetness {
    /// Sweet enough to accompany dessert
    pub fn is_sweet(self) -> bool {
        matches!(self, Sweetness::Sweet | Sweetness::SemiSweet)
    }
}

impl Vocabulary for Sweetness {
    // Compound levels come first: "полусухое" also contains "сух".
    const STEMS: &'static [(&'static str, Self)] = &[
        ("полусух", Sweetness::SemiDry),
        ("semi-dry", Sweetness::SemiDry),
        ("semidry", Sweetness::SemiDry),
        ("off-dry", Sweetness::SemiDry),
        ("medium dry", Sweetness::SemiDry),
        ("полуслад", Sweetness::SemiSweet),
        ("semi-sweet", Sweetness::SemiSweet),
        ("semisweet", Sweetness::SemiSweet),
        ("medium sweet", Sweetness::SemiSweet),
        ("сух", Sweetness::Dry),
        ("брют", Sweetness::Dry),
        ("dry", Sweetness::Dry),
        ("brut", Sweetness::Dry),
        ("слад", Sweetness::Sweet),
        ("десертн", Sweetness::Sweet),
        ("sweet", Sweetness::Sweet),
        ("dolce", Sweetness::Sweet),
        ("doux", Sweetness::Sweet),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Light,
    Medium,
    Full,
}

impl Vocabulary for Body {
    const STEMS: &'static [(&'static str, Self)] = &[
        ("легк", Body::Light),
        ("light", Body::Light),
        ("средн", Body::Medium),
        ("medium", Body::Medium),
        ("полнотел", Body::Full),
        ("насыщ", Body::Full),
        ("плотн", Body::Full),
        ("full", Body::Full),
        ("bold", Body::Full),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aroma {
    Fruity,
    Berry,
    Citrus,
    Floral,
    Spicy,
    Earthy,
    Oaky,
    Herbal,
}

impl Vocabulary for Aroma {
    const STEMS: &'static [(&'static str, Self)] = &[
        ("фрукт", Aroma::Fruity),
        ("яблок", Aroma::Fruity),
        ("груш", Aroma::Fruity),
        ("персик", Aroma::Fruity),
        ("абрикос", Aroma::Fruity),
        ("тропич", Aroma::Fruity),
        ("fruit", Aroma::Fruity),
        ("apple", Aroma::Fruity),
        ("pear", Aroma::Fruity),
        ("peach", Aroma::Fruity),
        ("apricot", Aroma::Fruity),
        ("tropical", Aroma::Fruity),
        ("ягод", Aroma::Berry),
        ("вишн", Aroma::Berry),
        ("черешн", Aroma::Berry),
        ("малин", Aroma::Berry),
        ("клубник", Aroma::Berry),
        ("земляник", Aroma::Berry),
        ("ежевик", Aroma::Berry),
        ("смородин", Aroma::Berry),
        ("berry", Aroma::Berry),
        ("berries", Aroma::Berry),
        ("blackberr", Aroma::Berry),
        ("strawberr", Aroma::Berry),
        ("raspberr", Aroma::Berry),
        ("blackcurrant", Aroma::Berry),
        ("cherry", Aroma::Berry),
        ("currant", Aroma::Berry),
        ("plum", Aroma::Berry),
        ("цитрус", Aroma::Citrus),
        ("лимон", Aroma::Citrus),
        ("лайм", Aroma::Citrus),
        ("грейпфрут", Aroma::Citrus),
        ("апельсин", Aroma::Citrus),
        ("citrus", Aroma::Citrus),
        ("lemon", Aroma::Citrus),
        ("grapefruit", Aroma::Citrus),
        ("цвет", Aroma::Floral),
        ("флор", Aroma::Floral),
        ("фиалк", Aroma::Floral),
        ("жасмин", Aroma::Floral),
        ("роза", Aroma::Floral),
        ("розы", Aroma::Floral),
        ("floral", Aroma::Floral),
        ("flower", Aroma::Floral),
        ("blossom", Aroma::Floral),
        ("violet", Aroma::Floral),
        ("rose petal", Aroma::Floral),
        ("прян", Aroma::Spicy),
        ("спец", Aroma::Spicy),
        ("перец", Aroma::Spicy),
        ("перц", Aroma::Spicy),
        ("spic", Aroma::Spicy),
        ("pepper", Aroma::Spicy),
        ("clove", Aroma::Spicy),
        ("земл", Aroma::Earthy),
        ("почв", Aroma::Earthy),
        ("гриб", Aroma::Earthy),
        ("минерал", Aroma::Earthy),
        ("earth", Aroma::Earthy),
        ("mushroom", Aroma::Earthy),
        ("mineral", Aroma::Earthy),
        ("дуб", Aroma::Oaky),
        ("ванил", Aroma::Oaky),
        ("тост", Aroma::Oaky),
        ("oak", Aroma::Oaky),
        ("vanilla", Aroma::Oaky),
        ("toast", Aroma::Oaky),
        ("трав", Aroma::Herbal),
        ("herb", Aroma::Herbal),
        ("grass", Aroma::Herbal),
    ];
}
