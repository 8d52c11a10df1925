use kerbside_core::model::CollectionKind;
use ratatui::style::{Color, Modifier, Style};

/// Display metadata for one collection kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KindStyle {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    /// Container the household puts out.
    pub(crate) container: &'static str,
    pub(crate) color: Color,
}

const BROWN: Color = Color::Rgb(150, 105, 60);

pub(crate) fn kind_style(kind: CollectionKind) -> KindStyle {
    let (description, container, color) = match kind {
        CollectionKind::PaperCardboard => ("Cardboard", "bag", Color::Red),
        CollectionKind::MetalPlastic => ("Metal & Plastic", "bag", Color::Magenta),
        CollectionKind::GeneralWaste => ("General Rubbish", "black bag", Color::Gray),
        CollectionKind::Glass => ("Glass Bottles & Jars", "box", Color::Cyan),
        CollectionKind::FoodWaste => ("Food Waste", "caddy", BROWN),
    };
    KindStyle {
        name: kind.display_name(),
        description,
        container,
        color,
    }
}

/// How a day is highlighted in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DayMarker {
    /// Fortnightly day: recycling plus rubbish and glass.
    Full,
    /// Weekly red and purple bags.
    WeeklyBags,
    /// Food caddies only.
    FoodOnly,
}

impl DayMarker {
    pub(crate) const LEGEND: [Self; 3] = [Self::FoodOnly, Self::WeeklyBags, Self::Full];

    pub(crate) fn for_collections(collections: &[CollectionKind]) -> Option<Self> {
        if collections.iter().any(|kind| kind.is_fortnightly()) {
            Some(Self::Full)
        } else if collections.iter().any(|kind| {
            matches!(
                kind,
                CollectionKind::PaperCardboard | CollectionKind::MetalPlastic
            )
        }) {
            Some(Self::WeeklyBags)
        } else if collections.contains(&CollectionKind::FoodWaste) {
            Some(Self::FoodOnly)
        } else {
            None
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Full => "Recycling + Rubbish",
            Self::WeeklyBags => "Weekly Bags",
            Self::FoodOnly => "Food Caddies",
        }
    }

    pub(crate) fn style(self) -> Style {
        match self {
            Self::Full => Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            Self::WeeklyBags => Style::default().fg(Color::Black).bg(Color::Magenta),
            Self::FoodOnly => Style::default().fg(Color::Black).bg(Color::Green),
        }
    }
}
